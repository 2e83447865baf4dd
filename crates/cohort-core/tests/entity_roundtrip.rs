//! Serde roundtrip and JsonSchema validation tests for all entity types.

use chrono::{TimeZone, Utc};
use schemars::schema_for;
use cohort_core::entities::*;
use cohort_core::enums::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_cohort() -> Cohort {
    Cohort {
        id: "65f1c2a9b3d4e5f60718293a".into(),
        cohort_slug: "ft-wd-paris-2023-07".into(),
        cohort_name: "FT WD PARIS 2023 07".into(),
        program: Some(Program::WebDev),
        format: Some(Format::FullTime),
        campus: Some(Campus::Paris),
        start_date: Utc.with_ymd_and_hms(2023, 7, 3, 0, 0, 0).unwrap(),
        end_date: Some(Utc.with_ymd_and_hms(2023, 9, 22, 0, 0, 0).unwrap()),
        in_progress: false,
        program_manager: "Sally Daher".into(),
        lead_teacher: "Florian Aube".into(),
        total_hours: 360,
    }
}

fn sample_student() -> Student {
    Student {
        id: "0123456789abcdef01234567".into(),
        first_name: "Christine".into(),
        last_name: "Clayton".into(),
        email: "christine.clayton@example.com".into(),
        phone: "567-890-1234".into(),
        linkedin_url: "https://linkedin.com/in/christineclaytonexample".into(),
        languages: Some(Language::English),
        program: Some(Program::WebDev),
        background: "Computer Engineering".into(),
        image: DEFAULT_IMAGE_URL.into(),
        cohort: Some("65f1c2a9b3d4e5f60718293a".into()),
        projects: vec!["portfolio".into(), "todo-app".into()],
    }
}

roundtrip_and_validate!(cohort_roundtrip, Cohort, sample_cohort());

roundtrip_and_validate!(
    cohort_minimal_roundtrip,
    Cohort,
    Cohort {
        program: None,
        format: None,
        campus: None,
        end_date: None,
        ..sample_cohort()
    }
);

roundtrip_and_validate!(student_roundtrip, Student, sample_student());

roundtrip_and_validate!(
    student_without_cohort_roundtrip,
    Student,
    Student {
        cohort: None,
        languages: None,
        projects: vec![],
        ..sample_student()
    }
);

roundtrip_and_validate!(
    populated_student_roundtrip,
    PopulatedStudent,
    sample_student().populate(Some(sample_cohort()))
);

roundtrip_and_validate!(
    new_cohort_roundtrip,
    NewCohort,
    NewCohort {
        program: Some(Program::Cybersecurity),
        campus: Some(Campus::Remote),
        format: Some(Format::PartTime),
        ..NewCohort::new("pt-cy-remote-2024-01", "PT CY REMOTE", "PM", "LT")
    }
);

roundtrip_and_validate!(
    new_student_roundtrip,
    NewStudent,
    NewStudent::new("Ana", "Lee", "a@x.com", "123").with_cohort("65f1c2a9b3d4e5f60718293a")
);

#[test]
fn wire_field_names_are_camel_case() {
    let json = serde_json::to_value(sample_student()).unwrap();
    for key in [
        "_id",
        "firstName",
        "lastName",
        "email",
        "phone",
        "linkedinUrl",
        "languages",
        "program",
        "background",
        "image",
        "cohort",
        "projects",
    ] {
        assert!(json.get(key).is_some(), "missing key {key}");
    }

    let json = serde_json::to_value(sample_cohort()).unwrap();
    for key in [
        "_id",
        "cohortSlug",
        "cohortName",
        "program",
        "format",
        "campus",
        "startDate",
        "endDate",
        "inProgress",
        "programManager",
        "leadTeacher",
        "totalHours",
    ] {
        assert!(json.get(key).is_some(), "missing key {key}");
    }
}

#[test]
fn enum_labels_on_the_wire() {
    let json = serde_json::to_value(sample_cohort()).unwrap();
    assert_eq!(json["program"], "Web Dev");
    assert_eq!(json["format"], "Full Time");
    assert_eq!(json["campus"], "Paris");
}
