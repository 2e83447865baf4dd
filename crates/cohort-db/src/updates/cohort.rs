//! Cohort update builder.

use chrono::{DateTime, Utc};
use cohort_core::enums::{Campus, EntityType, Format, Program};
use cohort_core::errors::CoreError;
use cohort_core::validation::Validator;
use serde::{Deserialize, Serialize};

use super::{SetClauses, double_option};
use crate::error::DatabaseError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cohort_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cohort_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub program: Option<Option<Program>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub format: Option<Option<Format>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub campus: Option<Option<Campus>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_progress: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_manager: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_teacher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_hours: Option<i64>,
}

impl CohortUpdate {
    /// Supplied required fields must not be empty.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming every problem found.
    pub fn validate(&self) -> Result<(), CoreError> {
        Validator::new(EntityType::Cohort)
            .required_if_present("cohortSlug", self.cohort_slug.as_deref())
            .required_if_present("cohortName", self.cohort_name.as_deref())
            .required_if_present("programManager", self.program_manager.as_deref())
            .required_if_present("leadTeacher", self.lead_teacher.as_deref())
            .finish()
    }

    pub(crate) fn into_set_clauses(self) -> Result<SetClauses, DatabaseError> {
        self.validate()?;
        let mut sets = SetClauses::default();
        if let Some(slug) = self.cohort_slug {
            sets.push("cohort_slug", slug);
        }
        if let Some(name) = self.cohort_name {
            sets.push("cohort_name", name);
        }
        if let Some(program) = self.program {
            sets.push_nullable("program", program.map(Program::as_str));
        }
        if let Some(format) = self.format {
            sets.push_nullable("format", format.map(Format::as_str));
        }
        if let Some(campus) = self.campus {
            sets.push_nullable("campus", campus.map(Campus::as_str));
        }
        if let Some(start) = self.start_date {
            sets.push("start_date", start.to_rfc3339());
        }
        if let Some(end) = self.end_date {
            sets.push_nullable("end_date", end.map(|d| d.to_rfc3339()));
        }
        if let Some(in_progress) = self.in_progress {
            sets.push("in_progress", i64::from(in_progress));
        }
        if let Some(pm) = self.program_manager {
            sets.push("program_manager", pm);
        }
        if let Some(lt) = self.lead_teacher {
            sets.push("lead_teacher", lt);
        }
        if let Some(hours) = self.total_hours {
            sets.push("total_hours", hours);
        }
        Ok(sets)
    }
}

pub struct CohortUpdateBuilder(CohortUpdate);

impl CohortUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(CohortUpdate::default())
    }

    #[must_use]
    pub fn cohort_slug(mut self, slug: impl Into<String>) -> Self {
        self.0.cohort_slug = Some(slug.into());
        self
    }

    #[must_use]
    pub fn cohort_name(mut self, name: impl Into<String>) -> Self {
        self.0.cohort_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn program(mut self, program: Option<Program>) -> Self {
        self.0.program = Some(program);
        self
    }

    #[must_use]
    pub fn format(mut self, format: Option<Format>) -> Self {
        self.0.format = Some(format);
        self
    }

    #[must_use]
    pub fn campus(mut self, campus: Option<Campus>) -> Self {
        self.0.campus = Some(campus);
        self
    }

    #[must_use]
    pub fn start_date(mut self, start: DateTime<Utc>) -> Self {
        self.0.start_date = Some(start);
        self
    }

    #[must_use]
    pub fn end_date(mut self, end: Option<DateTime<Utc>>) -> Self {
        self.0.end_date = Some(end);
        self
    }

    #[must_use]
    pub fn in_progress(mut self, in_progress: bool) -> Self {
        self.0.in_progress = Some(in_progress);
        self
    }

    #[must_use]
    pub fn program_manager(mut self, pm: impl Into<String>) -> Self {
        self.0.program_manager = Some(pm.into());
        self
    }

    #[must_use]
    pub fn lead_teacher(mut self, lt: impl Into<String>) -> Self {
        self.0.lead_teacher = Some(lt.into());
        self
    }

    #[must_use]
    pub fn total_hours(mut self, hours: i64) -> Self {
        self.0.total_hours = Some(hours);
        self
    }

    #[must_use]
    pub fn build(self) -> CohortUpdate {
        self.0
    }
}

impl Default for CohortUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn absent_and_null_are_distinct() {
        let absent: CohortUpdate = serde_json::from_str("{}").unwrap();
        assert_eq!(absent, CohortUpdate::default());

        let cleared: CohortUpdate =
            serde_json::from_str(r#"{"endDate": null, "campus": null}"#).unwrap();
        assert_eq!(cleared.end_date, Some(None));
        assert_eq!(cleared.campus, Some(None));
        assert_eq!(cleared.program, None);
    }

    #[test]
    fn parses_camel_case_body_and_ignores_id() {
        let update: CohortUpdate = serde_json::from_str(
            r#"{"_id": "65f1c2a9b3d4e5f60718293a", "cohortName": "Renamed", "inProgress": true, "campus": "Berlin"}"#,
        )
        .unwrap();
        let expected = CohortUpdateBuilder::new()
            .cohort_name("Renamed")
            .in_progress(true)
            .campus(Some(Campus::Berlin))
            .build();
        assert_eq!(update, expected);
    }

    #[test]
    fn empty_required_field_rejected() {
        let update = CohortUpdateBuilder::new().lead_teacher("").build();
        assert!(update.validate().is_err());
    }

    #[test]
    fn total_hours_is_not_range_checked() {
        let update = CohortUpdateBuilder::new().total_hours(-40).build();
        assert!(update.validate().is_ok());
    }

    #[test]
    fn unknown_enum_label_fails_to_parse() {
        assert!(serde_json::from_str::<CohortUpdate>(r#"{"format": "Weekends"}"#).is_err());
    }
}
