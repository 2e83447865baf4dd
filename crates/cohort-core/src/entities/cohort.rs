use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Campus, EntityType, Format, Program};
use crate::errors::CoreError;
use crate::validation::Validator;

/// Course length used when a cohort is created without `totalHours`.
pub const DEFAULT_TOTAL_HOURS: i64 = 360;

const fn default_total_hours() -> i64 {
    DEFAULT_TOTAL_HOURS
}

/// A named group of students sharing a program, campus, and schedule.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Cohort {
    #[serde(rename = "_id")]
    pub id: String,
    /// Unique across all cohorts.
    pub cohort_slug: String,
    pub cohort_name: String,
    pub program: Option<Program>,
    pub format: Option<Format>,
    pub campus: Option<Campus>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub in_progress: bool,
    pub program_manager: String,
    pub lead_teacher: String,
    pub total_hours: i64,
}

/// Body of a cohort create request. Omitted optional fields take defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewCohort {
    pub cohort_slug: String,
    pub cohort_name: String,
    #[serde(default)]
    pub program: Option<Program>,
    #[serde(default)]
    pub format: Option<Format>,
    #[serde(default)]
    pub campus: Option<Campus>,
    /// Defaults to the creation time.
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub in_progress: bool,
    pub program_manager: String,
    pub lead_teacher: String,
    #[serde(default = "default_total_hours")]
    pub total_hours: i64,
}

impl NewCohort {
    /// Minimal payload with every optional field at its default.
    #[must_use]
    pub fn new(
        cohort_slug: impl Into<String>,
        cohort_name: impl Into<String>,
        program_manager: impl Into<String>,
        lead_teacher: impl Into<String>,
    ) -> Self {
        Self {
            cohort_slug: cohort_slug.into(),
            cohort_name: cohort_name.into(),
            program: None,
            format: None,
            campus: None,
            start_date: None,
            end_date: None,
            in_progress: false,
            program_manager: program_manager.into(),
            lead_teacher: lead_teacher.into(),
            total_hours: DEFAULT_TOTAL_HOURS,
        }
    }

    /// Check required fields before the payload reaches the store.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming every empty required field.
    pub fn validate(&self) -> Result<(), CoreError> {
        Validator::new(EntityType::Cohort)
            .required("cohortSlug", &self.cohort_slug)
            .required("cohortName", &self.cohort_name)
            .required("programManager", &self.program_manager)
            .required("leadTeacher", &self.lead_teacher)
            .finish()
    }

    /// Materialize the stored record under the given id.
    #[must_use]
    pub fn into_cohort(self, id: String, now: DateTime<Utc>) -> Cohort {
        Cohort {
            id,
            cohort_slug: self.cohort_slug,
            cohort_name: self.cohort_name,
            program: self.program,
            format: self.format,
            campus: self.campus,
            start_date: self.start_date.unwrap_or(now),
            end_date: self.end_date,
            in_progress: self.in_progress,
            program_manager: self.program_manager,
            lead_teacher: self.lead_teacher,
            total_hours: self.total_hours,
        }
    }
}
