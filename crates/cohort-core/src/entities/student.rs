use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Cohort;
use crate::enums::{EntityType, Language, Program};
use crate::errors::CoreError;
use crate::validation::Validator;

/// Placeholder avatar used when a student is created without `image`.
pub const DEFAULT_IMAGE_URL: &str = "https://i.imgur.com/r8bo8u7.png";

fn default_image() -> String {
    DEFAULT_IMAGE_URL.to_string()
}

/// An individual learner, optionally associated with one cohort.
///
/// `C` is the shape of the cohort relation: the referenced id as stored, or
/// the full [`Cohort`] once populated (see [`PopulatedStudent`]).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Student<C = String> {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Unique across all students.
    pub email: String,
    pub phone: String,
    pub linkedin_url: String,
    pub languages: Option<Language>,
    pub program: Option<Program>,
    pub background: String,
    pub image: String,
    /// Weak reference: never checked against the cohort collection by the store.
    pub cohort: Option<C>,
    pub projects: Vec<String>,
}

/// A student whose cohort reference has been expanded into the cohort record.
pub type PopulatedStudent = Student<Cohort>;

impl Student {
    /// Replace the cohort reference with the resolved record.
    ///
    /// A reference that resolved to nothing becomes `None`.
    #[must_use]
    pub fn populate(self, cohort: Option<Cohort>) -> PopulatedStudent {
        Student {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            linkedin_url: self.linkedin_url,
            languages: self.languages,
            program: self.program,
            background: self.background,
            image: self.image,
            cohort,
            projects: self.projects,
        }
    }
}

/// Body of a student create request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub linkedin_url: String,
    #[serde(default)]
    pub languages: Option<Language>,
    #[serde(default)]
    pub program: Option<Program>,
    #[serde(default)]
    pub background: String,
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default)]
    pub cohort: Option<String>,
    #[serde(default)]
    pub projects: Vec<String>,
}

impl NewStudent {
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: phone.into(),
            linkedin_url: String::new(),
            languages: None,
            program: None,
            background: String::new(),
            image: default_image(),
            cohort: None,
            projects: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_cohort(mut self, cohort_id: impl Into<String>) -> Self {
        self.cohort = Some(cohort_id.into());
        self
    }

    /// Check required fields and the shape of the cohort reference.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming every problem found.
    pub fn validate(&self) -> Result<(), CoreError> {
        Validator::new(EntityType::Student)
            .required("firstName", &self.first_name)
            .required("lastName", &self.last_name)
            .required("email", &self.email)
            .required("phone", &self.phone)
            .reference("cohort", self.cohort.as_deref())
            .finish()
    }

    /// Materialize the stored record under the given id.
    #[must_use]
    pub fn into_student(self, id: String) -> Student {
        Student {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            linkedin_url: self.linkedin_url,
            languages: self.languages,
            program: self.program,
            background: self.background,
            image: self.image,
            cohort: self.cohort.map(|c| c.to_ascii_lowercase()),
            projects: self.projects,
        }
    }
}
