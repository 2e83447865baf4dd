//! Student update builder.

use cohort_core::enums::{EntityType, Language, Program};
use cohort_core::errors::CoreError;
use cohort_core::validation::Validator;
use serde::{Deserialize, Serialize};

use super::{SetClauses, double_option};
use crate::error::DatabaseError;
use crate::helpers::encode_string_list;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub languages: Option<Option<Language>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub program: Option<Option<Program>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub cohort: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<String>>,
}

impl StudentUpdate {
    /// Supplied required fields must not be empty; a supplied cohort
    /// reference must be a well-formed id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming every problem found.
    pub fn validate(&self) -> Result<(), CoreError> {
        Validator::new(EntityType::Student)
            .required_if_present("firstName", self.first_name.as_deref())
            .required_if_present("lastName", self.last_name.as_deref())
            .required_if_present("email", self.email.as_deref())
            .required_if_present("phone", self.phone.as_deref())
            .reference("cohort", self.cohort.as_ref().and_then(Option::as_deref))
            .finish()
    }

    pub(crate) fn into_set_clauses(self) -> Result<SetClauses, DatabaseError> {
        self.validate()?;
        let mut sets = SetClauses::default();
        if let Some(first) = self.first_name {
            sets.push("first_name", first);
        }
        if let Some(last) = self.last_name {
            sets.push("last_name", last);
        }
        if let Some(email) = self.email {
            sets.push("email", email);
        }
        if let Some(phone) = self.phone {
            sets.push("phone", phone);
        }
        if let Some(url) = self.linkedin_url {
            sets.push("linkedin_url", url);
        }
        if let Some(languages) = self.languages {
            sets.push_nullable("languages", languages.map(Language::as_str));
        }
        if let Some(program) = self.program {
            sets.push_nullable("program", program.map(Program::as_str));
        }
        if let Some(background) = self.background {
            sets.push("background", background);
        }
        if let Some(image) = self.image {
            sets.push("image", image);
        }
        if let Some(cohort) = self.cohort {
            sets.push_nullable("cohort_id", cohort.map(|c| c.to_ascii_lowercase()));
        }
        if let Some(projects) = self.projects {
            sets.push("projects", encode_string_list(&projects)?);
        }
        Ok(sets)
    }
}

pub struct StudentUpdateBuilder(StudentUpdate);

impl StudentUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(StudentUpdate::default())
    }

    #[must_use]
    pub fn first_name(mut self, first: impl Into<String>) -> Self {
        self.0.first_name = Some(first.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, last: impl Into<String>) -> Self {
        self.0.last_name = Some(last.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.0.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.0.phone = Some(phone.into());
        self
    }

    #[must_use]
    pub fn linkedin_url(mut self, url: impl Into<String>) -> Self {
        self.0.linkedin_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn languages(mut self, languages: Option<Language>) -> Self {
        self.0.languages = Some(languages);
        self
    }

    #[must_use]
    pub fn program(mut self, program: Option<Program>) -> Self {
        self.0.program = Some(program);
        self
    }

    #[must_use]
    pub fn background(mut self, background: impl Into<String>) -> Self {
        self.0.background = Some(background.into());
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.0.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn cohort(mut self, cohort: Option<String>) -> Self {
        self.0.cohort = Some(cohort);
        self
    }

    #[must_use]
    pub fn projects(mut self, projects: Vec<String>) -> Self {
        self.0.projects = Some(projects);
        self
    }

    #[must_use]
    pub fn build(self) -> StudentUpdate {
        self.0
    }
}

impl Default for StudentUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
