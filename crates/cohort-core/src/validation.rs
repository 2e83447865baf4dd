//! Field-level validation for write payloads.
//!
//! Collects every problem in a payload so a rejected write reports all of
//! them at once, e.g. `Cohort validation failed: cohortSlug is required`.

use crate::enums::EntityType;
use crate::errors::CoreError;
use crate::ids::is_valid_id;

pub struct Validator {
    entity: EntityType,
    problems: Vec<String>,
}

impl Validator {
    #[must_use]
    pub const fn new(entity: EntityType) -> Self {
        Self {
            entity,
            problems: Vec::new(),
        }
    }

    /// A required string field must be non-empty.
    pub fn required(&mut self, field: &str, value: &str) -> &mut Self {
        if value.is_empty() {
            self.problems.push(format!("{field} is required"));
        }
        self
    }

    /// Like [`required`](Self::required), but only checks a value that was supplied.
    pub fn required_if_present(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.required(field, value);
        }
        self
    }

    /// A reference field, when set, must hold a well-formed identifier.
    pub fn reference(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        match value {
            Some(id) if !is_valid_id(id) => {
                self.problems
                    .push(format!("{field} is not a valid id: \"{id}\""));
            }
            _ => {}
        }
        self
    }

    /// Consume the validator.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` listing every recorded problem.
    pub fn finish(&mut self) -> Result<(), CoreError> {
        if self.problems.is_empty() {
            return Ok(());
        }
        Err(CoreError::Validation(format!(
            "{} validation failed: {}",
            self.entity,
            self.problems.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_when_all_fields_present() {
        Validator::new(EntityType::Cohort)
            .required("cohortSlug", "ft-wd-paris-2024-01")
            .finish()
            .unwrap();
    }

    #[test]
    fn reports_every_problem() {
        let err = Validator::new(EntityType::Student)
            .required("firstName", "")
            .required("email", "")
            .reference("cohort", Some("abc"))
            .finish()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Student validation failed: firstName is required, email is required, \
             cohort is not a valid id: \"abc\""
        );
    }

    #[test]
    fn whitespace_counts_as_present() {
        Validator::new(EntityType::Student)
            .required("background", "   ")
            .finish()
            .unwrap();
    }

    #[test]
    fn absent_optional_values_are_skipped() {
        Validator::new(EntityType::Student)
            .required_if_present("email", None)
            .reference("cohort", None)
            .finish()
            .unwrap();
    }
}
