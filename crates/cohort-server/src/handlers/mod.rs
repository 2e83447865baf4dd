//! Request handlers, one module per resource.

pub mod cohorts;
pub mod health;
pub mod students;

use serde::Serialize;

use cohort_core::ids::check_id;

use crate::error::ApiError;

/// Body returned by DELETE routes.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub message: String,
}

/// Check a path id before it reaches the store.
pub(crate) fn parse_id(raw: &str) -> Result<String, ApiError> {
    Ok(check_id(raw)?)
}
