//! Cross-cutting error types.
//!
//! Store failures (`DatabaseError`) and HTTP envelopes (`ApiError`) live in
//! their respective crates. `CoreError` covers what can be decided without
//! touching the store.

use thiserror::Error;

use crate::enums::EntityType;

/// Errors that can be raised by any crate in the workspace.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: EntityType, id: String },

    /// An identifier does not match the store's id format.
    #[error("Specified id is not valid: {0}")]
    InvalidId(String),

    /// Data failed validation (required fields, constraints).
    #[error("{0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
