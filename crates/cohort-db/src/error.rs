//! Database error types for cohort-db.

use cohort_core::enums::EntityType;
use cohort_core::errors::CoreError;
use thiserror::Error;

/// Errors from record store operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned malformed data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// A write was rejected before reaching SQL (required fields, id shape).
    #[error("{0}")]
    Validation(String),

    /// A write collided with a unique index.
    #[error("Duplicate key error: {entity} {constraint} must be unique")]
    Duplicate {
        entity: EntityType,
        constraint: String,
    },

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<CoreError> for DatabaseError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => Self::Validation(msg),
            CoreError::InvalidId(_) => Self::Validation(err.to_string()),
            CoreError::NotFound { .. } => Self::NoResult,
            CoreError::Other(e) => Self::Other(e),
        }
    }
}

impl DatabaseError {
    /// Classify a failed write, turning UNIQUE violations into `Duplicate`.
    pub(crate) fn from_write(err: libsql::Error, entity: EntityType) -> Self {
        const MARKER: &str = "UNIQUE constraint failed: ";
        let text = err.to_string();
        match text.find(MARKER) {
            Some(pos) => {
                let constraint = text[pos + MARKER.len()..]
                    .trim_end_matches(['`', '"', ' '])
                    .to_string();
                Self::Duplicate { entity, constraint }
            }
            None => Self::LibSql(err),
        }
    }
}
