//! HTTP error envelope and server startup errors.
//!
//! Two body shapes are part of the public contract and existing frontends
//! key on them:
//! - `{"error": ...}` for rejected bodies and store failures (400, 500)
//! - `{"message": ...}` for malformed ids and missing records (400, 404)

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use cohort_config::ConfigError;
use cohort_core::enums::EntityType;
use cohort_core::errors::CoreError;
use cohort_db::error::DatabaseError;

/// A failed request, rendered as a JSON body with a matching status.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body could not be parsed or the store rejected the write.
    #[error("{0}")]
    BadRequest(String),

    /// A path id is not a well-formed identifier.
    #[error("Specified id is not valid")]
    InvalidId,

    /// A well-formed id matched no record.
    #[error("{0} not found")]
    NotFound(EntityType),

    /// The store failed while listing a collection.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::InvalidId => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert a failed collection listing.
    pub fn from_list(entity: EntityType, err: &DatabaseError) -> Self {
        tracing::error!(%entity, error = %err, "listing failed");
        Self::Internal(err.to_string())
    }

    /// Convert a failed single-record operation.
    ///
    /// `NoResult` becomes 404; anything else is reported back verbatim as 400.
    pub fn from_store(entity: EntityType, err: DatabaseError) -> Self {
        match err {
            DatabaseError::NoResult => Self::NotFound(entity),
            other => {
                tracing::warn!(%entity, error = %other, "store rejected request");
                Self::BadRequest(other.to_string())
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidId(_) => Self::InvalidId,
            CoreError::NotFound { entity_type, .. } => Self::NotFound(entity_type),
            CoreError::Validation(msg) => Self::BadRequest(msg),
            CoreError::Other(e) => Self::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "request body rejected");
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::BadRequest(detail) | Self::Internal(detail) => json!({ "error": detail }),
            Self::InvalidId | Self::NotFound(_) => json!({ "message": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
