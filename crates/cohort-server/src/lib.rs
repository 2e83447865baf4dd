//! # cohort-server
//!
//! HTTP API for cohorts and students.
//!
//! Routes `/api/cohorts` and `/api/students` onto a [`RecordStore`], and wraps
//! them with JSON body parsing, request tracing, security headers, and a
//! CORS policy that only admits the configured origins.
//!
//! [`RecordStore`]: cohort_db::RecordStore

pub mod error;
pub mod handlers;
pub mod server;
pub mod state;

pub use error::{ApiError, ServerError};
pub use server::{Server, router};
pub use state::AppState;
