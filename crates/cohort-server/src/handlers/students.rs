//! `/api/students` handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use cohort_core::entities::{NewStudent, PopulatedStudent, Student};
use cohort_core::enums::EntityType;
use cohort_db::updates::student::StudentUpdate;

use super::{Ack, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Student>>, ApiError> {
    let students = state
        .store
        .list_students()
        .await
        .map_err(|e| ApiError::from_list(EntityType::Student, &e))?;
    Ok(Json(students))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewStudent>, JsonRejection>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    let Json(new) = body?;
    let student = state
        .store
        .create_student(new)
        .await
        .map_err(|e| ApiError::from_store(EntityType::Student, e))?;
    tracing::info!(id = %student.id, cohort = ?student.cohort, "student created");
    Ok((StatusCode::CREATED, Json(student)))
}

/// Single student with the cohort reference expanded.
///
/// Answers 202 rather than 200; existing clients depend on it.
pub async fn get_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<PopulatedStudent>), ApiError> {
    let id = parse_id(&id)?;
    let student = state
        .store
        .get_student_populated(&id)
        .await
        .map_err(|e| ApiError::from_store(EntityType::Student, e))?;
    Ok((StatusCode::ACCEPTED, Json(student)))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<StudentUpdate>, JsonRejection>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    let id = parse_id(&id)?;
    let Json(update) = body?;
    let student = state
        .store
        .update_student(&id, update)
        .await
        .map_err(|e| ApiError::from_store(EntityType::Student, e))?;
    tracing::info!(%id, "student updated");
    Ok((StatusCode::ACCEPTED, Json(student)))
}

/// Acknowledged whether or not a record matched.
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Ack>), ApiError> {
    let id = parse_id(&id)?;
    let removed = state
        .store
        .delete_student(&id)
        .await
        .map_err(|e| ApiError::from_store(EntityType::Student, e))?;
    tracing::info!(%id, removed, "student deleted");
    Ok((
        StatusCode::ACCEPTED,
        Json(Ack {
            message: "Student deleted".into(),
        }),
    ))
}

/// Students referencing a cohort, possibly none.
///
/// The reference is weak, so students of a deleted cohort are still listed.
pub async fn list_by_cohort(
    State(state): State<Arc<AppState>>,
    Path(cohort_id): Path<String>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let cohort_id = parse_id(&cohort_id)?;
    let students = state
        .store
        .list_students_by_cohort(&cohort_id)
        .await
        .map_err(|e| ApiError::from_list(EntityType::Student, &e))?;
    Ok(Json(students))
}
