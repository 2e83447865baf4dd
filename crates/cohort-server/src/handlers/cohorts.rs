//! `/api/cohorts` handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use cohort_core::entities::{Cohort, NewCohort};
use cohort_core::enums::EntityType;
use cohort_db::updates::cohort::CohortUpdate;

use super::{Ack, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Cohort>>, ApiError> {
    let cohorts = state
        .store
        .list_cohorts()
        .await
        .map_err(|e| ApiError::from_list(EntityType::Cohort, &e))?;
    Ok(Json(cohorts))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewCohort>, JsonRejection>,
) -> Result<(StatusCode, Json<Cohort>), ApiError> {
    let Json(new) = body?;
    let cohort = state
        .store
        .create_cohort(new)
        .await
        .map_err(|e| ApiError::from_store(EntityType::Cohort, e))?;
    tracing::info!(id = %cohort.id, slug = %cohort.cohort_slug, "cohort created");
    Ok((StatusCode::CREATED, Json(cohort)))
}

pub async fn get_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Cohort>, ApiError> {
    let id = parse_id(&id)?;
    let cohort = state
        .store
        .get_cohort(&id)
        .await
        .map_err(|e| ApiError::from_store(EntityType::Cohort, e))?;
    Ok(Json(cohort))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<CohortUpdate>, JsonRejection>,
) -> Result<(StatusCode, Json<Cohort>), ApiError> {
    let id = parse_id(&id)?;
    let Json(update) = body?;
    let cohort = state
        .store
        .update_cohort(&id, update)
        .await
        .map_err(|e| ApiError::from_store(EntityType::Cohort, e))?;
    tracing::info!(%id, "cohort updated");
    Ok((StatusCode::ACCEPTED, Json(cohort)))
}

/// Acknowledged whether or not a record matched.
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Ack>), ApiError> {
    let id = parse_id(&id)?;
    let removed = state
        .store
        .delete_cohort(&id)
        .await
        .map_err(|e| ApiError::from_store(EntityType::Cohort, e))?;
    tracing::info!(%id, removed, "cohort deleted");
    Ok((
        StatusCode::ACCEPTED,
        Json(Ack {
            message: "Cohort deleted".into(),
        }),
    ))
}
