//! Camper endpoints.

use crate::error::AppError;
use crate::handlers::body_to_map;
use crate::models::NewCamper;
use crate::service::campers;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = campers::list(&state.pool).await?;
    Ok(Json(rows))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewCamper>,
) -> Result<impl IntoResponse, AppError> {
    let camper = campers::create(&state.pool, &body).await?;
    Ok((StatusCode::OK, Json(camper)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let camper = campers::detail(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("camper {}", id)))?;
    Ok(Json(camper))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let body = body_to_map(body)?;
    let camper = campers::patch(&state.pool, id, &body)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("camper {}", id)))?;
    Ok((StatusCode::ACCEPTED, Json(camper)))
}

/// Derived view: flat activities reached through this camper's signups.
pub async fn activities(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let rows = campers::activities_of(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("camper {}", id)))?;
    Ok(Json(rows))
}
