//! Activity endpoints.

use crate::error::AppError;
use crate::service::activities;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = activities::list(&state.pool).await?;
    Ok(Json(rows))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !activities::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("activity {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Derived view: flat campers reached through this activity's signups.
pub async fn campers(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let rows = activities::campers_of(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("activity {}", id)))?;
    Ok(Json(rows))
}
