//! Signup endpoints.

use crate::error::AppError;
use crate::models::NewSignup;
use crate::service::signups;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewSignup>,
) -> Result<impl IntoResponse, AppError> {
    let signup = signups::create(&state.pool, &body).await?;
    Ok((StatusCode::CREATED, Json(signup)))
}
