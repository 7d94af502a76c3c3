//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("config: {0}")]
    Config(String),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::Db(e) => {
                if let sqlx::Error::RowNotFound = e {
                    (StatusCode::NOT_FOUND, "not_found")
                } else {
                    (StatusCode::INTERNAL_SERVER_ERROR, "database_error")
                }
            }
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
        };
        // Database failures stay opaque on the wire.
        let message = match &self {
            AppError::Db(sqlx::Error::RowNotFound) => "not found".to_string(),
            AppError::Db(_) | AppError::Config(_) => "internal error".to_string(),
            _ => self.to_string(),
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };
        (status, Json(body)).into_response()
    }
}

/// Field guarded by a cascade foreign key, recovered from the deterministic
/// constraint name (`fk_<table>_<column>_<referred_table>`).
pub fn foreign_key_field(constraint: &str) -> Option<&'static str> {
    match constraint {
        "fk_signups_camper_id_campers" => Some("camper_id"),
        "fk_signups_activity_id_activities" => Some("activity_id"),
        _ => None,
    }
}

/// Convert a write error: foreign-key violations become validation failures,
/// everything else stays a database error.
pub fn db_write_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if matches!(db.kind(), sqlx::error::ErrorKind::ForeignKeyViolation) {
            let message = match db.constraint().and_then(foreign_key_field) {
                Some(field) => format!("{} must reference an existing record", field),
                None => "foreign key violation".to_string(),
            };
            return AppError::Validation(message);
        }
    }
    AppError::Db(e)
}
