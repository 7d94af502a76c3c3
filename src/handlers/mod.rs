//! HTTP handlers translating verbs and paths into service operations.

pub mod activities;
pub mod campers;
pub mod signups;

use crate::error::AppError;
use serde_json::{Map, Value};

/// PATCH bodies stay raw JSON; null, wrong-typed, and unknown fields are
/// decided by the field rules. Anything but an object is rejected here.
pub(crate) fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}
