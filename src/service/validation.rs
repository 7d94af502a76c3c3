//! Field rules: one predicate per validated field, shared by every write
//! path (construction and partial update).

use crate::error::AppError;
use crate::models::{NewCamper, NewSignup};
use serde_json::{Map, Value};

/// Camper name: present and non-empty. Returns the accepted value.
pub fn camper_name(name: Option<&str>) -> Result<String, AppError> {
    match name {
        None => Err(AppError::Validation("name is required".into())),
        Some(s) if s.is_empty() => Err(AppError::Validation("name must not be empty".into())),
        Some(s) => Ok(s.to_string()),
    }
}

/// Camper age: present and within [8, 18].
pub fn camper_age(age: Option<i64>) -> Result<i32, AppError> {
    match age {
        None => Err(AppError::Validation("age is required".into())),
        Some(a) if !(8..=18).contains(&a) => {
            Err(AppError::Validation("age must be between 8 and 18".into()))
        }
        Some(a) => Ok(a as i32),
    }
}

/// Signup time: present and within [0, 23].
pub fn signup_time(time: Option<i64>) -> Result<i32, AppError> {
    match time {
        None => Err(AppError::Validation("time is required".into())),
        Some(t) if !(0..=23).contains(&t) => {
            Err(AppError::Validation("time must be between 0 and 23".into()))
        }
        Some(t) => Ok(t as i32),
    }
}

fn required_id(field: &'static str, id: Option<i64>) -> Result<i64, AppError> {
    id.ok_or_else(|| AppError::Validation(format!("{} is required", field)))
}

/// Validate a POST /campers body, returning the accepted (name, age).
pub fn new_camper(body: &NewCamper) -> Result<(String, i32), AppError> {
    let name = camper_name(body.name.as_deref())?;
    let age = camper_age(body.age)?;
    Ok((name, age))
}

/// Validate a POST /signups body, returning (camper_id, activity_id, time).
/// Referential integrity of the ids is left to the foreign keys.
pub fn new_signup(body: &NewSignup) -> Result<(i64, i64, i32), AppError> {
    let camper_id = required_id("camper_id", body.camper_id)?;
    let activity_id = required_id("activity_id", body.activity_id)?;
    let time = signup_time(body.time)?;
    Ok((camper_id, activity_id, time))
}

/// Validated partial update for a camper. `None` leaves the column unchanged.
#[derive(Debug, Default)]
pub struct CamperPatch {
    pub name: Option<String>,
    pub age: Option<i32>,
}

const CAMPER_PATCH_FIELDS: &[&str] = &["name", "age"];

/// Parse a PATCH /campers body against the allow-list. A present field
/// (including an explicit null) runs the same rule as construction; an
/// unknown field is rejected outright.
pub fn camper_patch(body: &Map<String, Value>) -> Result<CamperPatch, AppError> {
    for key in body.keys() {
        if !CAMPER_PATCH_FIELDS.contains(&key.as_str()) {
            return Err(AppError::Validation(format!("unknown field: {}", key)));
        }
    }

    let mut patch = CamperPatch::default();
    if let Some(v) = body.get("name") {
        if !(v.is_null() || v.is_string()) {
            return Err(AppError::Validation("name must be a string".into()));
        }
        patch.name = Some(camper_name(v.as_str())?);
    }
    if let Some(v) = body.get("age") {
        if !(v.is_null() || v.is_i64()) {
            return Err(AppError::Validation("age must be an integer".into()));
        }
        patch.age = Some(camper_age(v.as_i64())?);
    }
    Ok(patch)
}
