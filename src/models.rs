//! Row types and request payloads for campers, activities, and signups.
//!
//! The flat row types carry no relationship collections; nested response
//! shapes live in [`crate::views`].

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Camper {
    pub id: i64,
    pub name: String,
    pub age: i32,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Activity {
    pub id: i64,
    pub name: Option<String>,
    pub difficulty: Option<i32>,
}

/// Join record of the camper/activity many-to-many relationship.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Signup {
    pub id: i64,
    pub time: i32,
    pub camper_id: i64,
    pub activity_id: i64,
}

/// POST /campers body. A missing key surfaces as a field rule failure, not
/// a deserialization error.
#[derive(Debug, Default, Deserialize)]
pub struct NewCamper {
    pub name: Option<String>,
    pub age: Option<i64>,
}

/// POST /signups body.
#[derive(Debug, Default, Deserialize)]
pub struct NewSignup {
    pub camper_id: Option<i64>,
    pub activity_id: Option<i64>,
    pub time: Option<i64>,
}
