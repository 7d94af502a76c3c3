//! Response shapes for the cyclic camper/signup/activity graph.
//!
//! The relationship shape is known statically, so each traversal direction
//! gets its own type with the reverse edge left out: an embedded parent is
//! always a flat row, and a nested signup never points back at the entity
//! that embeds it. No runtime cycle detection is involved.

use crate::models::{Activity, Camper, Signup};
use serde::Serialize;

/// A camper with its signups. Each nested signup carries the activity side
/// of the join but not the camper side.
#[derive(Debug, Serialize)]
pub struct CamperDetail {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub signups: Vec<SignupWithActivity>,
}

impl CamperDetail {
    pub fn new(camper: Camper, signups: Vec<SignupWithActivity>) -> Self {
        CamperDetail {
            id: camper.id,
            name: camper.name,
            age: camper.age,
            signups,
        }
    }
}

/// A signup seen from its camper: the embedded activity is a flat row.
#[derive(Debug, Serialize)]
pub struct SignupWithActivity {
    pub id: i64,
    pub time: i32,
    pub camper_id: i64,
    pub activity_id: i64,
    pub activity: Activity,
}

impl SignupWithActivity {
    pub fn new(signup: Signup, activity: Activity) -> Self {
        SignupWithActivity {
            id: signup.id,
            time: signup.time,
            camper_id: signup.camper_id,
            activity_id: signup.activity_id,
            activity,
        }
    }
}

/// A signup with both parents embedded as flat rows. Returned from
/// POST /signups.
#[derive(Debug, Serialize)]
pub struct SignupWithParents {
    pub id: i64,
    pub time: i32,
    pub camper_id: i64,
    pub activity_id: i64,
    pub camper: Camper,
    pub activity: Activity,
}

impl SignupWithParents {
    pub fn new(signup: Signup, camper: Camper, activity: Activity) -> Self {
        SignupWithParents {
            id: signup.id,
            time: signup.time,
            camper_id: signup.camper_id,
            activity_id: signup.activity_id,
            camper,
            activity,
        }
    }
}
