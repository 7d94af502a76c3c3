//! Camper operations: list, create, detail with signups, partial update,
//! and the derived activities view.

use crate::error::AppError;
use crate::models::{Activity, Camper, NewCamper, Signup};
use crate::service::validation;
use crate::views::{CamperDetail, SignupWithActivity};
use serde_json::{Map, Value};
use sqlx::PgPool;

const SQL_LIST: &str = "SELECT id, name, age FROM campers ORDER BY id";

const SQL_BY_ID: &str = "SELECT id, name, age FROM campers WHERE id = $1";

const SQL_INSERT: &str = r#"
INSERT INTO campers (name, age)
VALUES ($1, $2)
RETURNING id, name, age
"#;

const SQL_UPDATE: &str = r#"
UPDATE campers
SET name = COALESCE($2, name),
    age = COALESCE($3, age),
    updated_at = NOW()
WHERE id = $1
RETURNING id, name, age
"#;

const SQL_SIGNUPS_WITH_ACTIVITY: &str = r#"
SELECT s.id, s.time, s.camper_id, s.activity_id,
       a.name AS activity_name, a.difficulty AS activity_difficulty
FROM signups s
JOIN activities a ON a.id = s.activity_id
WHERE s.camper_id = $1
ORDER BY s.id
"#;

const SQL_ACTIVITIES_OF: &str = r#"
SELECT a.id, a.name, a.difficulty
FROM activities a
JOIN signups s ON s.activity_id = a.id
WHERE s.camper_id = $1
ORDER BY s.id
"#;

/// One signup row joined with its activity columns.
#[derive(sqlx::FromRow)]
struct SignupActivityRow {
    id: i64,
    time: i32,
    camper_id: i64,
    activity_id: i64,
    activity_name: Option<String>,
    activity_difficulty: Option<i32>,
}

impl SignupActivityRow {
    fn into_view(self) -> SignupWithActivity {
        let activity = Activity {
            id: self.activity_id,
            name: self.activity_name,
            difficulty: self.activity_difficulty,
        };
        let signup = Signup {
            id: self.id,
            time: self.time,
            camper_id: self.camper_id,
            activity_id: self.activity_id,
        };
        SignupWithActivity::new(signup, activity)
    }
}

pub async fn list(pool: &PgPool) -> Result<Vec<Camper>, AppError> {
    let rows = sqlx::query_as::<_, Camper>(SQL_LIST).fetch_all(pool).await?;
    Ok(rows)
}

/// Validate and insert a camper. The created camper is returned in detail
/// form with its (necessarily empty) signups list.
pub async fn create(pool: &PgPool, body: &NewCamper) -> Result<CamperDetail, AppError> {
    let (name, age) = validation::new_camper(body)?;
    tracing::debug!(name = %name, age, "insert camper");
    let camper = sqlx::query_as::<_, Camper>(SQL_INSERT)
        .bind(&name)
        .bind(age)
        .fetch_one(pool)
        .await?;
    Ok(CamperDetail::new(camper, Vec::new()))
}

/// Fetch one camper with its signups, each carrying the activity side of
/// the join. Returns `None` when the id has no row.
pub async fn detail(pool: &PgPool, id: i64) -> Result<Option<CamperDetail>, AppError> {
    let Some(camper) = sqlx::query_as::<_, Camper>(SQL_BY_ID)
        .bind(id)
        .fetch_optional(pool)
        .await?
    else {
        return Ok(None);
    };
    let rows = sqlx::query_as::<_, SignupActivityRow>(SQL_SIGNUPS_WITH_ACTIVITY)
        .bind(id)
        .fetch_all(pool)
        .await?;
    let signups = rows.into_iter().map(SignupActivityRow::into_view).collect();
    Ok(Some(CamperDetail::new(camper, signups)))
}

/// Apply a partial update. Fields are validated before the row is touched,
/// so an invalid value leaves the stored camper unchanged. Returns `None`
/// when the id has no row.
pub async fn patch(
    pool: &PgPool,
    id: i64,
    body: &Map<String, Value>,
) -> Result<Option<Camper>, AppError> {
    let fields = validation::camper_patch(body)?;
    tracing::debug!(id, "patch camper");
    let row = sqlx::query_as::<_, Camper>(SQL_UPDATE)
        .bind(id)
        .bind(fields.name)
        .bind(fields.age)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Derived view: the activities this camper is signed up for, one entry per
/// signup, in signup order. Returns `None` when the camper is absent.
pub async fn activities_of(pool: &PgPool, id: i64) -> Result<Option<Vec<Activity>>, AppError> {
    let exists = sqlx::query_scalar::<_, i64>("SELECT id FROM campers WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    if exists.is_none() {
        return Ok(None);
    }
    let rows = sqlx::query_as::<_, Activity>(SQL_ACTIVITIES_OF)
        .bind(id)
        .fetch_all(pool)
        .await?;
    Ok(Some(rows))
}
