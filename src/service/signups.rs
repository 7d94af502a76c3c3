//! Signup creation: the single write that links a camper to an activity.

use crate::error::{self, AppError};
use crate::models::{Activity, Camper, NewSignup, Signup};
use crate::service::validation;
use crate::views::SignupWithParents;
use sqlx::PgPool;

const SQL_INSERT: &str = r#"
INSERT INTO signups (camper_id, activity_id, time)
VALUES ($1, $2, $3)
RETURNING id, time, camper_id, activity_id
"#;

const SQL_CAMPER: &str = "SELECT id, name, age FROM campers WHERE id = $1";

const SQL_ACTIVITY: &str = "SELECT id, name, difficulty FROM activities WHERE id = $1";

/// Validate and insert a signup, then read back both parents inside the
/// same transaction. A foreign-key violation on either parent id surfaces
/// as a validation failure, not a fault.
pub async fn create(pool: &PgPool, body: &NewSignup) -> Result<SignupWithParents, AppError> {
    let (camper_id, activity_id, time) = validation::new_signup(body)?;
    tracing::debug!(camper_id, activity_id, time, "insert signup");

    let mut tx = pool.begin().await?;
    let signup = sqlx::query_as::<_, Signup>(SQL_INSERT)
        .bind(camper_id)
        .bind(activity_id)
        .bind(time)
        .fetch_one(&mut *tx)
        .await
        .map_err(error::db_write_error)?;
    let camper = sqlx::query_as::<_, Camper>(SQL_CAMPER)
        .bind(camper_id)
        .fetch_one(&mut *tx)
        .await?;
    let activity = sqlx::query_as::<_, Activity>(SQL_ACTIVITY)
        .bind(activity_id)
        .fetch_one(&mut *tx)
        .await?;
    tx.commit().await?;

    Ok(SignupWithParents::new(signup, camper, activity))
}
