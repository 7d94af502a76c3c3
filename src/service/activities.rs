//! Activity operations: list, cascade delete, and the derived campers view.

use crate::error::AppError;
use crate::models::{Activity, Camper};
use sqlx::PgPool;

const SQL_LIST: &str = "SELECT id, name, difficulty FROM activities ORDER BY id";

const SQL_INSERT: &str = r#"
INSERT INTO activities (name, difficulty)
VALUES ($1, $2)
RETURNING id, name, difficulty
"#;

const SQL_DELETE: &str = "DELETE FROM activities WHERE id = $1 RETURNING id";

const SQL_CAMPERS_OF: &str = r#"
SELECT c.id, c.name, c.age
FROM campers c
JOIN signups s ON s.camper_id = c.id
WHERE s.activity_id = $1
ORDER BY s.id
"#;

pub async fn list(pool: &PgPool) -> Result<Vec<Activity>, AppError> {
    let rows = sqlx::query_as::<_, Activity>(SQL_LIST).fetch_all(pool).await?;
    Ok(rows)
}

/// Insert an activity. Not reachable from the HTTP surface; used by the
/// seed tool.
pub async fn create(
    pool: &PgPool,
    name: Option<&str>,
    difficulty: Option<i32>,
) -> Result<Activity, AppError> {
    let row = sqlx::query_as::<_, Activity>(SQL_INSERT)
        .bind(name)
        .bind(difficulty)
        .fetch_one(pool)
        .await?;
    Ok(row)
}

/// Delete an activity; its signups go with it in the same statement via
/// ON DELETE CASCADE. Returns false when the id has no row.
pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, AppError> {
    tracing::debug!(id, "delete activity");
    let deleted = sqlx::query_scalar::<_, i64>(SQL_DELETE)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(deleted.is_some())
}

/// Derived view: the campers signed up for this activity, one entry per
/// signup, in signup order. Returns `None` when the activity is absent.
pub async fn campers_of(pool: &PgPool, id: i64) -> Result<Option<Vec<Camper>>, AppError> {
    let exists = sqlx::query_scalar::<_, i64>("SELECT id FROM activities WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    if exists.is_none() {
        return Ok(None);
    }
    let rows = sqlx::query_as::<_, Camper>(SQL_CAMPERS_OF)
        .bind(id)
        .fetch_all(pool)
        .await?;
    Ok(Some(rows))
}
