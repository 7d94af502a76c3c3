//! Schema DDL: three tables, cascade foreign keys, deterministic constraint
//! names (`pk_<table>`, `fk_<table>_<column>_<referred_table>`,
//! `ix_<table>_<column>`).

use crate::error::AppError;
use sqlx::PgPool;

const CREATE_CAMPERS: &str = r#"
CREATE TABLE IF NOT EXISTS campers (
    id BIGSERIAL,
    name TEXT NOT NULL,
    age INTEGER NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    CONSTRAINT pk_campers PRIMARY KEY (id)
)
"#;

const CREATE_ACTIVITIES: &str = r#"
CREATE TABLE IF NOT EXISTS activities (
    id BIGSERIAL,
    name TEXT,
    difficulty INTEGER,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    CONSTRAINT pk_activities PRIMARY KEY (id)
)
"#;

const CREATE_SIGNUPS: &str = r#"
CREATE TABLE IF NOT EXISTS signups (
    id BIGSERIAL,
    time INTEGER NOT NULL,
    camper_id BIGINT NOT NULL,
    activity_id BIGINT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    CONSTRAINT pk_signups PRIMARY KEY (id),
    CONSTRAINT fk_signups_camper_id_campers
        FOREIGN KEY (camper_id) REFERENCES campers (id) ON DELETE CASCADE,
    CONSTRAINT fk_signups_activity_id_activities
        FOREIGN KEY (activity_id) REFERENCES activities (id) ON DELETE CASCADE
)
"#;

const CREATE_IX_SIGNUPS_CAMPER_ID: &str =
    "CREATE INDEX IF NOT EXISTS ix_signups_camper_id ON signups (camper_id)";

const CREATE_IX_SIGNUPS_ACTIVITY_ID: &str =
    "CREATE INDEX IF NOT EXISTS ix_signups_activity_id ON signups (activity_id)";

/// Statement order follows foreign-key dependencies: parents before signups.
const STATEMENTS: &[&str] = &[
    CREATE_CAMPERS,
    CREATE_ACTIVITIES,
    CREATE_SIGNUPS,
    CREATE_IX_SIGNUPS_CAMPER_ID,
    CREATE_IX_SIGNUPS_ACTIVITY_ID,
];

/// Apply the schema. Idempotent (IF NOT EXISTS throughout).
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    for sql in STATEMENTS {
        sqlx::query(sql).execute(pool).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_keys_follow_naming_convention() {
        assert!(CREATE_CAMPERS.contains("CONSTRAINT pk_campers PRIMARY KEY (id)"));
        assert!(CREATE_ACTIVITIES.contains("CONSTRAINT pk_activities PRIMARY KEY (id)"));
        assert!(CREATE_SIGNUPS.contains("CONSTRAINT pk_signups PRIMARY KEY (id)"));
    }

    #[test]
    fn foreign_keys_follow_naming_convention_and_cascade() {
        assert!(CREATE_SIGNUPS.contains("CONSTRAINT fk_signups_camper_id_campers"));
        assert!(CREATE_SIGNUPS.contains("CONSTRAINT fk_signups_activity_id_activities"));
        assert_eq!(CREATE_SIGNUPS.matches("ON DELETE CASCADE").count(), 2);
    }

    #[test]
    fn signup_lookup_columns_are_indexed() {
        assert!(CREATE_IX_SIGNUPS_CAMPER_ID.contains("ix_signups_camper_id"));
        assert!(CREATE_IX_SIGNUPS_ACTIVITY_ID.contains("ix_signups_activity_id"));
        assert_eq!(STATEMENTS.len(), 5);
    }

    #[test]
    fn parents_are_created_before_signups() {
        let signups_pos = STATEMENTS
            .iter()
            .position(|s| *s == CREATE_SIGNUPS)
            .unwrap();
        let campers_pos = STATEMENTS.iter().position(|s| *s == CREATE_CAMPERS).unwrap();
        let activities_pos = STATEMENTS
            .iter()
            .position(|s| *s == CREATE_ACTIVITIES)
            .unwrap();
        assert!(campers_pos < signups_pos);
        assert!(activities_pos < signups_pos);
    }
}
