//! Router assembly: the API surface plus liveness and readiness probes.

use crate::handlers::{activities, campers, signups};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

/// Root path: empty 200, a liveness placeholder.
async fn home() {}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn ready(
    State(state): State<AppState>,
) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    if sqlx::query("SELECT 1")
        .fetch_optional(&state.pool)
        .await
        .is_err()
    {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database: Some("unavailable"),
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ok",
        database: Some("ok"),
    }))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn app_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/campers", get(campers::list).post(campers::create))
        .route("/campers/:id", get(campers::read).patch(campers::update))
        .route("/campers/:id/activities", get(campers::activities))
        .route("/activities", get(activities::list))
        .route("/activities/:id", delete(activities::delete))
        .route("/activities/:id/campers", get(activities::campers))
        .route("/signups", post(signups::create))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
