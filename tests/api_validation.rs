//! Router-level tests for the paths that are decided before any database
//! access: the liveness placeholder and the validation-first rejections.
//! The pool is built lazily, so no running PostgreSQL is needed.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use camp_signups::{app_routes, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost/camp_signups_test")
        .expect("lazy pool");
    app_routes(AppState { pool })
}

async fn send_json(app: Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn root_returns_empty_200() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send_json(test_app(), "GET", "/health", Value::Null).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
}

#[tokio::test]
async fn version_reports_crate_name() {
    let (status, body) = send_json(test_app(), "GET", "/version", Value::Null).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], json!("camp-signups"));
}

#[tokio::test]
async fn camper_create_rejects_out_of_range_age() {
    let (status, body) =
        send_json(test_app(), "POST", "/campers", json!({"name": "Amy", "age": 5})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("validation_error"));
    assert_eq!(body["error"]["message"], json!("age must be between 8 and 18"));
}

#[tokio::test]
async fn camper_create_rejects_missing_name() {
    let (status, body) = send_json(test_app(), "POST", "/campers", json!({"age": 12})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], json!("name is required"));
}

#[tokio::test]
async fn camper_create_rejects_empty_name() {
    let (status, body) =
        send_json(test_app(), "POST", "/campers", json!({"name": "", "age": 12})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("validation_error"));
}

#[tokio::test]
async fn camper_create_rejects_missing_age() {
    let (status, body) = send_json(test_app(), "POST", "/campers", json!({"name": "Amy"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], json!("age is required"));
}

#[tokio::test]
async fn signup_create_rejects_out_of_range_time() {
    let body = json!({"camper_id": 1, "activity_id": 1, "time": 24});
    let (status, body) = send_json(test_app(), "POST", "/signups", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], json!("time must be between 0 and 23"));
}

#[tokio::test]
async fn signup_create_requires_parent_ids() {
    let (status, body) = send_json(test_app(), "POST", "/signups", json!({"time": 9})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], json!("camper_id is required"));
}

#[tokio::test]
async fn camper_patch_rejects_non_object_body() {
    let (status, body) = send_json(test_app(), "PATCH", "/campers/1", json!([1, 2, 3])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("bad_request"));
}

#[tokio::test]
async fn camper_patch_rejects_unknown_field() {
    let (status, body) =
        send_json(test_app(), "PATCH", "/campers/1", json!({"nickname": "Ames"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], json!("unknown field: nickname"));
}

#[tokio::test]
async fn camper_patch_rejects_out_of_range_age() {
    let (status, body) = send_json(test_app(), "PATCH", "/campers/1", json!({"age": 5})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("validation_error"));
}
