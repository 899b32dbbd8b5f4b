//! Router-level tests for the validation short-circuit paths.
//!
//! The pool is created lazily and never connects: every request here must be
//! rejected by validation before any storage call reaches the database.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use serde_json::{Value, json};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

fn app() -> Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://risorse@localhost:5432/risorse")
        .expect("lazy pool");

    crate::api::router(pool)
}

async fn body_json(body: Body) -> Value {
    let bytes = to_bytes(body, usize::MAX).await.expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn json_request(method: &str, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request")
}

#[tokio::test]
async fn test_create_rejects_empty_name() {
    let response = app()
        .oneshot(json_request("POST", "/resources", &json!({ "name": "   " })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response.into_body()).await;
    let errors = body["errors"].as_array().expect("errors array");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["field"], "name");
    assert_eq!(errors[0]["message"], "Name is required");
}

#[tokio::test]
async fn test_create_rejects_priority_out_of_range() {
    let payload = json!({ "name": "DB", "priority": 9 });
    let response = app()
        .oneshot(json_request("POST", "/resources", &payload))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response.into_body()).await;
    assert_eq!(body["errors"][0]["field"], "priority");
    assert_eq!(
        body["errors"][0]["message"],
        "Priority must be between 1 and 5"
    );
}

#[tokio::test]
async fn test_create_rejects_unknown_status() {
    let payload = json!({ "name": "DB", "status": "PAUSED" });
    let response = app()
        .oneshot(json_request("POST", "/resources", &payload))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response.into_body()).await;
    assert_eq!(body["errors"][0]["field"], "status");
    assert_eq!(body["errors"][0]["message"], "Invalid status");
}

#[tokio::test]
async fn test_create_collects_all_field_errors() {
    let payload = json!({ "name": " ", "status": "BOGUS", "priority": 0 });
    let response = app()
        .oneshot(json_request("POST", "/resources", &payload))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response.into_body()).await;
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .map(|error| error["field"].as_str().expect("field"))
        .collect();
    assert_eq!(fields, vec!["name", "status", "priority"]);
}

#[tokio::test]
async fn test_update_rejects_priority_before_touching_store() {
    let payload = json!({ "name": "DB", "priority": 9 });
    let response = app()
        .oneshot(json_request("PUT", "/resources/1", &payload))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response.into_body()).await;
    assert_eq!(body["errors"][0]["field"], "priority");
}

#[tokio::test]
async fn test_update_reports_id_error_before_body_errors() {
    let payload = json!({ "name": " " });
    let response = app()
        .oneshot(json_request("PUT", "/resources/abc", &payload))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response.into_body()).await;
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .map(|error| error["field"].as_str().expect("field"))
        .collect();
    assert_eq!(fields, vec!["id", "name"]);
}

#[tokio::test]
async fn test_get_rejects_non_integer_id() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/resources/abc")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response.into_body()).await;
    assert_eq!(body["errors"][0]["field"], "id");
    assert_eq!(body["errors"][0]["message"], "ID must be a positive integer");
}

#[tokio::test]
async fn test_delete_rejects_non_positive_id() {
    for id in ["0", "-3"] {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/resources/{id}"))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/nope")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
