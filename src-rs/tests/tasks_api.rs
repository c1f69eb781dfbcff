use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use task_store_rs::api::server::build_router;
use task_store_rs::task::TaskStore;

fn app() -> Router {
    build_router(Arc::new(TaskStore::new()))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn listing_an_empty_store_returns_an_empty_array() {
    let app = app();

    let (status, body) = send(&app, get("/tasks")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_returns_the_new_task_with_status_created() {
    let app = app();

    let (status, body) = send(&app, post_json("/tasks", json!({"task": "buy milk"}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "task": "buy milk", "completed": false}));
}

#[tokio::test]
async fn created_tasks_list_in_insertion_order_with_sequential_ids() {
    let app = app();

    for description in ["one", "two", "three"] {
        let (status, _) = send(&app, post_json("/tasks", json!({"task": description}))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, get("/tasks")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 1, "task": "one", "completed": false},
            {"id": 2, "task": "two", "completed": false},
            {"id": 3, "task": "three", "completed": false}
        ])
    );
}

#[tokio::test]
async fn completing_a_task_flips_only_that_task() {
    let app = app();
    send(&app, post_json("/tasks", json!({"task": "one"}))).await;
    send(&app, post_json("/tasks", json!({"task": "two"}))).await;

    let (status, body) = send(&app, put_json("/tasks/1", json!({"completed": true}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "task": "one", "completed": true}));

    let (_, listed) = send(&app, get("/tasks")).await;
    assert_eq!(listed[0]["completed"], json!(true));
    assert_eq!(listed[1]["completed"], json!(false));
}

#[tokio::test]
async fn update_with_an_empty_body_keeps_the_completion_flag() {
    let app = app();
    send(&app, post_json("/tasks", json!({"task": "one"}))).await;
    send(&app, put_json("/tasks/1", json!({"completed": true}))).await;

    let (status, body) = send(&app, put_json("/tasks/1", json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["completed"], json!(true));

    let bare = Request::builder()
        .method("PUT")
        .uri("/tasks/1")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, bare).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["completed"], json!(true));
}

#[tokio::test]
async fn updating_an_unknown_id_returns_not_found() {
    let app = app();
    send(&app, post_json("/tasks", json!({"task": "one"}))).await;

    let (status, body) = send(&app, put_json("/tasks/9999", json!({"completed": true}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Task not found"}));

    let (_, listed) = send(&app, get("/tasks")).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["completed"], json!(false));
}

#[tokio::test]
async fn create_without_the_task_field_is_a_bad_request() {
    let app = app();

    let (status, body) = send(&app, post_json("/tasks", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "missing required field `task`"}));

    let (_, listed) = send(&app, get("/tasks")).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn create_with_a_malformed_body_is_a_bad_request() {
    let app = app();

    let request = Request::builder()
        .method("POST")
        .uri("/tasks")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn update_with_a_non_numeric_id_is_a_bad_request() {
    let app = app();

    let (status, body) = send(&app, put_json("/tasks/abc", json!({"completed": true}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn any_origin_is_allowed() {
    let app = app();

    let request = Request::builder()
        .uri("/tasks")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();

    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
}

#[tokio::test]
async fn create_update_and_list_round_trip() {
    let app = app();

    let (status, created) = send(&app, post_json("/tasks", json!({"task": "buy milk"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({"id": 1, "task": "buy milk", "completed": false}));

    let (status, updated) = send(&app, put_json("/tasks/1", json!({"completed": true}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({"id": 1, "task": "buy milk", "completed": true}));

    let (status, listed) = send(&app, get("/tasks")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([{"id": 1, "task": "buy milk", "completed": true}]));
}
