use std::sync::Arc;
use std::time::Duration;

use asset_registry_core::assets::{AssetService, InMemoryAssetRepository};
use asset_registry_server::{
    api::app_router,
    build_state,
    config::{Config, LogFormat},
    AppState,
};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

fn test_config(dir: &TempDir) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: dir.path().join("test.db").to_string_lossy().to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
        static_dir: dir.path().join("static").to_string_lossy().to_string(),
        log_format: LogFormat::Text,
    }
}

async fn sqlite_app() -> (TempDir, Router) {
    let tmp = tempdir().unwrap();
    let config = test_config(&tmp);
    let state = build_state(&config).await.unwrap();
    (tmp, app_router(state, &config))
}

fn memory_app() -> (TempDir, Router) {
    let tmp = tempdir().unwrap();
    let config = test_config(&tmp);
    let repository = Arc::new(InMemoryAssetRepository::new());
    let state = Arc::new(AppState {
        asset_service: Arc::new(AssetService::new(repository)),
    });
    (tmp, app_router(state, &config))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, value)
}

fn chair() -> Value {
    json!({
        "name": "Chair",
        "category": "Furniture",
        "value": 100.0,
        "purchase_date": "2024-01-01"
    })
}

#[tokio::test]
async fn create_echoes_fields_and_assigns_id() {
    let (_tmp, app) = sqlite_app().await;

    let (status, body) = send(&app, Method::POST, "/api/assets", Some(chair())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Chair");
    assert_eq!(body["category"], "Furniture");
    assert_eq!(body["value"], 100.0);
    assert_eq!(body["purchase_date"], "2024-01-01");
    assert_eq!(body["description"], Value::Null);
    assert!(body["created_at"].is_string());

    let (status, fetched) = send(&app, Method::GET, "/api/assets/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn get_missing_asset_is_not_found() {
    let (_tmp, app) = sqlite_app().await;

    let (status, body) = send(&app, Method::GET, "/api/assets/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
    assert_eq!(body["message"], "Asset 999 not found");
}

#[tokio::test]
async fn delete_first_of_two_leaves_second() {
    let (_tmp, app) = sqlite_app().await;
    send(&app, Method::POST, "/api/assets", Some(chair())).await;
    let mut laptop = chair();
    laptop["name"] = json!("Laptop");
    laptop["category"] = json!("Electronics");
    let (_, second) = send(&app, Method::POST, "/api/assets", Some(laptop)).await;

    let (status, body) = send(&app, Method::DELETE, "/api/assets/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Asset deleted successfully" }));

    let (status, list) = send(&app, Method::GET, "/api/assets", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([second]));

    let (status, _) = send(&app, Method::GET, "/api/assets/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::DELETE, "/api/assets/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn put_replaces_value_and_keeps_identity() {
    let (_tmp, app) = sqlite_app().await;
    let (_, created) = send(&app, Method::POST, "/api/assets", Some(chair())).await;

    let mut changes = chair();
    changes["value"] = json!(200.0);
    let (status, updated) = send(&app, Method::PUT, "/api/assets/1", Some(changes)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["value"], 200.0);

    let (_, fetched) = send(&app, Method::GET, "/api/assets/1", None).await;
    assert_eq!(fetched["value"], 200.0);
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["created_at"], created["created_at"]);
}

#[tokio::test]
async fn put_missing_asset_is_not_found() {
    let (_tmp, app) = sqlite_app().await;

    let (status, body) = send(&app, Method::PUT, "/api/assets/5", Some(chair())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn malformed_bodies_are_unprocessable() {
    let (_tmp, app) = sqlite_app().await;

    let mut missing_name = chair();
    missing_name.as_object_mut().unwrap().remove("name");
    let mut wrong_type = chair();
    wrong_type["value"] = json!("a lot");
    let mut negative = chair();
    negative["value"] = json!(-1.0);
    let mut bad_date = chair();
    bad_date["purchase_date"] = json!("01/01/2024");

    for body in [missing_name, wrong_type, negative, bad_date] {
        let (status, error) = send(&app, Method::POST, "/api/assets", Some(body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error["code"], 422);
        assert!(error["message"].is_string());
    }

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/assets")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let (_, list) = send(&app, Method::GET, "/api/assets", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn invalid_update_leaves_record_untouched() {
    let (_tmp, app) = sqlite_app().await;
    let (_, created) = send(&app, Method::POST, "/api/assets", Some(chair())).await;

    let mut blank = chair();
    blank["name"] = json!("   ");
    let (status, _) = send(&app, Method::PUT, "/api/assets/1", Some(blank)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, fetched) = send(&app, Method::GET, "/api/assets/1", None).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn unparsable_ids_are_unprocessable() {
    let (_tmp, app) = sqlite_app().await;
    send(&app, Method::POST, "/api/assets", Some(chair())).await;

    for (method, uri, body) in [
        (Method::GET, "/api/assets/abc", None),
        (Method::GET, "/api/assets/99999999999", None),
        (Method::PUT, "/api/assets/abc", Some(chair())),
        (Method::DELETE, "/api/assets/abc", None),
        (Method::DELETE, "/api/assets/1.5", None),
    ] {
        let (status, error) = send(&app, method.clone(), uri, body).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{} {}", method, uri);
        assert_eq!(error["code"], 422);
        assert!(error["message"].is_string());
    }

    let (_, list) = send(&app, Method::GET, "/api/assets", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn malformed_update_bodies_are_unprocessable() {
    let (_tmp, app) = sqlite_app().await;
    let (_, created) = send(&app, Method::POST, "/api/assets", Some(chair())).await;

    let mut missing_category = chair();
    missing_category.as_object_mut().unwrap().remove("category");
    let mut wrong_type = chair();
    wrong_type["value"] = json!("a lot");

    for uri in ["/api/assets/1", "/api/assets/999"] {
        for body in [missing_category.clone(), wrong_type.clone()] {
            let (status, error) = send(&app, Method::PUT, uri, Some(body)).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
            assert_eq!(error["code"], 422);
        }

        let request = Request::builder()
            .method(Method::PUT)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
    }

    let (_, fetched) = send(&app, Method::GET, "/api/assets/1", None).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn handlers_run_against_in_memory_store() {
    let (_tmp, app) = memory_app();

    let mut desk = chair();
    desk["name"] = json!("Desk");
    desk["description"] = json!("oak");
    let (status, created) = send(&app, Method::POST, "/api/assets", Some(desk)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], 1);
    assert_eq!(created["description"], "oak");

    let (_, list) = send(&app, Method::GET, "/api/assets", None).await;
    assert_eq!(list, json!([created]));

    let (status, _) = send(&app, Method::DELETE, "/api/assets/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::GET, "/api/assets/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn operational_routes_respond() {
    let (_tmp, app) = sqlite_app().await;

    let (status, body) = send(&app, Method::GET, "/api/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("ok"));

    let (status, body) = send(&app, Method::GET, "/api/readyz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("ok"));

    let (status, doc) = send(&app, Method::GET, "/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/assets"].is_object());
    assert!(doc["paths"]["/api/assets/{id}"].is_object());

    let (status, body) = send(&app, Method::GET, "/api/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let (_tmp, app) = sqlite_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}
