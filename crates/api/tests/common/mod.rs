//! Shared helpers for the HTTP integration tests.
//!
//! Requests go straight into the application service through
//! `tower::ServiceExt::oneshot`; no TCP listener is involved.

#![allow(dead_code)]

use std::sync::Arc;

use agency_api::config::ServerConfig;
use agency_api::router::{build_app_router, App};
use agency_api::state::AppState;
use agency_api::templates::build_templates;
use agency_db::hooks::UserLifecycle;
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
    }
}

/// Build the production router (same middleware stack as `main.rs`) over
/// the given pool.
pub fn build_test_app(pool: PgPool) -> App {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        lifecycle: Arc::new(UserLifecycle::default()),
        templates: Arc::new(build_templates().expect("templates parse")),
    };
    build_app_router(state, &config)
}

pub async fn send(app: App, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: App, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: App, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: App, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: App, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST and return the created JSON, asserting a 201.
pub async fn create(app: App, uri: &str, body: Value) -> Value {
    let response = post_json(app, uri, body).await;
    assert_eq!(response.status(), 201, "creating via {uri} failed");
    body_json(response).await
}

/// Create an account through the API and return its id.
pub async fn create_user(app: App, username: &str) -> i64 {
    let user = create(
        app,
        "/api/users/",
        serde_json::json!({
            "username": username,
            "email": format!("{username}@test.com"),
            "password": "testpass123",
        }),
    )
    .await;
    user["id"].as_i64().unwrap()
}

/// `YYYY-MM-DD` for the date `days` after today (UTC).
pub fn days_from_today(days: i64) -> String {
    (chrono::Utc::now().date_naive() + chrono::Duration::days(days)).to_string()
}

/// clientuser -> client -> project due in 30 days; returns
/// `(client_user_id, project_id)`.
pub async fn seed_project(app: App) -> (i64, i64) {
    let user_id = create_user(app.clone(), "clientuser").await;
    create(
        app.clone(),
        "/api/clients/",
        serde_json::json!({"user": user_id, "sphere": "IT", "company_name": "Test Client"}),
    )
    .await;
    let project = create(
        app,
        "/api/projects/",
        serde_json::json!({
            "name": "Website",
            "client_user": user_id,
            "deadline": days_from_today(30),
            "budget": 50000.00,
            "status": "In progress",
        }),
    )
    .await;
    (user_id, project["id"].as_i64().unwrap())
}
