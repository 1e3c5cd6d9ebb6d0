#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use poetry_api::config::ServerConfig;
use poetry_api::router::build_app_router;
use poetry_api::state::AppState;
use poetry_db::PoolConfig;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as the only CORS origin and a 30-second
/// request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_pool: PoolConfig::default(),
    }
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    build_app_router(AppState::new(pool, config.clone()), &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

/// POST an arbitrary body labelled as JSON.
pub async fn post_raw(app: Router, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a poem through the API and return its id.
pub async fn create_poem(pool: &PgPool, title: &str, author: &str, dynasty: &str, content: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/poetry",
        serde_json::json!({
            "title": title,
            "author": author,
            "dynasty": dynasty,
            "content": content,
        }),
    )
    .await;
    let json = body_json(response).await;
    json["data"]["id"].as_i64().unwrap()
}
