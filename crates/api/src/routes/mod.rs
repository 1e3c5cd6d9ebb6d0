pub mod health;
pub mod poem;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::response::ApiResponse;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /api                                   service description (GET)
///
/// /api/poetry                            create (POST)
/// /api/poetry/list                       filtered, paginated list
/// /api/poetry/search                     keyword search
/// /api/poetry/dynasties                  distinct dynasties
/// /api/poetry/authors                    distinct authors
/// /api/poetry/getPoetryById              get by `?id=`
/// /api/poetry/updatePoetry               partial update (POST)
/// /api/poetry/deletePoetry               delete (POST)
/// /api/poetry/{id}                       get by path id
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api", get(api_info))
        .nest("/api/poetry", poem::router())
}

/// Payload of `GET /api`.
#[derive(Debug, Serialize)]
pub struct ApiInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
}

/// Entry points of the service.
#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub poetry: &'static str,
    pub health: &'static str,
}

/// GET /api -- names the service and points at its resources.
async fn api_info() -> Json<ApiResponse<ApiInfo>> {
    Json(ApiResponse::ok_with_message(
        "Poetry API",
        ApiInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            endpoints: Endpoints {
                poetry: "/api/poetry",
                health: "/health",
            },
        },
    ))
}
