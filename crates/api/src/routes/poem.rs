//! Route definitions for the `/api/poetry` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::poem;
use crate::state::AppState;

/// Routes mounted at `/api/poetry`.
///
/// ```text
/// POST   /                  -> create
/// GET    /list              -> list
/// GET    /search            -> search
/// GET    /dynasties         -> dynasties
/// GET    /authors           -> authors
/// GET    /getPoetryById     -> get_by_query
/// POST   /updatePoetry      -> update
/// POST   /deletePoetry      -> delete
/// GET    /{id}              -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(poem::create))
        .route("/list", get(poem::list))
        .route("/search", get(poem::search))
        .route("/dynasties", get(poem::dynasties))
        .route("/authors", get(poem::authors))
        .route("/getPoetryById", get(poem::get_by_query))
        .route("/updatePoetry", post(poem::update))
        .route("/deletePoetry", post(poem::delete))
        .route("/{id}", get(poem::get_by_id))
}
