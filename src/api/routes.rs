//! API route configuration.

use crate::api::handlers::{
    get_url_handler, list_urls_handler, rename_url_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`      - Create a shortened URL
/// - `GET  /urls`         - List all entries, newest first
/// - `GET  /urls/{slug}`  - Fetch a single entry
/// - `PUT  /urls/{slug}`  - Move an entry to a new slug
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(list_urls_handler))
        .route(
            "/urls/{slug}",
            get(get_url_handler).put(rename_url_handler),
        )
}
