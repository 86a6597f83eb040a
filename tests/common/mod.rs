#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use slugmap::api::handlers::{
    get_url_handler, list_urls_handler, redirect_handler, rename_url_handler, shorten_handler,
};
use slugmap::application::services::UrlRegistry;
use slugmap::infrastructure::persistence::InMemoryUrlRepository;
use slugmap::state::AppState;

pub const BASE_URL: &str = "http://localhost:3001";

pub fn create_test_state() -> AppState {
    let repository = Arc::new(InMemoryUrlRepository::new());
    let registry = Arc::new(UrlRegistry::new(repository, BASE_URL));

    AppState::new(registry)
}

/// Router with every handler mounted, without middleware.
pub fn test_app(state: AppState) -> Router {
    Router::new()
        .route("/{slug}", get(redirect_handler))
        .route("/api/shorten", post(shorten_handler))
        .route("/api/urls", get(list_urls_handler))
        .route(
            "/api/urls/{slug}",
            get(get_url_handler).put(rename_url_handler),
        )
        .with_state(state)
}
