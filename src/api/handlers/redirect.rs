//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its target URL, counting the visit.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// The visit counter is incremented before the response is returned, so a
/// successful redirect is always counted — concurrent redirects of the same
/// slug each add exactly 1.
///
/// # Errors
///
/// Returns 404 Not Found if the slug is unknown; nothing is recorded then.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.registry.resolve(&slug).await?;

    debug!(%slug, %long_url, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]))
}
