//! Handlers for entry listing, lookup, and slug rename.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::rename::RenameRequest;
use crate::api::dto::url_entry::UrlEntryResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every entry, most recently created first.
///
/// # Endpoint
///
/// `GET /api/urls`
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlEntryResponse>>, AppError> {
    let entries = state.registry.list_all().await?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

/// Returns a single entry by slug.
///
/// Pure read — the visit counter is untouched; only the redirect route
/// counts visits.
///
/// # Endpoint
///
/// `GET /api/urls/{slug}`
///
/// # Errors
///
/// Returns 404 Not Found if the slug is unknown.
pub async fn get_url_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlEntryResponse>, AppError> {
    let entry = state.registry.get_by_slug(&slug).await?;

    Ok(Json(entry.into()))
}

/// Moves an entry to a new slug.
///
/// Renaming to the current slug is a no-op returning the entry unchanged.
///
/// # Endpoint
///
/// `PUT /api/urls/{slug}`
///
/// # Request Body
///
/// ```json
/// { "newSlug": "fresh-slug" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the slug is unknown.
/// Returns 400 Bad Request if the new slug is invalid or already taken.
pub async fn rename_url_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<RenameRequest>,
) -> Result<Json<UrlEntryResponse>, AppError> {
    payload.validate()?;

    let entry = state.registry.rename(&slug, &payload.new_slug).await?;

    Ok(Json(entry.into()))
}
