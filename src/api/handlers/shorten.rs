//! Handler for the shorten endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::ShortenRequest;
use crate::api::dto::url_entry::UrlEntryResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "longUrl": "https://example.com",
///   "customSlug": "my-link",   // optional; empty or absent = generated
///   "userId": "user-42"        // optional, stored as-is
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when the URL is malformed or the slug (custom or
/// generated) cannot be claimed.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<UrlEntryResponse>, AppError> {
    payload.validate()?;

    let entry = state
        .registry
        .create_short_url(payload.long_url, payload.custom_slug, payload.user_id)
        .await?;

    Ok(Json(entry.into()))
}
