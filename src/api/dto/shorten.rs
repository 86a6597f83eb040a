//! DTO for the shorten endpoint.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for custom slug validation. Matches the empty string too —
/// an empty slug means "generate one for me".
static CUSTOM_SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*$").unwrap());

/// Request body for `POST /api/shorten`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(length(min = 1, message = "URL is required"))]
    pub long_url: String,

    /// Optional custom slug (validated for length and characters).
    #[validate(length(max = 64))]
    #[validate(regex(path = "*CUSTOM_SLUG_REGEX"))]
    pub custom_slug: Option<String>,

    /// Optional opaque owner identifier, stored as-is.
    pub user_id: Option<String>,
}
