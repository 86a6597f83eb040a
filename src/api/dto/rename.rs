//! DTO for the slug rename endpoint.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use validator::Validate;

static NEW_SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Request body for `PUT /api/urls/{slug}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RenameRequest {
    /// The slug the entry should be reachable under from now on.
    #[validate(length(min = 1, max = 64, message = "New slug is required"))]
    #[validate(regex(path = "*NEW_SLUG_REGEX"))]
    pub new_slug: String,
}
