//! Target-URL validation.
//!
//! Validates that a submitted URL is an absolute HTTP(S) URL. The URL is
//! stored exactly as submitted — no normalization is applied, so a stored
//! entry round-trips byte-for-byte.

use url::Url;

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must have a host")]
    MissingHost,
}

/// Validates that `input` parses as an absolute `http`/`https` URL with a host.
///
/// Rejects dangerous schemes like `javascript:`, `data:`, and `file:`, and
/// anything without an authority (`mailto:`, relative paths, bare hostnames).
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for unparseable input,
/// [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes, and
/// [`UrlValidationError::MissingHost`] when the authority part is empty.
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(())
}
