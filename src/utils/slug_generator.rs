//! Slug generation and validation utilities.
//!
//! Provides random short-slug generation and validation for custom
//! user-provided slugs.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

/// Length of generated slugs.
pub const SLUG_LENGTH: usize = 6;

/// URL-safe alphabet used for generated slugs (64 symbols).
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Maximum accepted length for a custom slug.
const MAX_CUSTOM_SLUG_LENGTH: usize = 64;

/// Slugs that cannot be used because they collide with service routes.
const RESERVED_SLUGS: &[&str] = &["api", "health"];

/// Generates a random 6-character slug from the URL-safe alphabet.
///
/// Each character is sampled independently; the generator keeps no state
/// between calls and makes no uniqueness guarantee on its own — the registry
/// enforces uniqueness at insert time.
///
/// # Examples
///
/// ```ignore
/// let slug = generate_slug();
/// assert_eq!(slug.len(), 6);
/// assert!(slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_slug() -> String {
    let mut rng = rand::rng();

    (0..SLUG_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Validates a user-provided custom slug.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: letters, digits, hyphens, underscores
/// - Cannot be a reserved service slug
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_slug(slug: &str) -> Result<(), AppError> {
    if slug.is_empty() || slug.len() > MAX_CUSTOM_SLUG_LENGTH {
        return Err(AppError::bad_request(
            "Custom slug must be 1-64 characters",
            json!({ "provided_length": slug.len() }),
        ));
    }

    if !slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Custom slug can only contain letters, digits, hyphens, and underscores",
            json!({ "slug": slug }),
        ));
    }

    if RESERVED_SLUGS.contains(&slug) {
        return Err(AppError::bad_request(
            "This slug is reserved",
            json!({ "slug": slug }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_slug_has_correct_length() {
        let slug = generate_slug();
        assert_eq!(slug.len(), SLUG_LENGTH);
    }

    #[test]
    fn test_generate_slug_url_safe_characters() {
        for _ in 0..100 {
            let slug = generate_slug();
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            );
        }
    }

    #[test]
    fn test_generate_slug_produces_distinct_slugs() {
        let mut slugs = HashSet::new();

        for _ in 0..1000 {
            slugs.insert(generate_slug());
        }

        // 64^6 possibilities; heavy collisions here would mean a broken sampler.
        assert!(slugs.len() > 990);
    }

    #[test]
    fn test_generated_slug_passes_custom_validation() {
        let slug = generate_slug();
        assert!(validate_custom_slug(&slug).is_ok());
    }

    #[test]
    fn test_validate_single_character() {
        assert!(validate_custom_slug("a").is_ok());
    }

    #[test]
    fn test_validate_maximum_length() {
        let slug = "a".repeat(64);
        assert!(validate_custom_slug(&slug).is_ok());
    }

    #[test]
    fn test_validate_with_hyphens_and_underscores() {
        assert!(validate_custom_slug("my-cool_link").is_ok());
    }

    #[test]
    fn test_validate_mixed_case() {
        assert!(validate_custom_slug("MyLink42").is_ok());
    }

    #[test]
    fn test_validate_empty_string() {
        let result = validate_custom_slug("");
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert!(err.to_string().contains("1-64 characters"));
    }

    #[test]
    fn test_validate_too_long() {
        let slug = "a".repeat(65);
        assert!(validate_custom_slug(&slug).is_err());
    }

    #[test]
    fn test_validate_spaces_not_allowed() {
        assert!(validate_custom_slug("my slug").is_err());
    }

    #[test]
    fn test_validate_special_characters() {
        assert!(validate_custom_slug("my/slug").is_err());
        assert!(validate_custom_slug("slug!").is_err());
        assert!(validate_custom_slug("slug@2024").is_err());
    }

    #[test]
    fn test_validate_all_reserved_slugs() {
        for &reserved in RESERVED_SLUGS {
            let result = validate_custom_slug(reserved);
            assert!(
                result.is_err(),
                "Reserved slug '{}' should be invalid",
                reserved
            );
        }
    }
}
