//! Entry entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A shortened URL entry with metadata.
///
/// Maps a unique slug to its target URL. The slug is mutable via rename;
/// the target URL is immutable after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    pub id: Uuid,
    pub slug: String,
    pub long_url: String,
    /// Display URL: the configured base joined with the slug. Kept in sync
    /// with `slug` on rename.
    pub short_url: String,
    pub visits: i64,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new entry.
///
/// The id, visit counter, and timestamps are assigned by the store at
/// insert time.
#[derive(Debug, Clone)]
pub struct NewUrlEntry {
    pub slug: String,
    pub long_url: String,
    pub short_url: String,
    pub user_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_creation() {
        let new_entry = NewUrlEntry {
            slug: "xyz789".to_string(),
            long_url: "https://rust-lang.org".to_string(),
            short_url: "http://localhost:3001/xyz789".to_string(),
            user_id: None,
        };

        assert_eq!(new_entry.slug, "xyz789");
        assert_eq!(new_entry.long_url, "https://rust-lang.org");
        assert!(new_entry.user_id.is_none());
    }

    #[test]
    fn test_new_entry_with_user() {
        let new_entry = NewUrlEntry {
            slug: "abc123".to_string(),
            long_url: "https://example.com".to_string(),
            short_url: "http://localhost:3001/abc123".to_string(),
            user_id: Some("user-42".to_string()),
        };

        assert_eq!(new_entry.user_id.as_deref(), Some("user-42"));
    }
}
