//! JSON representation of a URL entry.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::UrlEntry;

/// Wire form of an entry, returned by every endpoint that yields one.
///
/// Field names are camelCase; `userId` is omitted when absent.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlEntryResponse {
    pub id: Uuid,
    pub short_url: String,
    pub long_url: String,
    pub slug: String,
    pub visits: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UrlEntry> for UrlEntryResponse {
    fn from(entry: UrlEntry) -> Self {
        Self {
            id: entry.id,
            short_url: entry.short_url,
            long_url: entry.long_url,
            slug: entry.slug,
            visits: entry.visits,
            user_id: entry.user_id,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case_and_omits_missing_user() {
        let now = Utc::now();
        let response = UrlEntryResponse::from(UrlEntry {
            id: Uuid::new_v4(),
            slug: "abc123".to_string(),
            long_url: "https://example.com".to_string(),
            short_url: "http://localhost:3001/abc123".to_string(),
            visits: 3,
            user_id: None,
            created_at: now,
            updated_at: now,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["shortUrl"], "http://localhost:3001/abc123");
        assert_eq!(json["longUrl"], "https://example.com");
        assert_eq!(json["visits"], 3);
        assert!(json.get("userId").is_none());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }
}
