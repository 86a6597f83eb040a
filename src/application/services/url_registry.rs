//! Slug allocation and resolution service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewUrlEntry, UrlEntry};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::slug_generator::{generate_slug, validate_custom_slug};
use crate::utils::url_validator::validate_url;

/// Service owning the URL entry collection and its invariants.
///
/// Validates target URLs, allocates slugs (custom or generated), and fronts
/// every read and mutation of the store. Slug uniqueness is enforced by the
/// repository at insert/rename time; the service treats a repository conflict
/// as the authoritative taken-slug signal and, on the generated-slug path,
/// retries with a fresh slug a bounded number of times.
pub struct UrlRegistry<R: UrlRepository> {
    repository: Arc<R>,
    base_url: String,
}

impl<R: UrlRepository> UrlRegistry<R> {
    /// Creates a new registry over the given store.
    ///
    /// `base_url` is the prefix every display URL is built from.
    pub fn new(repository: Arc<R>, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            base_url: base_url.into(),
        }
    }

    /// Constructs the display URL for a slug.
    pub fn short_url(&self, slug: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), slug)
    }

    /// Creates a new shortened URL.
    ///
    /// An empty `custom_slug` is treated as absent. The target URL is
    /// validated before any slug is generated or persisted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed URL or custom slug.
    /// Returns [`AppError::Conflict`] when the custom slug is already taken.
    pub async fn create_short_url(
        &self,
        long_url: String,
        custom_slug: Option<String>,
        user_id: Option<String>,
    ) -> Result<UrlEntry, AppError> {
        validate_url(&long_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let custom_slug = custom_slug.filter(|slug| !slug.is_empty());

        if let Some(slug) = custom_slug {
            validate_custom_slug(&slug)?;

            let new_entry = NewUrlEntry {
                short_url: self.short_url(&slug),
                slug,
                long_url,
                user_id,
            };
            return self.repository.insert(new_entry).await;
        }

        self.create_with_generated_slug(long_url, user_id).await
    }

    /// Inserts with a fresh random slug, retrying a bounded number of times
    /// when the slug happens to collide.
    async fn create_with_generated_slug(
        &self,
        long_url: String,
        user_id: Option<String>,
    ) -> Result<UrlEntry, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for attempt in 1..=MAX_ATTEMPTS {
            let slug = generate_slug();
            let new_entry = NewUrlEntry {
                short_url: self.short_url(&slug),
                slug: slug.clone(),
                long_url: long_url.clone(),
                user_id: user_id.clone(),
            };

            match self.repository.insert(new_entry).await {
                Ok(entry) => return Ok(entry),
                Err(AppError::Conflict { .. }) => {
                    tracing::debug!(attempt, %slug, "generated slug collided, retrying");
                }
                Err(other) => return Err(other),
            }
        }

        Err(AppError::internal(
            "Failed to generate a unique slug",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Retrieves an entry by its slug. Pure read — the visit counter is not
    /// touched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no entry holds the slug.
    pub async fn get_by_slug(&self, slug: &str) -> Result<UrlEntry, AppError> {
        self.repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "slug": slug })))
    }

    /// Resolves a slug for redirecting: counts the visit and returns the
    /// target URL. The increment is atomic per entry, so concurrent
    /// resolutions of one slug are each counted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no entry holds the slug; nothing is
    /// created or mutated in that case.
    pub async fn resolve(&self, slug: &str) -> Result<String, AppError> {
        self.repository
            .increment_visits(slug)
            .await?
            .map(|entry| entry.long_url)
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "slug": slug })))
    }

    /// Moves an entry to a new slug, updating its display URL.
    ///
    /// Renaming an entry to its current slug is a no-op that returns the
    /// entry unchanged — no uniqueness check, no `updated_at` bump.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an invalid new slug.
    /// Returns [`AppError::NotFound`] if `old_slug` has no entry.
    /// Returns [`AppError::Conflict`] if `new_slug` is held by another entry.
    pub async fn rename(&self, old_slug: &str, new_slug: &str) -> Result<UrlEntry, AppError> {
        validate_custom_slug(new_slug)?;

        if new_slug == old_slug {
            return self.get_by_slug(old_slug).await;
        }

        self.repository
            .rename_slug(old_slug, new_slug, &self.short_url(new_slug))
            .await
    }

    /// Lists every entry, most recently created first.
    pub async fn list_all(&self) -> Result<Vec<UrlEntry>, AppError> {
        self.repository.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use crate::error::slug_taken;
    use chrono::Utc;
    use mockall::Sequence;
    use uuid::Uuid;

    const BASE_URL: &str = "http://localhost:3001";

    fn entry_from(new_entry: &NewUrlEntry) -> UrlEntry {
        let now = Utc::now();
        UrlEntry {
            id: Uuid::new_v4(),
            slug: new_entry.slug.clone(),
            long_url: new_entry.long_url.clone(),
            short_url: new_entry.short_url.clone(),
            visits: 0,
            user_id: new_entry.user_id.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_entry(slug: &str, url: &str) -> UrlEntry {
        let now = Utc::now();
        UrlEntry {
            id: Uuid::new_v4(),
            slug: slug.to_string(),
            long_url: url.to_string(),
            short_url: format!("{}/{}", BASE_URL, slug),
            visits: 0,
            user_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn registry(mock: MockUrlRepository) -> UrlRegistry<MockUrlRepository> {
        UrlRegistry::new(Arc::new(mock), BASE_URL)
    }

    #[tokio::test]
    async fn create_with_generated_slug() {
        let mut mock = MockUrlRepository::new();

        mock.expect_insert()
            .withf(|new_entry| {
                new_entry.slug.len() == 6
                    && new_entry.short_url == format!("{}/{}", BASE_URL, new_entry.slug)
            })
            .times(1)
            .returning(|new_entry| Ok(entry_from(&new_entry)));

        let result = registry(mock)
            .create_short_url("https://example.com".to_string(), None, None)
            .await
            .unwrap();

        assert_eq!(result.long_url, "https://example.com");
        assert_eq!(result.visits, 0);
    }

    #[tokio::test]
    async fn create_with_custom_slug() {
        let mut mock = MockUrlRepository::new();

        mock.expect_insert()
            .withf(|new_entry| new_entry.slug == "my-link")
            .times(1)
            .returning(|new_entry| Ok(entry_from(&new_entry)));

        let result = registry(mock)
            .create_short_url(
                "https://example.com".to_string(),
                Some("my-link".to_string()),
                Some("user-7".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(result.slug, "my-link");
        assert_eq!(result.short_url, format!("{}/my-link", BASE_URL));
        assert_eq!(result.user_id.as_deref(), Some("user-7"));
    }

    #[tokio::test]
    async fn create_empty_custom_slug_falls_back_to_generator() {
        let mut mock = MockUrlRepository::new();

        mock.expect_insert()
            .withf(|new_entry| new_entry.slug.len() == 6)
            .times(1)
            .returning(|new_entry| Ok(entry_from(&new_entry)));

        registry(mock)
            .create_short_url(
                "https://example.com".to_string(),
                Some(String::new()),
                None,
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn create_invalid_url_touches_nothing() {
        let mut mock = MockUrlRepository::new();
        mock.expect_insert().times(0);

        let err = registry(mock)
            .create_short_url("not-a-url".to_string(), None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn create_custom_slug_conflict_surfaces() {
        let mut mock = MockUrlRepository::new();

        mock.expect_insert()
            .times(1)
            .returning(|new_entry| Err(slug_taken(&new_entry.slug)));

        let err = registry(mock)
            .create_short_url(
                "https://example.com".to_string(),
                Some("taken".to_string()),
                None,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn create_invalid_custom_slug_rejected() {
        let mut mock = MockUrlRepository::new();
        mock.expect_insert().times(0);

        let err = registry(mock)
            .create_short_url(
                "https://example.com".to_string(),
                Some("bad slug!".to_string()),
                None,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn create_retries_generated_slug_on_collision() {
        let mut mock = MockUrlRepository::new();
        let mut seq = Sequence::new();

        for _ in 0..2 {
            mock.expect_insert()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|new_entry| Err(slug_taken(&new_entry.slug)));
        }
        mock.expect_insert()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|new_entry| Ok(entry_from(&new_entry)));

        let result = registry(mock)
            .create_short_url("https://example.com".to_string(), None, None)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn create_gives_up_after_too_many_collisions() {
        let mut mock = MockUrlRepository::new();

        mock.expect_insert()
            .times(10)
            .returning(|new_entry| Err(slug_taken(&new_entry.slug)));

        let err = registry(mock)
            .create_short_url("https://example.com".to_string(), None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn get_by_slug_found() {
        let mut mock = MockUrlRepository::new();

        mock.expect_find_by_slug()
            .withf(|slug| slug == "abc123")
            .times(1)
            .returning(|_| Ok(Some(sample_entry("abc123", "https://example.com"))));

        let entry = registry(mock).get_by_slug("abc123").await.unwrap();
        assert_eq!(entry.long_url, "https://example.com");
    }

    #[tokio::test]
    async fn get_by_slug_missing() {
        let mut mock = MockUrlRepository::new();

        mock.expect_find_by_slug().times(1).returning(|_| Ok(None));

        let err = registry(mock).get_by_slug("ghost").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn resolve_returns_target_url() {
        let mut mock = MockUrlRepository::new();

        mock.expect_increment_visits()
            .withf(|slug| slug == "abc123")
            .times(1)
            .returning(|_| {
                let mut entry = sample_entry("abc123", "https://example.com/target");
                entry.visits = 1;
                Ok(Some(entry))
            });

        let url = registry(mock).resolve("abc123").await.unwrap();
        assert_eq!(url, "https://example.com/target");
    }

    #[tokio::test]
    async fn resolve_missing_slug() {
        let mut mock = MockUrlRepository::new();

        mock.expect_increment_visits()
            .times(1)
            .returning(|_| Ok(None));

        let err = registry(mock).resolve("ghost").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn rename_same_slug_is_a_pure_read() {
        let mut mock = MockUrlRepository::new();

        mock.expect_rename_slug().times(0);
        mock.expect_find_by_slug()
            .times(1)
            .returning(|_| Ok(Some(sample_entry("abc123", "https://example.com"))));

        let entry = registry(mock).rename("abc123", "abc123").await.unwrap();
        assert_eq!(entry.slug, "abc123");
    }

    #[tokio::test]
    async fn rename_delegates_with_new_short_url() {
        let mut mock = MockUrlRepository::new();

        mock.expect_rename_slug()
            .withf(|old, new, short_url| {
                old == "oldslug" && new == "newslug" && short_url.ends_with("/newslug")
            })
            .times(1)
            .returning(|_, new, short_url| {
                let mut entry = sample_entry(new, "https://example.com");
                entry.short_url = short_url.to_string();
                Ok(entry)
            });

        let entry = registry(mock).rename("oldslug", "newslug").await.unwrap();
        assert_eq!(entry.slug, "newslug");
        assert_eq!(entry.short_url, format!("{}/newslug", BASE_URL));
    }

    #[tokio::test]
    async fn rename_invalid_new_slug_rejected() {
        let mut mock = MockUrlRepository::new();
        mock.expect_rename_slug().times(0);
        mock.expect_find_by_slug().times(0);

        let err = registry(mock).rename("abc123", "no spaces").await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }
}
