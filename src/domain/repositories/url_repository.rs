//! Repository trait for URL entry data access.

use crate::domain::entities::{NewUrlEntry, UrlEntry};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the URL entry store.
///
/// The store is the serialization point for every slug-level invariant:
/// insert and rename reject duplicate slugs atomically, and the visit
/// increment is a single read-modify-write. Callers must treat a conflict
/// returned here as authoritative — a prior existence check alone is racy.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new entry, assigning its id, zeroed visit counter, and
    /// creation/update timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is already taken.
    async fn insert(&self, new_entry: NewUrlEntry) -> Result<UrlEntry, AppError>;

    /// Finds an entry by its slug.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlEntry))` if found
    /// - `Ok(None)` if not found
    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlEntry>, AppError>;

    /// Moves the entry at `old_slug` to `new_slug`, updating its display URL
    /// and refreshing `updated_at`. The uniqueness check on `new_slug` and
    /// the slug swap are one atomic step.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `old_slug` has no entry.
    /// Returns [`AppError::Conflict`] if `new_slug` is already taken.
    async fn rename_slug(
        &self,
        old_slug: &str,
        new_slug: &str,
        new_short_url: &str,
    ) -> Result<UrlEntry, AppError>;

    /// Atomically increments the visit counter for `slug` by 1 and refreshes
    /// `updated_at`. Concurrent increments on the same slug are each counted.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlEntry))` with the post-increment state
    /// - `Ok(None)` if the slug has no entry
    async fn increment_visits(&self, slug: &str) -> Result<Option<UrlEntry>, AppError>;

    /// Lists every entry, most recently created first. The result is a
    /// snapshot taken at call time.
    async fn list_all(&self) -> Result<Vec<UrlEntry>, AppError>;
}
