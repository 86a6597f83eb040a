//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;
use uuid::Uuid;

use crate::domain::entities::{NewUrlEntry, UrlEntry};
use crate::domain::repositories::UrlRepository;
use crate::error::{AppError, slug_taken};

/// In-memory URL entry store backed by sharded maps.
///
/// Entries live in a primary map keyed by id; a second map is the slug
/// uniqueness index. Reserving a slug in the index via its entry API is the
/// atomic step that makes duplicate slugs impossible, for creates and renames
/// alike. Visit increments mutate the entry in place under its shard lock, so
/// concurrent increments on one slug serialize while operations on other
/// slugs proceed untouched.
///
/// Index guards are always released before the primary map is locked; the
/// stale-index window this opens is closed by re-checking the entry's slug
/// after the primary lookup.
pub struct InMemoryUrlRepository {
    entries: DashMap<Uuid, UrlEntry>,
    slug_index: DashMap<String, Uuid>,
}

impl InMemoryUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            slug_index: DashMap::new(),
        }
    }

    /// Looks up the id a slug currently maps to.
    fn slug_to_id(&self, slug: &str) -> Option<Uuid> {
        self.slug_index.get(slug).map(|r| *r)
    }
}

impl Default for InMemoryUrlRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn insert(&self, new_entry: NewUrlEntry) -> Result<UrlEntry, AppError> {
        let now = Utc::now();
        let entry = UrlEntry {
            id: Uuid::new_v4(),
            slug: new_entry.slug,
            long_url: new_entry.long_url,
            short_url: new_entry.short_url,
            visits: 0,
            user_id: new_entry.user_id,
            created_at: now,
            updated_at: now,
        };

        match self.slug_index.entry(entry.slug.clone()) {
            Entry::Occupied(_) => return Err(slug_taken(&entry.slug)),
            Entry::Vacant(vacant) => {
                vacant.insert(entry.id);
            }
        }

        self.entries.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlEntry>, AppError> {
        let Some(id) = self.slug_to_id(slug) else {
            return Ok(None);
        };

        Ok(self
            .entries
            .get(&id)
            .filter(|entry| entry.slug == slug)
            .map(|entry| entry.value().clone()))
    }

    async fn rename_slug(
        &self,
        old_slug: &str,
        new_slug: &str,
        new_short_url: &str,
    ) -> Result<UrlEntry, AppError> {
        if old_slug == new_slug {
            return self.find_by_slug(old_slug).await?.ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "slug": old_slug }))
            });
        }

        let Some(id) = self.slug_to_id(old_slug) else {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "slug": old_slug }),
            ));
        };

        // Reserve the new slug first; the reservation is what rules out a
        // concurrent create or rename landing on the same slug.
        match self.slug_index.entry(new_slug.to_string()) {
            Entry::Occupied(_) => return Err(slug_taken(new_slug)),
            Entry::Vacant(vacant) => {
                vacant.insert(id);
            }
        }

        let updated = {
            let Some(mut entry) = self.entries.get_mut(&id) else {
                self.slug_index.remove_if(new_slug, |_, v| *v == id);
                return Err(AppError::not_found(
                    "Short link not found",
                    json!({ "slug": old_slug }),
                ));
            };

            // A concurrent rename may have moved the entry away from
            // `old_slug` after the index lookup above.
            if entry.slug != old_slug {
                drop(entry);
                self.slug_index.remove_if(new_slug, |_, v| *v == id);
                return Err(AppError::not_found(
                    "Short link not found",
                    json!({ "slug": old_slug }),
                ));
            }

            entry.slug = new_slug.to_string();
            entry.short_url = new_short_url.to_string();
            entry.updated_at = Utc::now();
            entry.value().clone()
        };

        self.slug_index.remove_if(old_slug, |_, v| *v == id);
        Ok(updated)
    }

    async fn increment_visits(&self, slug: &str) -> Result<Option<UrlEntry>, AppError> {
        let Some(id) = self.slug_to_id(slug) else {
            return Ok(None);
        };

        let Some(mut entry) = self.entries.get_mut(&id) else {
            return Ok(None);
        };

        if entry.slug != slug {
            return Ok(None);
        }

        entry.visits += 1;
        entry.updated_at = Utc::now();
        Ok(Some(entry.value().clone()))
    }

    async fn list_all(&self) -> Result<Vec<UrlEntry>, AppError> {
        let mut all: Vec<UrlEntry> = self.entries.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }
}
