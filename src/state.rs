//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::UrlRegistry;
use crate::infrastructure::persistence::InMemoryUrlRepository;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<UrlRegistry<InMemoryUrlRepository>>,
}

impl AppState {
    /// Creates the state around a registry.
    pub fn new(registry: Arc<UrlRegistry<InMemoryUrlRepository>>) -> Self {
        Self { registry }
    }
}
