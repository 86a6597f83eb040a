//! # slugmap
//!
//! A small URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the repository trait
//! - **Application Layer** ([`application`]) - The URL registry service
//! - **Infrastructure Layer** ([`infrastructure`]) - The entry store
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random 6-character slugs or user-chosen custom slugs
//! - Slug uniqueness enforced atomically at the storage layer, including
//!   under concurrent creates and renames
//! - Per-entry visit counting on redirect with no lost updates
//! - Per-IP rate limiting and structured request logging
//!
//! ## Quick Start
//!
//! ```bash
//! # All configuration is optional
//! export BASE_URL="http://localhost:3001"
//! export LISTEN="0.0.0.0:3001"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlRegistry;
    pub use crate::domain::entities::{NewUrlEntry, UrlEntry};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryUrlRepository;
    pub use crate::state::AppState;
}
