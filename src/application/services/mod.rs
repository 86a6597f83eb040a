//! Application services.

mod url_registry;

pub use url_registry::UrlRegistry;
