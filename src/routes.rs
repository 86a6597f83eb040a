//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /{slug}` - Short link redirect (counts the visit)
//! - `GET /health` - Health check
//! - `/api/*`      - JSON API (shorten, list, lookup, rename)
//!
//! Literal routes (`/health`, `/api/...`) take precedence over the `/{slug}`
//! capture; the reserved-slug list keeps custom slugs from shadowing them.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on every route
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// When `config.behind_proxy` is set, rate limiting reads the client IP from
/// `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket
/// address; enable only behind a trusted reverse proxy.
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/{slug}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state);

    let router = if config.behind_proxy {
        router.layer(rate_limit::proxied_layer(
            config.rate_limit_per_second,
            config.rate_limit_burst,
        ))
    } else {
        router.layer(rate_limit::layer(
            config.rate_limit_per_second,
            config.rate_limit_burst,
        ))
    };

    let router = router.layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
