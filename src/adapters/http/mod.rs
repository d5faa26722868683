//! HTTP adapters - the service's REST surface.
//!
//! `admin` carries the gated management endpoints, `listing` the public
//! read-only pages. Router assembly lives here so `main` only wires
//! handlers together.

pub mod admin;
pub mod dto;
pub mod listing;
pub mod middleware;

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{ServerConfig, StorageConfig};
use crate::ports::AdminSessions;

pub use admin::{admin_routes, AdminHandlers};
pub use listing::{listing_routes, ListingHandlers};

/// Assemble the full application router.
///
/// Routes:
/// - `/api/admin/*` - login + post management (session-gated)
/// - `/api/listings/*` - public category pages
/// - `{storage.public_base_url}/*` - uploaded PDFs, served from disk when
///   the base URL is a local path (an absolute URL means a CDN serves them)
pub fn api_router(
    admin: AdminHandlers,
    listings: ListingHandlers,
    sessions: Arc<dyn AdminSessions>,
    server: &ServerConfig,
    storage: &StorageConfig,
) -> Router {
    let mut router = Router::new()
        .nest("/api/admin", admin_routes(admin))
        .nest("/api/listings", listing_routes(listings));

    if storage.public_base_url.starts_with('/') {
        router = router.nest_service(
            &storage.public_base_url,
            ServeDir::new(storage.pdf_dir_path()),
        );
    }

    router
        .layer(axum::middleware::from_fn_with_state(
            sessions,
            middleware::admin_auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(cors_layer(server))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
