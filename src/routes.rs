//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /shorten_simple`  - Shorten via query parameter
//! - `POST /shorten`         - Shorten via JSON body
//! - `GET  /{prefix}/{id}`   - Short link redirect
//! - `GET  /stat`            - Redirect statistics
//! - `GET  /health`          - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `redirect_prefix` - path segment under which short ids are served
///   (`my` gives `/my/{id}`); must match the prefix used to build short URLs
pub fn app_router(state: AppState, redirect_prefix: &str) -> Router {
    api::routes::routes(redirect_prefix)
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}
