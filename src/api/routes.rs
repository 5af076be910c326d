//! API route configuration.

use crate::api::handlers::{
    redirect_handler, shorten_handler, shorten_simple_handler, stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public routes of the shortener.
///
/// # Endpoints
///
/// - `GET  /shorten_simple?url=...` - Shorten a URL given as query parameter
/// - `POST /shorten`                - Shorten a URL given as JSON body
/// - `GET  /{prefix}/{id}`          - Redirect to the original URL
/// - `GET  /stat`                   - Redirect statistics for all URLs
///
/// Any other method on these paths answers `405 Method Not Allowed`.
pub fn routes(redirect_prefix: &str) -> Router<AppState> {
    let redirect_path = format!("/{}/{{id}}", redirect_prefix.trim_matches('/'));

    Router::new()
        .route("/shorten_simple", get(shorten_simple_handler))
        .route("/shorten", post(shorten_handler))
        .route(&redirect_path, get(redirect_handler))
        .route("/stat", get(stats_handler))
}
