//! Handler for redirect statistics.

use axum::{Json, extract::State};

use crate::api::dto::stats::UrlStatItem;
use crate::error::AppError;
use crate::state::AppState;

/// Lists statistics for every shortened URL.
///
/// # Endpoint
///
/// `GET /stat`
///
/// # Response
///
/// ```json
/// [
///   {
///     "url": "https://example.com",
///     "shortUrl": "http://localhost:8080/my/1",
///     "redirects": 3,
///     "lastAccess": "2025-06-01T12:00:00.123456Z"
///   }
/// ]
/// ```
///
/// Order of the entries is unspecified.
pub async fn stats_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlStatItem>>, AppError> {
    let stats = state.stats_service.list_stats().await?;

    Ok(Json(stats.into_iter().map(UrlStatItem::from).collect()))
}
