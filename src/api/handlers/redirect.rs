//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// `Cache-Control` value sent with every redirect.
pub const NO_CACHE: &str = "no-cache, no-store, must-revalidate";

/// Redirects a short id to its original URL.
///
/// # Endpoint
///
/// `GET /my/{id}` (the `my` segment is configurable)
///
/// Each call counts as a redirect in the statistics, so the response is
/// marked as non-cacheable:
///
/// ```text
/// HTTP/1.1 302 Found
/// Location: https://example.com
/// Cache-Control: no-cache, no-store, must-revalidate
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is not a decimal short id.
/// Returns 404 Not Found if no URL was shortened to this id.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let long_url = state.redirect_service.resolve(&id).await?;

    let location = HeaderValue::from_str(&long_url).map_err(|_| {
        AppError::internal(
            "Stored URL cannot be used as a redirect target",
            json!({ "id": id }),
        )
    })?;

    Ok((
        StatusCode::FOUND,
        [
            (header::LOCATION, location),
            (header::CACHE_CONTROL, HeaderValue::from_static(NO_CACHE)),
        ],
    )
        .into_response())
}
