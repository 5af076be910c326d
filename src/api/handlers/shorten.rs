//! Handlers for the two shortening entry points.
//!
//! Both endpoints take the same [`ShortenRequest`], run the same validation and
//! call the same service function, so a URL shortened through one is
//! deduplicated against the other.

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens the URL passed in the query string.
///
/// # Endpoint
///
/// `GET /shorten_simple?url=https://example.com`
///
/// # Response
///
/// ```json
/// { "url": "https://example.com", "shortUrl": "http://localhost:8080/my/1" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is missing, empty or not an HTTP(S) URL.
pub async fn shorten_simple_handler(
    State(state): State<AppState>,
    params: Result<Query<ShortenRequest>, QueryRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Query(request) = params?;
    shorten(&state, request).await
}

/// Shortens the URL passed in a JSON body.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// Same as [`shorten_simple_handler`].
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON, or `url` is
/// missing, empty or not an HTTP(S) URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(request) = payload?;
    shorten(&state, request).await
}

async fn shorten(
    state: &AppState,
    request: ShortenRequest,
) -> Result<Json<ShortenResponse>, AppError> {
    request.validate()?;

    let shortened = state.shorten_service.shorten(&request.url).await?;

    Ok(Json(shortened.into()))
}
