//! Short URL resolution service.

use std::sync::Arc;

use crate::domain::repositories::UrlRecordRepository;
use crate::error::AppError;
use crate::utils::short_url::parse_short_id;
use serde_json::json;
use tracing::debug;

/// Service resolving short identifiers back to long URLs.
///
/// Every successful resolution counts as a redirect: the record's counter and
/// last access time are updated in the same storage operation as the lookup.
pub struct RedirectService<R: UrlRecordRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UrlRecordRepository + ?Sized> RedirectService<R> {
    /// Creates a new redirect service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolves `raw_id` to its long URL and records the redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `raw_id` is not a short identifier.
    /// Returns [`AppError::NotFound`] if no record has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, raw_id: &str) -> Result<String, AppError> {
        let id = parse_short_id(raw_id).map_err(|e| {
            AppError::bad_request(
                "Invalid short id",
                json!({ "id": raw_id, "reason": e.to_string() }),
            )
        })?;

        match self.repository.increment_and_touch(id).await? {
            Some(record) => {
                debug!(id, redirects = record.count, "Redirect recorded");
                metrics::counter!("shorturl_redirects_total").increment(1);
                Ok(record.url)
            }
            None => {
                metrics::counter!("shorturl_redirects_not_found_total").increment(1);
                Err(AppError::not_found(
                    "Short URL not found",
                    json!({ "id": id }),
                ))
            }
        }
    }
}
