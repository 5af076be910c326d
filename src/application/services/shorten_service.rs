//! URL shortening service.

use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRecordRepository;
use crate::error::AppError;
use crate::utils::short_url::ShortUrlFormatter;
use crate::utils::url_validator::validate_long_url;
use serde_json::json;
use tracing::{debug, info};

/// Result of shortening a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    pub id: i64,
    pub url: String,
    pub short_url: String,
}

/// Service turning long URLs into short URLs.
///
/// Shortening is idempotent: the same long URL always maps to the same record.
pub struct ShortenService<R: UrlRecordRepository + ?Sized> {
    repository: Arc<R>,
    short_urls: ShortUrlFormatter,
}

impl<R: UrlRecordRepository + ?Sized> ShortenService<R> {
    /// Creates a new shortening service.
    pub fn new(repository: Arc<R>, short_urls: ShortUrlFormatter) -> Self {
        Self {
            repository,
            short_urls,
        }
    }

    /// Shortens `long_url`, reusing the existing record when there is one.
    ///
    /// The URL is validated but stored and echoed back unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or not an absolute
    /// HTTP(S) URL.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn shorten(&self, long_url: &str) -> Result<ShortenedUrl, AppError> {
        validate_long_url(long_url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        let record = self.find_or_create(long_url).await?;

        Ok(ShortenedUrl {
            id: record.id,
            short_url: self.short_urls.format(record.id),
            url: record.url,
        })
    }

    /// Looks the URL up and creates a record only when none exists.
    ///
    /// A [`AppError::Conflict`] from the store means a concurrent request
    /// created the record between lookup and insert; the lookup is repeated.
    async fn find_or_create(&self, long_url: &str) -> Result<UrlRecord, AppError> {
        const MAX_ATTEMPTS: usize = 3;

        for attempt in 1..=MAX_ATTEMPTS {
            if let Some(existing) = self.repository.find_by_url(long_url).await? {
                debug!(id = existing.id, "Reusing existing short URL");
                return Ok(existing);
            }

            match self.repository.create(long_url).await {
                Ok(record) => {
                    info!(id = record.id, url = %record.url, "Short URL created");
                    metrics::counter!("shorturl_links_created_total").increment(1);
                    return Ok(record);
                }
                Err(AppError::Conflict { .. }) => {
                    debug!(attempt, "Concurrent create detected, retrying lookup");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to shorten URL",
            json!({ "reason": "Too many concurrent conflicts" }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRecordRepository;
    use chrono::Utc;

    fn formatter() -> ShortUrlFormatter {
        ShortUrlFormatter::new("http://localhost:8080", "my")
    }

    fn record(id: i64, url: &str) -> UrlRecord {
        UrlRecord::new(id, url.to_string(), 0, Utc::now())
    }

    #[tokio::test]
    async fn test_shorten_creates_new_record() {
        let mut mock_repo = MockUrlRecordRepository::new();

        mock_repo
            .expect_find_by_url()
            .withf(|url| url == "https://example.com")
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_create()
            .withf(|url| url == "https://example.com")
            .times(1)
            .returning(|url| Ok(record(10, url)));

        let service = ShortenService::new(Arc::new(mock_repo), formatter());

        let result = service.shorten("https://example.com").await.unwrap();

        assert_eq!(result.id, 10);
        assert_eq!(result.url, "https://example.com");
        assert_eq!(result.short_url, "http://localhost:8080/my/10");
    }

    #[tokio::test]
    async fn test_shorten_deduplication() {
        let mut mock_repo = MockUrlRecordRepository::new();

        mock_repo
            .expect_find_by_url()
            .times(1)
            .returning(|url| Ok(Some(record(5, url))));

        mock_repo.expect_create().times(0);

        let service = ShortenService::new(Arc::new(mock_repo), formatter());

        let result = service.shorten("https://example.com").await.unwrap();

        assert_eq!(result.id, 5);
        assert_eq!(result.short_url, "http://localhost:8080/my/5");
    }

    #[tokio::test]
    async fn test_shorten_retries_lookup_after_conflict() {
        let mut mock_repo = MockUrlRecordRepository::new();
        let mut seq = mockall::Sequence::new();

        mock_repo
            .expect_find_by_url()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));

        mock_repo
            .expect_create()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(AppError::conflict("dup", json!({}))));

        mock_repo
            .expect_find_by_url()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|url| Ok(Some(record(8, url))));

        let service = ShortenService::new(Arc::new(mock_repo), formatter());

        let result = service.shorten("https://race.example").await.unwrap();

        assert_eq!(result.id, 8);
    }

    #[tokio::test]
    async fn test_shorten_gives_up_after_repeated_conflicts() {
        let mut mock_repo = MockUrlRecordRepository::new();

        mock_repo
            .expect_find_by_url()
            .times(3)
            .returning(|_| Ok(None));

        mock_repo
            .expect_create()
            .times(3)
            .returning(|_| Err(AppError::conflict("dup", json!({}))));

        let service = ShortenService::new(Arc::new(mock_repo), formatter());

        let result = service.shorten("https://race.example").await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_shorten_rejects_empty_url() {
        let mock_repo = MockUrlRecordRepository::new();
        let service = ShortenService::new(Arc::new(mock_repo), formatter());

        let result = service.shorten("").await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_shorten_rejects_invalid_url() {
        let mock_repo = MockUrlRecordRepository::new();
        let service = ShortenService::new(Arc::new(mock_repo), formatter());

        let result = service.shorten("not-a-url").await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_shorten_propagates_storage_errors() {
        let mut mock_repo = MockUrlRecordRepository::new();

        mock_repo
            .expect_find_by_url()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = ShortenService::new(Arc::new(mock_repo), formatter());

        let result = service.shorten("https://example.com").await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }
}
