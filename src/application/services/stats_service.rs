//! Redirect statistics service.

use std::sync::Arc;

use crate::domain::entities::UrlStat;
use crate::domain::repositories::UrlRecordRepository;
use crate::error::AppError;
use crate::utils::short_url::ShortUrlFormatter;

/// Read-only projection of stored records into statistics lines.
pub struct StatsService<R: UrlRecordRepository + ?Sized> {
    repository: Arc<R>,
    short_urls: ShortUrlFormatter,
}

impl<R: UrlRecordRepository + ?Sized> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>, short_urls: ShortUrlFormatter) -> Self {
        Self {
            repository,
            short_urls,
        }
    }

    /// Lists statistics for every stored record, read fresh from the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_stats(&self) -> Result<Vec<UrlStat>, AppError> {
        let records = self.repository.list_all().await?;

        Ok(records
            .into_iter()
            .map(|record| UrlStat {
                short_url: self.short_urls.format(record.id),
                url: record.url,
                redirects: record.count,
                last_access: record.last_access,
            })
            .collect())
    }
}
