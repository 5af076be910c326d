//! Repository trait for URL record data access.

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for shortened URL records.
///
/// Absent keys are reported as `Ok(None)`; errors are reserved for storage
/// failures and uniqueness conflicts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRecordRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlRecordRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRecordRepository: Send + Sync {
    /// Stores a new record for `url` with a fresh id, zero redirects and
    /// `last_access` set to now.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a record for `url` already exists.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, url: &str) -> Result<UrlRecord, AppError>;

    /// Finds a record by its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record by its exact long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_url(&self, url: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Returns every stored record. Order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError>;

    /// Atomically adds one redirect to the record and sets `last_access` to now.
    ///
    /// Returns the updated record, or `Ok(None)` if `id` is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn increment_and_touch(&self, id: i64) -> Result<Option<UrlRecord>, AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
