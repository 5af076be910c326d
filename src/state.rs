//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{RedirectService, ShortenService, StatsService};
use crate::domain::repositories::UrlRecordRepository;
use crate::utils::short_url::ShortUrlFormatter;

/// Services shared by all request handlers.
///
/// The storage backend is chosen at startup, so services hold the repository
/// as a trait object.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<dyn UrlRecordRepository>>,
    pub redirect_service: Arc<RedirectService<dyn UrlRecordRepository>>,
    pub stats_service: Arc<StatsService<dyn UrlRecordRepository>>,
    pub repository: Arc<dyn UrlRecordRepository>,
}

impl AppState {
    /// Wires all services on top of one repository.
    pub fn new(repository: Arc<dyn UrlRecordRepository>, short_urls: ShortUrlFormatter) -> Self {
        Self {
            shorten_service: Arc::new(ShortenService::new(
                repository.clone(),
                short_urls.clone(),
            )),
            redirect_service: Arc::new(RedirectService::new(repository.clone())),
            stats_service: Arc::new(StatsService::new(repository.clone(), short_urls)),
            repository,
        }
    }
}
