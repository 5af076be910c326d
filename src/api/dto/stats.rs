//! DTOs for the statistics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlStat;

/// Statistics for a single shortened URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlStatItem {
    pub url: String,
    pub short_url: String,
    pub redirects: i64,
    pub last_access: DateTime<Utc>,
}

impl From<UrlStat> for UrlStatItem {
    fn from(stat: UrlStat) -> Self {
        Self {
            url: stat.url,
            short_url: stat.short_url,
            redirects: stat.redirects,
            last_access: stat.last_access,
        }
    }
}
