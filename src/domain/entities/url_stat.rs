//! Reporting view of a URL record.

use chrono::{DateTime, Utc};

/// Statistics line for a single shortened URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlStat {
    pub url: String,
    pub short_url: String,
    pub redirects: i64,
    pub last_access: DateTime<Utc>,
}
