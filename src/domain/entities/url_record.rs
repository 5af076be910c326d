//! URL record entity.

use chrono::{DateTime, Utc};

/// A shortened long URL together with its access statistics.
///
/// `id` is assigned by the store and doubles as the short identifier.
/// `count` and `last_access` change only through
/// [`crate::domain::repositories::UrlRecordRepository::increment_and_touch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub url: String,
    pub count: i64,
    pub last_access: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a record with explicit field values.
    pub fn new(id: i64, url: String, count: i64, last_access: DateTime<Utc>) -> Self {
        Self {
            id,
            url,
            count,
            last_access,
        }
    }

    /// Creates a record that has never been redirected to.
    pub fn fresh(id: i64, url: String) -> Self {
        Self::new(id, url, 0, Utc::now())
    }

    /// Applies one redirect: bumps the counter and moves `last_access` to `now`.
    ///
    /// `last_access` never goes backwards, even if the clock does.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.count += 1;
        self.last_access = self.last_access.max(now);
    }
}
