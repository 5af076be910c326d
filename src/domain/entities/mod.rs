//! Core domain entities.
//!
//! - [`UrlRecord`] - A stored long URL with its redirect statistics
//! - [`UrlStat`] - Reporting view of a record

pub mod url_record;
pub mod url_stat;

pub use url_record::UrlRecord;
pub use url_stat::UrlStat;
