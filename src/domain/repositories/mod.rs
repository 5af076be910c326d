//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UrlRecordRepository`] - URL record storage, lookup and statistics updates
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod url_record_repository;

pub use url_record_repository::UrlRecordRepository;

#[cfg(test)]
pub use url_record_repository::MockUrlRecordRepository;
