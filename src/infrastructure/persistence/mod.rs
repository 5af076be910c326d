//! Repository implementations.
//!
//! # Repositories
//!
//! - [`PgUrlRecordRepository`] - PostgreSQL storage via SQLx
//! - [`MemoryUrlRecordRepository`] - In-process storage for development and tests

pub mod memory_url_record_repository;
pub mod pg_url_record_repository;

pub use memory_url_record_repository::MemoryUrlRecordRepository;
pub use pg_url_record_repository::PgUrlRecordRepository;
