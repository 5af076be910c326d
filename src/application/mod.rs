//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::UrlRecordRepository`]
//! trait and provide a small API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Idempotent URL shortening
//! - [`services::redirect_service::RedirectService`] - Short id resolution with statistics
//! - [`services::stats_service::StatsService`] - Statistics projection

pub mod services;
