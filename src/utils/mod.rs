//! Helper functions shared by the services and the HTTP layer.
//!
//! - [`short_url`] - Short URL formatting and short id parsing
//! - [`url_validator`] - Long URL acceptance policy

pub mod short_url;
pub mod url_validator;
