//! Short URL formatting and short identifier parsing.
//!
//! A short identifier is the decimal form of a record id. The full short URL
//! is `<base_url>/<prefix>/<id>`, e.g. `http://localhost:8080/my/42`.

/// Errors produced when a path segment is not a valid short identifier.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShortIdError {
    #[error("Short id is empty")]
    Empty,

    #[error("Short id must contain only decimal digits")]
    NotDecimal,

    #[error("Short id is out of range")]
    OutOfRange,
}

/// Builds short URLs from record ids.
#[derive(Debug, Clone)]
pub struct ShortUrlFormatter {
    base_url: String,
    prefix: String,
}

impl ShortUrlFormatter {
    /// Creates a formatter; surrounding slashes on both parts are ignored.
    pub fn new(base_url: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            prefix: prefix.into().trim_matches('/').to_string(),
        }
    }

    /// Returns the full short URL for `id`.
    pub fn format(&self, id: i64) -> String {
        format!("{}/{}/{}", self.base_url, self.prefix, id)
    }

    /// Common beginning of every short URL produced by this formatter.
    pub fn url_prefix(&self) -> String {
        format!("{}/{}/", self.base_url, self.prefix)
    }
}

/// Parses a short identifier into a record id.
///
/// Only plain ASCII digits are accepted (no sign, no whitespace) and the value
/// must be a positive `i64`.
///
/// # Errors
///
/// See [`ShortIdError`].
pub fn parse_short_id(raw: &str) -> Result<i64, ShortIdError> {
    if raw.is_empty() {
        return Err(ShortIdError::Empty);
    }

    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ShortIdError::NotDecimal);
    }

    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ShortIdError::OutOfRange),
    }
}

/// Extracts the short identifier (last path segment) from a full short URL.
pub fn extract_short_id(short_url: &str) -> &str {
    short_url
        .rsplit_once('/')
        .map_or(short_url, |(_, id)| id)
}
