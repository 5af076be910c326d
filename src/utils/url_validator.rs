//! Acceptance policy for long URLs.
//!
//! URLs are checked, never rewritten: the stored value is exactly what the
//! client sent, so deduplication and the `Location` header use the original
//! string.

use url::Url;

/// Reasons a long URL is refused.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must contain a host")]
    MissingHost,

    #[error("URL must not contain control characters")]
    ControlCharacters,

    #[error("URL must not start or end with whitespace")]
    SurroundingWhitespace,
}

/// Checks that `input` is an absolute HTTP(S) URL that can be shortened.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for empty or blank input, and the
/// other variants for strings that are not usable as a redirect target.
pub fn validate_long_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    // The URL parser strips it, but the stored value would keep it.
    if input.trim() != input {
        return Err(UrlValidationError::SurroundingWhitespace);
    }

    // Must be representable in a Location header as-is.
    if input.chars().any(char::is_control) {
        return Err(UrlValidationError::ControlCharacters);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(())
}
