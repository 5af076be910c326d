//! DTOs for the shortening endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::ShortenedUrl;

/// URL to shorten.
///
/// Used both as the JSON body of `POST /shorten` and as the query string of
/// `GET /shorten_simple`, so the two entry points accept exactly the same input.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub url: String,
}

/// Original URL together with its short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub url: String,
    pub short_url: String,
}

impl From<ShortenedUrl> for ShortenResponse {
    fn from(shortened: ShortenedUrl) -> Self {
        Self {
            url: shortened.url,
            short_url: shortened.short_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_uses_camel_case() {
        let response = ShortenResponse {
            url: "https://example.com".to_string(),
            short_url: "http://localhost:8080/my/1".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["url"], "https://example.com");
        assert_eq!(json["shortUrl"], "http://localhost:8080/my/1");
        assert!(json.get("short_url").is_none());
    }

    #[test]
    fn test_empty_url_fails_validation() {
        let request = ShortenRequest { url: String::new() };
        assert!(request.validate().is_err());
    }
}
