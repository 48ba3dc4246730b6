//! DTOs for the link shortening endpoint.

use crate::application::services::link_service::EMPTY_URL_MESSAGE;
use crate::error::AppError;
use serde::Deserialize;
use validator::Validate;

/// Form body of `POST /shorten` (`application/x-www-form-urlencoded`).
///
/// A missing `url` field deserializes to an empty string so that absent and
/// empty input are rejected the same way.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenForm {
    /// The original URL to shorten. Stored verbatim.
    #[serde(default)]
    #[validate(length(min = 1))]
    pub url: String,
}

impl ShortenForm {
    /// Validates the form, mapping any failure to the client error body.
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()
            .map_err(|_| AppError::bad_request(EMPTY_URL_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_url_is_valid() {
        let form = ShortenForm {
            url: "https://example.com".to_string(),
        };

        assert!(form.check().is_ok());
    }

    #[test]
    fn test_empty_url_is_rejected() {
        let form = ShortenForm { url: String::new() };

        assert_eq!(
            form.check().unwrap_err(),
            AppError::bad_request("url cannot be empty")
        );
    }

    #[test]
    fn test_whitespace_url_is_accepted_verbatim() {
        let form = ShortenForm {
            url: " ".to_string(),
        };

        assert!(form.check().is_ok());
    }
}
