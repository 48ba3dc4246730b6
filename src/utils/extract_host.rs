//! Host extraction from HTTP requests.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};

/// Returns the host a request was addressed to, port included.
///
/// Prefers the `Host` header; falls back to the authority of an absolute
/// request URI (HTTP/2 requests carry it there instead).
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] if neither source is present, or if the
/// header value is not valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt:8080".parse().unwrap());
///
/// let host = extract_host(&headers, &Uri::from_static("/shorten")).unwrap();
/// assert_eq!(host, "sho.rt:8080");
/// ```
pub fn extract_host(headers: &HeaderMap, uri: &Uri) -> Result<String, AppError> {
    if let Some(value) = headers.get(header::HOST) {
        let host = value
            .to_str()
            .map_err(|_| AppError::bad_request("invalid host header"))?
            .trim();

        if !host.is_empty() {
            return Ok(host.to_string());
        }
    }

    uri.authority()
        .map(|authority| authority.as_str().to_string())
        .ok_or_else(|| AppError::bad_request("missing host header"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn relative() -> Uri {
        Uri::from_static("/shorten")
    }

    #[test]
    fn test_extract_host_simple() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("example.com"));

        assert_eq!(extract_host(&headers, &relative()).unwrap(), "example.com");
    }

    #[test]
    fn test_extract_host_keeps_port() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:8080"));

        assert_eq!(
            extract_host(&headers, &relative()).unwrap(),
            "localhost:8080"
        );
    }

    #[test]
    fn test_extract_host_ipv6_with_port() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("[::1]:8080"));

        assert_eq!(extract_host(&headers, &relative()).unwrap(), "[::1]:8080");
    }

    #[test]
    fn test_extract_host_falls_back_to_uri_authority() {
        let headers = HeaderMap::new();
        let uri = Uri::from_static("https://sho.rt/shorten");

        assert_eq!(extract_host(&headers, &uri).unwrap(), "sho.rt");
    }

    #[test]
    fn test_extract_host_missing() {
        let headers = HeaderMap::new();

        let err = extract_host(&headers, &relative()).unwrap_err();
        assert_eq!(err, AppError::bad_request("missing host header"));
    }

    #[test]
    fn test_extract_host_invalid_utf8() {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_bytes(&[0xFF, 0xFE, 0xFD]) {
            headers.insert(header::HOST, value);

            assert!(extract_host(&headers, &relative()).is_err());
        }
    }
}
