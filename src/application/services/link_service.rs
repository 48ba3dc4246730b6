//! Short link creation and resolution service.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use tracing::{debug, error};

pub const EMPTY_URL_MESSAGE: &str = "url cannot be empty";
pub const EMPTY_CODE_MESSAGE: &str = "short url cannot be empty";
pub const NOT_FOUND_MESSAGE: &str = "url not found";
pub const SAVE_FAILED_MESSAGE: &str = "failed to set shortened url";
pub const FIND_FAILED_MESSAGE: &str = "failed to retrieve url";

/// URL scheme used when rendering short links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkScheme {
    Http,
    Https,
}

impl LinkScheme {
    /// `http` in development mode, `https` otherwise.
    pub fn from_dev_mode(dev_mode: bool) -> Self {
        if dev_mode { Self::Http } else { Self::Https }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for LinkScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service for creating and resolving short links.
///
/// Each operation touches the store at most once and never retries; store
/// failures are logged here and surfaced to the caller as
/// [`AppError::Internal`].
pub struct LinkService {
    store: Arc<dyn LinkStore>,
    ttl: Duration,
    scheme: LinkScheme,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// - `ttl` - lifetime of every mapping written by [`Self::shorten`]
    /// - `scheme` - scheme of URLs built by [`Self::short_url`]
    pub fn new(store: Arc<dyn LinkStore>, ttl: Duration, scheme: LinkScheme) -> Self {
        Self { store, ttl, scheme }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn scheme(&self) -> LinkScheme {
        self.scheme
    }

    /// Allocates a fresh code for `target` and stores the mapping.
    ///
    /// The target is stored verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if `target` is empty (nothing is
    /// written), and [`AppError::Internal`] if the store write fails.
    pub async fn shorten(&self, target: &str) -> Result<ShortLink, AppError> {
        if target.is_empty() {
            return Err(AppError::bad_request(EMPTY_URL_MESSAGE));
        }

        let link = ShortLink::new(generate_code(), target.to_string(), self.ttl);

        self.store
            .save(&link.code, &link.target, link.ttl)
            .await
            .map_err(|e| {
                error!(error = %e, code = %link.code, "{}", SAVE_FAILED_MESSAGE);
                AppError::internal(SAVE_FAILED_MESSAGE)
            })?;

        debug!("Created short link {} -> {}", link.code, link.target);
        Ok(link)
    }

    /// Looks up the target URL for `code`.
    ///
    /// # Errors
    ///
    /// - [`AppError::BadRequest`] if `code` is empty (the store is not read)
    /// - [`AppError::NotFound`] if the code is unknown or expired
    /// - [`AppError::Internal`] on store failure
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        if code.is_empty() {
            return Err(AppError::bad_request(EMPTY_CODE_MESSAGE));
        }

        match self.store.find(code).await {
            Ok(Some(target)) => Ok(target),
            Ok(None) => Err(AppError::not_found(NOT_FOUND_MESSAGE)),
            Err(e) => {
                error!(error = %e, code = %code, "failed to get shortened url");
                Err(AppError::internal(FIND_FAILED_MESSAGE))
            }
        }
    }

    /// Builds the public short URL: `{scheme}://{host}/s/{code}`.
    pub fn short_url(&self, host: &str, code: &str) -> String {
        format!("{}://{}/s/{}", self.scheme, host, code)
    }

    /// Returns true if the store answers a PING.
    pub async fn health_check(&self) -> bool {
        self.store.ping().await.is_ok()
    }
}
