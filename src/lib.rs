//! # Redis URL Shortener
//!
//! A URL shortener split into two independent processes sharing one Redis
//! instance:
//!
//! - **shorten** - serves a form at `GET /` and creates links at `POST /shorten`
//! - **unshorten** - redirects `GET /s/{code}` to the stored URL
//!
//! Each mapping is a plain Redis key (the code) holding the target URL, and
//! expires after 24 hours.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The short link entity and the store trait
//! - **Application Layer** ([`application`]) - Link creation and resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - Handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URI="redis://localhost:6379/0"
//!
//! APP_PORT=8080 DEV_FLAG=1 cargo run --bin shorten
//! APP_PORT=8081 cargo run --bin unshorten
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;
pub mod shutdown;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkScheme, LinkService};
    pub use crate::domain::entities::ShortLink;
    pub use crate::domain::repositories::{LinkStore, StoreError, StoreResult};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{MemoryLinkStore, RedisLinkStore};
    pub use crate::state::AppState;
}
