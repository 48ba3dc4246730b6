//! Route tables of the two services.

use crate::api::handlers::{
    health_handler, home_handler, missing_code_handler, redirect_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes of the shorten service.
///
/// # Endpoints
///
/// - `GET  /`        - URL submission form
/// - `POST /shorten` - Create a short link
/// - `GET  /health`  - Store connectivity check
pub fn shorten_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
}

/// Routes of the unshorten service.
///
/// # Endpoints
///
/// - `GET /s/{code}` - Redirect to the stored URL
/// - `GET /s`, `GET /s/` - Rejected: no code given
/// - `GET /health`   - Store connectivity check
pub fn unshorten_routes() -> Router<AppState> {
    Router::new()
        .route("/s/{code}", get(redirect_handler))
        .route("/s", get(missing_code_handler))
        .route("/s/", get(missing_code_handler))
        .route("/health", get(health_handler))
}
