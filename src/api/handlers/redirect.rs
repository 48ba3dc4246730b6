//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::application::services::link_service::FIND_FAILED_MESSAGE;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /s/{code}`
///
/// # Request Flow
///
/// 1. Read the mapping for `code` (one store read, no retry)
/// 2. Return `302 Found` with `Location` set to the stored URL
///
/// # Errors
///
/// - 404 `url not found` if the code is unknown or expired
/// - 500 `failed to retrieve url` on store failure
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let target = state.link_service.resolve(&code).await?;

    found(&target)
}

/// Rejects `GET /s` and `GET /s/`, which carry no code.
///
/// Responds 400 `short url cannot be empty` without reading the store.
pub async fn missing_code_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let target = state.link_service.resolve("").await?;

    found(&target)
}

/// Builds a `302 Found` response pointing at `target`.
fn found(target: &str) -> Result<Response, AppError> {
    let location = HeaderValue::from_bytes(target.as_bytes()).map_err(|e| {
        warn!("Stored URL is not a valid Location header: {}", e);
        AppError::internal(FIND_FAILED_MESSAGE)
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
