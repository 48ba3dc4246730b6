//! Handler for link shortening endpoint.

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::{HeaderMap, Uri},
};
use tracing::{debug, info};

use crate::api::dto::shorten::ShortenForm;
use crate::application::services::link_service::EMPTY_URL_MESSAGE;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_host::extract_host;

/// Creates a short link for the submitted URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```text
/// url=https%3A%2F%2Fexample.com
/// ```
///
/// # Response
///
/// `200 OK` with the short URL as plain text, built from the request host:
///
/// ```text
/// https://sho.rt/s/67e55044-10b1-426f-9247-bb680e5fe0c8
/// ```
///
/// # Errors
///
/// - 400 `url cannot be empty` if `url` is empty or absent, or the body is
///   missing or not form-encoded (nothing is stored)
/// - 400 if the request carries no host
/// - 500 `failed to set shortened url` if the store write fails
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    form: Result<Form<ShortenForm>, FormRejection>,
) -> Result<String, AppError> {
    let Form(form) = form.map_err(|rejection| {
        debug!("Rejected shorten body: {}", rejection);
        AppError::bad_request(EMPTY_URL_MESSAGE)
    })?;
    form.check()?;

    let host = extract_host(&headers, &uri)?;

    let link = state.link_service.shorten(&form.url).await?;
    let short_url = state.link_service.short_url(&host, &link.code);

    info!("Shortened {} -> {}", link.target, short_url);

    Ok(short_url)
}
