//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;

/// Application state shared by both services.
///
/// Constructed once at startup after the store connection has been
/// validated, then cloned into each request by axum.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Binary name reported by the health endpoint.
    pub service_name: &'static str,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>, service_name: &'static str) -> Self {
        Self {
            link_service,
            service_name,
        }
    }
}
