//! HTTP server initialization and runtime setup.
//!
//! Handles the store connection, router construction, and the Axum server
//! lifecycle for both binaries.

use crate::application::services::{LinkScheme, LinkService};
use crate::config::{self, Config};
use crate::infrastructure::store::RedisLinkStore;
use crate::routes::{shorten_router, unshorten_router};
use crate::shutdown::{ShutdownToken, cancel_on_signal};
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::Router;
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::task::JoinError;
use tracing::{error, info};

/// Which of the two processes is being started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Shorten,
    Unshorten,
}

impl Service {
    pub fn name(self) -> &'static str {
        match self {
            Service::Shorten => "shorten",
            Service::Unshorten => "unshorten",
        }
    }

    /// Builds this service's router around `state`.
    pub fn router(self, state: AppState) -> Router {
        match self {
            Service::Shorten => shorten_router(state),
            Service::Unshorten => unshorten_router(state),
        }
    }
}

/// Failures while serving or draining.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server task failed: {0}")]
    Task(#[from] JoinError),
    #[error("in-flight requests did not finish within {0:?}")]
    DrainTimeout(Duration),
}

/// Loads configuration and runs `service` until shutdown.
///
/// Initializes:
/// - Configuration from the environment
/// - Redis connection, validated with PING
/// - Axum HTTP server on `0.0.0.0:{APP_PORT}`
/// - Ctrl+C / SIGTERM listener
///
/// # Errors
///
/// Returns an error if:
/// - Configuration is missing or invalid
/// - The Redis URI is invalid or Redis is unreachable
/// - The listener cannot bind
/// - The server fails, or the drain period elapses with requests in flight
pub async fn run(service: Service) -> Result<()> {
    let config = config::load_from_env().context("Failed to load configuration")?;
    config.print_summary();

    let store = RedisLinkStore::connect(&config.redis_uri)
        .await
        .context("Failed to connect to Redis")?;

    let link_service = Arc::new(LinkService::new(
        Arc::new(store),
        config.link_ttl(),
        link_scheme(service, &config),
    ));
    let state = AppState::new(link_service, service.name());

    let app = service.router(state);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("{} service listening on http://{addr}", service.name());

    let shutdown = ShutdownToken::new();
    cancel_on_signal(shutdown.clone());

    serve(listener, app, shutdown, config.shutdown_grace()).await?;

    // The router, and with it the last handle to the store, is gone once
    // `serve` returns.
    info!("Store connection closed, {} service stopped", service.name());

    Ok(())
}

/// Only the shorten service renders links; `DEV_FLAG` is ignored elsewhere.
fn link_scheme(service: Service, config: &Config) -> LinkScheme {
    match service {
        Service::Shorten => LinkScheme::from_dev_mode(config.dev_mode),
        Service::Unshorten => LinkScheme::Https,
    }
}

/// Serves `app` on `listener` until `shutdown` is cancelled, then drains.
///
/// Once the token is cancelled the listener stops accepting connections and
/// in-flight requests get `grace` to complete. Requests still running after
/// that are abandoned.
///
/// # Errors
///
/// - [`ServeError::Io`] if the server fails
/// - [`ServeError::DrainTimeout`] if the drain period elapses
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: ShutdownToken,
    grace: Duration,
) -> Result<(), ServeError> {
    let signal = shutdown.clone();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move { signal.cancelled().await })
        .into_future();

    let mut handle = tokio::spawn(server);

    tokio::select! {
        result = &mut handle => {
            let result = result?;
            if let Err(e) = &result {
                error!("Server stopped unexpectedly: {}", e);
            }
            return result.map_err(ServeError::from);
        }
        _ = shutdown.cancelled() => {}
    }

    info!("Shutting down, waiting up to {:?} for in-flight requests", grace);

    match tokio::time::timeout(grace, &mut handle).await {
        Ok(result) => {
            result??;
            info!("All in-flight requests completed");
            Ok(())
        }
        Err(_) => {
            handle.abort();
            error!(
                "Failed to gracefully shut down: requests still running after {:?}",
                grace
            );
            Err(ServeError::DrainTimeout(grace))
        }
    }
}
