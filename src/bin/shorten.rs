//! Shorten service: issues short links.
//!
//! # Environment Variables
//!
//! - `REDIS_URI` (required): Redis connection string
//! - `APP_PORT` (required): listen port
//! - `DEV_FLAG` (optional): `1` to emit `http://` links
//!
//! See [`redis_shortener::config`] for the full list.

use redis_shortener::server::{self, Service};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    redis_shortener::logging::init();

    match server::run(Service::Shorten).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
