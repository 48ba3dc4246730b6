//! Logging setup shared by both binaries.

use std::env;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// - `RUST_LOG` selects the filter (default: `info`)
/// - `LOG_FORMAT=json` switches to JSON lines; anything else gives text
///
/// Runs before configuration is validated so that configuration errors are
/// logged in the requested format.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = env::var("LOG_FORMAT").is_ok_and(|v| v == "json");

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
