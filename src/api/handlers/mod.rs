//! HTTP request handlers.
//!
//! - [`home`] and [`shorten`] are served by the shorten service
//! - [`redirect`] is served by the unshorten service
//! - [`health`] is served by both

pub mod health;
pub mod home;
pub mod redirect;
pub mod shorten;

pub use health::health_handler;
pub use home::home_handler;
pub use redirect::{missing_code_handler, redirect_handler};
pub use shorten::shorten_handler;
