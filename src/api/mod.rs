//! HTTP layer for request/response handling.
//!
//! Translates HTTP requests into link service calls and renders the
//! plain-text responses both services return.
//!
//! # Modules
//!
//! - [`dto`] - Request and response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Access logging
//! - [`routes`] - Route tables of the two services

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
