//! Utility functions for code generation and request handling.
//!
//! - [`code_generator`] - Short code generation
//! - [`extract_host`] - Host extraction from HTTP requests

pub mod code_generator;
pub mod extract_host;
