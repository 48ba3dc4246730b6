//! Data Transfer Objects for request and response bodies.
//!
//! Request DTOs use Serde for deserialization and validator for input
//! validation.

pub mod health;
pub mod shorten;
