//! Domain layer containing business entities and store contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on Redis or HTTP. Store implementations
//! live in [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
