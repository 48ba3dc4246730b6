//! Core business entities.

pub mod link;

pub use link::ShortLink;
