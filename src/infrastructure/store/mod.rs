//! Link store implementations.
//!
//! Provides two implementations of [`crate::domain::repositories::LinkStore`]:
//! - [`RedisLinkStore`] - Production Redis-backed store
//! - [`MemoryLinkStore`] - In-process store for tests

mod memory_store;
mod redis_store;

pub use memory_store::MemoryLinkStore;
pub use redis_store::RedisLinkStore;
