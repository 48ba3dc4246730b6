#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use redis_shortener::application::services::{LinkScheme, LinkService};
use redis_shortener::domain::repositories::{LinkStore, StoreError, StoreResult};
use redis_shortener::infrastructure::store::MemoryLinkStore;
use redis_shortener::routes::{shorten_router, unshorten_router};
use redis_shortener::state::AppState;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_HOST: &str = "sho.rt";
pub const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// A store whose every command fails, standing in for an unreachable Redis.
pub struct FailingStore;

#[async_trait]
impl LinkStore for FailingStore {
    async fn save(&self, _code: &str, _target: &str, _ttl: Duration) -> StoreResult<()> {
        Err(StoreError::Command("connection refused".to_string()))
    }

    async fn find(&self, _code: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Command("connection refused".to_string()))
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(StoreError::Connection("connection refused".to_string()))
    }
}

pub fn create_test_state(
    store: Arc<dyn LinkStore>,
    ttl: Duration,
    scheme: LinkScheme,
    service_name: &'static str,
) -> AppState {
    let link_service = Arc::new(LinkService::new(store, ttl, scheme));
    AppState::new(link_service, service_name)
}

pub fn shorten_server(store: Arc<dyn LinkStore>, scheme: LinkScheme) -> TestServer {
    shorten_server_with_ttl(store, scheme, DAY)
}

pub fn shorten_server_with_ttl(
    store: Arc<dyn LinkStore>,
    scheme: LinkScheme,
    ttl: Duration,
) -> TestServer {
    let state = create_test_state(store, ttl, scheme, "shorten");
    TestServer::new(shorten_router(state)).unwrap()
}

pub fn unshorten_server(store: Arc<dyn LinkStore>) -> TestServer {
    let state = create_test_state(store, DAY, LinkScheme::Https, "unshorten");
    TestServer::new(unshorten_router(state)).unwrap()
}

pub fn memory_store() -> (Arc<MemoryLinkStore>, Arc<dyn LinkStore>) {
    let store = Arc::new(MemoryLinkStore::new());
    let shared: Arc<dyn LinkStore> = store.clone();
    (store, shared)
}

/// Extracts the code from a short URL of the form `{scheme}://{host}/s/{code}`.
pub fn code_of(short_url: &str) -> String {
    let url = url::Url::parse(short_url).unwrap();
    url.path().strip_prefix("/s/").unwrap().to_string()
}
