//! End-to-end scenarios across both services sharing one store.

mod common;

use redis_shortener::application::services::LinkScheme;
use std::time::Duration;

#[tokio::test]
async fn test_shortened_url_redirects_to_original() {
    let (_store, shared) = common::memory_store();
    let shorten = common::shorten_server(shared.clone(), LinkScheme::Https);
    let unshorten = common::unshorten_server(shared);

    let response = shorten
        .post("/shorten")
        .add_header("Host", "host")
        .form(&[("url", "https://example.com")])
        .await;
    response.assert_status_ok();

    let short_url = response.text();
    assert!(short_url.starts_with("https://host/s/"), "got {short_url}");
    let code = common::code_of(&short_url);

    let response = unshorten.get(&format!("/s/{code}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_dev_mode_link_resolves_the_same_way() {
    let (_store, shared) = common::memory_store();
    let shorten = common::shorten_server(shared.clone(), LinkScheme::from_dev_mode(true));
    let unshorten = common::unshorten_server(shared);

    let short_url = shorten
        .post("/shorten")
        .add_header("Host", "host")
        .form(&[("url", "https://example.com/docs")])
        .await
        .text();
    assert!(short_url.starts_with("http://host/s/"), "got {short_url}");

    let path = url::Url::parse(&short_url).unwrap().path().to_string();
    let response = unshorten.get(&path).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/docs");
}

#[tokio::test]
async fn test_each_code_resolves_to_its_own_target() {
    let (_store, shared) = common::memory_store();
    let shorten = common::shorten_server(shared.clone(), LinkScheme::Https);
    let unshorten = common::unshorten_server(shared);

    let targets = ["https://a.example", "https://b.example", "https://a.example"];
    let mut codes = Vec::new();
    for target in targets {
        let short_url = shorten
            .post("/shorten")
            .add_header("Host", common::TEST_HOST)
            .form(&[("url", target)])
            .await
            .text();
        codes.push(common::code_of(&short_url));
    }

    for (code, target) in codes.iter().zip(targets) {
        let response = unshorten.get(&format!("/s/{code}")).await;
        assert_eq!(response.header("location"), target);
    }
}

#[tokio::test]
async fn test_link_expires_after_ttl() {
    tokio::time::pause();

    let (_store, shared) = common::memory_store();
    let ttl = Duration::from_secs(60);
    let shorten = common::shorten_server_with_ttl(shared.clone(), LinkScheme::Https, ttl);
    let unshorten = common::unshorten_server(shared);

    let short_url = shorten
        .post("/shorten")
        .add_header("Host", common::TEST_HOST)
        .form(&[("url", "https://example.com")])
        .await
        .text();
    let path = format!("/s/{}", common::code_of(&short_url));

    tokio::time::advance(Duration::from_secs(59)).await;
    let response = unshorten.get(&path).await;
    assert_eq!(response.status_code(), 302);

    tokio::time::advance(Duration::from_secs(1)).await;
    let response = unshorten.get(&path).await;
    response.assert_status_not_found();
    assert_eq!(response.text(), "url not found");
}
