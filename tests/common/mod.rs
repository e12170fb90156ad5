//! Shared setup for the wiremock-backed integration tests.

#![allow(dead_code)]

use shopify_rest::{ApiVersion, HostUrl, RestClient, Session, ShopifyConfig};
use wiremock::MockServer;

pub const ACCESS_TOKEN: &str = "shpat_test_token";

/// Starts a mock server and a client that sends every request to it.
pub async fn setup() -> (MockServer, RestClient) {
    setup_with_retries(1).await
}

/// Same as [`setup`], with `retries` attempts per request.
pub async fn setup_with_retries(retries: u32) -> (MockServer, RestClient) {
    let server = MockServer::start().await;
    let config = ShopifyConfig::builder()
        .api_version(ApiVersion::V2025_10)
        .api_host(HostUrl::new(server.uri()).unwrap())
        .retries(retries)
        .build()
        .unwrap();
    let session = Session::from_parts("test-shop", ACCESS_TOKEN).unwrap();
    let client = RestClient::new(&session, Some(&config));
    (server, client)
}

/// The versioned path of `resource`, e.g. `orders.json`.
pub fn api_path(resource: &str) -> String {
    format!("/admin/api/2025-10/{resource}")
}
