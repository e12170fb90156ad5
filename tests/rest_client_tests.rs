//! Integration tests for the transport layer: headers, path handling,
//! retries and error mapping.

mod common;

use common::{api_path, setup, setup_with_retries, ACCESS_TOKEN};
use serde_json::json;
use shopify_rest::clients::rest::RestError;
use shopify_rest::{HttpError, Query, ResourceError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

// ============================================================================
// Request Shape
// ============================================================================

#[tokio::test]
async fn test_default_headers_are_sent() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("shop.json")))
        .and(header("X-Shopify-Access-Token", ACCESS_TOKEN))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"shop": {"id": 1}})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.get("shop", None).await.unwrap();
    assert_eq!(response.code, 200);
    assert_eq!(response.body["shop"]["id"], 1);
}

#[tokio::test]
async fn test_path_is_normalized() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("products/count.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 3})))
        .expect(2)
        .mount(&server)
        .await;

    client.get("/products/count.json", None).await.unwrap();
    client.get("products/count", None).await.unwrap();
}

#[tokio::test]
async fn test_empty_path_is_rejected_before_sending() {
    let (_server, client) = setup().await;

    let result = client.get("", None).await;
    assert!(matches!(result, Err(RestError::InvalidPath { .. })));
}

#[tokio::test]
async fn test_query_parameters_are_sent() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("orders.json")))
        .and(query_param("status", "any"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": []})))
        .expect(1)
        .mount(&server)
        .await;

    let mut query = Query::new();
    query.insert("status".to_string(), "any".to_string());
    query.insert("limit".to_string(), "5".to_string());
    client.get("orders", Some(query)).await.unwrap();
}

#[tokio::test]
async fn test_admin_prefixed_path_skips_version() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/admin/oauth/access_scopes.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_scopes": [{"handle": "read_orders"}, {"handle": "write_products"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let scopes = client.access_scopes().list().await.unwrap();
    let handles: Vec<_> = scopes.iter().map(|s| s.handle.as_str()).collect();
    assert_eq!(handles, vec!["read_orders", "write_products"]);
}

// ============================================================================
// Retries
// ============================================================================

#[tokio::test]
async fn test_rate_limited_request_is_retried() {
    let (server, client) = setup_with_retries(3).await;

    Mock::given(method("GET"))
        .and(path(api_path("orders/count.json")))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "0")
                .set_body_json(json!({"errors": "Exceeded 2 calls per second for api client."})),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("orders/count.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 7})))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client.orders().count(None).await.unwrap(), 7);
}

#[tokio::test]
async fn test_exhausted_retries_map_to_rate_limited() {
    let (server, client) = setup_with_retries(2).await;

    Mock::given(method("GET"))
        .and(path(api_path("orders/count.json")))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "0")
                .insert_header("X-Request-Id", "req-429")
                .set_body_json(json!({"errors": "Exceeded 2 calls per second for api client."})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let error = client.orders().count(None).await.unwrap_err();
    assert!(matches!(error, ResourceError::RateLimited { .. }));
    assert_eq!(error.request_id(), Some("req-429"));
}

#[tokio::test]
async fn test_single_attempt_returns_the_response_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("shop.json")))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({"errors": "Service Unavailable"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = client.get("shop", None).await;
    match result {
        Err(RestError::Http(HttpError::Response(e))) => {
            assert_eq!(e.code, 503);
            assert_eq!(e.message, "Service Unavailable");
        }
        other => panic!("expected a response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_retryable_status_is_not_retried() {
    let (server, client) = setup_with_retries(3).await;

    Mock::given(method("GET"))
        .and(path(api_path("shop.json")))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({"errors": "[API] This action requires merchant approval"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let error = client.shop().get(None).await.unwrap_err();
    match error {
        ResourceError::Http(HttpError::Response(e)) => assert_eq!(e.code, 403),
        other => panic!("expected an HTTP error, got {other:?}"),
    }
}

// ============================================================================
// Error Mapping
// ============================================================================

#[tokio::test]
async fn test_not_found_carries_path_and_request_id() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("products/999.json")))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("X-Request-Id", "req-404")
                .set_body_json(json!({"errors": "Not Found"})),
        )
        .mount(&server)
        .await;

    let error = client.products().get(999, None).await.unwrap_err();
    match error {
        ResourceError::NotFound { path, request_id } => {
            assert_eq!(path, "products/999.json");
            assert_eq!(request_id.as_deref(), Some("req-404"));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_validation_errors_are_kept_per_field() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("customers.json")))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": {
                "email": ["has already been taken"],
                "phone": ["is invalid", "has already been taken"]
            }
        })))
        .mount(&server)
        .await;

    let error = client
        .customers()
        .create(&Default::default())
        .await
        .unwrap_err();
    match error {
        ResourceError::ValidationFailed { errors, .. } => {
            assert_eq!(errors["email"], vec!["has already been taken".to_string()]);
            assert_eq!(errors["phone"].len(), 2);
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_array_is_joined() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("orders/450789469/close.json")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": ["order is already closed", "order is archived"]
        })))
        .mount(&server)
        .await;

    let error = client.orders().close(450_789_469).await.unwrap_err();
    match error {
        ResourceError::Http(HttpError::Response(e)) => {
            assert_eq!(e.message, "order is already closed, order is archived");
        }
        other => panic!("expected an HTTP error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_envelope_key() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("shop.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"store": {"id": 1}})))
        .mount(&server)
        .await;

    let error = client.shop().get(None).await.unwrap_err();
    assert!(matches!(error, ResourceError::MissingKey { ref key } if key == "shop"));
}

#[tokio::test]
async fn test_mistyped_envelope_is_a_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("orders.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": {"id": 1}})))
        .mount(&server)
        .await;

    let error = client.orders().list(None).await.unwrap_err();
    assert!(matches!(error, ResourceError::Decode { ref key, .. } if key == "orders"));
}

#[tokio::test]
async fn test_non_json_success_body_is_a_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("shop.json")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let error = client.shop().get(None).await.unwrap_err();
    assert!(matches!(error, ResourceError::Decode { ref key, .. } if key == "shop.json"));
}

#[tokio::test]
async fn test_oversized_retry_after_falls_back_to_fixed_delay() {
    let (server, client) = setup_with_retries(2).await;

    Mock::given(method("GET"))
        .and(path(api_path("shop.json")))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "1e30"))
        .expect(2)
        .mount(&server)
        .await;

    let error = client.shop().get(None).await.unwrap_err();
    assert!(matches!(error, ResourceError::RateLimited { .. }));
}
