//! Integration tests for cursor pagination over the `Link` header.

mod common;

use common::{api_path, setup};
use serde_json::json;
use shopify_rest::rest::resources::{OrderListOptions, ProductListOptions};
use shopify_rest::{ListOptions, ResourceError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

const NEXT_CURSOR: &str = "eyJsYXN0X2lkIjo0NTA3ODk0NjksImRpcmVjdGlvbiI6Im5leHQifQ";
const PREV_CURSOR: &str = "eyJsYXN0X2lkIjo0NTA3ODk0NjgsImRpcmVjdGlvbiI6InByZXYifQ";

fn link(rel: &str, cursor: &str) -> String {
    format!(
        "<https://test-shop.myshopify.com/admin/api/2025-10/orders.json?limit=1&page_info={cursor}>; rel=\"{rel}\""
    )
}

#[tokio::test]
async fn test_first_page_has_only_next() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("orders.json")))
        .and(query_param("limit", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", link("next", NEXT_CURSOR).as_str())
                .insert_header("X-Shopify-Shop-Api-Call-Limit", "3/40")
                .set_body_json(json!({"orders": [{"id": 450789469, "name": "#1001"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let options = OrderListOptions::from(ListOptions {
        limit: Some(1),
        ..Default::default()
    });
    let page = client
        .orders()
        .list_with_pagination(Some(options))
        .await
        .unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].name.as_deref(), Some("#1001"));
    assert!(page.has_next_page());
    assert!(!page.has_prev_page());
    assert_eq!(page.next_page_info(), Some(NEXT_CURSOR));
    assert_eq!(page.rate_limit().map(|l| l.request_count), Some(3));

    let next = page.pagination().next_page_options.as_ref().unwrap();
    assert_eq!(next.limit, Some(1));
}

#[tokio::test]
async fn test_following_the_cursor() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("orders.json")))
        .and(query_param("page_info", NEXT_CURSOR))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "Link",
                    format!("{}, {}", link("previous", PREV_CURSOR), link("next", "cursor3"))
                        .as_str(),
                )
                .set_body_json(json!({"orders": [{"id": 450789470, "name": "#1002"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let page = client
        .orders()
        .list_with_pagination(Some(ListOptions::page(NEXT_CURSOR, Some(1)).into()))
        .await
        .unwrap();

    assert_eq!(page[0].id, Some(450_789_470));
    assert_eq!(page.prev_page_info(), Some(PREV_CURSOR));
    assert_eq!(page.next_page_info(), Some("cursor3"));
}

#[tokio::test]
async fn test_last_page_has_no_next() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("products.json")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", link("previous", PREV_CURSOR).as_str())
                .set_body_json(json!({"products": []})),
        )
        .mount(&server)
        .await;

    let page = client
        .products()
        .list_with_pagination(Some(ProductListOptions::default()))
        .await
        .unwrap();

    assert!(page.is_empty());
    assert!(!page.has_next_page());
    assert!(page.has_prev_page());
}

#[tokio::test]
async fn test_response_without_link_header() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("customers.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"customers": [{"id": 1}]})))
        .mount(&server)
        .await;

    let page = client.customers().list_with_pagination(None).await.unwrap();
    assert!(!page.has_next_page());
    assert!(!page.has_prev_page());
}

#[tokio::test]
async fn test_malformed_link_header_is_an_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("orders.json")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", "https://test-shop.myshopify.com/orders.json; rel=next")
                .set_body_json(json!({"orders": []})),
        )
        .mount(&server)
        .await;

    let error = client.orders().list_with_pagination(None).await.unwrap_err();
    assert!(matches!(error, ResourceError::Pagination(_)));
}

#[tokio::test]
async fn test_unsupported_rel_fails_only_when_paginating() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("orders.json")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", link("first", NEXT_CURSOR).as_str())
                .set_body_json(json!({"orders": [{"id": 450789469}]})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let orders = client.orders().list(None).await.unwrap();
    assert_eq!(orders[0].id, Some(450_789_469));

    let error = client.orders().list_with_pagination(None).await.unwrap_err();
    assert!(matches!(error, ResourceError::Pagination(_)));
}

#[tokio::test]
async fn test_single_resource_calls_ignore_link_header() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("orders/450789469.json")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "Link",
                    "<https://test-shop.myshopify.com/admin/api/2025-10/orders/450789469.json?fields=id,name>; rel=\"self\"",
                )
                .set_body_json(json!({"order": {"id": 450789469, "name": "#1001"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let order = client.orders().get(450_789_469, None).await.unwrap();
    assert_eq!(order.name.as_deref(), Some("#1001"));
}

#[tokio::test]
async fn test_cursor_links_with_field_lists() {
    let (server, client) = setup().await;

    let header = format!(
        "<https://test-shop.myshopify.com/admin/api/2025-10/orders.json?fields=id,name&page_info={PREV_CURSOR}>; rel=\"previous\", \
         <https://test-shop.myshopify.com/admin/api/2025-10/orders.json?fields=id,name&page_info={NEXT_CURSOR}>; rel=\"next\""
    );
    Mock::given(method("GET"))
        .and(path(api_path("orders.json")))
        .and(query_param("fields", "id,name"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", header.as_str())
                .set_body_json(json!({"orders": [{"id": 450789469, "name": "#1001"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let options = OrderListOptions::from(ListOptions {
        fields: Some("id,name".to_string()),
        ..Default::default()
    });
    let page = client
        .orders()
        .list_with_pagination(Some(options))
        .await
        .unwrap();
    assert_eq!(page.next_page_info(), Some(NEXT_CURSOR));
    assert_eq!(page.prev_page_info(), Some(PREV_CURSOR));
}

#[tokio::test]
async fn test_list_ids_are_comma_joined() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("inventory_items.json")))
        .and(query_param("ids", "808950810,39072856"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inventory_items": [{"id": 808950810}, {"id": 39072856}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let items = client
        .inventory_items()
        .list(ListOptions {
            ids: vec![808_950_810, 39_072_856],
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(items.len(), 2);
}
