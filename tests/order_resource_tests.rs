//! Integration tests for orders and the resources nested under them.

mod common;

use common::{api_path, setup};
use rust_decimal::Decimal;
use serde_json::json;
use shopify_rest::rest::resources::{
    CancelReason, FinancialStatus, Order, OrderCancelOptions, OrderListOptions, Refund,
    Transaction,
};
use shopify_rest::{ListOptions, ResourceError};
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn order_json() -> serde_json::Value {
    json!({
        "id": 450789469,
        "name": "#1001",
        "email": "bob.norman@mail.example.com",
        "currency": "USD",
        "financial_status": "partially_refunded",
        "total_price": "598.94",
        "line_items": [{
            "id": 466157049,
            "title": "IPod Nano - 8gb",
            "quantity": 1,
            "price": "199.00",
            "properties": [{"name": "Custom Engraving", "value": "Happy Birthday"}]
        }],
        "created_at": "2008-01-10T11:00:00-05:00"
    })
}

#[tokio::test]
async fn test_get_order() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("orders/450789469.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"order": order_json()})))
        .expect(1)
        .mount(&server)
        .await;

    let order = client.orders().get(450_789_469, None).await.unwrap();
    assert_eq!(order.name.as_deref(), Some("#1001"));
    assert_eq!(order.financial_status, Some(FinancialStatus::PartiallyRefunded));
    assert_eq!(order.total_price, Some(Decimal::new(59894, 2)));
    let line_items = order.line_items.unwrap();
    assert_eq!(line_items[0].quantity, Some(1));
}

#[tokio::test]
async fn test_list_orders_with_filters() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("orders.json")))
        .and(query_param("status", "any"))
        .and(query_param("since_id", "123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"orders": [order_json(), {"id": 2}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let options = OrderListOptions {
        list: ListOptions {
            since_id: Some(123),
            ..Default::default()
        },
        status: Some("any".to_string()),
        ..Default::default()
    };
    let orders = client.orders().list(Some(options)).await.unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[1].id, Some(2));
}

#[tokio::test]
async fn test_create_order_wraps_payload_in_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("orders.json")))
        .and(body_partial_json(json!({
            "order": {"email": "foo@example.com", "note": "gift"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "order": {"id": 1073459962, "email": "foo@example.com", "note": "gift"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .orders()
        .create(&Order {
            email: Some("foo@example.com".to_string()),
            note: Some("gift".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.id, Some(1_073_459_962));
}

#[tokio::test]
async fn test_update_order_requires_id() {
    let (_server, client) = setup().await;

    let error = client
        .orders()
        .update(&Order::default())
        .await
        .unwrap_err();
    assert!(matches!(error, ResourceError::MissingId { resource: "order" }));
}

#[tokio::test]
async fn test_update_order() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path(api_path("orders/450789469.json")))
        .and(body_partial_json(json!({"order": {"id": 450789469, "note": "Customer contacted us"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "order": {"id": 450789469, "note": "Customer contacted us"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client
        .orders()
        .update(&Order {
            id: Some(450_789_469),
            note: Some("Customer contacted us".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.note.as_deref(), Some("Customer contacted us"));
}

#[tokio::test]
async fn test_delete_and_count_orders() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(api_path("orders/450789469.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("orders/count.json")))
        .and(query_param("status", "any"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 2})))
        .expect(1)
        .mount(&server)
        .await;

    client.orders().delete(450_789_469).await.unwrap();
    let count = client
        .orders()
        .count(Some(shopify_rest::rest::resources::OrderCountOptions {
            status: Some("any".to_string()),
            ..Default::default()
        }))
        .await
        .unwrap();
    assert_eq!(count, 2);
}

#[tokio::test]
async fn test_cancel_close_and_open() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("orders/450789469/cancel.json")))
        .and(body_json(json!({"reason": "customer", "email": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "order": {"id": 450789469, "cancel_reason": "customer", "cancelled_at": "2026-10-15T10:00:00Z"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api_path("orders/450789469/close.json")))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "order": {"id": 450789469, "closed_at": "2026-10-15T10:05:00Z"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api_path("orders/450789469/open.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "order": {"id": 450789469, "closed_at": null}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cancelled = client
        .orders()
        .cancel(
            450_789_469,
            Some(OrderCancelOptions {
                reason: Some(CancelReason::Customer),
                email: Some(true),
                ..Default::default()
            }),
        )
        .await
        .unwrap();
    assert_eq!(cancelled.cancel_reason, Some(CancelReason::Customer));
    assert!(cancelled.cancelled_at.is_some());

    let closed = client.orders().close(450_789_469).await.unwrap();
    assert!(closed.closed_at.is_some());

    let reopened = client.orders().open(450_789_469).await.unwrap();
    assert!(reopened.closed_at.is_none());
}

#[tokio::test]
async fn test_order_transactions() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("orders/450789469/transactions.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transactions": [
                {"id": 389404469, "kind": "authorization", "status": "success", "amount": "598.94", "gateway": "bogus"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api_path("orders/450789469/transactions.json")))
        .and(body_partial_json(json!({"transaction": {"kind": "capture"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "transaction": {"id": 1068278509, "kind": "capture", "amount": "598.94", "status": "success"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let transactions = client.orders().transactions(450_789_469).list(None).await.unwrap();
    assert_eq!(transactions[0].amount, Some(Decimal::new(59894, 2)));

    let capture = client
        .transactions(450_789_469)
        .create(&Transaction {
            kind: Some("capture".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(capture.id, Some(1_068_278_509));
}

#[tokio::test]
async fn test_refund_calculation() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("orders/450789469/refunds/calculate.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "refund": {
                "refund_line_items": [{"line_item_id": 518995019, "quantity": 1, "subtotal": "195.67"}],
                "transactions": [{"kind": "suggested_refund", "amount": "41.94"}]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let refund = client
        .refunds(450_789_469)
        .calculate(&Refund::default())
        .await
        .unwrap();
    let transactions = refund.transactions.unwrap();
    assert_eq!(transactions[0].amount, Some(Decimal::new(4194, 2)));
}

#[tokio::test]
async fn test_fulfillment_lifecycle() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("orders/450789469/fulfillments/255858046/complete.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fulfillment": {"id": 255858046, "order_id": 450789469, "status": "success"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let fulfillment = client
        .orders()
        .fulfillments(450_789_469)
        .complete(255_858_046)
        .await
        .unwrap();
    assert_eq!(fulfillment.status.as_deref(), Some("success"));
}
