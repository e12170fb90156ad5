//! Integration tests for draft orders, checkouts, billing, Shopify Payments,
//! fulfillment orders and store settings.

mod common;

use common::{api_path, setup};
use rust_decimal::Decimal;
use serde_json::json;
use shopify_rest::rest::resources::{
    Country, DraftOrderInvoice, Payment, RecurringApplicationCharge,
};
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

// ============================================================================
// Draft Orders
// ============================================================================

#[tokio::test]
async fn test_complete_draft_order_as_pending() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path(api_path("draft_orders/994118539/complete.json")))
        .and(query_param("payment_pending", "true"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "draft_order": {"id": 994118539, "status": "completed", "order_id": 450789469}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let draft = client.draft_orders().complete(994_118_539, true).await.unwrap();
    assert_eq!(draft.status.as_deref(), Some("completed"));
    assert_eq!(draft.order_id, Some(450_789_469));
}

#[tokio::test]
async fn test_send_draft_order_invoice() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("draft_orders/994118539/send_invoice.json")))
        .and(body_json(json!({
            "draft_order_invoice": {
                "to": "first@example.com",
                "subject": "Apple Computer Invoice"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "draft_order_invoice": {
                "to": "first@example.com",
                "from": "j.smith@example.com",
                "subject": "Apple Computer Invoice",
                "bcc": []
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let invoice = client
        .draft_orders()
        .invoice(
            994_118_539,
            &DraftOrderInvoice {
                to: Some("first@example.com".to_string()),
                subject: Some("Apple Computer Invoice".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(invoice.from.as_deref(), Some("j.smith@example.com"));
}

// ============================================================================
// Checkouts and Payments
// ============================================================================

#[tokio::test]
async fn test_checkout_shipping_rates() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("checkouts/exuw7apwoycchjuwtiqg8nytfhphr62a/shipping_rates.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "shipping_rates": [{
                "id": "canada_post-INT.TP.BOGUS-4.00",
                "price": "4.00",
                "title": "Small Packet International Air",
                "delivery_range": ["2026-10-20", "2026-10-28"]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let rates = client
        .checkouts()
        .shipping_rates("exuw7apwoycchjuwtiqg8nytfhphr62a")
        .await
        .unwrap();
    assert_eq!(rates[0].id.as_deref(), Some("canada_post-INT.TP.BOGUS-4.00"));
    assert_eq!(rates[0].price, Some(Decimal::new(400, 2)));
}

#[tokio::test]
async fn test_payment_against_checkout_token() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("checkouts/7yjf4v2we7gamku6a6h7tvm8h3mmvs4x/payments.json")))
        .and(body_partial_json(json!({
            "payment": {"unique_token": "client-side-idempotency-token"}
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "payment": {"id": 25428999, "unique_token": "client-side-idempotency-token"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payment = client
        .payments("7yjf4v2we7gamku6a6h7tvm8h3mmvs4x")
        .create(&Payment {
            unique_token: Some("client-side-idempotency-token".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(payment.id, Some(25_428_999));
}

// ============================================================================
// Billing
// ============================================================================

#[tokio::test]
async fn test_recurring_charge_capped_amount_update() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path(api_path("recurring_application_charges/455696195/customize.json")))
        .and(query_param("recurring_application_charge[capped_amount]", "200.00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recurring_application_charge": {
                "id": 455696195,
                "name": "Super Mega Plan",
                "price": "15.00",
                "status": "active",
                "capped_amount": "200.00",
                "activated_on": "2026-10-15",
                "billing_on": "2026-11-14"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let charge = client
        .recurring_application_charges()
        .update(455_696_195, Decimal::new(20000, 2))
        .await
        .unwrap();
    assert_eq!(charge.capped_amount, Some(Decimal::new(20000, 2)));
    assert!(charge.activated_on.is_some());
}

#[tokio::test]
async fn test_recurring_charge_activation_sends_the_charge() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("recurring_application_charges/455696195/activate.json")))
        .and(body_partial_json(json!({
            "recurring_application_charge": {"id": 455696195, "status": "accepted"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recurring_application_charge": {"id": 455696195, "status": "active"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let charge = client
        .recurring_application_charges()
        .activate(&RecurringApplicationCharge {
            id: Some(455_696_195),
            status: Some("accepted".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(charge.status.as_deref(), Some("active"));
}

#[tokio::test]
async fn test_shopify_payments_balance() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("shopify_payments/balance.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "balance": [{"currency": "USD", "amount": "53.99"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let balance = client.shopify_payments().balance().await.unwrap();
    assert_eq!(balance[0].currency, "USD");
    assert_eq!(balance[0].amount, Decimal::new(5399, 2));
}

// ============================================================================
// Fulfillment Orders
// ============================================================================

#[tokio::test]
async fn test_locations_for_move() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("fulfillment_orders/1046000819/locations_for_move.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "locations_for_move": [
                {"location": {"id": 1072404543, "name": "Alpha Location"}, "message": "Current location.", "movable": false},
                {"location": {"id": 1072404544, "name": "Bravo Location"}, "message": "No items are stocked at this location.", "movable": true}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let locations = client
        .fulfillment_orders()
        .locations_for_move(1_046_000_819)
        .await
        .unwrap();
    let movable: Vec<_> = locations
        .iter()
        .filter(|l| l.movable)
        .filter_map(|l| l.location.as_ref())
        .map(|l| l.id)
        .collect();
    assert_eq!(movable, vec![1_072_404_544]);
}

// ============================================================================
// Store Settings
// ============================================================================

#[tokio::test]
async fn test_shop_and_currencies() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("shop.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "shop": {"id": 690933842, "name": "Apple Computers", "currency": "USD"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("currencies.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "currencies": [
                {"currency": "CAD", "rate_updated_at": "2026-10-15T14:00:00-04:00", "enabled": true},
                {"currency": "EUR", "rate_updated_at": "2026-10-15T14:00:00-04:00", "enabled": false}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let shop = client.shop().get(None).await.unwrap();
    assert_eq!(shop.name.as_deref(), Some("Apple Computers"));

    let currencies = client.currencies().list().await.unwrap();
    let enabled: Vec<_> = currencies
        .iter()
        .filter(|c| c.enabled)
        .map(|c| c.currency.as_str())
        .collect();
    assert_eq!(enabled, vec!["CAD"]);
}

#[tokio::test]
async fn test_country_and_province_updates() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path(api_path("countries/879921427.json")))
        .and(body_json(json!({"country": {"id": 879921427, "tax": "0.1"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "country": {"id": 879921427, "code": "CA", "tax": 0.1}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("countries/879921427/provinces/count.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 13})))
        .expect(1)
        .mount(&server)
        .await;

    let country = client
        .countries()
        .update(&Country {
            id: Some(879_921_427),
            tax: Some(Decimal::new(1, 1)),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(country.tax, Some(Decimal::new(1, 1)));

    assert_eq!(client.provinces(879_921_427).count().await.unwrap(), 13);
}
