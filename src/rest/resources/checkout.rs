//! Checkouts and the shipping rates offered for them.
//!
//! [`Checkout`] is also the item type of the abandoned checkout listing in
//! [`super::abandoned_checkout`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::RestClient;
use crate::rest::{service, GetOptions, Resource, ResourceError};

use super::common::{Address, DiscountCode, LineItem, NoteAttribute, ShippingLine, TaxLine};
use super::customer::Customer;

/// A cart on its way to becoming an order.
///
/// Checkouts are addressed by `token`; `id` is only informational.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Checkout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_accepts_marketing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_accepts_sms_marketing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_marketing_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referring_site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_attributes: Option<Vec<NoteAttribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_lines: Option<Vec<ShippingLine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_codes: Option<Vec<DiscountCode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes_included: Option<bool>,
    /// Grams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentment_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discounts: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_line_items_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_duties: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Recovery link sent to the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abandoned_checkout_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Checkout {
    const KEY: &'static str = "checkout";
    const PLURAL: &'static str = "checkouts";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Totals of a checkout once a shipping rate is applied.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ShippingRateCheckout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_price: Option<Decimal>,
}

/// A shipping option available to a checkout.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShippingRate {
    /// Opaque string id such as `shopify-Standard%20Shipping-5.00`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout: Option<ShippingRateCheckout>,
    /// Shape varies by carrier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_range: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time_in_transit: Option<Value>,
}

/// Operations on `checkouts/{token}`.
#[derive(Debug, Clone, Copy)]
pub struct CheckoutService<'a> {
    client: &'a RestClient,
}

impl<'a> CheckoutService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Retrieves a checkout by token.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the token is unknown.
    pub async fn get(
        &self,
        token: &str,
        options: Option<GetOptions>,
    ) -> Result<Checkout, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(self.client, &format!("checkouts/{token}.json"), query).await
    }

    /// Shipping rates available for a checkout.
    ///
    /// Shopify answers with an empty list while rates are still being
    /// computed; poll again in that case.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn shipping_rates(&self, token: &str) -> Result<Vec<ShippingRate>, ResourceError> {
        service::get(
            self.client,
            &format!("checkouts/{token}/shipping_rates.json"),
            "shipping_rates",
            None,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shipping_rate_with_free_form_delivery_range() {
        let rate: ShippingRate = serde_json::from_value(json!({
            "id": "shopify-Standard%20Shipping-5.00",
            "price": "5.00",
            "title": "Standard Shipping",
            "checkout": {"total_tax": "0.00", "total_price": "403.00", "subtotal_price": "398.00"},
            "phone_required": false,
            "delivery_range": ["2026-10-16T00:00:00-04:00", "2026-10-20T00:00:00-04:00"],
            "handle": "shopify-Standard%20Shipping-5.00"
        }))
        .unwrap();
        assert_eq!(rate.price, Some(Decimal::new(500, 2)));
        assert_eq!(rate.checkout.unwrap().total_price, Some(Decimal::new(40300, 2)));
        assert!(rate.delivery_range.unwrap().is_array());
    }

    #[test]
    fn test_checkout_amounts_and_addresses() {
        let checkout: Checkout = serde_json::from_value(json!({
            "id": 450789469,
            "token": "2a1ace52255252df566eb2b6f3",
            "email": "bob.norman@mail.example.com",
            "total_price": "398.00",
            "line_items": [],
            "billing_address": {"city": "Drayton Valley", "country_code": "CA"}
        }))
        .unwrap();
        assert_eq!(checkout.token.as_deref(), Some("2a1ace52255252df566eb2b6f3"));
        assert_eq!(checkout.total_price, Some(Decimal::new(39800, 2)));
        assert_eq!(
            checkout.billing_address.unwrap().city.as_deref(),
            Some("Drayton Valley")
        );
    }
}
