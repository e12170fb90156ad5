//! Shipping lines on orders and draft orders.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::{AmountSet, DiscountAllocation, TaxLine};

/// A shipping method applied to an order.
///
/// Shopify has sent `requested_fulfillment_service_id` as a string, a number
/// and `null`. It is always decoded into a string; `null` and a missing
/// member become `""`.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::resources::common::ShippingLine;
///
/// let line: ShippingLine =
///     serde_json::from_str(r#"{"title": "Standard", "requested_fulfillment_service_id": 123}"#)
///         .unwrap();
/// assert_eq!(line.requested_fulfillment_service_id, "123");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ShippingLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_set: Option<AmountSet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_service_id",
        skip_serializing_if = "String::is_empty"
    )]
    pub requested_fulfillment_service_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_allocations: Option<Vec<DiscountAllocation>>,

    /// Set on draft orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Set on draft orders with a custom rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<bool>,
}

fn deserialize_service_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ServiceId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<ServiceId>::deserialize(deserializer)? {
        Some(ServiceId::Text(text)) => text,
        Some(ServiceId::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn service_id(value: serde_json::Value) -> String {
        let line: ShippingLine = serde_json::from_value(value).unwrap();
        line.requested_fulfillment_service_id
    }

    #[test]
    fn test_service_id_accepts_string_number_and_null() {
        assert_eq!(
            service_id(json!({"requested_fulfillment_service_id": "third-party"})),
            "third-party"
        );
        assert_eq!(
            service_id(json!({"requested_fulfillment_service_id": 123_456})),
            "123456"
        );
        assert_eq!(service_id(json!({"requested_fulfillment_service_id": null})), "");
        assert_eq!(service_id(json!({})), "");
    }

    #[test]
    fn test_service_id_rejects_other_shapes() {
        let result: Result<ShippingLine, _> =
            serde_json::from_value(json!({"requested_fulfillment_service_id": [1]}));
        assert!(result.is_err());
    }

    #[test]
    fn test_shipping_line_round_trip() {
        let payload = json!({
            "id": 369256396,
            "title": "Free Shipping",
            "price": "0.00",
            "code": "Free Shipping",
            "source": "shopify",
            "requested_fulfillment_service_id": "42",
            "tax_lines": []
        });

        let line: ShippingLine = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(serde_json::to_value(&line).unwrap(), payload);
    }
}
