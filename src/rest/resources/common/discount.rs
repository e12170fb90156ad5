//! Discount codes and applications on orders and checkouts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A discount code entered at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscountCode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// `fixed_amount`, `percentage` or `shipping`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<String>,
}

/// How a discount was applied to an order.
///
/// `value` is kept as raw JSON: Shopify sends it as a string on orders and as
/// a number on some older payloads.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DiscountApplication {
    /// `line_item` or `shipping_line`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,

    /// `automatic`, `discount_code`, `manual` or `script`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,

    /// `across`, `each` or `one`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_method: Option<String>,

    /// `all`, `entitled` or `explicit`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_selection: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
