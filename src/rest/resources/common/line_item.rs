//! Line items and the pieces attached to them.
//!
//! `LineItem.properties` is not always an array in Shopify's payloads: some
//! older orders carry a single object, or an empty one. Decoding accepts:
//!
//! - an array of name/value pairs, kept as is
//! - a single object, wrapped in a one-element list unless its name is empty
//!   and its value is null
//! - `null`, a missing member or any other shape, read as no properties

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::{AmountSet, Address};

/// A name/value pair on an order, draft order or line item.
///
/// The value is kept as raw JSON; Shopify stores strings but apps may write
/// numbers or booleans.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct NoteAttribute {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

/// A tax charged on an order, line item or shipping line.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TaxLine {
    /// The name of the tax, e.g. `"State Tax"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,

    /// The rate as a fraction, e.g. `0.06`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_set: Option<AmountSet>,
}

/// The part of a discount application allocated to one line.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscountAllocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_set: Option<AmountSet>,

    /// Index into the order's `discount_applications`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_application_index: Option<u32>,
}

/// A discount applied to a draft order or one of its line items.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppliedDiscount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// `fixed_amount` or `percentage`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

/// A product or variant being purchased.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::resources::common::LineItem;
///
/// let item: LineItem = serde_json::from_str(
///     r#"{"id": 1, "quantity": 2, "price": "9.99", "properties": {"name": "engraving", "value": "hi"}}"#,
/// ).unwrap();
///
/// let properties = item.properties.unwrap();
/// assert_eq!(properties.len(), 1);
/// assert_eq!(properties[0].name, "engraving");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    /// The price of a single unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discount: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_title: Option<String>,

    /// Product and variant title combined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_card: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_service: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_inventory_management: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_tax_price: Option<Decimal>,

    /// Custom properties such as engraving text or gift messages.
    #[serde(
        default,
        deserialize_with = "deserialize_properties",
        skip_serializing_if = "Option::is_none"
    )]
    pub properties: Option<Vec<NoteAttribute>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_exists: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillable_quantity: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub grams: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_location: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_location: Option<Address>,

    /// Set on draft order line items only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_discount: Option<AppliedDiscount>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_allocations: Option<Vec<DiscountAllocation>>,
}

fn deserialize_properties<'de, D>(deserializer: D) -> Result<Option<Vec<NoteAttribute>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Properties {
        List(Vec<NoteAttribute>),
        Single(NoteAttribute),
        Other(serde_json::Value),
    }

    Ok(match Option::<Properties>::deserialize(deserializer)? {
        Some(Properties::List(list)) => Some(list),
        Some(Properties::Single(property))
            if property.name.is_empty() && property.value.is_none() =>
        {
            None
        }
        Some(Properties::Single(property)) => Some(vec![property]),
        Some(Properties::Other(_)) | None => None,
    })
}
