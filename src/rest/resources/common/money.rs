//! Amounts expressed in both shop and presentment currency.
//!
//! Shopify sends `*_set` members next to plain amounts, e.g. `total_price`
//! and `total_price_set`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An amount in one currency.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Money {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,

    /// The three-letter ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

/// An amount in the shop's currency and the customer's presentment currency.
///
/// # Example
///
/// ```rust
/// use rust_decimal::Decimal;
/// use shopify_rest::rest::resources::common::{AmountSet, Money};
///
/// let set: AmountSet = serde_json::from_str(
///     r#"{"shop_money":{"amount":"19.99","currency_code":"USD"},
///         "presentment_money":{"amount":"25.99","currency_code":"CAD"}}"#,
/// ).unwrap();
///
/// assert_eq!(
///     set.shop_money.and_then(|m| m.amount),
///     Some(Decimal::new(1999, 2))
/// );
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AmountSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_money: Option<Money>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentment_money: Option<Money>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_amounts_accept_strings_and_numbers() {
        let money: Money =
            serde_json::from_value(json!({"amount": 10.5, "currency_code": "EUR"})).unwrap();
        assert_eq!(money.amount, Some(Decimal::new(105, 1)));

        let money: Money = serde_json::from_value(json!({"amount": "10.50"})).unwrap();
        assert_eq!(money.amount, Some(Decimal::new(1050, 2)));
    }

    #[test]
    fn test_amounts_serialize_as_strings() {
        let set = AmountSet {
            shop_money: Some(Money {
                amount: Some(Decimal::new(1050, 2)),
                currency_code: Some("USD".to_string()),
            }),
            presentment_money: None,
        };

        assert_eq!(
            serde_json::to_value(&set).unwrap(),
            json!({"shop_money": {"amount": "10.50", "currency_code": "USD"}})
        );
    }
}
