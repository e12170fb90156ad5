//! Postal address shared by orders, checkouts, customers and draft orders.

use serde::{Deserialize, Serialize};

/// A physical address used for billing or shipping.
///
/// All fields are optional to support partial address data. Customer
/// addresses carry the extra `customer_id` and `default` members.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::resources::common::Address;
///
/// let address = Address {
///     first_name: Some("John".to_string()),
///     last_name: Some("Doe".to_string()),
///     address1: Some("123 Main St".to_string()),
///     city: Some("New York".to_string()),
///     province_code: Some("NY".to_string()),
///     country_code: Some("US".to_string()),
///     zip: Some("10001".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(address.city.as_deref(), Some("New York"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Address {
    /// The unique identifier of a saved customer address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The customer owning a saved address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// The street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    /// Apartment, suite, unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,

    /// The two-letter province or state code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// The two-letter country code (ISO 3166-1 alpha-2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// The country name as shown to the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// The full name of the person at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// Whether this is the customer's default address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_address_omits_missing_fields() {
        let address = Address {
            first_name: Some("Jane".to_string()),
            city: Some("Los Angeles".to_string()),
            zip: Some("90001".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&address).unwrap();
        assert_eq!(
            value,
            json!({"first_name": "Jane", "city": "Los Angeles", "zip": "90001"})
        );
    }

    #[test]
    fn test_order_address_deserializes_with_coordinates() {
        let address: Address = serde_json::from_value(json!({
            "first_name": "Bob",
            "address1": "Chestnut Street 92",
            "phone": "555-625-1199",
            "city": "Louisville",
            "zip": "40202",
            "province": "Kentucky",
            "country": "United States",
            "last_name": "Norman",
            "address2": "",
            "company": null,
            "latitude": 45.41634,
            "longitude": -75.6868,
            "name": "Bob Norman",
            "country_code": "US",
            "province_code": "KY"
        }))
        .unwrap();

        assert_eq!(address.name.as_deref(), Some("Bob Norman"));
        assert_eq!(address.company, None);
        assert_eq!(address.address2.as_deref(), Some(""));
        assert_eq!(address.latitude, Some(45.41634));
    }
}
