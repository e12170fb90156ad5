//! Shipping zones and the rates that apply within them. Read-only.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{service, Resource, ResourceError, ResourceResponse};

use super::country::Country;

/// A rate chosen by order weight, in kilograms.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WeightBasedShippingRate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_zone_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_low: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_high: Option<Decimal>,
}

/// A rate chosen by order subtotal.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PriceBasedShippingRate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_zone_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_order_subtotal: Option<Decimal>,
    /// `None` means no upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_order_subtotal: Option<Decimal>,
}

/// Rates fetched from a carrier service, with the merchant's markup.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CarrierShippingRateProvider {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_service_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_zone_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_modifier: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_modifier: Option<Decimal>,
    /// Service name pattern to `+` (include) or `-` (exclude).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_filter: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ShippingZone {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// GraphQL gid of the delivery profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<Country>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_based_shipping_rates: Option<Vec<WeightBasedShippingRate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_based_shipping_rates: Option<Vec<PriceBasedShippingRate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_shipping_rate_providers: Option<Vec<CarrierShippingRateProvider>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl Resource for ShippingZone {
    const KEY: &'static str = "shipping_zone";
    const PLURAL: &'static str = "shipping_zones";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Reads `shipping_zones`.
#[derive(Debug, Clone, Copy)]
pub struct ShippingZoneService<'a> {
    client: &'a RestClient,
}

impl<'a> ShippingZoneService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists every shipping zone.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(&self) -> Result<Vec<ShippingZone>, ResourceError> {
        service::list(self.client, "shipping_zones.json", None)
            .await
            .map(ResourceResponse::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_zone_with_rates() {
        let zone: ShippingZone = serde_json::from_value(json!({
            "id": 1039932365,
            "name": "Some zone",
            "profile_id": "gid://shopify/DeliveryProfile/690933842",
            "countries": [{"id": 817138619, "name": "United States", "code": "US", "tax": "0.0"}],
            "weight_based_shipping_rates": [
                {"id": 882078075, "name": "Canada Air Shipping", "price": "25.00", "weight_low": 0.0, "weight_high": 11.0231}
            ],
            "price_based_shipping_rates": [
                {"id": 882078074, "name": "$5 Shipping", "price": "5.00", "min_order_subtotal": "40.0", "max_order_subtotal": null}
            ],
            "carrier_shipping_rate_providers": [
                {"id": 1, "carrier_service_id": 61629186, "flat_modifier": "0.00", "percent_modifier": 0, "service_filter": {"*": "+"}}
            ]
        }))
        .unwrap();
        let price_rate = &zone.price_based_shipping_rates.unwrap()[0];
        assert_eq!(price_rate.price, Some(Decimal::new(500, 2)));
        assert_eq!(price_rate.max_order_subtotal, None);
        let provider = &zone.carrier_shipping_rate_providers.unwrap()[0];
        assert_eq!(provider.service_filter.as_ref().unwrap()["*"], "+");
        assert_eq!(zone.countries.unwrap()[0].code.as_deref(), Some("US"));
    }
}
