//! Tracking events of a fulfillment, such as `in_transit` or `delivered`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{service, Resource, ResourceError, ResourceResponse};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FulfillmentEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<u64>,
    /// e.g. `label_printed`, `in_transit`, `out_for_delivery` or `delivered`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub happened_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl Resource for FulfillmentEvent {
    const KEY: &'static str = "fulfillment_event";
    const PLURAL: &'static str = "fulfillment_events";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Operations on `orders/{order_id}/fulfillments/{fulfillment_id}/events`.
#[derive(Debug, Clone, Copy)]
pub struct FulfillmentEventService<'a> {
    client: &'a RestClient,
    order_id: u64,
    fulfillment_id: u64,
}

impl<'a> FulfillmentEventService<'a> {
    pub(crate) const fn new(client: &'a RestClient, order_id: u64, fulfillment_id: u64) -> Self {
        Self {
            client,
            order_id,
            fulfillment_id,
        }
    }

    fn path(&self, suffix: &str) -> String {
        format!(
            "orders/{}/fulfillments/{}/events{suffix}.json",
            self.order_id, self.fulfillment_id
        )
    }

    /// Lists the fulfillment's events.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(&self) -> Result<Vec<FulfillmentEvent>, ResourceError> {
        service::list(self.client, &self.path(""), None)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Retrieves one event.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64) -> Result<FulfillmentEvent, ResourceError> {
        service::find(self.client, &self.path(&format!("/{id}")), None).await
    }

    /// Records a tracking event.
    ///
    /// Shopify answers under the `fulfillment_event` key, the same as the
    /// request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the status is unknown.
    pub async fn create(&self, event: &FulfillmentEvent) -> Result<FulfillmentEvent, ResourceError> {
        service::create(self.client, &self.path(""), event).await
    }

    /// Deletes an event.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        service::delete(self.client, &self.path(&format!("/{id}")), None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Session;

    #[test]
    fn test_path_has_order_before_fulfillment() {
        let client = RestClient::new(&Session::from_parts("shop", "token").unwrap(), None);
        let events = FulfillmentEventService::new(&client, 450_789_469, 255_858_046);
        assert_eq!(
            events.path("/944956395"),
            "orders/450789469/fulfillments/255858046/events/944956395.json"
        );
    }

    #[test]
    fn test_coordinates_are_decimal() {
        let event: FulfillmentEvent = serde_json::from_value(serde_json::json!({
            "id": 944956395,
            "status": "in_transit",
            "latitude": 45.4215,
            "longitude": "-75.6972"
        }))
        .unwrap();
        assert_eq!(event.latitude, Some(Decimal::new(454_215, 4)));
        assert_eq!(event.longitude, Some(Decimal::new(-756_972, 4)));
    }
}
