//! Fulfillment orders: the part of an order's line items assigned to one
//! location.
//!
//! The assigned fulfillment order listing returns the same
//! [`FulfillmentOrder`] shape, seen from the fulfilling app's side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{service, ListOptions, Resource, ResourceError, ResourceResponse};

use super::common::LineItem;
use super::location::Location;

/// Where the items of a fulfillment order are going.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Destination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RequestOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

/// A request the merchant sent to the fulfillment service.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MerchantRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// `fulfillment_request` or `cancellation_request`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_options: Option<Vec<RequestOption>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FulfillmentOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_location_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// e.g. `create_fulfillment`, `move` or `cancel_fulfillment_order`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_actions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Destination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_service_handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_requests: Option<Vec<MerchantRequest>>,
}

impl Resource for FulfillmentOrder {
    const KEY: &'static str = "fulfillment_order";
    const PLURAL: &'static str = "fulfillment_orders";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// The location part of a [`LocationForMove`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MoveLocation {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A location a fulfillment order could be moved to.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LocationForMove {
    #[serde(alias = "destination", skip_serializing_if = "Option::is_none")]
    pub location: Option<MoveLocation>,
    /// Why the order can or cannot be moved there.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub movable: bool,
}

/// Operations on `fulfillment_orders`.
#[derive(Debug, Clone, Copy)]
pub struct FulfillmentOrderService<'a> {
    client: &'a RestClient,
}

impl<'a> FulfillmentOrderService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Retrieves one fulfillment order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64) -> Result<FulfillmentOrder, ResourceError> {
        service::find(self.client, &format!("fulfillment_orders/{id}.json"), None).await
    }

    /// Lists the fulfillment orders of an order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(&self, order_id: u64) -> Result<Vec<FulfillmentOrder>, ResourceError> {
        service::list(
            self.client,
            &format!("orders/{order_id}/fulfillment_orders.json"),
            None,
        )
        .await
        .map(ResourceResponse::into_inner)
    }

    /// Locations the fulfillment order could be moved to.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn locations_for_move(&self, id: u64) -> Result<Vec<LocationForMove>, ResourceError> {
        service::get(
            self.client,
            &format!("fulfillment_orders/{id}/locations_for_move.json"),
            "locations_for_move",
            None,
        )
        .await
    }
}

/// Filters for the assigned fulfillment order listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssignedFulfillmentOrderListOptions {
    #[serde(flatten)]
    pub list: ListOptions,
    /// e.g. `fulfillment_requested` or `cancellation_requested`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_status: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub location_ids: Vec<u64>,
}

impl From<ListOptions> for AssignedFulfillmentOrderListOptions {
    fn from(list: ListOptions) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

/// Operations on `assigned_fulfillment_orders`.
#[derive(Debug, Clone, Copy)]
pub struct AssignedFulfillmentOrderService<'a> {
    client: &'a RestClient,
}

impl<'a> AssignedFulfillmentOrderService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists fulfillment orders assigned to the calling app's locations.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(
        &self,
        options: Option<AssignedFulfillmentOrderListOptions>,
    ) -> Result<Vec<FulfillmentOrder>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, "assigned_fulfillment_orders.json", query)
            .await
            .map(ResourceResponse::into_inner)
    }
}
