//! Inventory levels: the quantity of one inventory item at one location.
//!
//! A level has no id of its own; it is addressed by the
//! `(inventory_item_id, location_id)` pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clients::rest::Query;
use crate::clients::RestClient;
use crate::rest::{service, ListOptions, Resource, ResourceError, ResourceResponse};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InventoryLevel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_item_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    /// May be negative when stock is oversold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl Resource for InventoryLevel {
    const KEY: &'static str = "inventory_level";
    const PLURAL: &'static str = "inventory_levels";
}

/// Filters for listing inventory levels. At least one of
/// `inventory_item_ids` or `location_ids` is required by Shopify.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InventoryLevelListOptions {
    #[serde(flatten)]
    pub list: ListOptions,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inventory_item_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub location_ids: Vec<u64>,
}

impl From<ListOptions> for InventoryLevelListOptions {
    fn from(list: ListOptions) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

/// Operations on `inventory_levels`.
#[derive(Debug, Clone, Copy)]
pub struct InventoryLevelService<'a> {
    client: &'a RestClient,
}

impl<'a> InventoryLevelService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists inventory levels.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(
        &self,
        options: Option<InventoryLevelListOptions>,
    ) -> Result<Vec<InventoryLevel>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, "inventory_levels.json", query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists inventory levels along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: Option<InventoryLevelListOptions>,
    ) -> Result<ResourceResponse<Vec<InventoryLevel>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(self.client, "inventory_levels.json", query).await
    }

    /// Adds `adjustment` (which may be negative) to the available quantity.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the item is not stocked
    /// at the location.
    pub async fn adjust(
        &self,
        inventory_item_id: u64,
        location_id: u64,
        adjustment: i64,
    ) -> Result<InventoryLevel, ResourceError> {
        let body = json!({
            "inventory_item_id": inventory_item_id,
            "location_id": location_id,
            "available_adjustment": adjustment,
        });
        service::action(self.client, "inventory_levels/adjust.json", Some(body), None).await
    }

    /// Stocks an inventory item at a location.
    ///
    /// With `relocate_if_necessary`, an item stocked only at a fulfillment
    /// service location is moved instead of failing.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn connect(
        &self,
        inventory_item_id: u64,
        location_id: u64,
        relocate_if_necessary: bool,
    ) -> Result<InventoryLevel, ResourceError> {
        let body = json!({
            "inventory_item_id": inventory_item_id,
            "location_id": location_id,
            "relocate_if_necessary": relocate_if_necessary,
        });
        service::action(self.client, "inventory_levels/connect.json", Some(body), None).await
    }

    /// Overwrites the available quantity, connecting the item to the location
    /// first if needed.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn set(
        &self,
        inventory_item_id: u64,
        location_id: u64,
        available: i64,
    ) -> Result<InventoryLevel, ResourceError> {
        let body = json!({
            "inventory_item_id": inventory_item_id,
            "location_id": location_id,
            "available": available,
        });
        service::action(self.client, "inventory_levels/set.json", Some(body), None).await
    }

    /// Removes an inventory item from a location.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if it is the item's only
    /// location.
    pub async fn delete(&self, inventory_item_id: u64, location_id: u64) -> Result<(), ResourceError> {
        let mut query = Query::new();
        query.insert("inventory_item_id".to_string(), inventory_item_id.to_string());
        query.insert("location_id".to_string(), location_id.to_string());
        service::delete(self.client, "inventory_levels.json", Some(query)).await
    }
}
