//! Shop locations: stores, warehouses and other places that hold stock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{service, ListOptions, Resource, ResourceError, ResourceResponse};

use super::inventory_level::InventoryLevel;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localized_country_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localized_province_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Legacy locations are fulfillment services rather than physical places.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl Resource for Location {
    const KEY: &'static str = "location";
    const PLURAL: &'static str = "locations";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Operations on `locations`.
#[derive(Debug, Clone, Copy)]
pub struct LocationService<'a> {
    client: &'a RestClient,
}

impl<'a> LocationService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists every location of the shop.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(&self) -> Result<Vec<Location>, ResourceError> {
        service::list(self.client, "locations.json", None)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Counts locations.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn count(&self) -> Result<u64, ResourceError> {
        service::count(self.client, "locations/count.json", None).await
    }

    /// Retrieves one location.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64) -> Result<Location, ResourceError> {
        service::find(self.client, &format!("locations/{id}.json"), None).await
    }

    /// Stock held at a location, one level per inventory item, with the
    /// page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn inventory_levels(
        &self,
        id: u64,
        options: Option<ListOptions>,
    ) -> Result<ResourceResponse<Vec<InventoryLevel>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(
            self.client,
            &format!("locations/{id}/inventory_levels.json"),
            query,
        )
        .await
    }
}
