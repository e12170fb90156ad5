//! Inventory items: the stock-keeping side of a product variant.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{service, ListOptions, Resource, ResourceError, ResourceResponse};

/// Customs code of an item for one destination country.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CountryHarmonizedSystemCode {
    pub harmonized_system_code: String,
    pub country_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InventoryItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Unit cost, in the shop currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code_of_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_code_of_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harmonized_system_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_harmonized_system_codes: Option<Vec<CountryHarmonizedSystemCode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl Resource for InventoryItem {
    const KEY: &'static str = "inventory_item";
    const PLURAL: &'static str = "inventory_items";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Operations on `inventory_items`.
#[derive(Debug, Clone, Copy)]
pub struct InventoryItemService<'a> {
    client: &'a RestClient,
}

impl<'a> InventoryItemService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists inventory items. Shopify requires `options.ids`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(&self, options: ListOptions) -> Result<Vec<InventoryItem>, ResourceError> {
        let query = service::query(Some(&options))?;
        service::list(self.client, "inventory_items.json", query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists inventory items along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: ListOptions,
    ) -> Result<ResourceResponse<Vec<InventoryItem>>, ResourceError> {
        let query = service::query(Some(&options))?;
        service::page(self.client, "inventory_items.json", query).await
    }

    /// Retrieves one inventory item.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64) -> Result<InventoryItem, ResourceError> {
        service::find(self.client, &format!("inventory_items/{id}.json"), None).await
    }

    /// Updates an inventory item by its id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if `item.id` is unset.
    pub async fn update(&self, item: &InventoryItem) -> Result<InventoryItem, ResourceError> {
        let id = item.require_id()?;
        service::update(self.client, &format!("inventory_items/{id}.json"), item).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_payload_carries_only_set_members() {
        let item = InventoryItem {
            id: Some(808_950_810),
            sku: Some("new sku".to_string()),
            cost: Some(Decimal::new(2500, 2)),
            ..Default::default()
        };
        assert_eq!(
            service::envelope(InventoryItem::KEY, &item).unwrap(),
            json!({"inventory_item": {"id": 808950810, "sku": "new sku", "cost": "25.00"}})
        );
    }
}
