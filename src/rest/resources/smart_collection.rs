//! Smart collections: product groups filled automatically by rules.
//!
//! Metafields of smart collections live under `collections/{id}`, not
//! `smart_collections/{id}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{
    service, CountOptions, GetOptions, ListOptions, Resource, ResourceError, ResourceResponse,
};

use super::common::Image;
use super::metafield::MetafieldService;

/// One membership condition, e.g. `tag equals "sale"`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Rule {
    /// The product property, e.g. `tag`, `title` or `variant_price`.
    pub column: String,
    /// e.g. `equals`, `greater_than` or `contains`.
    pub relation: String,
    pub condition: String,
}

/// A collection whose products are selected by rules.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SmartCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
    /// When `true` a product matching any rule is included; otherwise it
    /// must match all of them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disjunctive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Rule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl Resource for SmartCollection {
    const KEY: &'static str = "smart_collection";
    const PLURAL: &'static str = "smart_collections";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Filters for listing smart collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SmartCollectionListOptions {
    #[serde(flatten)]
    pub list: ListOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Only collections containing this product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,
}

impl From<ListOptions> for SmartCollectionListOptions {
    fn from(list: ListOptions) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

/// Operations on `smart_collections`.
#[derive(Debug, Clone, Copy)]
pub struct SmartCollectionService<'a> {
    client: &'a RestClient,
}

impl<'a> SmartCollectionService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists smart collections.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(
        &self,
        options: Option<SmartCollectionListOptions>,
    ) -> Result<Vec<SmartCollection>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, "smart_collections.json", query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists smart collections along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: Option<SmartCollectionListOptions>,
    ) -> Result<ResourceResponse<Vec<SmartCollection>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(self.client, "smart_collections.json", query).await
    }

    /// Counts smart collections.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn count(&self, options: Option<CountOptions>) -> Result<u64, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::count(self.client, "smart_collections/count.json", query).await
    }

    /// Retrieves one smart collection.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(
        &self,
        id: u64,
        options: Option<GetOptions>,
    ) -> Result<SmartCollection, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(self.client, &format!("smart_collections/{id}.json"), query).await
    }

    /// Creates a smart collection.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects it.
    pub async fn create(&self, collection: &SmartCollection) -> Result<SmartCollection, ResourceError> {
        service::create(self.client, "smart_collections.json", collection).await
    }

    /// Updates a smart collection by its id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if `collection.id` is unset.
    pub async fn update(&self, collection: &SmartCollection) -> Result<SmartCollection, ResourceError> {
        let id = collection.require_id()?;
        service::update(self.client, &format!("smart_collections/{id}.json"), collection).await
    }

    /// Deletes a smart collection.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        service::delete(self.client, &format!("smart_collections/{id}.json"), None).await
    }

    /// Metafields of a smart collection.
    #[must_use]
    pub const fn metafields(&self, collection_id: u64) -> MetafieldService<'a> {
        MetafieldService::owned_by(self.client, "collections", collection_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rules_round_trip() {
        let payload = json!({
            "id": 482865238,
            "title": "Smart iPods",
            "disjunctive": false,
            "rules": [{"column": "type", "relation": "equals", "condition": "Cult Products"}]
        });
        let collection: SmartCollection = serde_json::from_value(payload.clone()).unwrap();
        let rules = collection.rules.as_ref().unwrap();
        assert_eq!(rules[0].column, "type");
        assert_eq!(rules[0].condition, "Cult Products");
        assert_eq!(serde_json::to_value(&collection).unwrap(), payload);
    }
}
