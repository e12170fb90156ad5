//! Collects: the link between a product and a custom collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{service, GetOptions, ListOptions, Resource, ResourceError, ResourceResponse};

/// Places one product in one custom collection.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Collect {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Collect {
    const KEY: &'static str = "collect";
    const PLURAL: &'static str = "collects";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Filters for listing and counting collects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectListOptions {
    #[serde(flatten)]
    pub list: ListOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
}

impl From<ListOptions> for CollectListOptions {
    fn from(list: ListOptions) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

/// Operations on `collects`.
#[derive(Debug, Clone, Copy)]
pub struct CollectService<'a> {
    client: &'a RestClient,
}

impl<'a> CollectService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists collects.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(
        &self,
        options: Option<CollectListOptions>,
    ) -> Result<Vec<Collect>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, "collects.json", query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists collects along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: Option<CollectListOptions>,
    ) -> Result<ResourceResponse<Vec<Collect>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(self.client, "collects.json", query).await
    }

    /// Counts collects.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn count(&self, options: Option<CollectListOptions>) -> Result<u64, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::count(self.client, "collects/count.json", query).await
    }

    /// Retrieves one collect.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64, options: Option<GetOptions>) -> Result<Collect, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(self.client, &format!("collects/{id}.json"), query).await
    }

    /// Adds a product to a custom collection.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the product is already
    /// in the collection.
    pub async fn create(&self, collect: &Collect) -> Result<Collect, ResourceError> {
        service::create(self.client, "collects.json", collect).await
    }

    /// Removes a product from a custom collection.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        service::delete(self.client, &format!("collects/{id}.json"), None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_payload() {
        let collect = Collect {
            product_id: Some(921_728_736),
            collection_id: Some(841_564_295),
            ..Default::default()
        };
        assert_eq!(
            service::envelope(Collect::KEY, &collect).unwrap(),
            json!({"collect": {"collection_id": 841564295, "product_id": 921728736}})
        );
    }
}
