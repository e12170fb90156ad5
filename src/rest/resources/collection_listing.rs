//! Collections published to the calling app's sales channel. Read-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{service, ListOptions, Resource, ResourceError, ResourceResponse};

use super::common::Image;

/// A collection as seen by a sales channel. Keyed by `collection_id`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CollectionListing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_product_image: Option<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// e.g. `manual`, `best-selling` or `price-ascending`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for CollectionListing {
    const KEY: &'static str = "collection_listing";
    const PLURAL: &'static str = "collection_listings";

    fn id(&self) -> Option<u64> {
        self.collection_id
    }
}

/// Operations on `collection_listings`.
#[derive(Debug, Clone, Copy)]
pub struct CollectionListingService<'a> {
    client: &'a RestClient,
}

impl<'a> CollectionListingService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists collection listings.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(
        &self,
        options: Option<ListOptions>,
    ) -> Result<Vec<CollectionListing>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, "collection_listings.json", query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists collection listings along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: Option<ListOptions>,
    ) -> Result<ResourceResponse<Vec<CollectionListing>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(self.client, "collection_listings.json", query).await
    }

    /// Counts collection listings.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn count(&self) -> Result<u64, ResourceError> {
        service::count(self.client, "collection_listings/count.json", None).await
    }

    /// Retrieves the listing of one collection.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the collection is not published
    /// to the channel.
    pub async fn get(&self, collection_id: u64) -> Result<CollectionListing, ResourceError> {
        service::find(
            self.client,
            &format!("collection_listings/{collection_id}.json"),
            None,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_is_collection_id() {
        let listing: CollectionListing = serde_json::from_value(json!({
            "collection_id": 482865238,
            "title": "Smart iPods",
            "sort_order": "manual",
            "default_product_image": null,
            "image": {"src": "https://cdn.shopify.com/smart.png", "width": 123, "height": 456}
        }))
        .unwrap();
        assert_eq!(listing.id(), Some(482_865_238));
        assert_eq!(listing.image.unwrap().width, Some(123));
    }
}
