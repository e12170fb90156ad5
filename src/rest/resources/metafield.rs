//! Metafields: namespaced key/value data attached to other resources.
//!
//! The same service serves every owner. Only the path prefix changes:
//!
//! - shop: `metafields.json`
//! - products: `products/{id}/metafields.json`
//! - smart collections: `collections/{id}/metafields.json`
//!
//! and so on for variants, orders, draft orders, customers, blogs and
//! articles.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::Metafield;
//!
//! let metafield = client
//!     .products()
//!     .metafields(632910392)
//!     .create(&Metafield {
//!         namespace: Some("inventory".to_string()),
//!         key: Some("warehouse".to_string()),
//!         value: Some("A-15-3".to_string()),
//!         metafield_type: Some("single_line_text_field".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{service, GetOptions, ListOptions, Resource, ResourceError, ResourceResponse};

/// A metafield attached to a Shopify resource.
///
/// `metafield_type` is sent as `type`. Common types are
/// `single_line_text_field`, `number_integer`, `boolean` and `json`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Metafield {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Groups related metafields. Use an app-specific namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,

    /// The owner's resource name, e.g. `"product"` or `"shop"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_resource: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl Resource for Metafield {
    const KEY: &'static str = "metafield";
    const PLURAL: &'static str = "metafields";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Filters for listing metafields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetafieldListOptions {
    #[serde(flatten)]
    pub list: ListOptions,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,
}

impl From<ListOptions> for MetafieldListOptions {
    fn from(list: ListOptions) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

/// Filters for counting metafields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetafieldCountOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// Metafields of one owner, or of the shop when there is no owner.
#[derive(Debug, Clone, Copy)]
pub struct MetafieldService<'a> {
    client: &'a RestClient,
    owner: Option<(&'static str, u64)>,
}

impl<'a> MetafieldService<'a> {
    /// Metafields of the shop itself.
    pub(crate) const fn shop(client: &'a RestClient) -> Self {
        Self {
            client,
            owner: None,
        }
    }

    /// Metafields of `resource/{id}`, e.g. `("products", 632910392)`.
    pub(crate) const fn owned_by(client: &'a RestClient, resource: &'static str, id: u64) -> Self {
        Self {
            client,
            owner: Some((resource, id)),
        }
    }

    fn path(&self, suffix: &str) -> String {
        match self.owner {
            Some((resource, id)) => format!("{resource}/{id}/metafields{suffix}.json"),
            None => format!("metafields{suffix}.json"),
        }
    }

    /// Lists metafields.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(
        &self,
        options: Option<MetafieldListOptions>,
    ) -> Result<Vec<Metafield>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, &self.path(""), query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists metafields along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: Option<MetafieldListOptions>,
    ) -> Result<ResourceResponse<Vec<Metafield>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(self.client, &self.path(""), query).await
    }

    /// Counts metafields.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn count(&self, options: Option<MetafieldCountOptions>) -> Result<u64, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::count(self.client, &self.path("/count"), query).await
    }

    /// Retrieves a single metafield.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64, options: Option<GetOptions>) -> Result<Metafield, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(self.client, &self.path(&format!("/{id}")), query).await
    }

    /// Creates a metafield.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects it.
    pub async fn create(&self, metafield: &Metafield) -> Result<Metafield, ResourceError> {
        service::create(self.client, &self.path(""), metafield).await
    }

    /// Updates a metafield by its id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if `metafield.id` is unset.
    pub async fn update(&self, metafield: &Metafield) -> Result<Metafield, ResourceError> {
        let id = metafield.require_id()?;
        service::update(self.client, &self.path(&format!("/{id}")), metafield).await
    }

    /// Deletes a metafield.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        service::delete(self.client, &self.path(&format!("/{id}")), None).await
    }
}
