//! Products and their images.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::{ProductListOptions, ProductStatus};
//!
//! let active = client
//!     .products()
//!     .list(Some(ProductListOptions {
//!         status: Some(ProductStatus::Active),
//!         product_type: Some("Snowboard".to_string()),
//!         ..Default::default()
//!     }))
//!     .await?;
//!
//! let images = client.products().images(632910392).list(None).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{service, GetOptions, ListOptions, Resource, ResourceError, ResourceResponse};

use super::metafield::MetafieldService;
use super::variant::Variant;

/// Whether a product is visible to customers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Archived,
    Draft,
}

/// A product option such as size or colour, with its possible values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

/// An image of a product.
///
/// Create an image either from a URL (`src`) or from base64 data
/// (`attachment`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    /// 1-based order among the product's images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    /// Used as the file name when uploading an `attachment`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl Resource for ProductImage {
    const KEY: &'static str = "image";
    const PLURAL: &'static str = "images";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// A good or service sold by the shop.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
    /// `web` or `global`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,
    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<Variant>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ProductOption>>,
    /// The featured image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ProductImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ProductImage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl Resource for Product {
    const KEY: &'static str = "product";
    const PLURAL: &'static str = "products";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Filters for listing products. Filter by vendor with `list.vendor`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductListOptions {
    #[serde(flatten)]
    pub list: ListOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,
    /// `published`, `unpublished` or `any`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_max: Option<DateTime<Utc>>,
    /// Comma-separated ISO 4217 codes for presentment prices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentment_currencies: Option<String>,
}

impl From<ListOptions> for ProductListOptions {
    fn from(list: ListOptions) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

/// Filters for counting products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductCountOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
}

/// Operations on `products`.
#[derive(Debug, Clone, Copy)]
pub struct ProductService<'a> {
    client: &'a RestClient,
}

impl<'a> ProductService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists products.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(
        &self,
        options: Option<ProductListOptions>,
    ) -> Result<Vec<Product>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, "products.json", query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists products along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: Option<ProductListOptions>,
    ) -> Result<ResourceResponse<Vec<Product>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(self.client, "products.json", query).await
    }

    /// Counts products.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn count(&self, options: Option<ProductCountOptions>) -> Result<u64, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::count(self.client, "products/count.json", query).await
    }

    /// Retrieves a single product.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64, options: Option<GetOptions>) -> Result<Product, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(self.client, &format!("products/{id}.json"), query).await
    }

    /// Creates a product, with any variants, options and images it carries.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects it.
    pub async fn create(&self, product: &Product) -> Result<Product, ResourceError> {
        service::create(self.client, "products.json", product).await
    }

    /// Updates a product by its id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if `product.id` is unset.
    pub async fn update(&self, product: &Product) -> Result<Product, ResourceError> {
        let id = product.require_id()?;
        service::update(self.client, &format!("products/{id}.json"), product).await
    }

    /// Deletes a product.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        service::delete(self.client, &format!("products/{id}.json"), None).await
    }

    /// Images of a product.
    #[must_use]
    pub const fn images(&self, product_id: u64) -> ProductImageService<'a> {
        ProductImageService {
            client: self.client,
            product_id,
        }
    }

    /// Metafields of a product.
    #[must_use]
    pub const fn metafields(&self, product_id: u64) -> MetafieldService<'a> {
        MetafieldService::owned_by(self.client, "products", product_id)
    }
}

/// Operations on `products/{product_id}/images`.
#[derive(Debug, Clone, Copy)]
pub struct ProductImageService<'a> {
    client: &'a RestClient,
    product_id: u64,
}

impl<'a> ProductImageService<'a> {
    fn path(&self, suffix: &str) -> String {
        format!("products/{}/images{suffix}.json", self.product_id)
    }

    /// Lists the product's images.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(&self, options: Option<ListOptions>) -> Result<Vec<ProductImage>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, &self.path(""), query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Counts the product's images.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn count(&self) -> Result<u64, ResourceError> {
        service::count(self.client, &self.path("/count"), None).await
    }

    /// Retrieves one image.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64, options: Option<GetOptions>) -> Result<ProductImage, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(self.client, &self.path(&format!("/{id}")), query).await
    }

    /// Adds an image.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects it.
    pub async fn create(&self, image: &ProductImage) -> Result<ProductImage, ResourceError> {
        service::create(self.client, &self.path(""), image).await
    }

    /// Updates an image by its id, e.g. to change `position` or `alt`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if `image.id` is unset.
    pub async fn update(&self, image: &ProductImage) -> Result<ProductImage, ResourceError> {
        let id = image.require_id()?;
        service::update(self.client, &self.path(&format!("/{id}")), image).await
    }

    /// Removes an image.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        service::delete(self.client, &self.path(&format!("/{id}")), None).await
    }
}
