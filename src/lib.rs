//! # Shopify Admin REST client
//!
//! A typed, async client for the Shopify Admin REST API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Configuration via [`ShopifyConfig`] and [`ShopifyConfigBuilder`]
//! - Validated newtypes for the shop domain, access token and API host
//! - An HTTP transport with retries on 429/500/503 and `Retry-After` handling
//! - A [`RestClient`] with path normalization and one accessor per resource
//! - Typed DTOs and services for orders, products, customers, fulfillments,
//!   inventory, billing and the rest of the Admin REST surface
//! - Cursor pagination parsed from the `Link` header
//! - Metafield services scoped to the shop or to any owning resource
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shopify_rest::{ApiVersion, RestClient, Session, ShopifyConfig};
//! use shopify_rest::rest::resources::OrderListOptions;
//! use shopify_rest::rest::ListOptions;
//!
//! let config = ShopifyConfig::builder()
//!     .api_version(ApiVersion::V2025_10)
//!     .retries(3)
//!     .build()?;
//! let session = Session::from_parts("my-store", "shpat_123")?;
//! let client = RestClient::new(&session, Some(&config));
//!
//! let options = OrderListOptions {
//!     list: ListOptions { limit: Some(50), ..Default::default() },
//!     ..Default::default()
//! };
//! let page = client.orders().list_with_pagination(Some(options)).await?;
//! println!("{} orders, next page: {:?}", page.len(), page.pagination().next_page_options);
//! ```
//!
//! ## Error Handling
//!
//! Service calls return [`ResourceError`], which maps 404 and 422 responses
//! to [`ResourceError::NotFound`] and [`ResourceError::ValidationFailed`] and
//! wraps transport failures:
//!
//! ```rust,ignore
//! use shopify_rest::ResourceError;
//!
//! match client.products().get(632910392, None).await {
//!     Ok(product) => println!("{:?}", product.title),
//!     Err(ResourceError::NotFound { path, .. }) => println!("nothing at {path}"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Logging
//!
//! Requests, retries and deprecation notices are emitted through
//! [`tracing`]. Install a subscriber in the application to see them.
//!
//! ## Thread Safety
//!
//! [`ShopifyConfig`], [`Session`] and [`RestClient`] are `Send + Sync`.
//! Services borrow the client and are cheap to create per call.

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use auth::Session;
pub use config::{AccessToken, ApiVersion, HostUrl, ShopDomain, ShopifyConfig, ShopifyConfigBuilder};
pub use error::ConfigError;

pub use clients::{
    ApiCallLimit, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use clients::rest::{Query, RestClient, RestError};

pub use rest::{
    CountOptions, GetOptions, ListOptions, Pagination, Resource, ResourceError, ResourceResponse,
};
