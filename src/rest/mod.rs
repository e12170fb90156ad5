//! Resource layer for the Shopify Admin REST API.
//!
//! - [`resources`]: one DTO plus one service per Shopify resource
//! - [`ListOptions`] and [`CountOptions`]: query options shared by list and
//!   count endpoints
//! - [`Pagination`]: cursors parsed from the `Link` header
//! - [`Resource`]: the envelope keys of a DTO
//! - [`ResourceResponse<T>`]: a Deref-based wrapper carrying response metadata
//! - [`ResourceError`]: semantic errors for service calls
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::{RestClient, Session};
//! use shopify_rest::rest::resources::OrderListOptions;
//!
//! let session = Session::from_parts("my-store", "shpat_123")?;
//! let client = RestClient::new(&session, None);
//!
//! // One page of orders
//! let page = client.orders().list_with_pagination(None).await?;
//! for order in page.iter() {
//!     println!("{:?} {:?}", order.name, order.total_price);
//! }
//!
//! // Follow the cursor
//! if let Some(next) = page.pagination().next_page_options.clone() {
//!     let options = OrderListOptions { list: next, ..Default::default() };
//!     let next_page = client.orders().list(Some(options)).await?;
//! }
//!
//! // Metafields hang off their owner
//! let metafields = client.orders().metafields(450789469).list(None).await?;
//! ```

mod errors;
mod options;
mod pagination;
mod resource;
mod response;
pub(crate) mod service;

pub mod resources;

pub use errors::ResourceError;
pub use options::{to_query, CountOptions, GetOptions, ListOptions};
pub use pagination::{LinkHeaderError, Pagination};
pub use resource::Resource;
pub use response::ResourceResponse;
