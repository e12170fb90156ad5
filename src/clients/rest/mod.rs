//! REST client for the Shopify Admin API.
//!
//! [`RestClient`] sits on top of [`HttpClient`](crate::clients::HttpClient)
//! and adds versioned base paths, path normalization and a per-client retry
//! count. Resource services in [`crate::rest::resources`] are reached
//! through its accessor methods.
//!
//! # Path Normalization
//!
//! - Leading slashes are stripped: `/products` -> `products.json`
//! - A trailing `.json` is not doubled: `products.json` -> `products.json`
//! - Paths starting with `admin/` bypass the versioned base path
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::{RestClient, Session};
//!
//! let session = Session::from_parts("my-store", "shpat_123")?;
//! let client = RestClient::new(&session, None);
//!
//! let response = client.get("products", None).await?;
//! println!("Products: {}", response.body);
//! ```

mod client;
mod errors;

pub use client::{Query, RestClient};
pub use errors::RestError;
