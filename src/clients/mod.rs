//! HTTP client types for the Shopify Admin REST API.
//!
//! This module provides the transport layer every resource service is built
//! on. It handles authentication headers, request/response processing, retry
//! logic and Shopify-specific header parsing.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async HTTP client bound to one shop
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a parsed response
//! - [`HttpMethod`]: GET, POST, PUT, DELETE
//! - [`rest::RestClient`]: the versioned REST client the services use
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::clients::{HttpClient, HttpMethod, HttpRequest};
//! use shopify_rest::Session;
//!
//! let session = Session::from_parts("my-store", "shpat_123")?;
//! let client = HttpClient::new("/admin/api/2025-10", &session, None);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "products.json").build()?;
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! - **429 (Rate Limited)**: waits for `Retry-After`, or 1 second if absent
//! - **500 / 503**: waits a fixed 1 second
//! - **Other errors**: returned immediately
//!
//! A request is attempted `tries` times at most. The [`rest::RestClient`]
//! takes its default from [`ShopifyConfig::retries`](crate::ShopifyConfig::retries).

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{ApiCallLimit, HttpResponse};

pub use rest::{RestClient, RestError};
