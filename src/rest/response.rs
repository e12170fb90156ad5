//! Response wrapper for resource service calls.
//!
//! [`ResourceResponse<T>`] combines decoded resource data with the metadata
//! of the HTTP response: pagination, rate limit and request id. It
//! implements `Deref<Target = T>`, so it can be used like the inner value:
//!
//! ```rust,ignore
//! let response = client.products().list_with_pagination(None).await?;
//!
//! for product in response.iter() {
//!     println!("{:?}", product.title);
//! }
//!
//! if let Some(next) = response.pagination().next_page_options.clone() {
//!     let page = client.products().list_with_pagination(Some(next.into())).await?;
//! }
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::{ApiCallLimit, HttpResponse};
use crate::rest::{Pagination, ResourceError};

/// Decoded data plus response metadata.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::ApiCallLimit;
/// use shopify_rest::rest::{ListOptions, Pagination, ResourceResponse};
///
/// let response = ResourceResponse::new(
///     vec!["item1", "item2", "item3"],
///     Pagination {
///         next_page_options: Some(ListOptions::page("eyJsYXN0X2lkIjo0fQ", Some(3))),
///         previous_page_options: None,
///     },
///     Some(ApiCallLimit { request_count: 1, bucket_size: 40 }),
///     Some("req-123".to_string()),
/// );
///
/// assert_eq!(response.len(), 3);
/// assert!(response.has_next_page());
/// assert_eq!(response.next_page_info(), Some("eyJsYXN0X2lkIjo0fQ"));
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    pagination: Pagination,
    rate_limit: Option<ApiCallLimit>,
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a response from its parts.
    #[must_use]
    pub const fn new(
        data: T,
        pagination: Pagination,
        rate_limit: Option<ApiCallLimit>,
        request_id: Option<String>,
    ) -> Self {
        Self {
            data,
            pagination,
            rate_limit,
            request_id,
        }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns `true` if there is a next page of results.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.pagination.has_next_page()
    }

    /// Returns `true` if there is a previous page of results.
    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        self.pagination.has_previous_page()
    }

    /// Returns the cursor for the next page, if any.
    #[must_use]
    pub fn next_page_info(&self) -> Option<&str> {
        self.pagination
            .next_page_options
            .as_ref()
            .and_then(|o| o.page_info.as_deref())
    }

    /// Returns the cursor for the previous page, if any.
    #[must_use]
    pub fn prev_page_info(&self) -> Option<&str> {
        self.pagination
            .previous_page_options
            .as_ref()
            .and_then(|o| o.page_info.as_deref())
    }

    /// Returns the parsed `Link` header.
    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Returns the rate limit state, if the header was present.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&ApiCallLimit> {
        self.rate_limit.as_ref()
    }

    /// Returns the `X-Request-Id` of the response.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Maps the inner data to a new type, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            pagination: self.pagination,
            rate_limit: self.rate_limit,
            request_id: self.request_id,
        }
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Decodes the member under `key` of a response body.
    ///
    /// The `Link` header is ignored and the pagination left empty.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::MissingKey`] if the body has no `key` member
    /// - [`ResourceError::Decode`] if the member does not match `T`
    pub fn from_http_response(response: HttpResponse, key: &str) -> Result<Self, ResourceError> {
        Self::decode(response, key, Pagination::default())
    }

    /// Decodes a page of results, parsing the `Link` header strictly.
    ///
    /// # Errors
    ///
    /// As [`from_http_response`](Self::from_http_response), plus
    /// [`ResourceError::Pagination`] if the `Link` header is malformed.
    pub fn from_page_response(response: HttpResponse, key: &str) -> Result<Self, ResourceError> {
        let pagination = Pagination::from_link_header(response.link_header().unwrap_or_default())?;
        Self::decode(response, key, pagination)
    }

    fn decode(
        response: HttpResponse,
        key: &str,
        pagination: Pagination,
    ) -> Result<Self, ResourceError> {
        let request_id = response.request_id().map(ToString::to_string);
        let rate_limit = response.api_call_limit;

        let HttpResponse { mut body, .. } = response;
        let data_value = body
            .get_mut(key)
            .map(serde_json::Value::take)
            .ok_or_else(|| ResourceError::MissingKey {
                key: key.to_string(),
            })?;

        let data: T = serde_json::from_value(data_value).map_err(|source| ResourceError::Decode {
            key: key.to_string(),
            source,
        })?;

        Ok(Self {
            data,
            pagination,
            rate_limit,
            request_id,
        })
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};
