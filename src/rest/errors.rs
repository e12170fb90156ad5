//! Error type for resource service calls.
//!
//! Transport failures are mapped to semantic variants where Shopify's status
//! code has a clear meaning:
//!
//! - **404**: [`ResourceError::NotFound`]
//! - **422**: [`ResourceError::ValidationFailed`]
//! - **429**: [`ResourceError::RateLimited`] (after any configured retries)
//! - anything else: [`ResourceError::Http`] or [`ResourceError::Rest`]
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::ResourceError;
//!
//! match client.products().get(123, None).await {
//!     Ok(product) => println!("Found: {:?}", product.title),
//!     Err(ResourceError::NotFound { path, .. }) => println!("{path} not found"),
//!     Err(ResourceError::ValidationFailed { errors, .. }) => {
//!         for (field, messages) in errors {
//!             println!("{field}: {messages:?}");
//!         }
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::collections::HashMap;

use crate::clients::{HttpError, RestError};
use crate::rest::LinkHeaderError;
use thiserror::Error;

/// Error type for resource service calls.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::ResourceError;
/// use std::collections::HashMap;
///
/// let mut errors = HashMap::new();
/// errors.insert("title".to_string(), vec!["can't be blank".to_string()]);
/// let error = ResourceError::ValidationFailed {
///     errors,
///     request_id: Some("abc-123".to_string()),
/// };
/// assert!(error.to_string().contains("Validation failed"));
/// assert_eq!(error.request_id(), Some("abc-123"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource does not exist (HTTP 404).
    #[error("{path} not found")]
    NotFound {
        /// The request path.
        path: String,
        /// The `X-Request-Id` of the failed request.
        request_id: Option<String>,
    },

    /// Shopify rejected the payload (HTTP 422).
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Field names mapped to their messages. Messages with no field are
        /// stored under `base`.
        errors: HashMap<String, Vec<String>>,
        /// The `X-Request-Id` of the failed request.
        request_id: Option<String>,
    },

    /// The shop's API bucket is full (HTTP 429).
    #[error("Rate limited by Shopify; retry after {retry_after:?} seconds")]
    RateLimited {
        /// Seconds to wait, from `Retry-After`.
        retry_after: Option<f64>,
        /// The `X-Request-Id` of the failed request.
        request_id: Option<String>,
    },

    /// An update or action was attempted on a resource with no id.
    #[error("Cannot address {resource} without an id")]
    MissingId {
        /// The resource's envelope key.
        resource: &'static str,
    },

    /// The `Link` header of a list response could not be parsed.
    #[error(transparent)]
    Pagination(#[from] LinkHeaderError),

    /// The response body has no member under the expected envelope key.
    #[error("Missing key '{key}' in response body")]
    MissingKey {
        /// The envelope key.
        key: String,
    },

    /// The member under the envelope key does not match the expected shape,
    /// or a successful response body is not JSON at all.
    #[error("Failed to decode '{key}': {source}")]
    Decode {
        /// The envelope key, or the request path when the body itself is not
        /// JSON.
        key: String,
        /// The underlying serde error.
        source: serde_json::Error,
    },

    /// A payload or options struct could not be serialized.
    #[error("Failed to serialize request: {0}")]
    Serialize(serde_json::Error),

    /// An HTTP-level error with no more specific mapping.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST client error with no more specific mapping.
    #[error(transparent)]
    Rest(RestError),
}

impl ResourceError {
    /// Maps a REST client error for a request to `path`.
    #[must_use]
    pub fn from_rest_error(error: RestError, path: &str) -> Self {
        match error {
            RestError::Http(HttpError::Response(e)) => match e.code {
                404 => Self::NotFound {
                    path: path.to_string(),
                    request_id: e.error_reference,
                },
                422 => Self::ValidationFailed {
                    errors: e.errors,
                    request_id: e.error_reference,
                },
                429 => Self::RateLimited {
                    retry_after: e.retry_after,
                    request_id: e.error_reference,
                },
                _ => Self::Http(HttpError::Response(e)),
            },
            RestError::Http(HttpError::MaxRetries(e)) if e.code == 429 => Self::RateLimited {
                retry_after: None,
                request_id: e.error_reference,
            },
            RestError::Http(HttpError::InvalidBody { source, .. }) => Self::Decode {
                key: path.to_string(),
                source,
            },
            RestError::Http(e) => Self::Http(e),
            other @ RestError::InvalidPath { .. } => Self::Rest(other),
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::NotFound { request_id, .. }
            | Self::ValidationFailed { request_id, .. }
            | Self::RateLimited { request_id, .. } => request_id.as_deref(),
            Self::Http(HttpError::Response(e)) => e.error_reference.as_deref(),
            Self::Http(HttpError::MaxRetries(e)) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

impl From<RestError> for ResourceError {
    fn from(error: RestError) -> Self {
        match error {
            RestError::Http(e) => Self::Http(e),
            other @ RestError::InvalidPath { .. } => Self::Rest(other),
        }
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
