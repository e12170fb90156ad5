//! REST-specific error types.
//!
//! - [`RestError::InvalidPath`]: a path that is empty after normalization
//! - [`RestError::Http`]: wraps the underlying [`HttpError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::clients::rest::RestError;
//!
//! match client.get("products", None).await {
//!     Ok(response) => println!("Products: {}", response.body),
//!     Err(RestError::InvalidPath { path }) => println!("Invalid path: {path}"),
//!     Err(RestError::Http(e)) => println!("HTTP error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST API operations.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "/".to_string() };
/// assert_eq!(error.to_string(), "Invalid REST API path: /");
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The path is empty once leading slashes and `.json` are removed.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The path as given by the caller.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Returns the HTTP status code, if the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            Self::InvalidPath { .. } => None,
        }
    }
}
