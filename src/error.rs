//! Configuration error types.
//!
//! Every validated constructor in [`crate::config`] and [`crate::auth`]
//! returns `Result<T, ConfigError>` so that bad input is rejected before a
//! client is ever built.
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors raised while building configuration or credentials.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The access token was empty.
    #[error("Access token cannot be empty. Provide the shop's Admin API access token.")]
    EmptyAccessToken,

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name' or 'shop-name.myshopify.com'.")]
    InvalidShopDomain {
        /// The rejected domain.
        domain: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2024-01') or 'unstable'.")]
    InvalidApiVersion {
        /// The rejected version string.
        version: String,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Provide a URL with a scheme (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The rejected URL.
        url: String,
    },

    /// The retry count must allow at least one attempt.
    #[error("Invalid retry count {retries}. At least one attempt is required.")]
    InvalidRetryCount {
        /// The rejected count.
        retries: u32,
    },
}
