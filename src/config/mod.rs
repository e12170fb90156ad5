//! Client configuration.
//!
//! [`ShopifyConfig`] holds the settings that are shared by every shop a
//! process talks to: the API version, an optional alternate host, the
//! `User-Agent` prefix and the number of attempts per request. Per-shop
//! credentials live in [`Session`](crate::Session).
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::{ApiVersion, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .api_version(ApiVersion::V2025_10)
//!     .user_agent_prefix("inventory-sync/2.1")
//!     .retries(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.retries(), 3);
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, HostUrl, ShopDomain};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Shared settings for REST clients.
///
/// `ShopifyConfig` is `Clone + Send + Sync` and can be reused across any
/// number of clients.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopifyConfig {
    api_version: ApiVersion,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    retries: u32,
}

impl ShopifyConfig {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> ShopifyConfigBuilder {
        ShopifyConfigBuilder::new()
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the alternate API host, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the number of attempts made for each request.
    #[must_use]
    pub const fn retries(&self) -> u32 {
        self.retries
    }
}

impl Default for ShopifyConfig {
    fn default() -> Self {
        Self {
            api_version: ApiVersion::latest(),
            api_host: None,
            user_agent_prefix: None,
            retries: 1,
        }
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyConfig>();
};

/// Builder for [`ShopifyConfig`].
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::latest`]
/// - `api_host`: `None` (requests go to the shop's own domain)
/// - `user_agent_prefix`: `None`
/// - `retries`: `1` (no retries)
#[derive(Debug, Default)]
pub struct ShopifyConfigBuilder {
    api_version: Option<ApiVersion>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    retries: Option<u32>,
}

impl ShopifyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Routes requests through another host.
    ///
    /// The shop domain is still sent in the `Host` header.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets how many times a request is attempted when Shopify answers
    /// 429, 500 or 503.
    #[must_use]
    pub const fn retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries);
        self
    }

    /// Builds the [`ShopifyConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRetryCount`] if `retries` was set to 0.
    pub fn build(self) -> Result<ShopifyConfig, ConfigError> {
        let retries = self.retries.unwrap_or(1);
        if retries == 0 {
            return Err(ConfigError::InvalidRetryCount { retries });
        }

        Ok(ShopifyConfig {
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
            retries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = ShopifyConfig::builder().build().unwrap();

        assert_eq!(config.api_version(), &ApiVersion::latest());
        assert!(config.api_host().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert_eq!(config.retries(), 1);
        assert_eq!(config, ShopifyConfig::default());
    }

    #[test]
    fn test_builder_rejects_zero_retries() {
        let result = ShopifyConfig::builder().retries(0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidRetryCount { retries: 0 })
        ));
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let host = HostUrl::new("http://localhost:4000").unwrap();

        let config = ShopifyConfig::builder()
            .api_version(ApiVersion::V2025_07)
            .api_host(host.clone())
            .user_agent_prefix("MyApp/1.0")
            .retries(5)
            .build()
            .unwrap();

        assert_eq!(config.api_version(), &ApiVersion::V2025_07);
        assert_eq!(config.api_host(), Some(&host));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.retries(), 5);
    }
}
