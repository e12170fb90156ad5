//! Per-shop credentials.

use crate::config::{AccessToken, ShopDomain};
use crate::error::ConfigError;

/// The credentials a [`RestClient`](crate::RestClient) uses for one shop.
///
/// A session pairs a shop domain with the Admin API access token that was
/// issued for it, either by a custom app install or an OAuth exchange done
/// elsewhere.
///
/// # Example
///
/// ```rust
/// use shopify_rest::Session;
///
/// let session = Session::from_parts("my-store", "shpat_123").unwrap();
/// assert_eq!(session.shop.as_ref(), "my-store.myshopify.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// The shop this session is for.
    pub shop: ShopDomain,

    /// The access token for API authentication.
    pub access_token: AccessToken,
}

impl Session {
    /// Creates a session from already validated parts.
    #[must_use]
    pub const fn new(shop: ShopDomain, access_token: AccessToken) -> Self {
        Self { shop, access_token }
    }

    /// Validates a raw shop name and token and builds a session from them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] or
    /// [`ConfigError::EmptyAccessToken`] when either part is rejected.
    pub fn from_parts(shop: &str, access_token: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(
            ShopDomain::new(shop)?,
            AccessToken::new(access_token)?,
        ))
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_normalizes_shop() {
        let session = Session::from_parts("Test-Shop", "token").unwrap();
        assert_eq!(session.shop.shop_name(), "test-shop");
        assert_eq!(session.access_token.as_ref(), "token");
    }

    #[test]
    fn test_from_parts_rejects_empty_token() {
        assert!(matches!(
            Session::from_parts("test-shop", ""),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_debug_output_masks_token() {
        let session = Session::from_parts("test-shop", "shpat_secret").unwrap();
        let debug = format!("{session:?}");
        assert!(debug.contains("test-shop.myshopify.com"));
        assert!(!debug.contains("shpat_secret"));
    }
}
