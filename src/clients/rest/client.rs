//! REST client implementation for the Shopify Admin API.
//!
//! This module provides the [`RestClient`] type that every resource service
//! sends its requests through.

use std::collections::BTreeMap;

use crate::auth::Session;
use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ApiVersion, ShopifyConfig};

/// Query parameters, kept sorted for a stable URL.
pub type Query = BTreeMap<String, String>;

/// REST API client for the Shopify Admin API.
///
/// Provides `get`, `post`, `put` and `delete` with path normalization and
/// the configured retry count. Resource services are reached through
/// accessor methods such as [`RestClient::orders`].
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::{RestClient, Session};
///
/// let session = Session::from_parts("my-store", "shpat_123")?;
/// let client = RestClient::new(&session, None);
///
/// // Raw GET request
/// let response = client.get("products", None).await?;
///
/// // POST request with body
/// let body = serde_json::json!({"product": {"title": "New Product"}});
/// let response = client.post("products", body, None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
    api_version: ApiVersion,
    tries: u32,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client for the given session.
    ///
    /// Uses the API version and retry count from the configuration, or the
    /// latest stable version and a single attempt without one.
    #[must_use]
    pub fn new(session: &Session, config: Option<&ShopifyConfig>) -> Self {
        let api_version = config.map_or_else(ApiVersion::latest, |c| *c.api_version());

        Self::create_client(session, config, api_version)
    }

    /// Creates a new REST client with a specific API version override.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use shopify_rest::{ApiVersion, RestClient, Session};
    ///
    /// let session = Session::from_parts("my-store", "shpat_123")?;
    /// let client = RestClient::with_version(&session, None, ApiVersion::V2025_07);
    /// ```
    #[must_use]
    pub fn with_version(
        session: &Session,
        config: Option<&ShopifyConfig>,
        version: ApiVersion,
    ) -> Self {
        if let Some(cfg_version) = config.map(ShopifyConfig::api_version) {
            if &version == cfg_version {
                tracing::debug!(
                    "Rest client has a redundant API version override to the default {}",
                    cfg_version
                );
            } else {
                tracing::debug!(
                    "Rest client overriding default API version {} with {}",
                    cfg_version,
                    version
                );
            }
        }

        Self::create_client(session, config, version)
    }

    fn create_client(
        session: &Session,
        config: Option<&ShopifyConfig>,
        api_version: ApiVersion,
    ) -> Self {
        if api_version.is_deprecated() {
            tracing::warn!(
                version = %api_version,
                "API version is outside Shopify's support window"
            );
        }

        let base_path = format!("/admin/api/{api_version}");
        let http_client = HttpClient::new(base_path, session, config);
        let tries = config.map_or(1, ShopifyConfig::retries);

        Self {
            http_client,
            api_version,
            tries,
        }
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the number of attempts made per request.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut query = BTreeMap::new();
    /// query.insert("limit".to_string(), "50".to_string());
    /// let response = client.get("products", Some(query)).await?;
    /// ```
    pub async fn get(&self, path: &str, query: Option<Query>) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query)
            .await
    }

    /// Sends a POST request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<Query>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    /// Sends a PUT request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<Query>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body), query)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<Query>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<Query>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder =
            HttpRequest::builder(method, normalized_path).tries(self.tries);

        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }

        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Normalizes a REST API path.
///
/// Strips leading `/` characters and any `.json` suffix, then appends
/// `.json`. An empty result is an error.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim_start_matches('/');
    let trimmed = trimmed.strip_suffix(".json").unwrap_or(trimmed);

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(format!("{trimmed}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_session() -> Session {
        Session::from_parts("test-shop", "test-access-token").unwrap()
    }

    #[test]
    fn test_normalize_path_strips_leading_slash() {
        assert_eq!(normalize_path("/products").unwrap(), "products.json");
        assert_eq!(normalize_path("//products").unwrap(), "products.json");
    }

    #[test]
    fn test_normalize_path_keeps_single_json_suffix() {
        assert_eq!(normalize_path("products.json").unwrap(), "products.json");
        assert_eq!(normalize_path("/orders/1.json").unwrap(), "orders/1.json");
    }

    #[test]
    fn test_normalize_path_handles_nested_and_admin_paths() {
        assert_eq!(
            normalize_path("checkouts/abc/shipping_rates").unwrap(),
            "checkouts/abc/shipping_rates.json"
        );
        assert_eq!(
            normalize_path("admin/oauth/access_scopes").unwrap(),
            "admin/oauth/access_scopes.json"
        );
    }

    #[test]
    fn test_normalize_path_empty_path_returns_error() {
        for path in ["", "/", "/.json"] {
            let result = normalize_path(path);
            assert!(
                matches!(result, Err(RestError::InvalidPath { path: ref p }) if p == path),
                "{path:?}"
            );
        }
    }

    #[test]
    fn test_rest_client_new_uses_latest_version_and_single_try() {
        let client = RestClient::new(&create_test_session(), None);

        assert_eq!(client.api_version(), &ApiVersion::latest());
        assert_eq!(client.tries(), 1);
    }

    #[test]
    fn test_rest_client_takes_retries_from_config() {
        let config = ShopifyConfig::builder()
            .api_version(ApiVersion::V2025_07)
            .retries(3)
            .build()
            .unwrap();
        let client = RestClient::new(&create_test_session(), Some(&config));

        assert_eq!(client.api_version(), &ApiVersion::V2025_07);
        assert_eq!(client.tries(), 3);
    }

    #[test]
    fn test_rest_client_with_version_overrides_config() {
        let config = ShopifyConfig::builder()
            .api_version(ApiVersion::V2025_07)
            .build()
            .unwrap();
        let client =
            RestClient::with_version(&create_test_session(), Some(&config), ApiVersion::V2025_10);

        assert_eq!(client.api_version(), &ApiVersion::V2025_10);
    }
}
