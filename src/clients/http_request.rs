//! HTTP request types.
//!
//! [`HttpRequest`] describes one call against the Admin API: verb, path
//! relative to the API base path, an optional JSON body, query parameters and
//! the number of attempts the transport may make.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// The four verbs used by the REST Admin API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Read a resource or collection.
    Get,
    /// Create a resource or trigger an action.
    Post,
    /// Update a resource.
    Put,
    /// Remove a resource.
    Delete,
}

impl HttpMethod {
    /// Returns the matching `reqwest` method.
    #[must_use]
    pub const fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }

    /// Returns `true` for verbs that must carry a body.
    #[must_use]
    pub const fn requires_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        })
    }
}

/// A request to be sent by [`HttpClient`](super::HttpClient).
///
/// Query parameters are kept sorted so that the encoded URL is stable.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Post, "products.json")
///     .body(json!({"product": {"title": "New Product"}}))
///     .query_param("fields", "id,title")
///     .tries(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.tries, 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method.
    pub http_method: HttpMethod,
    /// The path relative to the API base path, e.g. `orders/1.json`.
    pub path: String,
    /// JSON body, required for POST and PUT.
    pub body: Option<serde_json::Value>,
    /// Query parameters.
    pub query: BTreeMap<String, String>,
    /// Headers added on top of the client's defaults.
    pub extra_headers: HashMap<String, String>,
    /// Number of attempts (default: 1).
    pub tries: u32,
}

impl HttpRequest {
    /// Creates a builder for the given method and path.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] for a POST or PUT
    /// without a body, and [`InvalidHttpRequestError::NoAttempts`] when
    /// `tries` is zero.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.http_method.requires_body() && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }
        if self.tries == 0 {
            return Err(InvalidHttpRequestError::NoAttempts);
        }
        Ok(())
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    request: HttpRequest,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            request: HttpRequest {
                http_method: method,
                path: path.into(),
                body: None,
                query: BTreeMap::new(),
                extra_headers: HashMap::new(),
                tries: 1,
            },
        }
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.request.body = Some(body.into());
        self
    }

    /// Replaces all query parameters.
    #[must_use]
    pub fn query(mut self, query: BTreeMap<String, String>) -> Self {
        self.request.query = query;
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.query.insert(key.into(), value.into());
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request
            .extra_headers
            .insert(key.into(), value.into());
        self
    }

    /// Sets the number of attempts for 429, 500 and 503 responses.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.request.tries = tries;
        self
    }

    /// Builds and validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        self.request.verify()?;
        Ok(self.request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display_and_reqwest_mapping() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
        assert_eq!(HttpMethod::Put.as_reqwest(), reqwest::Method::PUT);
        assert!(HttpMethod::Post.requires_body());
        assert!(!HttpMethod::Delete.requires_body());
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "products.json")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "products.json");
        assert!(request.body.is_none());
        assert!(request.query.is_empty());
        assert_eq!(request.tries, 1);
    }

    #[test]
    fn test_verify_requires_body_for_post_and_put() {
        let result = HttpRequest::builder(HttpMethod::Post, "products.json").build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "post"
        ));

        let result = HttpRequest::builder(HttpMethod::Put, "products/1.json").build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "put"
        ));

        let request = HttpRequest::builder(HttpMethod::Put, "products/1.json")
            .body(json!({}))
            .build();
        assert!(request.is_ok());
    }

    #[test]
    fn test_verify_rejects_zero_tries() {
        let result = HttpRequest::builder(HttpMethod::Get, "shop.json")
            .tries(0)
            .build();
        assert_eq!(result, Err(InvalidHttpRequestError::NoAttempts));
    }

    #[test]
    fn test_query_params_are_sorted() {
        let request = HttpRequest::builder(HttpMethod::Get, "orders.json")
            .query_param("status", "any")
            .query_param("limit", "50")
            .build()
            .unwrap();

        let keys: Vec<&str> = request.query.keys().map(String::as_str).collect();
        assert_eq!(keys, ["limit", "status"]);
    }

    #[test]
    fn test_builder_with_extra_headers() {
        let request = HttpRequest::builder(HttpMethod::Get, "products.json")
            .header("X-Custom-Header", "custom-value")
            .build()
            .unwrap();

        assert_eq!(
            request.extra_headers.get("X-Custom-Header"),
            Some(&"custom-value".to_string())
        );
    }
}
