//! HTTP response types.

use std::collections::HashMap;

/// Rate limit state parsed from `X-Shopify-Shop-Api-Call-Limit`.
///
/// The header has the form `"X/Y"`: X calls used out of a bucket of Y.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::ApiCallLimit;
///
/// let limit = ApiCallLimit::parse("40/80").unwrap();
/// assert_eq!(limit.request_count, 40);
/// assert_eq!(limit.bucket_size, 80);
/// assert_eq!(limit.remaining(), 40);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiCallLimit {
    /// Calls used in the current bucket.
    pub request_count: u32,
    /// Size of the bucket.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses a header value in `"X/Y"` form.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (count, size) = header_value.trim().split_once('/')?;
        Some(Self {
            request_count: count.parse().ok()?,
            bucket_size: size.parse().ok()?,
        })
    }

    /// Calls left before the bucket is full.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.bucket_size.saturating_sub(self.request_count)
    }
}

/// A response from the Admin API.
///
/// Header names are stored lowercased. Shopify-specific headers are parsed
/// when the response is built.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (a header may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed JSON body, or `{}` when the body was empty.
    pub body: serde_json::Value,
    /// Rate limit state from `X-Shopify-Shop-Api-Call-Limit`.
    pub api_call_limit: Option<ApiCallLimit>,
    /// Seconds to wait before retrying, from `Retry-After`.
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a response, parsing the rate limit and `Retry-After` headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let first = |name: &str| {
            headers
                .get(name)
                .and_then(|values| values.first())
                .map(String::as_str)
        };

        let api_call_limit = first("x-shopify-shop-api-call-limit").and_then(ApiCallLimit::parse);
        let retry_request_after = first("retry-after").and_then(|v| v.trim().parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            api_call_limit,
            retry_request_after,
        }
    }

    /// Returns `true` for a 2xx status.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the raw `Link` header used for cursor pagination.
    #[must_use]
    pub fn link_header(&self) -> Option<&str> {
        self.header("link")
    }

    /// Returns the `X-Request-Id` header value.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header value.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("x-shopify-api-deprecated-reason")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect()
    }

    #[test]
    fn test_is_ok_only_for_2xx() {
        assert!(HttpResponse::new(200, HashMap::new(), json!({})).is_ok());
        assert!(HttpResponse::new(201, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(302, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(404, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(429, HashMap::new(), json!({})).is_ok());
    }

    #[test]
    fn test_api_call_limit_parsing() {
        assert_eq!(
            ApiCallLimit::parse("1/40"),
            Some(ApiCallLimit {
                request_count: 1,
                bucket_size: 40
            })
        );
        assert!(ApiCallLimit::parse("invalid").is_none());
        assert!(ApiCallLimit::parse("40").is_none());
        assert!(ApiCallLimit::parse("40/").is_none());
        assert!(ApiCallLimit::parse("/80").is_none());
        assert_eq!(ApiCallLimit::parse("90/80").map(|l| l.remaining()), Some(0));
    }

    #[test]
    fn test_shopify_headers_are_parsed() {
        let response = HttpResponse::new(
            429,
            headers(&[
                ("x-shopify-shop-api-call-limit", "40/40"),
                ("retry-after", "2.0"),
                ("x-request-id", "req-1"),
                ("x-shopify-api-deprecated-reason", "use graphql"),
                ("link", "<https://x.myshopify.com/admin/api/2025-10/orders.json?page_info=a>; rel=\"next\""),
            ]),
            json!({}),
        );

        assert_eq!(response.api_call_limit.map(|l| l.bucket_size), Some(40));
        assert_eq!(response.retry_request_after, Some(2.0));
        assert_eq!(response.request_id(), Some("req-1"));
        assert_eq!(response.deprecation_reason(), Some("use graphql"));
        assert!(response.link_header().is_some_and(|l| l.contains("page_info=a")));
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = HttpResponse::new(200, headers(&[("x-request-id", "abc")]), json!({}));
        assert_eq!(response.header("X-Request-Id"), Some("abc"));
        assert!(response.header("Link").is_none());
    }
}
