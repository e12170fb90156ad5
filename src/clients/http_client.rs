//! HTTP transport for the Admin API.
//!
//! [`HttpClient`] owns the `reqwest` client, the base URL and the default
//! headers for one shop, and implements the retry loop.

use std::collections::HashMap;
use std::time::Duration;

use crate::auth::Session;
use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::ShopifyConfig;

/// Fixed wait between retries when Shopify gives no `Retry-After`.
pub const RETRY_WAIT_TIME: u64 = 1;

/// Crate version, sent in the `User-Agent` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Statuses that are worth another attempt.
const RETRYABLE_STATUSES: [u16; 3] = [429, 500, 503];

/// HTTP client bound to a single shop.
///
/// The client:
/// - resolves `https://{shop}` (or the configured `api_host`) plus a base
///   path such as `/admin/api/2025-10`
/// - sends `User-Agent`, `Accept` and `X-Shopify-Access-Token` on every call
/// - retries 429, 500 and 503 responses up to the request's `tries`
///
/// Paths starting with `admin/` skip the versioned base path, which is how
/// unversioned endpoints such as `admin/oauth/access_scopes.json` are reached.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::clients::{HttpClient, HttpMethod, HttpRequest};
/// use shopify_rest::Session;
///
/// let session = Session::from_parts("my-store", "shpat_123")?;
/// let client = HttpClient::new("/admin/api/2025-10", &session, None);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "shop.json").build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    base_path: String,
    default_headers: HashMap<String, String>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client for the session's shop.
    ///
    /// With an `api_host` configured, requests go to that origin and the
    /// shop domain is sent in the `Host` header instead.
    #[must_use]
    pub fn new(
        base_path: impl Into<String>,
        session: &Session,
        config: Option<&ShopifyConfig>,
    ) -> Self {
        let api_host = config.and_then(ShopifyConfig::api_host);
        let base_uri = api_host.map_or_else(
            || format!("https://{}", session.shop.as_ref()),
            |host| host.origin().to_string(),
        );

        let user_agent_prefix = config
            .and_then(ShopifyConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Shopify REST Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "X-Shopify-Access-Token".to_string(),
            session.access_token.as_ref().to_string(),
        );
        if api_host.is_some() {
            default_headers.insert("Host".to_string(), session.shop.as_ref().to_string());
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_uri,
            base_path: base_path.into(),
            default_headers,
        }
    }

    /// Returns the base URI, e.g. `https://my-store.myshopify.com`.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path, e.g. `/admin/api/2025-10`.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL for a request path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if has_admin_prefix(path) {
            format!("{}/{path}", self.base_uri)
        } else {
            format!("{}{}/{path}", self.base_uri, self.base_path)
        }
    }

    /// Sends a request.
    ///
    /// # Errors
    ///
    /// - [`HttpError::InvalidRequest`] if the request fails validation
    /// - [`HttpError::Network`] for connection or body read failures
    /// - [`HttpError::Response`] for a non-2xx status that is not retried,
    ///   or a retryable status when only one attempt was allowed
    /// - [`HttpError::MaxRetries`] when all attempts were used up
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);

        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        for (key, value) in &request.extra_headers {
            headers.insert(key.clone(), value.clone());
        }

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            tracing::debug!(
                method = %request.http_method,
                path = %request.path,
                attempt = tries,
                "sending Shopify API request"
            );

            let mut builder = self
                .client
                .request(request.http_method.as_reqwest(), &url);
            for (key, value) in &headers {
                builder = builder.header(key, value);
            }
            if !request.query.is_empty() {
                builder = builder.query(&request.query);
            }
            if let Some(body) = &request.body {
                builder = builder.body(body.to_string());
            }

            let res = builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await?;
            let body = Self::parse_body(code, &body_text).map_err(|source| {
                tracing::warn!(
                    status = code,
                    path = %request.path,
                    "Shopify API response body is not valid JSON"
                );
                HttpError::InvalidBody { code, source }
            })?;

            let response = HttpResponse::new(code, res_headers, body);

            if let Some(reason) = response.deprecation_reason() {
                tracing::warn!(
                    path = %request.path,
                    reason,
                    "deprecated Shopify API endpoint"
                );
            }

            if response.is_ok() {
                return Ok(response);
            }

            let error = HttpResponseError::from_body(
                code,
                &response.body,
                response.request_id(),
                response.retry_request_after,
            );

            if !RETRYABLE_STATUSES.contains(&code) || request.tries == 1 {
                return Err(HttpError::Response(error));
            }

            if tries >= request.tries {
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: request.tries,
                    message: error.message,
                    error_reference: error.error_reference,
                }));
            }

            let delay = Self::calculate_retry_delay(&response, code);
            tracing::warn!(
                status = code,
                attempt = tries,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "retrying Shopify API request"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Empty bodies read as `{}`. Non-JSON error bodies are kept under
    /// `raw_body`; a non-JSON 2xx body is an error.
    fn parse_body(code: u16, body_text: &str) -> Result<serde_json::Value, serde_json::Error> {
        if body_text.trim().is_empty() {
            return Ok(serde_json::json!({}));
        }
        match serde_json::from_str(body_text) {
            Ok(body) => Ok(body),
            Err(e) if (200..=299).contains(&code) => Err(e),
            Err(_) => Ok(serde_json::json!({ "raw_body": body_text })),
        }
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let value = value.to_str().unwrap_or_default().to_string();
            result
                .entry(name.as_str().to_lowercase())
                .or_default()
                .push(value);
        }
        result
    }

    /// 429 honours `Retry-After`; everything else waits the fixed delay.
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> Duration {
        if status == 429 {
            if let Some(retry_after) = response.retry_request_after {
                if let Ok(delay) = Duration::try_from_secs_f64(retry_after) {
                    return delay;
                }
            }
        }
        Duration::from_secs(RETRY_WAIT_TIME)
    }
}

/// Paths starting with `admin/` are resolved against the base URI only.
fn has_admin_prefix(path: &str) -> bool {
    path.starts_with("admin/")
}
