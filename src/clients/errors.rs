//! HTTP-level error types.
//!
//! - [`HttpResponseError`]: a non-2xx answer from Shopify, with the error
//!   body normalised into a message and a field map
//! - [`MaxHttpRetriesExceededError`]: every allowed attempt was answered with
//!   a retryable status
//! - [`InvalidHttpRequestError`]: the request was rejected before sending
//! - [`HttpError`]: the union of the above plus network and body decode
//!   failures
//!
//! # Example
//!
//! ```rust,ignore
//! match client.request(request).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Response(e)) => println!("{} {}", e.code, e.message),
//!     Err(HttpError::MaxRetries(e)) => println!("gave up after {} tries", e.tries),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

/// A non-2xx response from the API.
///
/// Shopify reports errors under `error` or `errors`, and `errors` may be a
/// string, a list of strings, or an object mapping field names to messages.
/// [`HttpResponseError::from_body`] folds all of these into a single
/// human-readable `message` and keeps the per-field detail in `errors`.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::HttpResponseError;
/// use serde_json::json;
///
/// let error = HttpResponseError::from_body(
///     422,
///     &json!({"errors": {"title": ["can't be blank"]}}),
///     Some("req-1"),
///     None,
/// );
/// assert_eq!(error.message, "title: can't be blank");
/// assert_eq!(error.errors["title"], vec!["can't be blank".to_string()]);
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code.
    pub code: u16,
    /// A readable summary of the error body.
    pub message: String,
    /// Field-level messages. Messages with no field are stored under `base`.
    pub errors: HashMap<String, Vec<String>>,
    /// The `X-Request-Id` of the failed request.
    pub error_reference: Option<String>,
    /// Seconds to wait before retrying, from `Retry-After`.
    pub retry_after: Option<f64>,
}

impl HttpResponseError {
    /// Builds an error from a response status and its JSON body.
    #[must_use]
    pub fn from_body(
        code: u16,
        body: &Value,
        request_id: Option<&str>,
        retry_after: Option<f64>,
    ) -> Self {
        let errors = body.get("errors").map(field_errors).unwrap_or_default();

        let message = match (body.get("error"), body.get("errors")) {
            (_, Some(Value::String(s))) => s.clone(),
            (Some(Value::String(s)), _) if !s.is_empty() => s.clone(),
            _ => {
                let mut lines: Vec<String> = errors
                    .iter()
                    .flat_map(|(field, messages)| {
                        messages.iter().map(move |m| {
                            if field == BASE_FIELD {
                                m.clone()
                            } else {
                                format!("{field}: {m}")
                            }
                        })
                    })
                    .collect();
                lines.sort();
                if lines.is_empty() {
                    body.get("raw_body")
                        .and_then(Value::as_str)
                        .map_or_else(|| "Unknown Error".to_string(), ToString::to_string)
                } else {
                    lines.join(", ")
                }
            }
        };

        Self {
            code,
            message,
            errors,
            error_reference: request_id.map(ToString::to_string),
            retry_after,
        }
    }
}

const BASE_FIELD: &str = "base";

/// Normalises the `errors` member of an error body into a field map.
fn field_errors(errors: &Value) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();

    match errors {
        Value::Object(map) => {
            for (field, messages) in map {
                let messages = match messages {
                    Value::Array(arr) => arr.iter().map(message_text).collect(),
                    other => vec![message_text(other)],
                };
                result.insert(field.clone(), messages);
            }
        }
        Value::Array(arr) => {
            let messages: Vec<String> = arr.iter().map(message_text).collect();
            if !messages.is_empty() {
                result.insert(BASE_FIELD.to_string(), messages);
            }
        }
        Value::String(s) => {
            result.insert(BASE_FIELD.to_string(), vec![s.clone()]);
        }
        _ => {}
    }

    result
}

fn message_text(value: &Value) -> String {
    value
        .as_str()
        .map_or_else(|| value.to_string(), ToString::to_string)
}

/// Every allowed attempt was answered with a retryable status.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of attempts made.
    pub tries: u32,
    /// The message of the last response.
    pub message: String,
    /// The `X-Request-Id` of the last response.
    pub error_reference: Option<String>,
}

/// A request that fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request allowed zero attempts.
    #[error("A request must allow at least one attempt.")]
    NoAttempts,
}

/// Unified error type for the HTTP layer.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Retry attempts were exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A 2xx response whose body is not JSON.
    #[error("Response body with status {code} is not valid JSON: {source}")]
    InvalidBody {
        /// The HTTP status code.
        code: u16,
        /// The underlying serde error.
        source: serde_json::Error,
    },
}

impl HttpError {
    /// Returns the HTTP status code, if the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => Some(e.code),
            Self::InvalidBody { code, .. } => Some(*code),
            _ => None,
        }
    }
}
