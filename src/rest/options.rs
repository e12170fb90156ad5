//! Query options shared by list and count endpoints.
//!
//! Every list endpoint accepts [`ListOptions`]; resources with extra filters
//! embed it with `#[serde(flatten)]`:
//!
//! ```rust
//! use serde::Serialize;
//! use shopify_rest::rest::{to_query, ListOptions};
//!
//! #[derive(Debug, Default, Serialize)]
//! struct WidgetListOptions {
//!     #[serde(flatten)]
//!     list: ListOptions,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     color: Option<String>,
//! }
//!
//! let options = WidgetListOptions {
//!     list: ListOptions { limit: Some(50), ids: vec![1, 2], ..Default::default() },
//!     color: Some("red".to_string()),
//! };
//! let query = to_query(&options).unwrap();
//! assert_eq!(query["limit"], "50");
//! assert_eq!(query["ids"], "1,2");
//! assert_eq!(query["color"], "red");
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::clients::rest::Query;
use crate::rest::ResourceError;

/// Options common to every list endpoint.
///
/// When `page_info` is set Shopify ignores every filter except `limit` and
/// `fields`; use the options returned in
/// [`Pagination`](crate::rest::Pagination) to move between pages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ListOptions {
    /// Opaque cursor from a `Link` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
    /// Page number, for the few endpoints still paged by number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Maximum number of results (Shopify caps this at 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Only results after this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
    /// Sort order, e.g. `"created_at asc"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    /// Comma-separated list of fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    /// Restrict results to these ids. Sent comma-separated.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<u64>,
}

impl ListOptions {
    /// Options that only carry a cursor, as found in a `Link` header.
    #[must_use]
    pub fn page(page_info: impl Into<String>, limit: Option<u32>) -> Self {
        Self {
            page_info: Some(page_info.into()),
            limit,
            ..Self::default()
        }
    }
}

/// Options common to every count endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CountOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
}

/// Options accepted by single-resource GET endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GetOptions {
    /// Comma-separated list of fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

impl GetOptions {
    /// Options that only return the given fields.
    #[must_use]
    pub fn fields(fields: impl Into<String>) -> Self {
        Self {
            fields: Some(fields.into()),
        }
    }
}

/// Serializes an options struct into a flat query map.
///
/// - `null` values are skipped
/// - arrays are joined with commas
/// - nested objects are sent as their JSON text
///
/// # Errors
///
/// Returns [`ResourceError::Serialize`] if `options` cannot be represented as
/// JSON.
pub fn to_query<T: Serialize + ?Sized>(options: &T) -> Result<Query, ResourceError> {
    let value = serde_json::to_value(options).map_err(ResourceError::Serialize)?;

    let mut query = Query::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_list_options_produce_empty_query() {
        assert!(to_query(&ListOptions::default()).unwrap().is_empty());
        assert!(to_query(&CountOptions::default()).unwrap().is_empty());
    }

    #[test]
    fn test_list_options_serialize_all_kinds_of_values() {
        let options = ListOptions {
            page_info: Some("abc".to_string()),
            limit: Some(250),
            since_id: Some(123),
            created_at_min: Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()),
            order: Some("created_at asc".to_string()),
            ids: vec![1, 2, 3],
            ..Default::default()
        };

        let query = to_query(&options).unwrap();
        assert_eq!(query["page_info"], "abc");
        assert_eq!(query["limit"], "250");
        assert_eq!(query["since_id"], "123");
        assert_eq!(query["created_at_min"], "2024-01-02T03:04:05Z");
        assert_eq!(query["order"], "created_at asc");
        assert_eq!(query["ids"], "1,2,3");
        assert!(!query.contains_key("page"));
        assert!(!query.contains_key("vendor"));
    }

    #[test]
    fn test_flattened_options_and_bools() {
        #[derive(Serialize)]
        struct Options {
            #[serde(flatten)]
            list: ListOptions,
            published: Option<bool>,
            tags: Vec<&'static str>,
            nothing: Option<String>,
        }

        let options = Options {
            list: ListOptions::page("cursor", Some(10)),
            published: Some(false),
            tags: vec!["a", "b"],
            nothing: None,
        };

        let query = to_query(&options).unwrap();
        assert_eq!(query.len(), 4);
        assert_eq!(query["page_info"], "cursor");
        assert_eq!(query["limit"], "10");
        assert_eq!(query["published"], "false");
        assert_eq!(query["tags"], "a,b");
    }

    #[test]
    fn test_get_options_only_send_fields() {
        let query = to_query(&GetOptions::fields("id,title")).unwrap();
        assert_eq!(query.len(), 1);
        assert_eq!(query["fields"], "id,title");
    }

    #[test]
    fn test_non_object_options_produce_empty_query() {
        assert!(to_query(&()).unwrap().is_empty());
    }
}
