//! Cursor pagination from the `Link` response header.
//!
//! Shopify answers paginated list requests with a header such as:
//!
//! ```text
//! Link: <https://shop.myshopify.com/admin/api/2025-10/products.json?limit=50&page_info=abc>; rel="previous",
//!       <https://shop.myshopify.com/admin/api/2025-10/products.json?limit=50&page_info=def>; rel="next"
//! ```
//!
//! [`Pagination::from_link_header`] turns it into ready-to-send
//! [`ListOptions`] for the neighbouring pages.

use thiserror::Error;

use crate::rest::ListOptions;

/// A `Link` header that could not be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinkHeaderError {
    /// A segment is not of the form `<url>; rel="next"` or `<url>; rel="previous"`.
    #[error("could not extract pagination link header: {segment}")]
    Malformed {
        /// The offending comma-separated segment.
        segment: String,
    },

    /// A link URL has no `page_info` query parameter.
    #[error("page_info is missing in pagination link: {url}")]
    MissingPageInfo {
        /// The link URL.
        url: String,
    },

    /// A link URL has a `limit` that is not an integer.
    #[error("invalid limit {value:?} in pagination link")]
    InvalidLimit {
        /// The raw `limit` value.
        value: String,
    },
}

/// Options for the pages around a list response.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::Pagination;
///
/// let header = r#"<https://x.myshopify.com/admin/api/2025-10/orders.json?limit=2&page_info=n1>; rel="next""#;
/// let pagination = Pagination::from_link_header(header).unwrap();
///
/// let next = pagination.next_page_options.unwrap();
/// assert_eq!(next.page_info.as_deref(), Some("n1"));
/// assert_eq!(next.limit, Some(2));
/// assert!(pagination.previous_page_options.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Options that fetch the next page.
    pub next_page_options: Option<ListOptions>,
    /// Options that fetch the previous page.
    pub previous_page_options: Option<ListOptions>,
}

impl Pagination {
    /// Parses a `Link` header value.
    ///
    /// An empty header means there are no neighbouring pages.
    ///
    /// # Errors
    ///
    /// Returns a [`LinkHeaderError`] if any segment is malformed, has no
    /// `page_info`, or has a non-integer `limit`.
    pub fn from_link_header(header: &str) -> Result<Self, LinkHeaderError> {
        let mut pagination = Self::default();

        if header.trim().is_empty() {
            return Ok(pagination);
        }

        for segment in split_segments(header) {
            let (url, rel) = parse_segment(segment).ok_or_else(|| LinkHeaderError::Malformed {
                segment: segment.trim().to_string(),
            })?;

            let options = page_options(url)?;
            tracing::trace!(rel, page_info = ?options.page_info, "parsed pagination link");

            if rel == "next" {
                pagination.next_page_options = Some(options);
            } else {
                pagination.previous_page_options = Some(options);
            }
        }

        Ok(pagination)
    }

    /// Returns `true` if there is a next page.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next_page_options.is_some()
    }

    /// Returns `true` if there is a previous page.
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.previous_page_options.is_some()
    }
}

/// Splits a header on the commas that separate links, leaving commas inside
/// `<...>` alone.
fn split_segments(header: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut in_url = false;
    let mut start = 0;

    for (i, c) in header.char_indices() {
        match c {
            '<' => in_url = true,
            '>' => in_url = false,
            ',' if !in_url => {
                segments.push(&header[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&header[start..]);
    segments
}

/// Splits `<url>; rel="next"` into its URL and rel.
fn parse_segment(segment: &str) -> Option<(&str, &str)> {
    let (target, params) = segment.trim().split_once(';')?;

    let url = target.trim().strip_prefix('<')?.strip_suffix('>')?;
    if url.is_empty() || url.contains('>') {
        return None;
    }

    let rel = params
        .trim()
        .strip_prefix("rel=\"")?
        .strip_suffix('"')?;

    matches!(rel, "next" | "previous").then_some((url, rel))
}

fn page_options(url: &str) -> Result<ListOptions, LinkHeaderError> {
    let query = url.split_once('?').map_or("", |(_, q)| q);

    let mut page_info = None;
    let mut limit = None;

    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let value = urlencoding::decode(value).map_or_else(|_| value.to_string(), |v| v.into_owned());
        match key {
            "page_info" => page_info = Some(value),
            "limit" => {
                let parsed = value
                    .parse::<u32>()
                    .map_err(|_| LinkHeaderError::InvalidLimit { value: value.clone() })?;
                limit = Some(parsed);
            }
            _ => {}
        }
    }

    match page_info {
        Some(page_info) if !page_info.is_empty() => Ok(ListOptions::page(page_info, limit)),
        _ => Err(LinkHeaderError::MissingPageInfo {
            url: url.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://fooshop.myshopify.com/admin/api/2025-10/products.json";

    #[test]
    fn test_empty_header_has_no_pages() {
        let pagination = Pagination::from_link_header("").unwrap();
        assert_eq!(pagination, Pagination::default());
        assert!(!pagination.has_next_page());
        assert!(!pagination.has_previous_page());
    }

    #[test]
    fn test_next_and_previous_links() {
        let header = format!(
            r#"<{BASE}?page_info=prev-cursor&limit=10>; rel="previous", <{BASE}?limit=10&page_info=next-cursor>; rel="next""#
        );
        let pagination = Pagination::from_link_header(&header).unwrap();

        assert_eq!(
            pagination.next_page_options,
            Some(ListOptions::page("next-cursor", Some(10)))
        );
        assert_eq!(
            pagination.previous_page_options,
            Some(ListOptions::page("prev-cursor", Some(10)))
        );
    }

    #[test]
    fn test_commas_inside_urls_do_not_split_links() {
        let header = format!(
            r#"<{BASE}?fields=id,title&page_info=prev>; rel="previous", <{BASE}?fields=id,title&limit=5&page_info=next>; rel="next""#
        );
        let pagination = Pagination::from_link_header(&header).unwrap();

        assert_eq!(
            pagination.next_page_options,
            Some(ListOptions::page("next", Some(5)))
        );
        assert_eq!(
            pagination.previous_page_options,
            Some(ListOptions::page("prev", None))
        );
    }

    #[test]
    fn test_link_without_limit() {
        let header = format!(r#"<{BASE}?page_info=abc>; rel="next""#);
        let next = Pagination::from_link_header(&header)
            .unwrap()
            .next_page_options
            .unwrap();
        assert_eq!(next.page_info.as_deref(), Some("abc"));
        assert_eq!(next.limit, None);
    }

    #[test]
    fn test_page_info_is_percent_decoded() {
        let header = format!(r#"<{BASE}?page_info=a%3Db>; rel="next""#);
        let next = Pagination::from_link_header(&header)
            .unwrap()
            .next_page_options
            .unwrap();
        assert_eq!(next.page_info.as_deref(), Some("a=b"));
    }

    #[test]
    fn test_malformed_segments_are_rejected() {
        for header in [
            "invalid link",
            "<:invalid.url>; rel=\"next\"x",
            &format!(r#"<{BASE}?page_info=abc>; rel="last""#),
            &format!(r#"{BASE}?page_info=abc; rel="next""#),
        ] {
            assert!(
                matches!(
                    Pagination::from_link_header(header),
                    Err(LinkHeaderError::Malformed { .. })
                ),
                "{header}"
            );
        }
    }

    #[test]
    fn test_missing_page_info_is_rejected() {
        let header = format!(r#"<{BASE}?limit=1>; rel="next""#);
        assert!(matches!(
            Pagination::from_link_header(&header),
            Err(LinkHeaderError::MissingPageInfo { .. })
        ));

        let header = format!(r#"<{BASE}?page_info=>; rel="next""#);
        assert!(matches!(
            Pagination::from_link_header(&header),
            Err(LinkHeaderError::MissingPageInfo { .. })
        ));
    }

    #[test]
    fn test_invalid_limit_is_rejected() {
        let header = format!(r#"<{BASE}?page_info=abc&limit=many>; rel="next""#);
        assert_eq!(
            Pagination::from_link_header(&header),
            Err(LinkHeaderError::InvalidLimit {
                value: "many".to_string()
            })
        );
    }
}
