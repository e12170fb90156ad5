//! Blogs of the online store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{
    service, CountOptions, GetOptions, ListOptions, Resource, ResourceError, ResourceResponse,
};

use super::article::ArticleService;
use super::metafield::MetafieldService;

/// A blog: a collection of articles.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Blog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// `no`, `moderate` or `yes`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedburner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedburner_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
    /// Tags of the blog's articles, comma-separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl Resource for Blog {
    const KEY: &'static str = "blog";
    const PLURAL: &'static str = "blogs";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Operations on `blogs`.
#[derive(Debug, Clone, Copy)]
pub struct BlogService<'a> {
    client: &'a RestClient,
}

impl<'a> BlogService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists blogs.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(&self, options: Option<ListOptions>) -> Result<Vec<Blog>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, "blogs.json", query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists blogs along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: Option<ListOptions>,
    ) -> Result<ResourceResponse<Vec<Blog>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(self.client, "blogs.json", query).await
    }

    /// Counts blogs.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn count(&self, options: Option<CountOptions>) -> Result<u64, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::count(self.client, "blogs/count.json", query).await
    }

    /// Retrieves a single blog.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64, options: Option<GetOptions>) -> Result<Blog, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(self.client, &format!("blogs/{id}.json"), query).await
    }

    /// Creates a blog.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects it.
    pub async fn create(&self, blog: &Blog) -> Result<Blog, ResourceError> {
        service::create(self.client, "blogs.json", blog).await
    }

    /// Updates a blog by its id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if `blog.id` is unset.
    pub async fn update(&self, blog: &Blog) -> Result<Blog, ResourceError> {
        let id = blog.require_id()?;
        service::update(self.client, &format!("blogs/{id}.json"), blog).await
    }

    /// Deletes a blog and its articles.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        service::delete(self.client, &format!("blogs/{id}.json"), None).await
    }

    /// Articles of a blog.
    #[must_use]
    pub const fn articles(&self, blog_id: u64) -> ArticleService<'a> {
        ArticleService::new(self.client, blog_id)
    }

    /// Metafields of a blog.
    #[must_use]
    pub const fn metafields(&self, blog_id: u64) -> MetafieldService<'a> {
        MetafieldService::owned_by(self.client, "blogs", blog_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_blog() {
        let blog: Blog = serde_json::from_value(json!({
            "id": 241253187,
            "handle": "apple-blog",
            "title": "Mah Blog",
            "commentable": "no",
            "feedburner": null,
            "tags": "Announcing, Mystery",
            "updated_at": "2006-02-01T19:00:00-05:00"
        }))
        .unwrap();
        assert_eq!(blog.commentable.as_deref(), Some("no"));
        assert_eq!(blog.feedburner, None);
        assert!(blog.updated_at.is_some());
    }
}
