//! Articles of a blog, plus the shop-wide author and tag lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{
    service, CountOptions, GetOptions, ListOptions, Resource, ResourceError, ResourceResponse,
};

use super::common::Image;
use super::metafield::MetafieldService;

/// A blog post.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Article {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// Set to `false` on create to keep the article hidden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl Resource for Article {
    const KEY: &'static str = "article";
    const PLURAL: &'static str = "articles";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Filters for listing articles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArticleListOptions {
    #[serde(flatten)]
    pub list: ListOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// `published`, `unpublished` or `any`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,
}

impl From<ListOptions> for ArticleListOptions {
    fn from(list: ListOptions) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

/// Operations on `blogs/{blog_id}/articles`.
#[derive(Debug, Clone, Copy)]
pub struct ArticleService<'a> {
    client: &'a RestClient,
    blog_id: u64,
}

impl<'a> ArticleService<'a> {
    pub(crate) const fn new(client: &'a RestClient, blog_id: u64) -> Self {
        Self { client, blog_id }
    }

    fn path(&self, suffix: &str) -> String {
        format!("blogs/{}/articles{suffix}.json", self.blog_id)
    }

    /// Lists the blog's articles.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(
        &self,
        options: Option<ArticleListOptions>,
    ) -> Result<Vec<Article>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, &self.path(""), query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists the blog's articles along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: Option<ArticleListOptions>,
    ) -> Result<ResourceResponse<Vec<Article>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(self.client, &self.path(""), query).await
    }

    /// Counts the blog's articles.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn count(&self, options: Option<CountOptions>) -> Result<u64, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::count(self.client, &self.path("/count"), query).await
    }

    /// Retrieves one article.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64, options: Option<GetOptions>) -> Result<Article, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(self.client, &self.path(&format!("/{id}")), query).await
    }

    /// Publishes an article in the blog.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects it.
    pub async fn create(&self, article: &Article) -> Result<Article, ResourceError> {
        service::create(self.client, &self.path(""), article).await
    }

    /// Updates an article by its id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if `article.id` is unset.
    pub async fn update(&self, article: &Article) -> Result<Article, ResourceError> {
        let id = article.require_id()?;
        service::update(self.client, &self.path(&format!("/{id}")), article).await
    }

    /// Deletes an article.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        service::delete(self.client, &self.path(&format!("/{id}")), None).await
    }

    /// Every article author in the shop.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn authors(&self) -> Result<Vec<String>, ResourceError> {
        service::get(self.client, "articles/authors.json", "authors", None).await
    }

    /// Every article tag in the shop.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn tags(&self) -> Result<Vec<String>, ResourceError> {
        service::get(self.client, "articles/tags.json", "tags", None).await
    }

    /// Metafields of an article.
    #[must_use]
    pub const fn metafields(&self, article_id: u64) -> MetafieldService<'a> {
        MetafieldService::owned_by(self.client, "articles", article_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Session;
    use serde_json::json;

    #[test]
    fn test_paths_are_nested_under_blog() {
        let client = RestClient::new(&Session::from_parts("shop", "token").unwrap(), None);
        let service = ArticleService::new(&client, 241_253_187);
        assert_eq!(service.path(""), "blogs/241253187/articles.json");
        assert_eq!(service.path("/count"), "blogs/241253187/articles/count.json");
    }

    #[test]
    fn test_article_payload() {
        let article = Article {
            title: Some("My new Article title".to_string()),
            author: Some("John Smith".to_string()),
            tags: Some("This Post, Has Been Tagged".to_string()),
            published: Some(false),
            ..Default::default()
        };
        assert_eq!(
            service::envelope(Article::KEY, &article).unwrap(),
            json!({"article": {
                "title": "My new Article title",
                "author": "John Smith",
                "tags": "This Post, Has Been Tagged",
                "published": false
            }})
        );
    }
}
