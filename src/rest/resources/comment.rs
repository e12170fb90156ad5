//! Reader comments on blog articles. Read-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{service, GetOptions, ListOptions, Resource, ResourceError, ResourceResponse};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Comment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog_id: Option<u64>,
    /// Markdown source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// `pending`, `published`, `spam`, `removed` or `unapproved`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Comment {
    const KEY: &'static str = "comment";
    const PLURAL: &'static str = "comments";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Filters for listing and counting comments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommentListOptions {
    #[serde(flatten)]
    pub list: ListOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl From<ListOptions> for CommentListOptions {
    fn from(list: ListOptions) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

/// Operations on `comments`.
#[derive(Debug, Clone, Copy)]
pub struct CommentService<'a> {
    client: &'a RestClient,
}

impl<'a> CommentService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists comments.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(
        &self,
        options: Option<CommentListOptions>,
    ) -> Result<Vec<Comment>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, "comments.json", query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists comments along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: Option<CommentListOptions>,
    ) -> Result<ResourceResponse<Vec<Comment>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(self.client, "comments.json", query).await
    }

    /// Counts comments. Only the filters of `options` apply; paging members
    /// are ignored by Shopify.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn count(&self, options: Option<CommentListOptions>) -> Result<u64, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::count(self.client, "comments/count.json", query).await
    }

    /// Retrieves one comment.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64, options: Option<GetOptions>) -> Result<Comment, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(self.client, &format!("comments/{id}.json"), query).await
    }
}
