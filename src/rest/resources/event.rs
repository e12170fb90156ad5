//! The shop's activity feed: things that happened to orders, products and
//! other resources. Read-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{service, GetOptions, ListOptions, Resource, ResourceError, ResourceResponse};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Event {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<u64>,
    /// e.g. `Order`, `Product` or `Article`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_type: Option<String>,
    /// e.g. `create`, `destroy` or `published`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Admin path of the subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for Event {
    const KEY: &'static str = "event";
    const PLURAL: &'static str = "events";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Filters for listing and counting events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventListOptions {
    #[serde(flatten)]
    pub list: ListOptions,
    /// Comma-separated subject types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verb: Option<String>,
}

impl From<ListOptions> for EventListOptions {
    fn from(list: ListOptions) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

/// Operations on `events`.
#[derive(Debug, Clone, Copy)]
pub struct EventService<'a> {
    client: &'a RestClient,
}

impl<'a> EventService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists events.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(&self, options: Option<EventListOptions>) -> Result<Vec<Event>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, "events.json", query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists events along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: Option<EventListOptions>,
    ) -> Result<ResourceResponse<Vec<Event>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(self.client, "events.json", query).await
    }

    /// Counts events.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn count(&self, options: Option<EventListOptions>) -> Result<u64, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::count(self.client, "events/count.json", query).await
    }

    /// Retrieves one event.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64, options: Option<GetOptions>) -> Result<Event, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(self.client, &format!("events/{id}.json"), query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_event() {
        let event: Event = serde_json::from_value(json!({
            "id": 677313116,
            "subject_id": 921728736,
            "created_at": "2026-10-15T12:00:00-04:00",
            "subject_type": "Product",
            "verb": "create",
            "arguments": ["IPod Touch 8GB"],
            "body": null,
            "message": "Product was created: <a href=\"https://x.myshopify.com/admin/products/921728736\">IPod Touch 8GB</a>.",
            "author": "Shopify",
            "description": "Product was created: IPod Touch 8GB.",
            "path": "/admin/products/921728736"
        }))
        .unwrap();
        assert_eq!(event.subject_type.as_deref(), Some("Product"));
        assert_eq!(event.arguments.unwrap(), vec!["IPod Touch 8GB".to_string()]);
        assert_eq!(event.body, None);
    }
}
