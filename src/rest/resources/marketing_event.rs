//! Marketing events: campaigns an app runs for the shop, tracked through UTM
//! parameters.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{
    service, CountOptions, GetOptions, ListOptions, Resource, ResourceError, ResourceResponse,
};

/// A resource promoted by a marketing event.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MarketedResource {
    pub id: u64,
    /// `product`, `collection`, `price_rule`, `page`, `article` or `homepage`.
    #[serde(rename = "type")]
    pub resource_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MarketingEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// e.g. `ad`, `post`, `message` or `newsletter`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing_channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Decimal>,
    /// `daily` or `lifetime`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referring_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breadcrumb_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing_activity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketed_resources: Option<Vec<MarketedResource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_to_end_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl Resource for MarketingEvent {
    const KEY: &'static str = "marketing_event";
    const PLURAL: &'static str = "marketing_events";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Operations on `marketing_events`.
#[derive(Debug, Clone, Copy)]
pub struct MarketingEventService<'a> {
    client: &'a RestClient,
}

impl<'a> MarketingEventService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists marketing events.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(
        &self,
        options: Option<ListOptions>,
    ) -> Result<Vec<MarketingEvent>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, "marketing_events.json", query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists marketing events along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: Option<ListOptions>,
    ) -> Result<ResourceResponse<Vec<MarketingEvent>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(self.client, "marketing_events.json", query).await
    }

    /// Counts marketing events.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn count(&self, options: Option<CountOptions>) -> Result<u64, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::count(self.client, "marketing_events/count.json", query).await
    }

    /// Retrieves one marketing event.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(
        &self,
        id: u64,
        options: Option<GetOptions>,
    ) -> Result<MarketingEvent, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(self.client, &format!("marketing_events/{id}.json"), query).await
    }

    /// Creates a marketing event.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects it.
    pub async fn create(&self, event: &MarketingEvent) -> Result<MarketingEvent, ResourceError> {
        service::create(self.client, "marketing_events.json", event).await
    }

    /// Updates a marketing event by its id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if `event.id` is unset.
    pub async fn update(&self, event: &MarketingEvent) -> Result<MarketingEvent, ResourceError> {
        let id = event.require_id()?;
        service::update(self.client, &format!("marketing_events/{id}.json"), event).await
    }

    /// Deletes a marketing event.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        service::delete(self.client, &format!("marketing_events/{id}.json"), None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_marketed_resource_type_is_renamed() {
        let event = MarketingEvent {
            event_type: Some("ad".to_string()),
            utm_campaign: Some("Christmas2026".to_string()),
            marketed_resources: Some(vec![MarketedResource {
                id: 921_728_736,
                resource_type: "product".to_string(),
            }]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "event_type": "ad",
                "utm_campaign": "Christmas2026",
                "marketed_resources": [{"id": 921728736, "type": "product"}]
            })
        );
    }
}
