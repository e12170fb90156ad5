//! Fulfillments of an order.
//!
//! Reached through `client.orders().fulfillments(order_id)`. Besides CRUD,
//! a fulfillment can be completed, re-opened or cancelled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{
    service, CountOptions, GetOptions, ListOptions, Resource, ResourceError, ResourceResponse,
};

use super::common::LineItem;

/// The gateway receipt attached to a fulfillment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Receipt {
    #[serde(rename = "testcase", skip_serializing_if = "Option::is_none")]
    pub test_case: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,
}

/// A shipment of some or all line items of an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Fulfillment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,

    /// e.g. `"#1001.1"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<Receipt>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_status: Option<String>,

    /// `pending`, `open`, `success`, `cancelled`, `error` or `failure`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_numbers: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_urls: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,

    /// Whether to email the customer. Only used on create and update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_customer: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl Resource for Fulfillment {
    const KEY: &'static str = "fulfillment";
    const PLURAL: &'static str = "fulfillments";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Fulfillments of one owner, usually an order.
#[derive(Debug, Clone, Copy)]
pub struct FulfillmentService<'a> {
    client: &'a RestClient,
    resource: &'static str,
    resource_id: u64,
}

impl<'a> FulfillmentService<'a> {
    pub(crate) const fn new(client: &'a RestClient, resource: &'static str, resource_id: u64) -> Self {
        Self {
            client,
            resource,
            resource_id,
        }
    }

    fn path(&self, suffix: &str) -> String {
        format!("{}/{}/fulfillments{suffix}.json", self.resource, self.resource_id)
    }

    /// Lists fulfillments.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(&self, options: Option<ListOptions>) -> Result<Vec<Fulfillment>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, &self.path(""), query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists fulfillments along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: Option<ListOptions>,
    ) -> Result<ResourceResponse<Vec<Fulfillment>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(self.client, &self.path(""), query).await
    }

    /// Counts fulfillments.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn count(&self, options: Option<CountOptions>) -> Result<u64, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::count(self.client, &self.path("/count"), query).await
    }

    /// Retrieves a single fulfillment.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64, options: Option<GetOptions>) -> Result<Fulfillment, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(self.client, &self.path(&format!("/{id}")), query).await
    }

    /// Creates a fulfillment.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects it.
    pub async fn create(&self, fulfillment: &Fulfillment) -> Result<Fulfillment, ResourceError> {
        service::create(self.client, &self.path(""), fulfillment).await
    }

    /// Updates a fulfillment by its id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if `fulfillment.id` is unset.
    pub async fn update(&self, fulfillment: &Fulfillment) -> Result<Fulfillment, ResourceError> {
        let id = fulfillment.require_id()?;
        service::update(self.client, &self.path(&format!("/{id}")), fulfillment).await
    }

    /// Marks a pending fulfillment as complete.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn complete(&self, id: u64) -> Result<Fulfillment, ResourceError> {
        service::action(self.client, &self.path(&format!("/{id}/complete")), None, None).await
    }

    /// Transitions a fulfillment to `open`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn transition(&self, id: u64) -> Result<Fulfillment, ResourceError> {
        service::action(self.client, &self.path(&format!("/{id}/open")), None, None).await
    }

    /// Cancels a fulfillment.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn cancel(&self, id: u64) -> Result<Fulfillment, ResourceError> {
        service::action(self.client, &self.path(&format!("/{id}/cancel")), None, None).await
    }
}
