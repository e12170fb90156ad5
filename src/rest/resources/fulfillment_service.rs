//! Third-party fulfillment services registered by apps.
//!
//! The DTO is named [`FulfillmentProvider`] because `FulfillmentService` is
//! already the order fulfillment sub-service.

use serde::{Deserialize, Serialize};

use crate::clients::rest::Query;
use crate::clients::RestClient;
use crate::rest::{service, Resource, ResourceError, ResourceResponse};

/// A warehouse or app that fulfills orders on the merchant's behalf.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FulfillmentProvider {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_orders_opt_in: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_pending_stock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_support: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_management: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permits_sku_sharing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<u64>,
    /// The location Shopify created for this service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl Resource for FulfillmentProvider {
    const KEY: &'static str = "fulfillment_service";
    const PLURAL: &'static str = "fulfillment_services";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Operations on `fulfillment_services`.
#[derive(Debug, Clone, Copy)]
pub struct FulfillmentProviderService<'a> {
    client: &'a RestClient,
}

impl<'a> FulfillmentProviderService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists fulfillment services. With `all`, services of other apps are
    /// included; otherwise only the caller's own.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(&self, all: bool) -> Result<Vec<FulfillmentProvider>, ResourceError> {
        let query = all.then(|| {
            let mut query = Query::new();
            query.insert("scope".to_string(), "all".to_string());
            query
        });
        service::list(self.client, "fulfillment_services.json", query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Retrieves one fulfillment service.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64) -> Result<FulfillmentProvider, ResourceError> {
        service::find(self.client, &format!("fulfillment_services/{id}.json"), None).await
    }

    /// Registers a fulfillment service.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the name is taken.
    pub async fn create(
        &self,
        provider: &FulfillmentProvider,
    ) -> Result<FulfillmentProvider, ResourceError> {
        service::create(self.client, "fulfillment_services.json", provider).await
    }

    /// Updates a fulfillment service by its id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if `provider.id` is unset.
    pub async fn update(
        &self,
        provider: &FulfillmentProvider,
    ) -> Result<FulfillmentProvider, ResourceError> {
        let id = provider.require_id()?;
        service::update(self.client, &format!("fulfillment_services/{id}.json"), provider).await
    }

    /// Removes a fulfillment service.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        service::delete(self.client, &format!("fulfillment_services/{id}.json"), None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_key_is_fulfillment_service() {
        let provider = FulfillmentProvider {
            name: Some("Jupiter Fulfillment".to_string()),
            callback_url: Some("http://google.com".to_string()),
            inventory_management: Some(true),
            ..Default::default()
        };
        assert_eq!(
            service::envelope(FulfillmentProvider::KEY, &provider).unwrap(),
            json!({"fulfillment_service": {
                "name": "Jupiter Fulfillment",
                "callback_url": "http://google.com",
                "inventory_management": true
            }})
        );
    }
}
