//! Carrier services: app endpoints Shopify calls for real-time shipping rates.

use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{service, Resource, ResourceError, ResourceResponse};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CarrierService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Whether rates are requested for every checkout, not only on demand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_discovery: Option<bool>,
    /// `api` or `legacy`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_service_type: Option<String>,
    /// `json` or `xml`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl Resource for CarrierService {
    const KEY: &'static str = "carrier_service";
    const PLURAL: &'static str = "carrier_services";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Operations on `carrier_services`.
#[derive(Debug, Clone, Copy)]
pub struct CarrierServiceService<'a> {
    client: &'a RestClient,
}

impl<'a> CarrierServiceService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists carrier services.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(&self) -> Result<Vec<CarrierService>, ResourceError> {
        service::list(self.client, "carrier_services.json", None)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Retrieves one carrier service.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64) -> Result<CarrierService, ResourceError> {
        service::find(self.client, &format!("carrier_services/{id}.json"), None).await
    }

    /// Registers a carrier service.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects it.
    pub async fn create(&self, carrier: &CarrierService) -> Result<CarrierService, ResourceError> {
        service::create(self.client, "carrier_services.json", carrier).await
    }

    /// Updates a carrier service by its id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if `carrier.id` is unset.
    pub async fn update(&self, carrier: &CarrierService) -> Result<CarrierService, ResourceError> {
        let id = carrier.require_id()?;
        service::update(self.client, &format!("carrier_services/{id}.json"), carrier).await
    }

    /// Removes a carrier service.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        service::delete(self.client, &format!("carrier_services/{id}.json"), None).await
    }
}
