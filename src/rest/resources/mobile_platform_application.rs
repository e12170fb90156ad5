//! Mobile platform applications: iOS and Android app credentials used for
//! universal links and shared web credentials.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{service, ListOptions, Resource, ResourceError, ResourceResponse};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MobilePlatformApplication {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Bundle id on iOS, package name on Android.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    /// `ios` or `android`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256_cert_fingerprints: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_universal_or_app_links: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_shared_webcredentials: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for MobilePlatformApplication {
    const KEY: &'static str = "mobile_platform_application";
    const PLURAL: &'static str = "mobile_platform_applications";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Operations on `mobile_platform_applications`.
#[derive(Debug, Clone, Copy)]
pub struct MobilePlatformApplicationService<'a> {
    client: &'a RestClient,
}

impl<'a> MobilePlatformApplicationService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists the shop's mobile platform applications.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(
        &self,
        options: Option<ListOptions>,
    ) -> Result<Vec<MobilePlatformApplication>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, "mobile_platform_applications.json", query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists mobile platform applications along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: Option<ListOptions>,
    ) -> Result<ResourceResponse<Vec<MobilePlatformApplication>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(self.client, "mobile_platform_applications.json", query).await
    }

    /// Retrieves one application.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64) -> Result<MobilePlatformApplication, ResourceError> {
        service::find(
            self.client,
            &format!("mobile_platform_applications/{id}.json"),
            None,
        )
        .await
    }

    /// Registers an application.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects it.
    pub async fn create(
        &self,
        app: &MobilePlatformApplication,
    ) -> Result<MobilePlatformApplication, ResourceError> {
        service::create(self.client, "mobile_platform_applications.json", app).await
    }

    /// Updates an application by its id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if `app.id` is unset.
    pub async fn update(
        &self,
        app: &MobilePlatformApplication,
    ) -> Result<MobilePlatformApplication, ResourceError> {
        let id = app.require_id()?;
        service::update(
            self.client,
            &format!("mobile_platform_applications/{id}.json"),
            app,
        )
        .await
    }

    /// Deletes an application.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        service::delete(
            self.client,
            &format!("mobile_platform_applications/{id}.json"),
            None,
        )
        .await
    }
}
