//! Abandoned checkouts: checkouts that never turned into orders.

use serde::Serialize;

use crate::clients::RestClient;
use crate::rest::{service, ListOptions, ResourceError, ResourceResponse};

use super::checkout::Checkout;

/// Filters for listing and counting abandoned checkouts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AbandonedCheckoutListOptions {
    #[serde(flatten)]
    pub list: ListOptions,
    /// `open` (the default) or `closed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl From<ListOptions> for AbandonedCheckoutListOptions {
    fn from(list: ListOptions) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

/// Operations on `checkouts`.
#[derive(Debug, Clone, Copy)]
pub struct AbandonedCheckoutService<'a> {
    client: &'a RestClient,
}

impl<'a> AbandonedCheckoutService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists abandoned checkouts.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(
        &self,
        options: Option<AbandonedCheckoutListOptions>,
    ) -> Result<Vec<Checkout>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, "checkouts.json", query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists abandoned checkouts along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: Option<AbandonedCheckoutListOptions>,
    ) -> Result<ResourceResponse<Vec<Checkout>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(self.client, "checkouts.json", query).await
    }

    /// Counts abandoned checkouts.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn count(
        &self,
        options: Option<AbandonedCheckoutListOptions>,
    ) -> Result<u64, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::count(self.client, "checkouts/count.json", query).await
    }
}
