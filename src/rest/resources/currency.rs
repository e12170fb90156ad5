//! Currencies enabled for the shop's storefront.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{service, Resource, ResourceError, ResourceResponse};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Currency {
    /// ISO 4217 code.
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub enabled: bool,
}

impl Resource for Currency {
    const KEY: &'static str = "currency";
    const PLURAL: &'static str = "currencies";
}

/// Reads `currencies`.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyService<'a> {
    client: &'a RestClient,
}

impl<'a> CurrencyService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists enabled currencies.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(&self) -> Result<Vec<Currency>, ResourceError> {
        service::list(self.client, "currencies.json", None)
            .await
            .map(ResourceResponse::into_inner)
    }
}
