//! Tender transactions: money received for orders, across every payment
//! method. Read-only.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{service, ListOptions, Resource, ResourceError, ResourceResponse};

use super::order::PaymentDetails;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TenderTransaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_details: Option<PaymentDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

impl Resource for TenderTransaction {
    const KEY: &'static str = "tender_transaction";
    const PLURAL: &'static str = "tender_transactions";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Filters for listing tender transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TenderTransactionListOptions {
    #[serde(flatten)]
    pub list: ListOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_max: Option<DateTime<Utc>>,
}

impl From<ListOptions> for TenderTransactionListOptions {
    fn from(list: ListOptions) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

/// Operations on `tender_transactions`.
#[derive(Debug, Clone, Copy)]
pub struct TenderTransactionService<'a> {
    client: &'a RestClient,
}

impl<'a> TenderTransactionService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists tender transactions.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(
        &self,
        options: Option<TenderTransactionListOptions>,
    ) -> Result<Vec<TenderTransaction>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, "tender_transactions.json", query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists tender transactions along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: Option<TenderTransactionListOptions>,
    ) -> Result<ResourceResponse<Vec<TenderTransaction>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(self.client, "tender_transactions.json", query).await
    }
}
