//! Payments submitted against a checkout.

use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{service, Resource, ResourceError, ResourceResponse};

use super::checkout::Checkout;
use super::transaction::Transaction;

/// The card used for a payment. Only the first and last digits are ever
/// returned.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CreditCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_digits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_digits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_year: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
}

/// A payment attempt on a checkout.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Payment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Idempotency key chosen by the caller on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_processing_error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<Transaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CreditCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout: Option<Checkout>,
}

impl Resource for Payment {
    const KEY: &'static str = "payment";
    const PLURAL: &'static str = "payments";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Operations on `checkouts/{token}/payments`.
#[derive(Debug, Clone)]
pub struct PaymentService<'a> {
    client: &'a RestClient,
    token: String,
}

impl<'a> PaymentService<'a> {
    pub(crate) fn new(client: &'a RestClient, token: impl Into<String>) -> Self {
        Self {
            client,
            token: token.into(),
        }
    }

    fn path(&self, suffix: &str) -> String {
        format!("checkouts/{}/payments{suffix}.json", self.token)
    }

    /// Lists the checkout's payments.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(&self) -> Result<Vec<Payment>, ResourceError> {
        service::list(self.client, &self.path(""), None)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Counts the checkout's payments.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn count(&self) -> Result<u64, ResourceError> {
        service::count(self.client, &self.path("/count"), None).await
    }

    /// Retrieves one payment.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64) -> Result<Payment, ResourceError> {
        service::find(self.client, &self.path(&format!("/{id}")), None).await
    }

    /// Submits a payment. Shopify processes it asynchronously; poll
    /// [`get`](Self::get) for the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects it.
    pub async fn create(&self, payment: &Payment) -> Result<Payment, ResourceError> {
        service::create(self.client, &self.path(""), payment).await
    }
}
