//! Payment transactions of an order.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{
    service, CountOptions, GetOptions, ListOptions, Resource, ResourceError, ResourceResponse,
};

use super::fulfillment::Receipt;
use super::order::PaymentDetails;

/// Money moving between the customer and the shop for one order.
///
/// `kind` is one of `authorization`, `capture`, `sale`, `void` or `refund`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Transaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The transaction this one captures, voids or refunds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<Receipt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    /// `pending`, `failure`, `success` or `error`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_details: Option<PaymentDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl Resource for Transaction {
    const KEY: &'static str = "transaction";
    const PLURAL: &'static str = "transactions";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Operations on `orders/{order_id}/transactions`.
#[derive(Debug, Clone, Copy)]
pub struct TransactionService<'a> {
    client: &'a RestClient,
    order_id: u64,
}

impl<'a> TransactionService<'a> {
    pub(crate) const fn new(client: &'a RestClient, order_id: u64) -> Self {
        Self { client, order_id }
    }

    fn path(&self, suffix: &str) -> String {
        format!("orders/{}/transactions{suffix}.json", self.order_id)
    }

    /// Lists the order's transactions.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(&self, options: Option<ListOptions>) -> Result<Vec<Transaction>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, &self.path(""), query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists the order's transactions along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: Option<ListOptions>,
    ) -> Result<ResourceResponse<Vec<Transaction>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(self.client, &self.path(""), query).await
    }

    /// Counts the order's transactions.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn count(&self, options: Option<CountOptions>) -> Result<u64, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::count(self.client, &self.path("/count"), query).await
    }

    /// Retrieves one transaction.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64, options: Option<GetOptions>) -> Result<Transaction, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(self.client, &self.path(&format!("/{id}")), query).await
    }

    /// Creates a transaction, e.g. a capture of an authorization.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects it.
    pub async fn create(&self, transaction: &Transaction) -> Result<Transaction, ResourceError> {
        service::create(self.client, &self.path(""), transaction).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_transaction() {
        let transaction: Transaction = serde_json::from_value(json!({
            "id": 389404469,
            "order_id": 450789469,
            "kind": "authorization",
            "gateway": "bogus",
            "status": "success",
            "amount": "598.94",
            "parent_id": null,
            "device_id": null,
            "receipt": {"testcase": true, "authorization": "123456"},
            "payment_details": {"credit_card_bin": "1", "credit_card_company": "Visa"},
            "processed_at": "2005-08-01T11:57:11-04:00"
        }))
        .unwrap();

        assert_eq!(transaction.amount, Some(Decimal::new(59894, 2)));
        assert_eq!(transaction.parent_id, None);
        assert_eq!(
            transaction.payment_details.unwrap().credit_card_company.as_deref(),
            Some("Visa")
        );
    }

    #[test]
    fn test_capture_payload() {
        let capture = Transaction {
            kind: Some("capture".to_string()),
            amount: Some(Decimal::new(1000, 2)),
            parent_id: Some(389_404_469),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&capture).unwrap(),
            json!({"kind": "capture", "amount": "10.00", "parent_id": 389404469})
        );
    }
}
