//! Shopify Payments: the account balance, payouts, disputes and the balance
//! transactions behind them.
//!
//! ```rust,ignore
//! let payments = client.shopify_payments();
//! for balance in payments.balance().await? {
//!     println!("{} {}", balance.amount, balance.currency);
//! }
//! let payouts = payments.payouts().list(None).await?;
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{service, GetOptions, ListOptions, Resource, ResourceError, ResourceResponse};

/// Funds held in one currency.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Balance {
    pub currency: String,
    pub amount: Decimal,
}

/// A chargeback or inquiry raised by a card network.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Dispute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    /// `chargeback` or `inquiry`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub dispute_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_reason_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_due_by: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_sent_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finalized_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initiated_at: Option<DateTime<Utc>>,
}

impl Resource for Dispute {
    const KEY: &'static str = "dispute";
    const PLURAL: &'static str = "disputes";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Fee and gross totals of a payout, by transaction category.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PayoutSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustments_fee_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustments_gross_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charges_fee_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charges_gross_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunds_fee_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunds_gross_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_funds_fee_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_funds_gross_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retried_payouts_fee_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retried_payouts_gross_amount: Option<Decimal>,
}

/// A transfer of funds to the merchant's bank account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Payout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// `scheduled`, `in_transit`, `paid`, `failed` or `cancelled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Calendar day, without a time of day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<PayoutSummary>,
}

impl Resource for Payout {
    const KEY: &'static str = "payout";
    const PLURAL: &'static str = "payouts";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// A movement on the Shopify Payments balance.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BalanceTransaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// e.g. `charge`, `refund`, `dispute` or `payout`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_order_transaction_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
}

impl Resource for BalanceTransaction {
    const KEY: &'static str = "transaction";
    const PLURAL: &'static str = "transactions";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Filters for listing payouts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PayoutListOptions {
    #[serde(flatten)]
    pub list: ListOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_min: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_max: Option<NaiveDate>,
}

impl From<ListOptions> for PayoutListOptions {
    fn from(list: ListOptions) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

/// Filters for listing disputes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisputeListOptions {
    #[serde(flatten)]
    pub list: ListOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initiated_at: Option<NaiveDate>,
}

impl From<ListOptions> for DisputeListOptions {
    fn from(list: ListOptions) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

/// Filters for listing balance transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BalanceTransactionListOptions {
    #[serde(flatten)]
    pub list: ListOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
}

impl From<ListOptions> for BalanceTransactionListOptions {
    fn from(list: ListOptions) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

/// Entry point to the `shopify_payments` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ShopifyPaymentsService<'a> {
    client: &'a RestClient,
}

impl<'a> ShopifyPaymentsService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// The current balance, one entry per currency.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn balance(&self) -> Result<Vec<Balance>, ResourceError> {
        service::get(self.client, "shopify_payments/balance.json", "balance", None).await
    }

    #[must_use]
    pub const fn disputes(&self) -> DisputeService<'a> {
        DisputeService {
            client: self.client,
        }
    }

    #[must_use]
    pub const fn payouts(&self) -> PayoutService<'a> {
        PayoutService {
            client: self.client,
        }
    }

    #[must_use]
    pub const fn balance_transactions(&self) -> BalanceTransactionService<'a> {
        BalanceTransactionService {
            client: self.client,
        }
    }
}

/// Operations on `shopify_payments/disputes`.
#[derive(Debug, Clone, Copy)]
pub struct DisputeService<'a> {
    client: &'a RestClient,
}

impl DisputeService<'_> {
    /// Lists disputes, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(
        &self,
        options: Option<DisputeListOptions>,
    ) -> Result<Vec<Dispute>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, "shopify_payments/disputes.json", query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists disputes along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: Option<DisputeListOptions>,
    ) -> Result<ResourceResponse<Vec<Dispute>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(self.client, "shopify_payments/disputes.json", query).await
    }

    /// Retrieves one dispute.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64, options: Option<GetOptions>) -> Result<Dispute, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(
            self.client,
            &format!("shopify_payments/disputes/{id}.json"),
            query,
        )
        .await
    }
}

/// Operations on `shopify_payments/payouts`.
#[derive(Debug, Clone, Copy)]
pub struct PayoutService<'a> {
    client: &'a RestClient,
}

impl PayoutService<'_> {
    /// Lists payouts, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(
        &self,
        options: Option<PayoutListOptions>,
    ) -> Result<Vec<Payout>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, "shopify_payments/payouts.json", query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists payouts along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: Option<PayoutListOptions>,
    ) -> Result<ResourceResponse<Vec<Payout>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(self.client, "shopify_payments/payouts.json", query).await
    }

    /// Retrieves one payout.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64, options: Option<GetOptions>) -> Result<Payout, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(
            self.client,
            &format!("shopify_payments/payouts/{id}.json"),
            query,
        )
        .await
    }
}

/// Operations on `shopify_payments/balance/transactions`.
#[derive(Debug, Clone, Copy)]
pub struct BalanceTransactionService<'a> {
    client: &'a RestClient,
}

impl BalanceTransactionService<'_> {
    /// Lists balance transactions.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(
        &self,
        options: Option<BalanceTransactionListOptions>,
    ) -> Result<Vec<BalanceTransaction>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(
            self.client,
            "shopify_payments/balance/transactions.json",
            query,
        )
        .await
        .map(ResourceResponse::into_inner)
    }

    /// Lists balance transactions along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: Option<BalanceTransactionListOptions>,
    ) -> Result<ResourceResponse<Vec<BalanceTransaction>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(
            self.client,
            "shopify_payments/balance/transactions.json",
            query,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::to_query;
    use serde_json::json;

    #[test]
    fn test_payout_date_is_a_calendar_day() {
        let payout: Payout = serde_json::from_value(json!({
            "id": 623721858,
            "status": "paid",
            "date": "2026-10-15",
            "currency": "USD",
            "amount": "41.90",
            "summary": {"charges_fee_amount": "1.32", "charges_gross_amount": "44.52"}
        }))
        .unwrap();
        assert_eq!(payout.date, NaiveDate::from_ymd_opt(2026, 10, 15));
        assert_eq!(
            payout.summary.unwrap().charges_fee_amount,
            Some(Decimal::new(132, 2))
        );
    }

    #[test]
    fn test_type_members_are_renamed() {
        let dispute: Dispute = serde_json::from_value(json!({
            "id": 1052608616,
            "order_id": null,
            "type": "chargeback",
            "network_reason_code": "4827"
        }))
        .unwrap();
        assert_eq!(dispute.dispute_type.as_deref(), Some("chargeback"));

        let txn: BalanceTransaction =
            serde_json::from_value(json!({"id": 699519475, "type": "debit", "net": "-50.00"}))
                .unwrap();
        assert_eq!(txn.transaction_type.as_deref(), Some("debit"));
        assert_eq!(txn.net, Some(Decimal::new(-5000, 2)));
    }

    #[test]
    fn test_payout_filters() {
        let mut options = PayoutListOptions::from(ListOptions::default());
        options.date_min = NaiveDate::from_ymd_opt(2026, 1, 1);
        options.status = Some("paid".to_string());
        let query = to_query(&options).unwrap();
        assert_eq!(query["date_min"], "2026-01-01");
        assert_eq!(query["status"], "paid");
    }
}
