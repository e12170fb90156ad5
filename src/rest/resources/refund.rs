//! Refunds of an order.
//!
//! `calculate` returns the refund Shopify would create for the given line
//! items and shipping, with suggested transactions, without creating it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{service, GetOptions, ListOptions, Resource, ResourceError, ResourceResponse};

use super::common::{AmountSet, LineItem};
use super::transaction::Transaction;

/// An adjustment recorded against an order by a refund.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderAdjustment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<Decimal>,
    /// e.g. `shipping_refund` or `refund_discrepancy`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A refunded quantity of one line item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RefundLineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_item_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// `no_restock`, `cancel`, `return` or `legacy_restock`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restock_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_set: Option<AmountSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax_set: Option<AmountSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_item: Option<LineItem>,
}

/// Shipping to refund, either in full or by amount.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RefundShipping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_refund: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_refundable: Option<Decimal>,
}

/// A refund of some line items, shipping or an arbitrary amount.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Refund {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Whether to email the customer. Only used on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<RefundShipping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_adjustments: Option<Vec<OrderAdjustment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<Transaction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_line_items: Option<Vec<RefundLineItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl Resource for Refund {
    const KEY: &'static str = "refund";
    const PLURAL: &'static str = "refunds";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Operations on `orders/{order_id}/refunds`.
#[derive(Debug, Clone, Copy)]
pub struct RefundService<'a> {
    client: &'a RestClient,
    order_id: u64,
}

impl<'a> RefundService<'a> {
    pub(crate) const fn new(client: &'a RestClient, order_id: u64) -> Self {
        Self { client, order_id }
    }

    fn path(&self, suffix: &str) -> String {
        format!("orders/{}/refunds{suffix}.json", self.order_id)
    }

    /// Lists the order's refunds.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(&self, options: Option<ListOptions>) -> Result<Vec<Refund>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, &self.path(""), query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists the order's refunds along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: Option<ListOptions>,
    ) -> Result<ResourceResponse<Vec<Refund>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(self.client, &self.path(""), query).await
    }

    /// Retrieves one refund.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64, options: Option<GetOptions>) -> Result<Refund, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(self.client, &self.path(&format!("/{id}")), query).await
    }

    /// Creates a refund.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects it.
    pub async fn create(&self, refund: &Refund) -> Result<Refund, ResourceError> {
        service::create(self.client, &self.path(""), refund).await
    }

    /// Calculates a refund without creating it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the quantities are not
    /// refundable.
    pub async fn calculate(&self, refund: &Refund) -> Result<Refund, ResourceError> {
        service::create(self.client, &self.path("/calculate"), refund).await
    }
}
