//! Orders and their lifecycle actions.
//!
//! Besides CRUD, orders can be cancelled, closed and re-opened. Nested
//! resources hang off the service:
//!
//! ```rust,ignore
//! let orders = client.orders();
//! let order = orders.get(450789469, None).await?;
//! let fulfillments = orders.fulfillments(450789469).list(None).await?;
//! let refunds = orders.refunds(450789469).list(None).await?;
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{service, GetOptions, ListOptions, Resource, ResourceError, ResourceResponse};

use super::common::{
    Address, AmountSet, DiscountApplication, DiscountCode, LineItem, NoteAttribute, ShippingLine,
    TaxLine,
};
use super::customer::Customer;
use super::fulfillment::{Fulfillment, FulfillmentService};
use super::metafield::MetafieldService;
use super::order_risk::OrderRiskService;
use super::refund::{Refund, RefundService};
use super::transaction::TransactionService;

/// Payment state of an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinancialStatus {
    Pending,
    Authorized,
    PartiallyPaid,
    Paid,
    PartiallyRefunded,
    Refunded,
    Voided,
    /// A status this crate does not know yet, kept verbatim.
    #[serde(untagged)]
    Unknown(String),
}

/// Shipping state of an order. Unfulfilled orders carry `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatus {
    Fulfilled,
    Partial,
    Restocked,
    #[serde(untagged)]
    Unknown(String),
}

/// Why an order was cancelled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CancelReason {
    Customer,
    Fraud,
    Inventory,
    Declined,
    Staff,
    Other,
}

/// The browser that placed an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ClientDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Card details of the payment, with the number masked.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PaymentDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avs_result_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_bin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv_result_code: Option<String>,
    /// e.g. `"•••• •••• •••• 4242"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_company: Option<String>,
}

/// A customer's completed request to purchase.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_accepts_marketing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<CancelReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_details: Option<ClientDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_codes: Option<Vec<DiscountCode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<FinancialStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<FulfillmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_site_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    /// e.g. `"#1001"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_attributes: Option<Vec<NoteAttribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_status_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_gateway_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentment_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referring_site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_price_set: Option<AmountSet>,
    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes_included: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discounts: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discounts_set: Option<AmountSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_line_items_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_line_items_price_set: Option<AmountSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price_set: Option<AmountSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price_usd: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_shipping_price_set: Option<AmountSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax_set: Option<AmountSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tip_received: Option<Decimal>,
    /// In grams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_applications: Option<Vec<DiscountApplication>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillments: Option<Vec<Fulfillment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_details: Option<PaymentDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunds: Option<Vec<Refund>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_lines: Option<Vec<ShippingLine>>,
}

impl Resource for Order {
    const KEY: &'static str = "order";
    const PLURAL: &'static str = "orders";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Filters for listing orders.
///
/// - `status`: `open` (Shopify's default), `closed`, `cancelled` or `any`
/// - `financial_status`: a [`FinancialStatus`] value, `unpaid` or `any`
/// - `fulfillment_status`: `shipped`, `partial`, `unshipped`,
///   `unfulfilled` or `any`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderListOptions {
    #[serde(flatten)]
    pub list: ListOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_max: Option<DateTime<Utc>>,
}

impl From<ListOptions> for OrderListOptions {
    fn from(list: ListOptions) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

/// Filters for counting orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderCountOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
}

/// The body of `orders/{id}/cancel`. Sent without an envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderCancelOptions {
    /// Amount to refund. Requires `currency` for multi-currency orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<CancelReason>,
    /// Whether to email the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund: Option<Refund>,
}

/// Operations on `orders`.
#[derive(Debug, Clone, Copy)]
pub struct OrderService<'a> {
    client: &'a RestClient,
}

impl<'a> OrderService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists orders. Shopify returns only open orders unless `status` says
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(&self, options: Option<OrderListOptions>) -> Result<Vec<Order>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, "orders.json", query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists orders along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: Option<OrderListOptions>,
    ) -> Result<ResourceResponse<Vec<Order>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(self.client, "orders.json", query).await
    }

    /// Counts orders.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn count(&self, options: Option<OrderCountOptions>) -> Result<u64, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::count(self.client, "orders/count.json", query).await
    }

    /// Retrieves a single order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64, options: Option<GetOptions>) -> Result<Order, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(self.client, &format!("orders/{id}.json"), query).await
    }

    /// Creates an order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects it.
    pub async fn create(&self, order: &Order) -> Result<Order, ResourceError> {
        service::create(self.client, "orders.json", order).await
    }

    /// Updates an order by its id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if `order.id` is unset.
    pub async fn update(&self, order: &Order) -> Result<Order, ResourceError> {
        let id = order.require_id()?;
        service::update(self.client, &format!("orders/{id}.json"), order).await
    }

    /// Deletes an order. Shopify only allows this for closed or cancelled
    /// orders.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        service::delete(self.client, &format!("orders/{id}.json"), None).await
    }

    /// Cancels an order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails, e.g. when the order
    /// has already been fulfilled.
    pub async fn cancel(
        &self,
        id: u64,
        options: Option<OrderCancelOptions>,
    ) -> Result<Order, ResourceError> {
        let body = options
            .map(|options| serde_json::to_value(options).map_err(ResourceError::Serialize))
            .transpose()?;
        service::action(self.client, &format!("orders/{id}/cancel.json"), body, None).await
    }

    /// Closes an order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn close(&self, id: u64) -> Result<Order, ResourceError> {
        service::action(self.client, &format!("orders/{id}/close.json"), None, None).await
    }

    /// Re-opens a closed order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn open(&self, id: u64) -> Result<Order, ResourceError> {
        service::action(self.client, &format!("orders/{id}/open.json"), None, None).await
    }

    /// Metafields of an order.
    #[must_use]
    pub const fn metafields(&self, order_id: u64) -> MetafieldService<'a> {
        MetafieldService::owned_by(self.client, "orders", order_id)
    }

    /// Fulfillments of an order.
    #[must_use]
    pub const fn fulfillments(&self, order_id: u64) -> FulfillmentService<'a> {
        FulfillmentService::new(self.client, "orders", order_id)
    }

    /// Transactions of an order.
    #[must_use]
    pub const fn transactions(&self, order_id: u64) -> TransactionService<'a> {
        TransactionService::new(self.client, order_id)
    }

    /// Refunds of an order.
    #[must_use]
    pub const fn refunds(&self, order_id: u64) -> RefundService<'a> {
        RefundService::new(self.client, order_id)
    }

    /// Fraud risks of an order.
    #[must_use]
    pub const fn risks(&self, order_id: u64) -> OrderRiskService<'a> {
        OrderRiskService::new(self.client, order_id)
    }
}
