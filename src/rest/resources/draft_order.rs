//! Draft orders: orders created by the merchant and completed later.
//!
//! A draft can be invoiced to the customer and then completed into a real
//! order, either as paid or with payment pending.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{service, GetOptions, ListOptions, Resource, ResourceError, ResourceResponse};

use super::common::{Address, AppliedDiscount, LineItem, NoteAttribute, ShippingLine, TaxLine};
use super::customer::Customer;
use super::metafield::MetafieldService;

/// An order being prepared by the merchant.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DraftOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// e.g. `"#D1"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `open`, `invoice_sent` or `completed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes_included: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exempt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_sent_at: Option<DateTime<Utc>>,
    /// A discount on the whole draft.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_discount: Option<AppliedDiscount>,
    /// The order created on completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_line: Option<ShippingLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_attributes: Option<Vec<NoteAttribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    /// Fill the addresses from the customer's default address on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_customer_default_address: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl Resource for DraftOrder {
    const KEY: &'static str = "draft_order";
    const PLURAL: &'static str = "draft_orders";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// The email sent by `send_invoice`. Unset members use the shop's defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DraftOrderInvoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Vec<String>>,
}

impl Resource for DraftOrderInvoice {
    const KEY: &'static str = "draft_order_invoice";
    const PLURAL: &'static str = "draft_order_invoices";
}

/// Filters for listing draft orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DraftOrderListOptions {
    #[serde(flatten)]
    pub list: ListOptions,
    /// `open`, `invoice_sent` or `completed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl From<ListOptions> for DraftOrderListOptions {
    fn from(list: ListOptions) -> Self {
        Self { list, status: None }
    }
}

/// Filters for counting draft orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DraftOrderCountOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
struct CompleteQuery {
    payment_pending: bool,
}

/// Operations on `draft_orders`.
#[derive(Debug, Clone, Copy)]
pub struct DraftOrderService<'a> {
    client: &'a RestClient,
}

impl<'a> DraftOrderService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists draft orders.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(
        &self,
        options: Option<DraftOrderListOptions>,
    ) -> Result<Vec<DraftOrder>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, "draft_orders.json", query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists draft orders along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: Option<DraftOrderListOptions>,
    ) -> Result<ResourceResponse<Vec<DraftOrder>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(self.client, "draft_orders.json", query).await
    }

    /// Counts draft orders.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn count(&self, options: Option<DraftOrderCountOptions>) -> Result<u64, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::count(self.client, "draft_orders/count.json", query).await
    }

    /// Retrieves a single draft order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64, options: Option<GetOptions>) -> Result<DraftOrder, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(self.client, &format!("draft_orders/{id}.json"), query).await
    }

    /// Creates a draft order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects it.
    pub async fn create(&self, draft_order: &DraftOrder) -> Result<DraftOrder, ResourceError> {
        service::create(self.client, "draft_orders.json", draft_order).await
    }

    /// Updates a draft order by its id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if `draft_order.id` is unset.
    pub async fn update(&self, draft_order: &DraftOrder) -> Result<DraftOrder, ResourceError> {
        let id = draft_order.require_id()?;
        service::update(self.client, &format!("draft_orders/{id}.json"), draft_order).await
    }

    /// Deletes a draft order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        service::delete(self.client, &format!("draft_orders/{id}.json"), None).await
    }

    /// Emails an invoice for the draft order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn invoice(
        &self,
        id: u64,
        invoice: &DraftOrderInvoice,
    ) -> Result<DraftOrderInvoice, ResourceError> {
        service::create(
            self.client,
            &format!("draft_orders/{id}/send_invoice.json"),
            invoice,
        )
        .await
    }

    /// Completes the draft into an order. With `payment_pending` the order
    /// is created unpaid.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails, e.g. when the draft is
    /// already completed.
    pub async fn complete(&self, id: u64, payment_pending: bool) -> Result<DraftOrder, ResourceError> {
        let query = service::query(Some(&CompleteQuery { payment_pending }))?;
        service::call(
            self.client,
            HttpMethod::Put,
            &format!("draft_orders/{id}/complete.json"),
            DraftOrder::KEY,
            None,
            query,
        )
        .await
        .map(ResourceResponse::into_inner)
    }

    /// Metafields of a draft order.
    #[must_use]
    pub const fn metafields(&self, draft_order_id: u64) -> MetafieldService<'a> {
        MetafieldService::owned_by(self.client, "draft_orders", draft_order_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_draft_order() {
        let draft: DraftOrder = serde_json::from_value(json!({
            "id": 994118539,
            "name": "#D2",
            "status": "open",
            "total_price": "398.00",
            "applied_discount": {
                "title": "Custom",
                "description": "Custom discount",
                "value": "10.0",
                "value_type": "fixed_amount",
                "amount": "10.00"
            },
            "note_attributes": [{"name": "gift", "value": "yes"}],
            "shipping_line": {"title": "Custom Shipping", "price": "10.00", "custom": true},
            "line_items": [{"variant_id": 39072856, "quantity": 1}]
        }))
        .unwrap();

        assert_eq!(draft.total_price, Some(Decimal::new(39800, 2)));
        assert_eq!(
            draft.applied_discount.unwrap().title.as_deref(),
            Some("Custom")
        );
        assert_eq!(draft.note_attributes.unwrap()[0].name, "gift");
        assert_eq!(draft.shipping_line.unwrap().custom, Some(true));
    }

    #[test]
    fn test_invoice_envelope() {
        let invoice = DraftOrderInvoice {
            to: Some("first@example.com".to_string()),
            bcc: Some(vec!["bcc@example.com".to_string()]),
            ..Default::default()
        };
        assert_eq!(
            service::envelope(DraftOrderInvoice::KEY, &invoice).unwrap(),
            json!({"draft_order_invoice": {"to": "first@example.com", "bcc": ["bcc@example.com"]}})
        );
    }

    #[test]
    fn test_complete_query() {
        let query = service::query(Some(&CompleteQuery {
            payment_pending: true,
        }))
        .unwrap()
        .unwrap();
        assert_eq!(query["payment_pending"], "true");
    }
}
