//! Fraud risk assessments of an order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{service, ListOptions, Resource, ResourceError, ResourceResponse};

/// A fraud assessment, from Shopify or a fraud app.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderRisk {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_id: Option<u64>,
    /// e.g. `"External"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Between 0.0 and 1.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Decimal>,
    /// `cancel`, `investigate` or `accept`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause_cancel: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_message: Option<String>,
}

impl Resource for OrderRisk {
    const KEY: &'static str = "risk";
    const PLURAL: &'static str = "risks";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Operations on `orders/{order_id}/risks`.
#[derive(Debug, Clone, Copy)]
pub struct OrderRiskService<'a> {
    client: &'a RestClient,
    order_id: u64,
}

impl<'a> OrderRiskService<'a> {
    pub(crate) const fn new(client: &'a RestClient, order_id: u64) -> Self {
        Self { client, order_id }
    }

    fn path(&self, suffix: &str) -> String {
        format!("orders/{}/risks{suffix}.json", self.order_id)
    }

    /// Lists the order's risks.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(&self, options: Option<ListOptions>) -> Result<Vec<OrderRisk>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, &self.path(""), query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists the order's risks along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: Option<ListOptions>,
    ) -> Result<ResourceResponse<Vec<OrderRisk>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(self.client, &self.path(""), query).await
    }

    /// Retrieves one risk.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64) -> Result<OrderRisk, ResourceError> {
        service::find(self.client, &self.path(&format!("/{id}")), None).await
    }

    /// Records a risk.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects it.
    pub async fn create(&self, risk: &OrderRisk) -> Result<OrderRisk, ResourceError> {
        service::create(self.client, &self.path(""), risk).await
    }

    /// Updates a risk by its id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if `risk.id` is unset.
    pub async fn update(&self, risk: &OrderRisk) -> Result<OrderRisk, ResourceError> {
        let id = risk.require_id()?;
        service::update(self.client, &self.path(&format!("/{id}")), risk).await
    }

    /// Deletes a risk. Only the app that created it may delete it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        service::delete(self.client, &self.path(&format!("/{id}")), None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_risk() {
        let risk: OrderRisk = serde_json::from_value(json!({
            "id": 284138680,
            "order_id": 450789469,
            "checkout_id": null,
            "source": "External",
            "score": "1.0",
            "recommendation": "cancel",
            "display": true,
            "cause_cancel": true,
            "message": "This order was placed from a proxy IP"
        }))
        .unwrap();

        assert_eq!(risk.score, Some(Decimal::ONE));
        assert_eq!(risk.recommendation.as_deref(), Some("cancel"));
        assert_eq!(risk.checkout_id, None);
    }

    #[test]
    fn test_envelope_key_is_risk() {
        let body = service::envelope(OrderRisk::KEY, &OrderRisk::default()).unwrap();
        assert_eq!(body, json!({"risk": {}}));
    }
}
