//! Gift cards issued by the shop. Read-only here.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{service, GetOptions, ListOptions, Resource, ResourceError, ResourceResponse};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GiftCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// The full code is only returned on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_characters: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_item_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_client_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for GiftCard {
    const KEY: &'static str = "gift_card";
    const PLURAL: &'static str = "gift_cards";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Filters for listing gift cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GiftCardListOptions {
    #[serde(flatten)]
    pub list: ListOptions,
    /// `enabled` or `disabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl From<ListOptions> for GiftCardListOptions {
    fn from(list: ListOptions) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

/// Operations on `gift_cards`.
#[derive(Debug, Clone, Copy)]
pub struct GiftCardService<'a> {
    client: &'a RestClient,
}

impl<'a> GiftCardService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists gift cards.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(
        &self,
        options: Option<GiftCardListOptions>,
    ) -> Result<Vec<GiftCard>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, "gift_cards.json", query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists gift cards along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: Option<GiftCardListOptions>,
    ) -> Result<ResourceResponse<Vec<GiftCard>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(self.client, "gift_cards.json", query).await
    }

    /// Counts gift cards.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn count(&self, options: Option<GiftCardListOptions>) -> Result<u64, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::count(self.client, "gift_cards/count.json", query).await
    }

    /// Retrieves one gift card.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64, options: Option<GetOptions>) -> Result<GiftCard, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(self.client, &format!("gift_cards/{id}.json"), query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_gift_card() {
        let card: GiftCard = serde_json::from_value(json!({
            "id": 1035197676,
            "balance": "100.00",
            "initial_value": "100.00",
            "currency": "USD",
            "customer_id": null,
            "expires_on": "2027-10-15",
            "disabled_at": null,
            "last_characters": "0y0y"
        }))
        .unwrap();
        assert_eq!(card.balance, Some(Decimal::new(10000, 2)));
        assert_eq!(card.expires_on, NaiveDate::from_ymd_opt(2027, 10, 15));
        assert_eq!(card.customer_id, None);
    }
}
