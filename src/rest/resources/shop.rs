//! The shop the session is bound to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{service, GetOptions, Resource, ResourceError};

use super::metafield::MetafieldService;

/// Shop settings and contact details. Read-only.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Shop {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// The primary custom domain, or the myshopify domain if none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub myshopify_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_location_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_presentment_currencies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub money_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub money_with_currency_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub money_in_emails_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub money_with_currency_in_emails_format: Option<String>,
    /// e.g. `(GMT-05:00) Eastern Time (US & Canada)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iana_timezone: Option<String>,
    /// `g`, `kg`, `oz` or `lb`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes_included: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_shipping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county_taxes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_discounts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_gift_cards: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_storefront: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_apps_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_apps_login_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible_for_payments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible_for_card_reader_giveaway: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_extra_payments_agreement: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finances: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_consent_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_api_supported: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_location_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_launch_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactional_sms_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_ssl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Shop {
    const KEY: &'static str = "shop";
    const PLURAL: &'static str = "shops";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Reads `shop`.
#[derive(Debug, Clone, Copy)]
pub struct ShopService<'a> {
    client: &'a RestClient,
}

impl<'a> ShopService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Retrieves the shop.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn get(&self, options: Option<GetOptions>) -> Result<Shop, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(self.client, "shop.json", query).await
    }

    /// Shop-level metafields.
    #[must_use]
    pub const fn metafields(&self) -> MetafieldService<'a> {
        MetafieldService::shop(self.client)
    }
}
