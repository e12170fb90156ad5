//! Recurring app subscriptions billed through Shopify.
//!
//! Shopify returns some charge dates as bare `YYYY-MM-DD` values and others
//! as RFC 3339 timestamps, so every date member of
//! [`RecurringApplicationCharge`] accepts both.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::clients::rest::Query;
use crate::clients::{HttpMethod, RestClient};
use crate::rest::{service, GetOptions, ListOptions, Resource, ResourceError, ResourceResponse};

/// A subscription the merchant approves once and pays every 30 days.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RecurringApplicationCharge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_client_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// `pending`, `accepted`, `active`, `declined`, `expired`, `frozen` or
    /// `cancelled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decorated_return_url: Option<String>,
    /// Where the merchant approves the charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capped_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_used: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_remaining: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_capped_amount_url: Option<String>,
    /// Usage terms shown to the merchant for capped charges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,
    #[serde(
        default,
        with = "flexible_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub activated_on: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "flexible_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub billing_on: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "flexible_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub cancelled_on: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "flexible_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub trial_ends_on: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "flexible_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "flexible_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for RecurringApplicationCharge {
    const KEY: &'static str = "recurring_application_charge";
    const PLURAL: &'static str = "recurring_application_charges";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Optional timestamps that may arrive as RFC 3339 or as a bare date.
///
/// A bare date is read as midnight UTC. Serialization always writes RFC 3339.
mod flexible_date {
    use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    const DATE_FORMAT: &str = "%Y-%m-%d";

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .filter(|raw| !raw.is_empty())
            .map(|raw| parse(&raw).map_err(de::Error::custom))
            .transpose()
    }

    pub(super) fn parse(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        if raw.len() == 10 {
            let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)?;
            return Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
        }
        DateTime::parse_from_rfc3339(raw).map(|ts| ts.with_timezone(&Utc))
    }
}

/// Operations on `recurring_application_charges`.
#[derive(Debug, Clone, Copy)]
pub struct RecurringApplicationChargeService<'a> {
    client: &'a RestClient,
}

impl<'a> RecurringApplicationChargeService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists the app's charges on this shop.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(
        &self,
        options: Option<ListOptions>,
    ) -> Result<Vec<RecurringApplicationCharge>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, "recurring_application_charges.json", query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Retrieves one charge.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(
        &self,
        id: u64,
        options: Option<GetOptions>,
    ) -> Result<RecurringApplicationCharge, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(
            self.client,
            &format!("recurring_application_charges/{id}.json"),
            query,
        )
        .await
    }

    /// Creates a pending charge. Redirect the merchant to its
    /// `confirmation_url` to approve it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects it.
    pub async fn create(
        &self,
        charge: &RecurringApplicationCharge,
    ) -> Result<RecurringApplicationCharge, ResourceError> {
        service::create(self.client, "recurring_application_charges.json", charge).await
    }

    /// Activates a charge the merchant has accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if `charge.id` is unset.
    pub async fn activate(
        &self,
        charge: &RecurringApplicationCharge,
    ) -> Result<RecurringApplicationCharge, ResourceError> {
        let id = charge.require_id()?;
        let body = service::envelope(RecurringApplicationCharge::KEY, charge)?;
        service::action(
            self.client,
            &format!("recurring_application_charges/{id}/activate.json"),
            Some(body),
            None,
        )
        .await
    }

    /// Raises the capped amount of a usage charge. The merchant must approve
    /// the change at the returned `update_capped_amount_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn update(
        &self,
        id: u64,
        capped_amount: Decimal,
    ) -> Result<RecurringApplicationCharge, ResourceError> {
        let mut query = Query::new();
        query.insert(
            "recurring_application_charge[capped_amount]".to_string(),
            capped_amount.to_string(),
        );
        service::call(
            self.client,
            HttpMethod::Put,
            &format!("recurring_application_charges/{id}/customize.json"),
            RecurringApplicationCharge::KEY,
            None,
            Some(query),
        )
        .await
        .map(ResourceResponse::into_inner)
    }

    /// Cancels a charge.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        service::delete(
            self.client,
            &format!("recurring_application_charges/{id}.json"),
            None,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_dates_accept_bare_day_and_rfc3339() {
        let charge: RecurringApplicationCharge = serde_json::from_value(json!({
            "id": 455696195,
            "name": "Super Mega Plan",
            "price": "15.00",
            "status": "accepted",
            "billing_on": "2026-10-15",
            "created_at": "2026-10-15T11:02:06-04:00",
            "activated_on": null,
            "cancelled_on": null,
            "trial_ends_on": ""
        }))
        .unwrap();
        assert_eq!(
            charge.billing_on,
            Some(Utc.with_ymd_and_hms(2026, 10, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(
            charge.created_at,
            Some(Utc.with_ymd_and_hms(2026, 10, 15, 15, 2, 6).unwrap())
        );
        assert_eq!(charge.activated_on, None);
        assert_eq!(charge.trial_ends_on, None);
        assert_eq!(charge.price, Some(Decimal::new(1500, 2)));
    }

    #[test]
    fn test_missing_dates_default_to_none() {
        let charge: RecurringApplicationCharge =
            serde_json::from_value(json!({"id": 1})).unwrap();
        assert_eq!(charge.billing_on, None);
        assert_eq!(serde_json::to_value(&charge).unwrap(), json!({"id": 1}));
    }

    #[test]
    fn test_invalid_date_is_a_decode_error() {
        let result: Result<RecurringApplicationCharge, _> =
            serde_json::from_value(json!({"billing_on": "15/10/2026"}));
        assert!(result.is_err());
        assert!(flexible_date::parse("2026-13-01").is_err());
    }
}
