//! Credits an app grants to a merchant against future app charges.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{service, GetOptions, ListOptions, Resource, ResourceError, ResourceResponse};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ApplicationCredit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Test credits do not affect the merchant's balance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
}

impl Resource for ApplicationCredit {
    const KEY: &'static str = "application_credit";
    const PLURAL: &'static str = "application_credits";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Operations on `application_credits`.
#[derive(Debug, Clone, Copy)]
pub struct ApplicationCreditService<'a> {
    client: &'a RestClient,
}

impl<'a> ApplicationCreditService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists issued credits.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(
        &self,
        options: Option<ListOptions>,
    ) -> Result<Vec<ApplicationCredit>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, "application_credits.json", query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Retrieves one credit.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(
        &self,
        id: u64,
        options: Option<GetOptions>,
    ) -> Result<ApplicationCredit, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(self.client, &format!("application_credits/{id}.json"), query).await
    }

    /// Issues a credit.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the amount exceeds what
    /// the app may credit.
    pub async fn create(
        &self,
        credit: &ApplicationCredit,
    ) -> Result<ApplicationCredit, ResourceError> {
        service::create(self.client, "application_credits.json", credit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_credit_payload() {
        let credit = ApplicationCredit {
            description: Some("application credit for refund".to_string()),
            amount: Some(Decimal::new(500, 2)),
            test: Some(true),
            ..Default::default()
        };
        assert_eq!(
            service::envelope(ApplicationCredit::KEY, &credit).unwrap(),
            json!({"application_credit": {
                "amount": "5.00",
                "description": "application credit for refund",
                "test": true
            }})
        );
    }
}
