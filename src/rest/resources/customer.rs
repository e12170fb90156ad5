//! Customers and customer search.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{
    service, CountOptions, GetOptions, ListOptions, Resource, ResourceError, ResourceResponse,
};

use super::common::Address;
use super::customer_address::CustomerAddressService;
use super::metafield::MetafieldService;

/// The state of a customer's account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CustomerState {
    #[default]
    Disabled,
    Invited,
    Enabled,
    Declined,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct EmailMarketingConsent {
    /// e.g. `subscribed` or `not_subscribed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opt_in_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SmsMarketingConsent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opt_in_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_collected_from: Option<String>,
}

/// A customer of the shop.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<CustomerState>,
    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exempt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exemptions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_spent: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_order_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Address>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_marketing_consent: Option<EmailMarketingConsent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_marketing_consent: Option<SmsMarketingConsent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl Resource for Customer {
    const KEY: &'static str = "customer";
    const PLURAL: &'static str = "customers";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Query parameters for `customers/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
struct CustomerSearchOptions {
    #[serde(flatten)]
    list: ListOptions,
    query: String,
}

/// Operations on `customers`.
#[derive(Debug, Clone, Copy)]
pub struct CustomerService<'a> {
    client: &'a RestClient,
}

impl<'a> CustomerService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists customers.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(&self, options: Option<ListOptions>) -> Result<Vec<Customer>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, "customers.json", query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists customers along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        options: Option<ListOptions>,
    ) -> Result<ResourceResponse<Vec<Customer>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(self.client, "customers.json", query).await
    }

    /// Counts customers.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn count(&self, options: Option<CountOptions>) -> Result<u64, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::count(self.client, "customers/count.json", query).await
    }

    /// Retrieves a single customer.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64, options: Option<GetOptions>) -> Result<Customer, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(self.client, &format!("customers/{id}.json"), query).await
    }

    /// Searches customers with Shopify's query syntax, e.g.
    /// `"email:bob@example.com"`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn search(
        &self,
        query: impl Into<String>,
        options: Option<ListOptions>,
    ) -> Result<Vec<Customer>, ResourceError> {
        let options = CustomerSearchOptions {
            list: options.unwrap_or_default(),
            query: query.into(),
        };
        let query = service::query(Some(&options))?;
        service::list(self.client, "customers/search.json", query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Creates a customer.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects it.
    pub async fn create(&self, customer: &Customer) -> Result<Customer, ResourceError> {
        service::create(self.client, "customers.json", customer).await
    }

    /// Updates a customer by its id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if `customer.id` is unset.
    pub async fn update(&self, customer: &Customer) -> Result<Customer, ResourceError> {
        let id = customer.require_id()?;
        service::update(self.client, &format!("customers/{id}.json"), customer).await
    }

    /// Deletes a customer.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        service::delete(self.client, &format!("customers/{id}.json"), None).await
    }

    /// Addresses saved for a customer.
    #[must_use]
    pub const fn addresses(&self, customer_id: u64) -> CustomerAddressService<'a> {
        CustomerAddressService::new(self.client, customer_id)
    }

    /// Metafields of a customer.
    #[must_use]
    pub const fn metafields(&self, customer_id: u64) -> MetafieldService<'a> {
        MetafieldService::owned_by(self.client, "customers", customer_id)
    }
}
