//! Countries the shop charges tax for, and their provinces.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{service, GetOptions, ListOptions, Resource, ResourceError, ResourceResponse};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Province {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_name: Option<String>,
    /// `normal`, `harmonized` or `compounded`. `None` adds to the country tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_percentage: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_zone_id: Option<u64>,
}

impl Resource for Province {
    const KEY: &'static str = "province";
    const PLURAL: &'static str = "provinces";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Country {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// ISO 3166-1 alpha-2, or `*` for the rest of the world.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_zone_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provinces: Option<Vec<Province>>,
}

impl Resource for Country {
    const KEY: &'static str = "country";
    const PLURAL: &'static str = "countries";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Operations on `countries`.
#[derive(Debug, Clone, Copy)]
pub struct CountryService<'a> {
    client: &'a RestClient,
}

impl<'a> CountryService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists countries.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(&self, options: Option<ListOptions>) -> Result<Vec<Country>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, "countries.json", query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Counts countries.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn count(&self) -> Result<u64, ResourceError> {
        service::count(self.client, "countries/count.json", None).await
    }

    /// Retrieves one country.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64, options: Option<GetOptions>) -> Result<Country, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(self.client, &format!("countries/{id}.json"), query).await
    }

    /// Adds a country. Its tax defaults to Shopify's rate unless `tax` is
    /// set.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the code is unknown or
    /// already present.
    pub async fn create(&self, country: &Country) -> Result<Country, ResourceError> {
        service::create(self.client, "countries.json", country).await
    }

    /// Updates a country by its id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if `country.id` is unset.
    pub async fn update(&self, country: &Country) -> Result<Country, ResourceError> {
        let id = country.require_id()?;
        service::update(self.client, &format!("countries/{id}.json"), country).await
    }

    /// Removes a country.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        service::delete(self.client, &format!("countries/{id}.json"), None).await
    }

    #[must_use]
    pub const fn provinces(&self, country_id: u64) -> ProvinceService<'a> {
        ProvinceService::new(self.client, country_id)
    }
}

/// Operations on `countries/{country_id}/provinces`.
#[derive(Debug, Clone, Copy)]
pub struct ProvinceService<'a> {
    client: &'a RestClient,
    country_id: u64,
}

impl<'a> ProvinceService<'a> {
    pub(crate) const fn new(client: &'a RestClient, country_id: u64) -> Self {
        Self { client, country_id }
    }

    fn path(&self, suffix: &str) -> String {
        format!("countries/{}/provinces{suffix}.json", self.country_id)
    }

    /// Lists the country's provinces.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(&self, options: Option<ListOptions>) -> Result<Vec<Province>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, &self.path(""), query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Counts the country's provinces.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn count(&self) -> Result<u64, ResourceError> {
        service::count(self.client, &self.path("/count"), None).await
    }

    /// Retrieves one province.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64, options: Option<GetOptions>) -> Result<Province, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(self.client, &self.path(&format!("/{id}")), query).await
    }

    /// Updates a province by its id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if `province.id` is unset.
    pub async fn update(&self, province: &Province) -> Result<Province, ResourceError> {
        let id = province.require_id()?;
        service::update(self.client, &self.path(&format!("/{id}")), province).await
    }
}
