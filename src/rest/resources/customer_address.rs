//! Saved addresses of a customer.
//!
//! The list endpoint wraps its items in `addresses` while single-address
//! endpoints use `customer_address`.

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{service, ListOptions, ResourceError, ResourceResponse};

use super::common::Address;

const KEY: &str = "customer_address";
const PLURAL: &str = "addresses";

/// Operations on `customers/{customer_id}/addresses`.
#[derive(Debug, Clone, Copy)]
pub struct CustomerAddressService<'a> {
    client: &'a RestClient,
    customer_id: u64,
}

impl<'a> CustomerAddressService<'a> {
    pub(crate) const fn new(client: &'a RestClient, customer_id: u64) -> Self {
        Self {
            client,
            customer_id,
        }
    }

    fn path(&self, suffix: &str) -> String {
        format!("customers/{}/addresses{suffix}.json", self.customer_id)
    }

    /// Lists the customer's addresses.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(&self, options: Option<ListOptions>) -> Result<Vec<Address>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::get(self.client, &self.path(""), PLURAL, query).await
    }

    /// Retrieves one address.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64) -> Result<Address, ResourceError> {
        service::get(self.client, &self.path(&format!("/{id}")), KEY, None).await
    }

    /// Adds an address.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects it.
    pub async fn create(&self, address: &Address) -> Result<Address, ResourceError> {
        self.send(HttpMethod::Post, &self.path(""), address).await
    }

    /// Updates an address by its id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if `address.id` is unset.
    pub async fn update(&self, address: &Address) -> Result<Address, ResourceError> {
        let id = address
            .id
            .ok_or(ResourceError::MissingId { resource: KEY })?;
        self.send(HttpMethod::Put, &self.path(&format!("/{id}")), address)
            .await
    }

    /// Removes an address.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails. Shopify refuses to
    /// delete the default address.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        service::delete(self.client, &self.path(&format!("/{id}")), None).await
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        address: &Address,
    ) -> Result<Address, ResourceError> {
        let body = service::envelope(KEY, address)?;
        service::call(self.client, method, path, KEY, Some(body), None)
            .await
            .map(ResourceResponse::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Session;

    #[test]
    fn test_paths_are_nested_under_customer() {
        let client = RestClient::new(&Session::from_parts("shop", "token").unwrap(), None);
        let service = CustomerAddressService::new(&client, 207_119_551);
        assert_eq!(service.path(""), "customers/207119551/addresses.json");
        assert_eq!(
            service.path("/1053317291"),
            "customers/207119551/addresses/1053317291.json"
        );
    }

    #[test]
    fn test_address_envelope_key() {
        let body = service::envelope(
            KEY,
            &Address {
                zip: Some("90210".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(body, serde_json::json!({"customer_address": {"zip": "90210"}}));
    }
}
