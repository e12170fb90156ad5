//! Product variants.
//!
//! Variants are listed, counted, created and deleted under their product
//! (`products/{product_id}/variants`) but fetched and updated on their own
//! path (`variants/{id}`).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{
    service, CountOptions, GetOptions, ListOptions, Resource, ResourceError, ResourceResponse,
};

use super::metafield::{Metafield, MetafieldService};

/// The value a variant takes for one product option.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OptionValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A purchasable version of a product, such as one size and colour.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Variant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_values: Option<OptionValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grams: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<String>,
    /// `deny` or `continue`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_inventory_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_management: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_item_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Decimal>,
    /// `g`, `kg`, `oz` or `lb`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option3: Option<String>,
    /// Metafields to create along with the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafields: Option<Vec<Metafield>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl Resource for Variant {
    const KEY: &'static str = "variant";
    const PLURAL: &'static str = "variants";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Operations on variants.
#[derive(Debug, Clone, Copy)]
pub struct VariantService<'a> {
    client: &'a RestClient,
}

impl<'a> VariantService<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists the variants of a product.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request or decoding fails.
    pub async fn list(
        &self,
        product_id: u64,
        options: Option<ListOptions>,
    ) -> Result<Vec<Variant>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::list(self.client, &format!("products/{product_id}/variants.json"), query)
            .await
            .map(ResourceResponse::into_inner)
    }

    /// Lists the variants of a product along with the page cursors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request, decoding or `Link` parsing
    /// fails.
    pub async fn list_with_pagination(
        &self,
        product_id: u64,
        options: Option<ListOptions>,
    ) -> Result<ResourceResponse<Vec<Variant>>, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::page(self.client, &format!("products/{product_id}/variants.json"), query).await
    }

    /// Counts the variants of a product.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn count(
        &self,
        product_id: u64,
        options: Option<CountOptions>,
    ) -> Result<u64, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::count(
            self.client,
            &format!("products/{product_id}/variants/count.json"),
            query,
        )
        .await
    }

    /// Retrieves a variant by its own id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if it does not exist.
    pub async fn get(&self, id: u64, options: Option<GetOptions>) -> Result<Variant, ResourceError> {
        let query = service::query(options.as_ref())?;
        service::find(self.client, &format!("variants/{id}.json"), query).await
    }

    /// Adds a variant to a product.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects it,
    /// e.g. when the option values duplicate an existing variant.
    pub async fn create(&self, product_id: u64, variant: &Variant) -> Result<Variant, ResourceError> {
        service::create(self.client, &format!("products/{product_id}/variants.json"), variant).await
    }

    /// Updates a variant by its id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if `variant.id` is unset.
    pub async fn update(&self, variant: &Variant) -> Result<Variant, ResourceError> {
        let id = variant.require_id()?;
        service::update(self.client, &format!("variants/{id}.json"), variant).await
    }

    /// Removes a variant from a product.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, product_id: u64, id: u64) -> Result<(), ResourceError> {
        service::delete(
            self.client,
            &format!("products/{product_id}/variants/{id}.json"),
            None,
        )
        .await
    }

    /// Metafields of a variant.
    #[must_use]
    pub const fn metafields(&self, variant_id: u64) -> MetafieldService<'a> {
        MetafieldService::owned_by(self.client, "variants", variant_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_variant() {
        let variant: Variant = serde_json::from_value(json!({
            "id": 808950810,
            "product_id": 632910392,
            "title": "Pink",
            "price": "199.00",
            "compare_at_price": null,
            "sku": "IPOD2008PINK",
            "position": 1,
            "inventory_policy": "continue",
            "option1": "Pink",
            "weight": 1.25,
            "weight_unit": "lb",
            "inventory_item_id": 808950810,
            "inventory_quantity": 10
        }))
        .unwrap();

        assert_eq!(variant.price, Some(Decimal::new(19900, 2)));
        assert_eq!(variant.compare_at_price, None);
        assert_eq!(variant.weight, Some(Decimal::new(125, 2)));
        assert_eq!(variant.option1.as_deref(), Some("Pink"));
    }

    #[test]
    fn test_create_payload_with_metafields() {
        let variant = Variant {
            option1: Some("Purple".to_string()),
            price: Some(Decimal::new(2000, 2)),
            metafields: Some(vec![Metafield {
                namespace: Some("global".to_string()),
                key: Some("new".to_string()),
                value: Some("newvalue".to_string()),
                metafield_type: Some("single_line_text_field".to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        };

        assert_eq!(
            service::envelope(Variant::KEY, &variant).unwrap(),
            json!({"variant": {
                "price": "20.00",
                "option1": "Purple",
                "metafields": [{
                    "namespace": "global",
                    "key": "new",
                    "value": "newvalue",
                    "type": "single_line_text_field"
                }]
            }})
        );
    }
}
