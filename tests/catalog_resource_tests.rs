//! Integration tests for products, variants, collections, inventory and
//! metafields.

mod common;

use common::{api_path, setup};
use rust_decimal::Decimal;
use serde_json::json;
use shopify_rest::rest::resources::{
    Collect, Metafield, MetafieldListOptions, Product, ProductListOptions, ProductStatus,
};
use shopify_rest::{GetOptions, ListOptions, ResourceError};
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_create_product_with_variants() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("products.json")))
        .and(body_partial_json(json!({
            "product": {"title": "Burton Custom Freestyle 151", "status": "draft"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "product": {
                "id": 1072481062,
                "title": "Burton Custom Freestyle 151",
                "status": "draft",
                "variants": [{"id": 1070325053, "product_id": 1072481062, "price": "0.00"}]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let product = client
        .products()
        .create(&Product {
            title: Some("Burton Custom Freestyle 151".to_string()),
            status: Some(ProductStatus::Draft),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(product.id, Some(1_072_481_062));
    assert_eq!(product.status, Some(ProductStatus::Draft));
    let variants = product.variants.unwrap();
    assert_eq!(variants[0].price, Some(Decimal::ZERO));
}

#[tokio::test]
async fn test_list_products_by_vendor_with_fields() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("products.json")))
        .and(query_param("vendor", "Burton"))
        .and(query_param("fields", "id,title"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [{"id": 632910392, "title": "IPod Nano - 8GB"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = ProductListOptions::from(ListOptions {
        vendor: Some("Burton".to_string()),
        fields: Some("id,title".to_string()),
        ..Default::default()
    });
    let products = client.products().list(Some(options)).await.unwrap();
    assert_eq!(products[0].title.as_deref(), Some("IPod Nano - 8GB"));
}

#[tokio::test]
async fn test_get_product_with_selected_fields() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("products/632910392.json")))
        .and(query_param("fields", "id,title"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "product": {"id": 632910392, "title": "IPod Nano - 8GB"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let product = client
        .products()
        .get(632_910_392, Some(GetOptions::fields("id,title")))
        .await
        .unwrap();
    assert_eq!(product.id, Some(632_910_392));
}

#[tokio::test]
async fn test_variants_of_a_product() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("products/632910392/variants/count.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 4})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api_path("products/632910392/variants/808950810.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client.variants().count(632_910_392, None).await.unwrap(), 4);
    client.variants().delete(632_910_392, 808_950_810).await.unwrap();
}

#[tokio::test]
async fn test_product_metafields_are_scoped_to_owner() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("products/632910392/metafields.json")))
        .and(query_param("namespace", "inventory"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "metafields": [{
                "id": 1001077698,
                "namespace": "inventory",
                "key": "warehouse",
                "value": "A-15-3",
                "type": "single_line_text_field",
                "owner_id": 632910392,
                "owner_resource": "product"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let metafields = client
        .products()
        .metafields(632_910_392)
        .list(Some(MetafieldListOptions {
            namespace: Some("inventory".to_string()),
            ..Default::default()
        }))
        .await
        .unwrap();

    assert_eq!(metafields[0].metafield_type.as_deref(), Some("single_line_text_field"));
    assert_eq!(metafields[0].owner_resource.as_deref(), Some("product"));
}

#[tokio::test]
async fn test_shop_metafield_create_and_delete() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("metafields.json")))
        .and(body_json(json!({
            "metafield": {
                "namespace": "inventory",
                "key": "warehouse",
                "value": "25",
                "type": "number_integer"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "metafield": {"id": 1063298192, "namespace": "inventory", "key": "warehouse", "value": "25"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api_path("metafields/1063298192.json")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .metafields()
        .create(&Metafield {
            namespace: Some("inventory".to_string()),
            key: Some("warehouse".to_string()),
            value: Some("25".to_string()),
            metafield_type: Some("number_integer".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    let id = created.id.unwrap();
    client.shop().metafields().delete(id).await.unwrap();
}

#[tokio::test]
async fn test_collects_link_products_to_collections() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("collects.json")))
        .and(body_json(json!({"collect": {"product_id": 921728736, "collection_id": 841564295}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "collect": {"id": 1071559576, "product_id": 921728736, "collection_id": 841564295, "position": 2}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let collect = client
        .collects()
        .create(&Collect {
            product_id: Some(921_728_736),
            collection_id: Some(841_564_295),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(collect.id, Some(1_071_559_576));
}

#[tokio::test]
async fn test_inventory_level_set_and_delete() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("inventory_levels/set.json")))
        .and(body_json(json!({
            "inventory_item_id": 808950810,
            "location_id": 905684977,
            "available": 42
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inventory_level": {"inventory_item_id": 808950810, "location_id": 905684977, "available": 42}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api_path("inventory_levels.json")))
        .and(query_param("inventory_item_id", "808950810"))
        .and(query_param("location_id", "905684977"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let level = client
        .inventory_levels()
        .set(808_950_810, 905_684_977, 42)
        .await
        .unwrap();
    assert_eq!(level.available, Some(42));

    client
        .inventory_levels()
        .delete(808_950_810, 905_684_977)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_location_inventory_levels() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("locations/487838322/inventory_levels.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inventory_levels": [
                {"inventory_item_id": 49148385, "location_id": 487838322, "available": 2},
                {"inventory_item_id": 808950810, "location_id": 487838322, "available": -1}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let levels = client
        .locations()
        .inventory_levels(487_838_322, None)
        .await
        .unwrap();
    assert_eq!(levels[1].available, Some(-1));
}

#[tokio::test]
async fn test_product_image_update_requires_id() {
    let (_server, client) = setup().await;

    let error = client
        .products()
        .images(632_910_392)
        .update(&Default::default())
        .await
        .unwrap_err();
    assert!(matches!(error, ResourceError::MissingId { .. }));
}
