//! Shopify Admin REST resources.
//!
//! Each module holds the DTO for one resource, its list and count options,
//! and a service that borrows a [`RestClient`]. Services are reached through
//! accessors on the client:
//!
//! ```rust,ignore
//! use shopify_rest::{RestClient, Session};
//! use shopify_rest::rest::resources::{OrderListOptions, Product};
//!
//! let client = RestClient::new(&Session::from_parts("my-store", "shpat_123")?, None);
//!
//! let order = client.orders().get(450789469, None).await?;
//! let risks = client.order_risks(450789469).list().await?;
//!
//! let product = client
//!     .products()
//!     .create(&Product { title: Some("Burton Custom".into()), ..Default::default() })
//!     .await?;
//!
//! let levels = client.locations().inventory_levels(487838322, None).await?;
//! ```
//!
//! Nested resources are available both from their parent's service
//! (`client.orders().refunds(id)`) and directly from the client
//! (`client.refunds(id)`).

pub mod common;

mod abandoned_checkout;
mod access_scope;
mod application_credit;
mod article;
mod blog;
mod carrier_service;
mod checkout;
mod collect;
mod collection_listing;
mod comment;
mod country;
mod currency;
mod customer;
mod customer_address;
mod draft_order;
mod event;
mod fulfillment;
mod fulfillment_event;
mod fulfillment_order;
mod fulfillment_service;
mod gift_card;
mod inventory_item;
mod inventory_level;
mod location;
mod marketing_event;
mod metafield;
mod mobile_platform_application;
mod order;
mod order_risk;
mod payment;
mod product;
mod recurring_application_charge;
mod refund;
mod shipping_zone;
mod shop;
mod shopify_payments;
mod smart_collection;
mod tender_transaction;
mod transaction;
mod variant;

pub use abandoned_checkout::{AbandonedCheckoutListOptions, AbandonedCheckoutService};
pub use access_scope::{AccessScope, AccessScopeService};
pub use application_credit::{ApplicationCredit, ApplicationCreditService};
pub use article::{Article, ArticleListOptions, ArticleService};
pub use blog::{Blog, BlogService};
pub use carrier_service::{CarrierService, CarrierServiceService};
pub use checkout::{Checkout, CheckoutService, ShippingRate, ShippingRateCheckout};
pub use collect::{Collect, CollectListOptions, CollectService};
pub use collection_listing::{CollectionListing, CollectionListingService};
pub use comment::{Comment, CommentListOptions, CommentService};
pub use country::{Country, CountryService, Province, ProvinceService};
pub use currency::{Currency, CurrencyService};
pub use customer::{
    Customer, CustomerService, CustomerState, EmailMarketingConsent, SmsMarketingConsent,
};
pub use customer_address::CustomerAddressService;
pub use draft_order::{
    DraftOrder, DraftOrderCountOptions, DraftOrderInvoice, DraftOrderListOptions,
    DraftOrderService,
};
pub use event::{Event, EventListOptions, EventService};
pub use fulfillment::{Fulfillment, FulfillmentService, Receipt};
pub use fulfillment_event::{FulfillmentEvent, FulfillmentEventService};
pub use fulfillment_order::{
    AssignedFulfillmentOrderListOptions, AssignedFulfillmentOrderService, Destination,
    FulfillmentOrder, FulfillmentOrderService, LocationForMove, MerchantRequest, MoveLocation,
    RequestOption,
};
pub use fulfillment_service::{FulfillmentProvider, FulfillmentProviderService};
pub use gift_card::{GiftCard, GiftCardListOptions, GiftCardService};
pub use inventory_item::{CountryHarmonizedSystemCode, InventoryItem, InventoryItemService};
pub use inventory_level::{InventoryLevel, InventoryLevelListOptions, InventoryLevelService};
pub use location::{Location, LocationService};
pub use marketing_event::{MarketedResource, MarketingEvent, MarketingEventService};
pub use metafield::{Metafield, MetafieldCountOptions, MetafieldListOptions, MetafieldService};
pub use mobile_platform_application::{
    MobilePlatformApplication, MobilePlatformApplicationService,
};
pub use order::{
    CancelReason, ClientDetails, FinancialStatus, FulfillmentStatus, Order, OrderCancelOptions,
    OrderCountOptions, OrderListOptions, OrderService, PaymentDetails,
};
pub use order_risk::{OrderRisk, OrderRiskService};
pub use payment::{CreditCard, Payment, PaymentService};
pub use product::{
    Product, ProductCountOptions, ProductImage, ProductImageService, ProductListOptions,
    ProductOption, ProductService, ProductStatus,
};
pub use recurring_application_charge::{
    RecurringApplicationCharge, RecurringApplicationChargeService,
};
pub use refund::{OrderAdjustment, Refund, RefundLineItem, RefundService, RefundShipping};
pub use shipping_zone::{
    CarrierShippingRateProvider, PriceBasedShippingRate, ShippingZone, ShippingZoneService,
    WeightBasedShippingRate,
};
pub use shop::{Shop, ShopService};
pub use shopify_payments::{
    Balance, BalanceTransaction, BalanceTransactionListOptions, BalanceTransactionService,
    Dispute, DisputeListOptions, DisputeService, Payout, PayoutListOptions, PayoutService,
    PayoutSummary, ShopifyPaymentsService,
};
pub use smart_collection::{Rule, SmartCollection, SmartCollectionListOptions, SmartCollectionService};
pub use tender_transaction::{
    TenderTransaction, TenderTransactionListOptions, TenderTransactionService,
};
pub use transaction::{Transaction, TransactionService};
pub use variant::{OptionValue, Variant, VariantService};

use crate::clients::RestClient;

impl RestClient {
    // Orders and what hangs off them.

    #[must_use]
    pub const fn orders(&self) -> OrderService<'_> {
        OrderService::new(self)
    }

    #[must_use]
    pub const fn draft_orders(&self) -> DraftOrderService<'_> {
        DraftOrderService::new(self)
    }

    #[must_use]
    pub const fn transactions(&self, order_id: u64) -> TransactionService<'_> {
        TransactionService::new(self, order_id)
    }

    #[must_use]
    pub const fn refunds(&self, order_id: u64) -> RefundService<'_> {
        RefundService::new(self, order_id)
    }

    #[must_use]
    pub const fn order_risks(&self, order_id: u64) -> OrderRiskService<'_> {
        OrderRiskService::new(self, order_id)
    }

    #[must_use]
    pub const fn fulfillment_events(
        &self,
        order_id: u64,
        fulfillment_id: u64,
    ) -> FulfillmentEventService<'_> {
        FulfillmentEventService::new(self, order_id, fulfillment_id)
    }

    #[must_use]
    pub const fn fulfillment_orders(&self) -> FulfillmentOrderService<'_> {
        FulfillmentOrderService::new(self)
    }

    #[must_use]
    pub const fn assigned_fulfillment_orders(&self) -> AssignedFulfillmentOrderService<'_> {
        AssignedFulfillmentOrderService::new(self)
    }

    #[must_use]
    pub const fn tender_transactions(&self) -> TenderTransactionService<'_> {
        TenderTransactionService::new(self)
    }

    #[must_use]
    pub const fn checkouts(&self) -> CheckoutService<'_> {
        CheckoutService::new(self)
    }

    #[must_use]
    pub const fn abandoned_checkouts(&self) -> AbandonedCheckoutService<'_> {
        AbandonedCheckoutService::new(self)
    }

    /// Payments against the checkout identified by `token`.
    #[must_use]
    pub fn payments(&self, token: impl Into<String>) -> PaymentService<'_> {
        PaymentService::new(self, token)
    }

    // Catalog.

    #[must_use]
    pub const fn products(&self) -> ProductService<'_> {
        ProductService::new(self)
    }

    #[must_use]
    pub const fn variants(&self) -> VariantService<'_> {
        VariantService::new(self)
    }

    #[must_use]
    pub const fn collects(&self) -> CollectService<'_> {
        CollectService::new(self)
    }

    #[must_use]
    pub const fn collection_listings(&self) -> CollectionListingService<'_> {
        CollectionListingService::new(self)
    }

    #[must_use]
    pub const fn smart_collections(&self) -> SmartCollectionService<'_> {
        SmartCollectionService::new(self)
    }

    #[must_use]
    pub const fn inventory_items(&self) -> InventoryItemService<'_> {
        InventoryItemService::new(self)
    }

    #[must_use]
    pub const fn inventory_levels(&self) -> InventoryLevelService<'_> {
        InventoryLevelService::new(self)
    }

    #[must_use]
    pub const fn locations(&self) -> LocationService<'_> {
        LocationService::new(self)
    }

    #[must_use]
    pub const fn gift_cards(&self) -> GiftCardService<'_> {
        GiftCardService::new(self)
    }

    // Customers.

    #[must_use]
    pub const fn customers(&self) -> CustomerService<'_> {
        CustomerService::new(self)
    }

    #[must_use]
    pub const fn customer_addresses(&self, customer_id: u64) -> CustomerAddressService<'_> {
        CustomerAddressService::new(self, customer_id)
    }

    // Online store.

    #[must_use]
    pub const fn blogs(&self) -> BlogService<'_> {
        BlogService::new(self)
    }

    #[must_use]
    pub const fn articles(&self, blog_id: u64) -> ArticleService<'_> {
        ArticleService::new(self, blog_id)
    }

    #[must_use]
    pub const fn comments(&self) -> CommentService<'_> {
        CommentService::new(self)
    }

    #[must_use]
    pub const fn marketing_events(&self) -> MarketingEventService<'_> {
        MarketingEventService::new(self)
    }

    #[must_use]
    pub const fn events(&self) -> EventService<'_> {
        EventService::new(self)
    }

    // Shipping and fulfillment setup.

    #[must_use]
    pub const fn fulfillment_services(&self) -> FulfillmentProviderService<'_> {
        FulfillmentProviderService::new(self)
    }

    #[must_use]
    pub const fn carrier_services(&self) -> CarrierServiceService<'_> {
        CarrierServiceService::new(self)
    }

    #[must_use]
    pub const fn shipping_zones(&self) -> ShippingZoneService<'_> {
        ShippingZoneService::new(self)
    }

    #[must_use]
    pub const fn countries(&self) -> CountryService<'_> {
        CountryService::new(self)
    }

    #[must_use]
    pub const fn provinces(&self, country_id: u64) -> ProvinceService<'_> {
        ProvinceService::new(self, country_id)
    }

    // Store settings.

    #[must_use]
    pub const fn shop(&self) -> ShopService<'_> {
        ShopService::new(self)
    }

    #[must_use]
    pub const fn currencies(&self) -> CurrencyService<'_> {
        CurrencyService::new(self)
    }

    #[must_use]
    pub const fn mobile_platform_applications(&self) -> MobilePlatformApplicationService<'_> {
        MobilePlatformApplicationService::new(self)
    }

    /// Shop-level metafields. Owner-scoped metafields come from the owner's
    /// service, e.g. `client.products().metafields(id)`.
    #[must_use]
    pub const fn metafields(&self) -> MetafieldService<'_> {
        MetafieldService::shop(self)
    }

    // Billing and access.

    #[must_use]
    pub const fn access_scopes(&self) -> AccessScopeService<'_> {
        AccessScopeService::new(self)
    }

    #[must_use]
    pub const fn application_credits(&self) -> ApplicationCreditService<'_> {
        ApplicationCreditService::new(self)
    }

    #[must_use]
    pub const fn recurring_application_charges(&self) -> RecurringApplicationChargeService<'_> {
        RecurringApplicationChargeService::new(self)
    }

    #[must_use]
    pub const fn shopify_payments(&self) -> ShopifyPaymentsService<'_> {
        ShopifyPaymentsService::new(self)
    }
}
