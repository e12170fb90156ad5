//! Types embedded in several resources.
//!
//! These are not resources of their own; they appear nested inside orders,
//! checkouts, draft orders, refunds, customers, collections and articles.

mod address;
mod discount;
mod image;
mod line_item;
mod money;
mod shipping_line;

pub use address::Address;
pub use discount::{DiscountApplication, DiscountCode};
pub use image::Image;
pub use line_item::{AppliedDiscount, DiscountAllocation, LineItem, NoteAttribute, TaxLine};
pub use money::{AmountSet, Money};
pub use shipping_line::ShippingLine;
