//! Catalog pricing and cart handling with loyalty discounts applied.

mod cart;
mod catalog;
mod pricing;

pub use cart::{Cart, CartError, CartLine, CartSummary};
pub use catalog::{Catalog, Edition, Product, ProductKind};
pub use pricing::{apply_discount, SpendSummary, TransactionStats};
