//! Customer loyalty scoring and personalized pricing for the storefront.
//!
//! The [`loyalty`] module holds the RFM-D engine: it turns a purchase history
//! into four normalized behavioral metrics, a cohort, and a discount. The
//! [`storefront`] module applies that discount to catalog prices and carts,
//! and [`history`] loads purchase histories from JSON or CSV exports.

pub mod config;
pub mod error;
pub mod history;
pub mod loyalty;
pub mod storefront;
pub mod telemetry;
