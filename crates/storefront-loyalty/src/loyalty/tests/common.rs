use std::sync::Arc;

use crate::loyalty::{LoyaltyEngine, LoyaltyService, ProductLine, PurchaseRecord};
use crate::storefront::Catalog;

pub(super) const DAY_MS: i64 = 86_400_000;

/// Fixed reference instant (2024-11-14T22:13:20Z) so recency is reproducible.
pub(super) const NOW_MS: i64 = 1_731_622_400_000;

pub(super) const PRODUCT_NAMES: [&str; 6] = [
    "Development License",
    "Cloud Storage Pro",
    "Security Suite",
    "API Access",
    "Database License",
    "Tech Support",
];

pub(super) fn purchase(days_ago: i64, total_amount: f64, products: &[&str]) -> PurchaseRecord {
    PurchaseRecord::new(NOW_MS - days_ago * DAY_MS, total_amount, products)
}

pub(super) fn repeat_purchases(
    count: usize,
    total_amount: f64,
    product: &str,
) -> Vec<PurchaseRecord> {
    (0..count)
        .map(|_| purchase(0, total_amount, &[product]))
        .collect()
}

/// Twelve purchases made today, cycling through all six catalog names.
pub(super) fn loyal_history() -> Vec<PurchaseRecord> {
    (0..12)
        .map(|i| purchase(0, 1.0, &[PRODUCT_NAMES[i % PRODUCT_NAMES.len()]]))
        .collect()
}

pub(super) fn with_extra_attributes(mut record: PurchaseRecord) -> PurchaseRecord {
    for product in &mut record.products {
        product
            .attributes
            .insert("version".to_string(), serde_json::json!("premium"));
    }
    record.products.push(ProductLine::named("Tech Support"));
    record
}

pub(super) fn service() -> Arc<LoyaltyService> {
    Arc::new(LoyaltyService::new(
        LoyaltyEngine::default(),
        Catalog::standard(),
    ))
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
