use super::config::ScoringConfig;
use super::domain::PurchaseRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub(crate) const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Normalized behavioral signals, each within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricSet {
    pub recency: f64,
    pub frequency: f64,
    pub monetary: f64,
    pub diversity: f64,
}

impl MetricSet {
    pub const ZERO: MetricSet = MetricSet {
        recency: 0.0,
        frequency: 0.0,
        monetary: 0.0,
        diversity: 0.0,
    };
}

pub(crate) fn compute(
    records: &[PurchaseRecord],
    now_ms: i64,
    config: &ScoringConfig,
) -> MetricSet {
    let Some(last_purchase) = records.iter().map(|record| record.timestamp).max() else {
        return MetricSet::ZERO;
    };

    let days_since_last = now_ms.saturating_sub(last_purchase) as f64 / MILLIS_PER_DAY;
    let recency = normalize_inverse(days_since_last, config.recency_horizon_days);

    let frequency = saturate(records.len() as f64, config.frequency_target);

    let total_spent: f64 = records.iter().map(|record| record.total_amount).sum();
    let monetary = saturate(total_spent, config.monetary_target);

    let unique_products: HashSet<&str> = records
        .iter()
        .flat_map(|record| record.products.iter())
        .map(|product| product.name.as_str())
        .collect();
    let diversity = saturate(unique_products.len() as f64, config.diversity_target);

    MetricSet {
        recency,
        frequency,
        monetary,
        diversity,
    }
}

fn saturate(value: f64, target: f64) -> f64 {
    (value / target).clamp(0.0, 1.0)
}

// Purchases stamped after `now` would push this above 1, so both ends clamp.
fn normalize_inverse(elapsed: f64, horizon: f64) -> f64 {
    (1.0 - elapsed / horizon).clamp(0.0, 1.0)
}
