use crate::loyalty::PurchaseRecord;
use serde::{Deserialize, Serialize};

/// Applies a loyalty discount and rounds to the storefront's display precision
/// of three decimal places.
pub fn apply_discount(price: f64, discount: f64) -> f64 {
    round3(price * (1.0 - discount))
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Running purchase counters shown on the customer dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStats {
    pub total_transactions: usize,
    pub total_amount: f64,
}

impl TransactionStats {
    pub fn from_history(records: &[PurchaseRecord]) -> Self {
        records.iter().fold(Self::default(), |mut stats, record| {
            stats.record(record.total_amount);
            stats
        })
    }

    pub fn record(&mut self, amount: f64) {
        self.total_transactions += 1;
        self.total_amount += amount;
    }
}

/// What lifetime spend would have cost at the customer's current discount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendSummary {
    pub original: f64,
    pub discounted: f64,
    pub savings: f64,
    pub discount_percentage: u32,
}

impl SpendSummary {
    pub fn new(original: f64, discount: f64) -> Self {
        let discounted = round3(original * (1.0 - discount));
        Self {
            original,
            discounted,
            savings: round3(original - discounted),
            discount_percentage: (discount * 100.0).round() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_discount_rounds_to_three_places() {
        assert_eq!(apply_discount(0.1, 0.15), 0.085);
        assert_eq!(apply_discount(0.07, 0.05), 0.067);
        assert_eq!(apply_discount(0.2, 0.25), 0.15);
    }

    #[test]
    fn stats_accumulate_history() {
        let history = vec![
            PurchaseRecord::new(1, 0.5, &["A"]),
            PurchaseRecord::new(2, 1.25, &["B"]),
        ];

        let stats = TransactionStats::from_history(&history);

        assert_eq!(stats.total_transactions, 2);
        assert!((stats.total_amount - 1.75).abs() < 1e-12);
    }

    #[test]
    fn spend_summary_reports_savings() {
        let summary = SpendSummary::new(2.0, 0.2);

        assert_eq!(summary.discounted, 1.6);
        assert_eq!(summary.savings, 0.4);
        assert_eq!(summary.discount_percentage, 20);
    }
}
