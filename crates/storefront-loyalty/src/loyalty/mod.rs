//! RFM-D (recency, frequency, monetary, diversity) loyalty scoring.
//!
//! A [`LoyaltyAnalysis`] borrows a purchase history together with an explicit
//! reference instant and derives metrics, the weighted score, the cohort, and
//! the discount on demand. Nothing is cached between calls.

mod cohort;
mod config;
mod domain;
mod metrics;
pub mod router;
mod service;

#[cfg(test)]
mod tests;

pub use cohort::Cohort;
pub use config::{ScoreWeights, ScoringConfig, ScoringConfigError};
pub use domain::{InvalidRecordError, ProductLine, PurchaseRecord};
pub use metrics::MetricSet;
pub use router::loyalty_router;
pub use service::{LoyaltyProfile, LoyaltyService, LoyaltyServiceError, PriceQuote, QuoteItem};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Scores purchase histories against a validated [`ScoringConfig`].
#[derive(Debug, Clone, Default)]
pub struct LoyaltyEngine {
    config: ScoringConfig,
}

impl LoyaltyEngine {
    pub fn new(config: ScoringConfig) -> Result<Self, ScoringConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn analyze<'a>(
        &self,
        records: &'a [PurchaseRecord],
        now_ms: i64,
    ) -> Result<LoyaltyAnalysis<'a>, InvalidRecordError> {
        LoyaltyAnalysis::with_config(records, now_ms, self.config)
    }
}

/// A purchase history paired with the instant it is evaluated at.
#[derive(Debug, Clone)]
pub struct LoyaltyAnalysis<'a> {
    records: &'a [PurchaseRecord],
    now_ms: i64,
    config: ScoringConfig,
}

impl<'a> LoyaltyAnalysis<'a> {
    pub fn new(records: &'a [PurchaseRecord], now_ms: i64) -> Result<Self, InvalidRecordError> {
        Self::with_config(records, now_ms, ScoringConfig::default())
    }

    pub fn at(
        records: &'a [PurchaseRecord],
        now: DateTime<Utc>,
    ) -> Result<Self, InvalidRecordError> {
        Self::new(records, now.timestamp_millis())
    }

    /// Rejects records with a negative or non-finite `totalAmount`. The
    /// configuration is assumed valid; go through [`LoyaltyEngine::new`] for
    /// user-supplied settings.
    pub fn with_config(
        records: &'a [PurchaseRecord],
        now_ms: i64,
        config: ScoringConfig,
    ) -> Result<Self, InvalidRecordError> {
        domain::validate_records(records)?;
        Ok(Self {
            records,
            now_ms,
            config,
        })
    }

    pub fn records(&self) -> &'a [PurchaseRecord] {
        self.records
    }

    pub fn now_ms(&self) -> i64 {
        self.now_ms
    }

    pub fn compute_metrics(&self) -> MetricSet {
        metrics::compute(self.records, self.now_ms, &self.config)
    }

    pub fn score(&self) -> f64 {
        cohort::weighted_score(&self.compute_metrics(), &self.config.weights)
    }

    pub fn compute_cohort(&self) -> Cohort {
        let score = self.score();
        let cohort = Cohort::from_score(score);
        debug!(
            records = self.records.len(),
            score,
            cohort = cohort.label(),
            "loyalty cohort computed"
        );
        cohort
    }

    pub fn compute_discount(&self) -> f64 {
        self.compute_cohort().discount()
    }

    pub fn snapshot(&self) -> LoyaltySnapshot {
        let metrics = self.compute_metrics();
        let score = cohort::weighted_score(&metrics, &self.config.weights);
        let cohort = Cohort::from_score(score);

        LoyaltySnapshot {
            metrics,
            score,
            cohort,
            discount: cohort.discount(),
        }
    }
}

/// Scoring output in the shape the storefront persists and renders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoyaltySnapshot {
    #[serde(flatten)]
    pub metrics: MetricSet,
    pub score: f64,
    pub cohort: Cohort,
    pub discount: f64,
}

impl LoyaltySnapshot {
    pub fn empty() -> Self {
        Self {
            metrics: MetricSet::ZERO,
            score: 0.0,
            cohort: Cohort::Standard,
            discount: Cohort::Standard.discount(),
        }
    }
}
