use super::config::ScoreWeights;
use super::metrics::MetricSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Loyalty tier ordered by increasing engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cohort {
    Standard,
    Bronze,
    Silver,
    Gold,
    Premium,
}

impl Cohort {
    pub const ALL: [Cohort; 5] = [
        Cohort::Standard,
        Cohort::Bronze,
        Cohort::Silver,
        Cohort::Gold,
        Cohort::Premium,
    ];

    /// Maps a weighted score onto a cohort. Each band includes its lower bound.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            Cohort::Premium
        } else if score >= 0.6 {
            Cohort::Gold
        } else if score >= 0.4 {
            Cohort::Silver
        } else if score >= 0.2 {
            Cohort::Bronze
        } else {
            Cohort::Standard
        }
    }

    pub fn discount(&self) -> f64 {
        match self {
            Cohort::Premium => 0.25,
            Cohort::Gold => 0.20,
            Cohort::Silver => 0.15,
            Cohort::Bronze => 0.10,
            Cohort::Standard => 0.05,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Cohort::Standard => "STANDARD",
            Cohort::Bronze => "BRONZE",
            Cohort::Silver => "SILVER",
            Cohort::Gold => "GOLD",
            Cohort::Premium => "PREMIUM",
        }
    }
}

impl fmt::Display for Cohort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub(crate) fn weighted_score(metrics: &MetricSet, weights: &ScoreWeights) -> f64 {
    metrics.recency * weights.recency
        + metrics.frequency * weights.frequency
        + metrics.monetary * weights.monetary
        + metrics.diversity * weights.diversity
}
