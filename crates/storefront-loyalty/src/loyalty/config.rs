use serde::{Deserialize, Serialize};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Relative importance of each behavioral signal in the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub recency: f64,
    pub frequency: f64,
    pub monetary: f64,
    pub diversity: f64,
}

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.recency + self.frequency + self.monetary + self.diversity
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            recency: 0.30,
            frequency: 0.25,
            monetary: 0.25,
            diversity: 0.20,
        }
    }
}

/// Normalization targets and weights used by the RFM-D engine.
///
/// Each target is the raw value at which the matching metric saturates at 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: ScoreWeights,
    pub recency_horizon_days: f64,
    pub frequency_target: f64,
    pub monetary_target: f64,
    pub diversity_target: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            recency_horizon_days: 365.0,
            frequency_target: 10.0,
            monetary_target: 5.0,
            diversity_target: 6.0,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        let targets = [
            ("recency_horizon_days", self.recency_horizon_days),
            ("frequency_target", self.frequency_target),
            ("monetary_target", self.monetary_target),
            ("diversity_target", self.diversity_target),
        ];
        for (name, value) in targets {
            if !value.is_finite() || value <= 0.0 {
                return Err(ScoringConfigError::NonPositiveTarget { name, value });
            }
        }

        let weights = [
            ("recency", self.weights.recency),
            ("frequency", self.weights.frequency),
            ("monetary", self.weights.monetary),
            ("diversity", self.weights.diversity),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoringConfigError::NegativeWeight { name, value });
            }
        }

        let sum = self.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScoringConfigError::WeightSum { sum });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringConfigError {
    #[error("{name} must be a positive finite number (got {value})")]
    NonPositiveTarget { name: &'static str, value: f64 },
    #[error("{name} weight must be a non-negative finite number (got {value})")]
    NegativeWeight { name: &'static str, value: f64 },
    #[error("score weights must sum to 1.0 (got {sum})")]
    WeightSum { sum: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ScoringConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.weights.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_weights_not_summing_to_one() {
        let mut config = ScoringConfig::default();
        config.weights.diversity = 0.3;

        match config.validate() {
            Err(ScoringConfigError::WeightSum { sum }) => assert!((sum - 1.1).abs() < 1e-9),
            other => panic!("expected weight sum error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_targets() {
        let config = ScoringConfig {
            monetary_target: 0.0,
            ..ScoringConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ScoringConfigError::NonPositiveTarget {
                name: "monetary_target",
                value: 0.0,
            })
        );
    }
}
