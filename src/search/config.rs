//! Search configuration.

use super::filter::Thresholds;
use super::score::ScoreWeights;
use crate::error::PartitionError;

/// Configuration for an exhaustive partition search.
///
/// # Defaults
///
/// ```
/// use u_partition::search::PartitionConfig;
///
/// let config = PartitionConfig::default();
/// assert_eq!(config.top_n, 5);
/// assert_eq!(config.thresholds.max_primary_diff, 10);
/// assert_eq!(config.weights.attribute, 1000.0);
/// assert_eq!(config.min_group_size, 2);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_partition::search::{PartitionConfig, ScoreWeights, Thresholds};
///
/// let config = PartitionConfig::default()
///     .with_top_n(10)
///     .with_thresholds(Thresholds::default().with_max_primary_diff(15))
///     .with_weights(ScoreWeights::attribute_only());
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PartitionConfig {
    /// Number of best splits to report.
    #[cfg_attr(feature = "serde", serde(alias = "topN"))]
    pub top_n: usize,

    /// Feasibility limits applied before scoring.
    pub thresholds: Thresholds,

    /// Weights of the composite cost.
    pub weights: ScoreWeights,

    /// Smallest group size considered on either side of a split.
    ///
    /// With the default of 2, fewer than 4 entities yield no splits.
    pub min_group_size: usize,

    /// Whether to score shards of the enumeration in parallel using rayon.
    ///
    /// Requires the `parallel` feature; ignored otherwise. The ranking is
    /// identical to a sequential run.
    pub parallel: bool,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            top_n: 5,
            thresholds: Thresholds::default(),
            weights: ScoreWeights::default(),
            min_group_size: 2,
            parallel: false,
        }
    }
}

impl PartitionConfig {
    /// Sets the number of splits to report.
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_min_group_size(mut self, n: usize) -> Self {
        self.min_group_size = n;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), PartitionError> {
        if self.top_n == 0 {
            return Err(invalid("top_n must be at least 1"));
        }
        if self.min_group_size == 0 {
            return Err(invalid("min_group_size must be at least 1"));
        }
        let t = &self.thresholds;
        if t.max_primary_diff < 0 || t.max_secondary_diff < 0 || t.max_tertiary_diff < 0 {
            return Err(invalid(format!("thresholds must not be negative, got {t:?}")));
        }
        let w = &self.weights;
        for (name, value) in [
            ("attribute", w.attribute),
            ("first_dispersion", w.first_dispersion),
            ("second_dispersion", w.second_dispersion),
            ("size_balance", w.size_balance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!(
                    "weight {name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if !w.primary_scale.is_finite() || w.primary_scale <= 0.0 {
            return Err(invalid(format!(
                "primary_scale must be positive, got {}",
                w.primary_scale
            )));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> PartitionError {
    PartitionError::InvalidConfig(msg.into())
}
