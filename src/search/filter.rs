//! Feasibility pre-screening.
//!
//! A split is only worth scoring when each of its per-attribute sum
//! differences lies strictly below a fixed threshold. The check is a few
//! integer sums, far cheaper than the spatial terms of the score, so it
//! runs first.

use crate::model::{Attributes, EntitySet, Split};

/// Per-attribute imbalance limits. A split survives when every
/// difference is strictly below its limit.
///
/// # Examples
///
/// ```
/// use u_partition::model::Attributes;
/// use u_partition::search::Thresholds;
///
/// let t = Thresholds::default();
/// assert!(t.admits(&Attributes::new(9, 1, 1)));
/// assert!(!t.admits(&Attributes::new(10, 0, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Thresholds {
    #[cfg_attr(feature = "serde", serde(alias = "maxPrimaryDiff"))]
    pub max_primary_diff: i64,
    #[cfg_attr(feature = "serde", serde(alias = "maxSecondaryDiff"))]
    pub max_secondary_diff: i64,
    #[cfg_attr(feature = "serde", serde(alias = "maxTertiaryDiff"))]
    pub max_tertiary_diff: i64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            max_primary_diff: 10,
            max_secondary_diff: 2,
            max_tertiary_diff: 2,
        }
    }
}

impl Thresholds {
    pub fn with_max_primary_diff(mut self, limit: i64) -> Self {
        self.max_primary_diff = limit;
        self
    }

    pub fn with_max_secondary_diff(mut self, limit: i64) -> Self {
        self.max_secondary_diff = limit;
        self
    }

    pub fn with_max_tertiary_diff(mut self, limit: i64) -> Self {
        self.max_tertiary_diff = limit;
        self
    }

    /// Whether the absolute per-attribute differences `diff` pass.
    pub fn admits(&self, diff: &Attributes) -> bool {
        diff.primary < self.max_primary_diff
            && diff.secondary < self.max_secondary_diff
            && diff.tertiary < self.max_tertiary_diff
    }

    /// Whether `split` of `entities` passes.
    pub fn is_feasible(&self, split: &Split, entities: &EntitySet) -> bool {
        self.admits(&attribute_diff(split, entities))
    }
}

/// Absolute difference of the attribute sums of the two groups.
pub fn attribute_diff(split: &Split, entities: &EntitySet) -> Attributes {
    entities
        .totals(split.first())
        .abs_diff(&entities.totals(split.second()))
}
