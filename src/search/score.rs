//! Composite imbalance cost.
//!
//! ```text
//! attribute = |dP| / primary_scale + |dS| + |dT|
//! cost      = attribute_weight   * attribute
//!           + first_dispersion   * mean_dispersion(first)
//!           + second_dispersion  * mean_dispersion(second)
//!           + size_balance       * |size(first) - size(second)|
//! ```
//!
//! With the default weights (1000 / 10 / 10 / 1) attribute balance
//! dominates, spatial compactness orders attribute-equivalent splits, and
//! group-size symmetry is the last tie-breaker.

use super::filter::attribute_diff;
use crate::model::{Attributes, EntitySet, Position, Split};

/// Weights of the composite cost.
///
/// # Examples
///
/// ```
/// use u_partition::search::ScoreWeights;
///
/// let w = ScoreWeights::default();
/// assert_eq!(w.attribute, 1000.0);
///
/// // Balance-only scoring: no spatial or size terms.
/// let plain = ScoreWeights::attribute_only();
/// assert_eq!(plain.first_dispersion, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoreWeights {
    /// Multiplier on the attribute-balance term.
    pub attribute: f64,
    /// Divisor applied to the primary difference inside the attribute term.
    pub primary_scale: f64,
    /// Multiplier on the first group's mean dispersion.
    pub first_dispersion: f64,
    /// Multiplier on the second group's mean dispersion.
    pub second_dispersion: f64,
    /// Multiplier on the group-size difference.
    pub size_balance: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            attribute: 1000.0,
            primary_scale: 10.0,
            first_dispersion: 10.0,
            second_dispersion: 10.0,
            size_balance: 1.0,
        }
    }
}

impl ScoreWeights {
    /// Attribute balance only; spatial and size terms disabled.
    pub fn attribute_only() -> Self {
        Self {
            first_dispersion: 0.0,
            second_dispersion: 0.0,
            size_balance: 0.0,
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, w: f64) -> Self {
        self.attribute = w;
        self
    }

    pub fn with_primary_scale(mut self, s: f64) -> Self {
        self.primary_scale = s;
        self
    }

    /// Sets both dispersion weights.
    pub fn with_dispersion(mut self, w: f64) -> Self {
        self.first_dispersion = w;
        self.second_dispersion = w;
        self
    }

    pub fn with_size_balance(mut self, w: f64) -> Self {
        self.size_balance = w;
        self
    }

    /// The unweighted attribute term for per-attribute differences `diff`.
    pub fn attribute_term(&self, diff: &Attributes) -> f64 {
        diff.primary as f64 / self.primary_scale + diff.secondary as f64 + diff.tertiary as f64
    }

    /// Cost without the dispersion terms. Dispersion is never negative,
    /// so this is a lower bound on [`cost`](Self::cost).
    pub fn lower_bound(&self, split: &Split, diff: &Attributes) -> f64 {
        self.attribute * self.attribute_term(diff)
            + self.size_balance * split.size_difference() as f64
    }

    /// Full cost of `split`, given its precomputed attribute differences.
    pub fn cost(&self, split: &Split, entities: &EntitySet, diff: &Attributes) -> f64 {
        let mut cost = self.lower_bound(split, diff);
        if self.first_dispersion != 0.0 {
            cost += self.first_dispersion * group_dispersion(entities, split.first());
        }
        if self.second_dispersion != 0.0 {
            cost += self.second_dispersion * group_dispersion(entities, split.second());
        }
        cost
    }
}

/// Cost of `split` under `weights`.
pub fn score(split: &Split, entities: &EntitySet, weights: &ScoreWeights) -> f64 {
    weights.cost(split, entities, &attribute_diff(split, entities))
}

/// Mean Euclidean distance of `positions` from their centroid.
///
/// Exactly 0 for a single point; 0 for an empty slice.
///
/// # Examples
///
/// ```
/// use u_partition::model::Position;
/// use u_partition::search::mean_dispersion;
///
/// let pair = [Position::new(0.0, 0.0), Position::new(1.0, 0.0)];
/// assert_eq!(mean_dispersion(&pair), 0.5);
/// assert_eq!(mean_dispersion(&pair[..1]), 0.0);
/// ```
pub fn mean_dispersion(positions: &[Position]) -> f64 {
    dispersion(positions.iter().copied())
}

fn group_dispersion(entities: &EntitySet, group: &[usize]) -> f64 {
    dispersion(group.iter().map(|&i| entities[i].position))
}

fn dispersion<I>(points: I) -> f64
where
    I: Iterator<Item = Position> + Clone,
{
    let (n, sx, sy) = points
        .clone()
        .fold((0usize, 0.0, 0.0), |(n, sx, sy), p| (n + 1, sx + p.x, sy + p.y));
    if n == 0 {
        return 0.0;
    }
    let centroid = Position::new(sx / n as f64, sy / n as f64);
    points.map(|p| p.distance(&centroid)).sum::<f64>() / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entity;

    fn square() -> EntitySet {
        let corners = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)];
        EntitySet::new(
            corners
                .iter()
                .enumerate()
                .map(|(i, &(x, y))| {
                    Entity::new(format!("p{i}"), Attributes::new(10, 1, 1), Position::new(x, y))
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_singleton_dispersion_is_zero() {
        assert_eq!(mean_dispersion(&[Position::new(3.7, -12.25)]), 0.0);
    }

    #[test]
    fn test_empty_dispersion_is_zero() {
        assert_eq!(mean_dispersion(&[]), 0.0);
    }

    #[test]
    fn test_square_dispersion() {
        let pts = [
            Position::new(0.0, 0.0),
            Position::new(2.0, 0.0),
            Position::new(0.0, 2.0),
            Position::new(2.0, 2.0),
        ];
        let d = mean_dispersion(&pts);
        assert!((d - 2f64.sqrt()).abs() < 1e-12, "got {d}");
    }

    #[test]
    fn test_axis_aligned_split_costs_ten() {
        let entities = square();
        let w = ScoreWeights::default();
        let horizontal = Split::new(vec![0, 1], vec![2, 3]);
        let vertical = Split::new(vec![0, 2], vec![1, 3]);
        assert_eq!(score(&horizontal, &entities, &w), 10.0);
        assert_eq!(score(&vertical, &entities, &w), 10.0);
    }

    #[test]
    fn test_diagonal_split_costs_more() {
        let entities = square();
        let diagonal = Split::new(vec![0, 3], vec![1, 2]);
        let c = score(&diagonal, &entities, &ScoreWeights::default());
        assert!((c - 20.0 * 0.5f64.sqrt()).abs() < 1e-9, "got {c}");
        assert!(c > 10.0);
    }

    #[test]
    fn test_attribute_term_weighting() {
        let w = ScoreWeights::default();
        let diff = Attributes::new(5, 1, 0);
        assert!((w.attribute_term(&diff) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_attribute_only_ignores_geometry() {
        let entities = square();
        let w = ScoreWeights::attribute_only();
        let diagonal = Split::new(vec![0, 3], vec![1, 2]);
        assert_eq!(score(&diagonal, &entities, &w), 0.0);
    }

    #[test]
    fn test_lower_bound_never_exceeds_cost() {
        let entities = square();
        let w = ScoreWeights::default();
        for split in crate::enumerate::SplitGenerator::new(4, 1) {
            let diff = attribute_diff(&split, &entities);
            assert!(w.lower_bound(&split, &diff) <= w.cost(&split, &entities, &diff));
        }
    }
}
