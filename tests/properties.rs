//! Property tests for enumeration, filtering and ranking invariants.

use proptest::prelude::*;
use std::collections::HashSet;
use u_partition::enumerate::SplitGenerator;
use u_partition::model::{Attributes, Entity, EntitySet, Position, ScoredSplit};
use u_partition::search::{
    mean_dispersion, score, PartitionConfig, PartitionRunner, Thresholds,
};

fn entity_set() -> impl Strategy<Value = EntitySet> {
    prop::collection::vec(
        (0i64..20, 0i64..3, 0i64..3, -10.0f64..10.0, -10.0f64..10.0),
        0..10,
    )
    .prop_map(|rows| {
        let entities = rows
            .into_iter()
            .enumerate()
            .map(|(i, (p, s, t, x, y))| {
                Entity::new(format!("e{i}"), Attributes::new(p, s, t), Position::new(x, y))
            })
            .collect();
        EntitySet::new(entities).expect("generated names are unique")
    })
}

proptest! {
    #[test]
    fn splits_are_disjoint_and_exhaustive(n in 0usize..12, min in 1usize..4) {
        for split in SplitGenerator::new(n, min) {
            let first: HashSet<usize> = split.first().iter().copied().collect();
            let second: HashSet<usize> = split.second().iter().copied().collect();
            prop_assert!(first.is_disjoint(&second));
            prop_assert_eq!(first.len() + second.len(), n);
            prop_assert!(first.iter().chain(second.iter()).all(|&i| i < n));
            prop_assert!(split.first().len() >= min);
            prop_assert!(split.first().len() <= split.second().len());
        }
    }

    #[test]
    fn generator_never_repeats(n in 0usize..12) {
        let mut seen = HashSet::new();
        for split in SplitGenerator::new(n, 2) {
            prop_assert!(seen.insert(split));
        }
    }

    #[test]
    fn singleton_dispersion_is_zero(x in -1e6f64..1e6, y in -1e6f64..1e6) {
        prop_assert_eq!(mean_dispersion(&[Position::new(x, y)]), 0.0);
    }

    #[test]
    fn ranking_is_sorted_distinct_and_bounded(entities in entity_set(), top_n in 1usize..8) {
        let config = PartitionConfig::default()
            .with_top_n(top_n)
            .with_thresholds(Thresholds::default().with_max_primary_diff(25));
        let result = PartitionRunner::run(&entities, &config).unwrap();

        prop_assert!(result.ranked.len() <= top_n);
        prop_assert_eq!(result.ranked.len() as u64, result.feasible.min(top_n as u64));
        for w in result.ranked.windows(2) {
            prop_assert!(w[0].cost <= w[1].cost);
        }
        let distinct: HashSet<_> = result.ranked.iter().map(|s| &s.split).collect();
        prop_assert_eq!(distinct.len(), result.ranked.len());
    }

    #[test]
    fn ranking_matches_brute_force(entities in entity_set()) {
        let config = PartitionConfig::default()
            .with_thresholds(Thresholds::default().with_max_primary_diff(30).with_max_secondary_diff(3));
        let result = PartitionRunner::run(&entities, &config).unwrap();

        let mut all: Vec<ScoredSplit> = SplitGenerator::new(entities.len(), 2)
            .filter(|s| config.thresholds.is_feasible(s, &entities))
            .map(|s| ScoredSplit::new(score(&s, &entities, &config.weights), s))
            .collect();
        all.sort();
        all.truncate(config.top_n);
        prop_assert_eq!(result.ranked, all);
    }

    #[test]
    fn loosening_thresholds_keeps_feasible_splits(
        entities in entity_set(),
        extra in (0i64..10, 0i64..3, 0i64..3),
    ) {
        let base = Thresholds::default();
        let loose = base
            .with_max_primary_diff(base.max_primary_diff + extra.0)
            .with_max_secondary_diff(base.max_secondary_diff + extra.1)
            .with_max_tertiary_diff(base.max_tertiary_diff + extra.2);
        for split in SplitGenerator::new(entities.len(), 2) {
            if base.is_feasible(&split, &entities) {
                prop_assert!(loose.is_feasible(&split, &entities));
            }
        }
    }

    #[test]
    fn runs_are_deterministic(entities in entity_set()) {
        let config = PartitionConfig::default().with_top_n(4);
        let a = PartitionRunner::run(&entities, &config).unwrap();
        let b = PartitionRunner::run(&entities, &config).unwrap();
        prop_assert_eq!(a.ranked, b.ranked);
    }
}
