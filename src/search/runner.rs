//! Exhaustive search execution.
//!
//! # Algorithm
//!
//! 1. Enumerate every admissible split lazily
//! 2. For each split:
//!    a. Sum attributes per group and apply the feasibility filter
//!    b. Skip scoring when the cost lower bound cannot enter the top N
//!    c. Score the split and offer it to the collector
//! 3. Return the collector's contents, ascending by cost
//!
//! With `parallel`, step 2 runs per shard with a local collector and the
//! collectors are merged; the merge is order-independent, so the ranking
//! matches the sequential run exactly.

use super::collector::TopN;
use super::config::PartitionConfig;
use super::filter::attribute_diff;
use crate::enumerate::SplitGenerator;
use crate::error::PartitionError;
use crate::io::SplitView;
use crate::model::{EntitySet, ScoredSplit, Split};
use tracing::{debug, info};

/// Result of a partition search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartitionResult {
    /// Best distinct splits, ascending by cost. At most `top_n` long.
    pub ranked: Vec<ScoredSplit>,

    /// Number of splits enumerated.
    pub generated: u64,

    /// Number of splits that passed the feasibility filter.
    pub feasible: u64,
}

impl PartitionResult {
    /// The lowest-cost split, if any split was feasible.
    pub fn best(&self) -> Option<&ScoredSplit> {
        self.ranked.first()
    }

    /// Resolves each ranked split against the entities it was computed
    /// from.
    pub fn views<'a>(&'a self, entities: &'a EntitySet) -> Vec<SplitView<'a>> {
        self.ranked
            .iter()
            .map(|scored| SplitView::new(scored, entities))
            .collect()
    }
}

/// Running state of one search pass (the whole enumeration or a shard).
#[derive(Debug, Clone)]
struct Outcome {
    top: TopN,
    generated: u64,
    feasible: u64,
}

impl Outcome {
    fn new(capacity: usize) -> Self {
        Self {
            top: TopN::new(capacity),
            generated: 0,
            feasible: 0,
        }
    }

    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    fn combine(mut self, other: Outcome) -> Outcome {
        self.top.merge(other.top);
        self.generated += other.generated;
        self.feasible += other.feasible;
        self
    }

    /// Filters, scores and collects every split of `splits`.
    fn consume<I>(&mut self, splits: I, entities: &EntitySet, config: &PartitionConfig)
    where
        I: Iterator<Item = Split>,
    {
        for split in splits {
            self.generated += 1;
            let diff = attribute_diff(&split, entities);
            if !config.thresholds.admits(&diff) {
                continue;
            }
            self.feasible += 1;
            if self.top.rejects_at_least(config.weights.lower_bound(&split, &diff)) {
                continue;
            }
            let cost = config.weights.cost(&split, entities, &diff);
            self.top.offer(ScoredSplit::new(cost, split));
        }
    }
}

/// Executes the exhaustive partition search.
///
/// # Usage
///
/// ```
/// use u_partition::model::{Attributes, Entity, EntitySet, Position};
/// use u_partition::search::{PartitionConfig, PartitionRunner};
///
/// let corners = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)];
/// let entities = EntitySet::new(
///     corners
///         .iter()
///         .enumerate()
///         .map(|(i, &(x, y))| {
///             Entity::new(format!("p{i}"), Attributes::new(10, 1, 1), Position::new(x, y))
///         })
///         .collect(),
/// )
/// .unwrap();
///
/// let result = PartitionRunner::run(&entities, &PartitionConfig::default()).unwrap();
/// assert_eq!(result.best().unwrap().cost, 10.0);
/// ```
pub struct PartitionRunner;

impl PartitionRunner {
    /// Runs the search over `entities`.
    ///
    /// Fails only on an invalid configuration. Too few entities yield an
    /// empty ranking.
    pub fn run(
        entities: &EntitySet,
        config: &PartitionConfig,
    ) -> Result<PartitionResult, PartitionError> {
        config.validate()?;

        let generator = SplitGenerator::new(entities.len(), config.min_group_size);
        info!(
            entities = entities.len(),
            candidates = generator.count_splits(),
            top_n = config.top_n,
            parallel = config.parallel,
            "starting exhaustive partition search"
        );

        let outcome = if config.parallel {
            Self::run_parallel(entities, generator, config)
        } else {
            let mut outcome = Outcome::new(config.top_n);
            outcome.consume(generator, entities, config);
            outcome
        };

        info!(
            generated = outcome.generated,
            feasible = outcome.feasible,
            retained = outcome.top.len(),
            "partition search finished"
        );
        if let Some(best) = outcome.top.as_slice().first() {
            debug!(cost = best.cost, "best split");
        }

        Ok(PartitionResult {
            ranked: outcome.top.into_vec(),
            generated: outcome.generated,
            feasible: outcome.feasible,
        })
    }

    #[cfg(feature = "parallel")]
    fn run_parallel(
        entities: &EntitySet,
        generator: SplitGenerator,
        config: &PartitionConfig,
    ) -> Outcome {
        use rayon::prelude::*;

        let total = generator.total();
        generator
            .shards()
            .par_iter()
            .map(|shard| {
                let mut outcome = Outcome::new(config.top_n);
                outcome.consume(shard.splits(total), entities, config);
                debug!(
                    size = shard.size,
                    lead = shard.lead,
                    generated = outcome.generated,
                    feasible = outcome.feasible,
                    "shard done"
                );
                outcome
            })
            .reduce(|| Outcome::new(config.top_n), Outcome::combine)
    }

    #[cfg(not(feature = "parallel"))]
    fn run_parallel(
        entities: &EntitySet,
        generator: SplitGenerator,
        config: &PartitionConfig,
    ) -> Outcome {
        tracing::warn!("parallel search requested but the `parallel` feature is disabled");
        let mut outcome = Outcome::new(config.top_n);
        outcome.consume(generator, entities, config);
        outcome
    }
}
