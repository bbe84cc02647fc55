//! Exhaustive balanced partition search.
//!
//! Every admissible split of an [`EntitySet`](crate::model::EntitySet)
//! flows through three stages, one split at a time:
//!
//! - **Feasibility filter** ([`Thresholds`]): per-attribute sum
//!   differences must be strictly below fixed limits.
//! - **Score** ([`ScoreWeights`]): attribute balance, spatial dispersion of
//!   each group ([`mean_dispersion`]) and group-size symmetry, combined
//!   into one cost. Lower is better.
//! - **Top-N collector** ([`TopN`]): the `N` lowest-cost distinct splits.
//!
//! [`PartitionRunner`] drives the pipeline, sequentially or in parallel
//! over enumeration shards.

mod collector;
mod config;
mod filter;
mod runner;
mod score;

pub use collector::TopN;
pub use config::PartitionConfig;
pub use filter::{attribute_diff, Thresholds};
pub use runner::{PartitionResult, PartitionRunner};
pub use score::{mean_dispersion, score, ScoreWeights};
