//! Lazy enumeration of two-way partitions.
//!
//! [`Combinations`] walks k-subsets of an index range in lexicographic
//! order without materializing them. [`SplitGenerator`] builds on it to
//! emit every partition of `K` entities into two groups of at least
//! `min_group_size` members, each exactly once, in canonical orientation.
//!
//! The enumeration space is cut into [`Shard`]s: all subgroups of one
//! size sharing the same lowest index. Shards are independent, so they can
//! be processed in any order or in parallel; walking them in order
//! reproduces the sequential generator.

mod combinations;
mod generator;

pub use combinations::{binomial, Combinations};
pub use generator::{Shard, ShardSplits, SplitGenerator};
