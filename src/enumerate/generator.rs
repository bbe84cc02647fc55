//! Partition generator and its shards.

use super::combinations::{binomial, Combinations};
use crate::model::Split;

/// All subgroups of `size` entities whose lowest index is `lead`.
///
/// Each such subgroup, paired with its complement, is one split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shard {
    pub size: usize,
    pub lead: usize,
}

impl Shard {
    /// Number of splits this shard yields over `total` entities.
    pub fn len(&self, total: usize) -> u64 {
        if self.size == 0 || self.lead >= total {
            return 0;
        }
        binomial(total - self.lead - 1, self.size - 1)
    }

    /// Lazily iterates this shard's splits over `total` entities.
    pub fn splits(&self, total: usize) -> ShardSplits {
        let (rest, k) = if self.size == 0 || self.lead >= total {
            // Empty shard: an impossible request keeps the iterator empty.
            (0..0, 1)
        } else {
            (self.lead + 1..total, self.size - 1)
        };
        ShardSplits {
            lead: self.lead,
            total,
            inner: Combinations::new(rest, k),
        }
    }
}

/// Iterator over the splits of one [`Shard`].
#[derive(Debug, Clone)]
pub struct ShardSplits {
    lead: usize,
    total: usize,
    inner: Combinations,
}

impl Iterator for ShardSplits {
    type Item = Split;

    fn next(&mut self) -> Option<Split> {
        let tail = self.inner.next()?;
        let mut group = Vec::with_capacity(tail.len() + 1);
        group.push(self.lead);
        group.extend(tail);
        Some(Split::from_group(group, self.total))
    }
}

/// Lazily enumerates every two-way partition of `total` entities whose
/// groups both hold at least `min_group_size` members.
///
/// Subgroup sizes run from `min_group_size` to `total / 2`; when `total`
/// is even the half-size class would meet every partition twice (once from
/// each side), so only subgroups containing entity 0 are taken there. Each
/// partition is therefore emitted exactly once.
///
/// # Examples
///
/// ```
/// use u_partition::enumerate::SplitGenerator;
///
/// // 4 entities, both sides >= 2: {0,1}|{2,3}, {0,2}|{1,3}, {0,3}|{1,2}
/// let splits = SplitGenerator::new(4, 2);
/// assert_eq!(splits.count_splits(), 3);
/// assert_eq!(splits.count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct SplitGenerator {
    total: usize,
    shards: Vec<Shard>,
    next_shard: usize,
    current: Option<ShardSplits>,
}

impl SplitGenerator {
    /// Creates a generator over `total` entities.
    ///
    /// A `min_group_size` of 0 is treated as 1: empty groups are never
    /// produced.
    pub fn new(total: usize, min_group_size: usize) -> Self {
        let min = min_group_size.max(1);
        let mut shards = Vec::new();
        for size in min..=total / 2 {
            if 2 * size == total {
                shards.push(Shard { size, lead: 0 });
            } else {
                shards.extend((0..=total - size).map(|lead| Shard { size, lead }));
            }
        }
        Self {
            total,
            shards,
            next_shard: 0,
            current: None,
        }
    }

    /// Number of entities being partitioned.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The shards making up the full enumeration, in sequential order.
    pub fn shards(&self) -> &[Shard] {
        &self.shards
    }

    /// Exact number of splits the full enumeration yields (saturating).
    pub fn count_splits(&self) -> u64 {
        self.shards
            .iter()
            .fold(0u64, |acc, s| acc.saturating_add(s.len(self.total)))
    }
}

impl Iterator for SplitGenerator {
    type Item = Split;

    fn next(&mut self) -> Option<Split> {
        loop {
            if let Some(split) = self.current.as_mut().and_then(Iterator::next) {
                return Some(split);
            }
            let shard = *self.shards.get(self.next_shard)?;
            self.current = Some(shard.splits(self.total));
            self.next_shard += 1;
        }
    }
}
