//! Bounded top-N accumulator.

use crate::model::ScoredSplit;

/// Keeps the `N` lowest-cost distinct splits offered so far, sorted
/// ascending.
///
/// Distinctness is by [`Split`](crate::model::Split) equality, not by
/// cost: offering a split that is already held is a no-op. Ties in cost
/// are ordered by the canonical split, so the retained set does not depend
/// on the order of offers, and two collectors fed disjoint halves of a
/// stream merge into the same result as one collector fed the whole
/// stream.
///
/// # Examples
///
/// ```
/// use u_partition::model::{ScoredSplit, Split};
/// use u_partition::search::TopN;
///
/// let mut top = TopN::new(2);
/// top.offer(ScoredSplit::new(3.0, Split::from_group(vec![0, 1], 4)));
/// top.offer(ScoredSplit::new(1.0, Split::from_group(vec![0, 2], 4)));
/// top.offer(ScoredSplit::new(2.0, Split::from_group(vec![0, 3], 4)));
///
/// let costs: Vec<f64> = top.iter().map(|s| s.cost).collect();
/// assert_eq!(costs, vec![1.0, 2.0]);
/// ```
#[derive(Debug, Clone)]
pub struct TopN {
    capacity: usize,
    entries: Vec<ScoredSplit>,
}

impl TopN {
    /// Creates an empty collector holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity.min(1024) + 1),
        }
    }

    /// Offers a candidate. Returns `true` if it is now among the retained
    /// entries.
    pub fn offer(&mut self, candidate: ScoredSplit) -> bool {
        if self.entries.iter().any(|e| e.split == candidate.split) {
            return false;
        }
        let pos = self.entries.partition_point(|e| *e < candidate);
        if pos >= self.capacity {
            return false;
        }
        self.entries.insert(pos, candidate);
        self.entries.truncate(self.capacity);
        true
    }

    /// Folds another collector's entries into this one.
    pub fn merge(&mut self, other: TopN) {
        for entry in other.entries {
            self.offer(entry);
        }
    }

    /// Cost a candidate must beat (or tie) to be retained, once full.
    ///
    /// `None` while there is still room.
    pub fn worst_cost(&self) -> Option<f64> {
        if self.is_full() {
            self.entries.last().map(|e| e.cost)
        } else {
            None
        }
    }

    /// Whether a candidate whose cost is at least `bound` can be skipped.
    pub fn rejects_at_least(&self, bound: f64) -> bool {
        if self.capacity == 0 {
            return true;
        }
        self.worst_cost().is_some_and(|worst| bound > worst)
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredSplit> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[ScoredSplit] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<ScoredSplit> {
        self.entries
    }
}
