//! Canonical two-way partitions and their scored form.

use std::cmp::Ordering;

/// An unordered partition of an [`EntitySet`](super::EntitySet) into two
/// disjoint groups, stored as ascending entity indices.
///
/// The orientation is canonical: the smaller group comes first, and when
/// both groups have the same size the one holding the lowest entity index
/// comes first. Because both index lists are sorted, structural equality
/// is set equality, so two `Split`s built from the same partition in
/// either orientation compare equal and hash alike.
///
/// # Examples
///
/// ```
/// use u_partition::model::Split;
///
/// let a = Split::new(vec![3, 1, 2], vec![0, 4]);
/// let b = Split::new(vec![4, 0], vec![2, 3, 1]);
/// assert_eq!(a, b);
/// assert_eq!(a.first(), &[0, 4]);
/// assert_eq!(a.second(), &[1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Split {
    first: Vec<usize>,
    second: Vec<usize>,
}

impl Split {
    /// Builds the canonical split from two groups given in any order.
    ///
    /// The caller guarantees the groups are disjoint.
    pub fn new(mut a: Vec<usize>, mut b: Vec<usize>) -> Self {
        a.sort_unstable();
        b.sort_unstable();
        let a_first = match a.len().cmp(&b.len()) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => a.first() <= b.first(),
        };
        if a_first {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    /// Builds a split from a group and the total entity count; the other
    /// group is the complement.
    pub fn from_group(group: Vec<usize>, total: usize) -> Self {
        let mut member = vec![false; total];
        for &i in &group {
            member[i] = true;
        }
        let rest = (0..total).filter(|&i| !member[i]).collect();
        Self::new(group, rest)
    }

    /// The smaller (or lowest-indexed) group.
    pub fn first(&self) -> &[usize] {
        &self.first
    }

    /// The other group.
    pub fn second(&self) -> &[usize] {
        &self.second
    }

    /// Number of entities across both groups.
    pub fn len(&self) -> usize {
        self.first.len() + self.second.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `|size(first) - size(second)|`.
    pub fn size_difference(&self) -> usize {
        self.second.len().abs_diff(self.first.len())
    }
}

/// A split paired with its imbalance cost.
///
/// Ordered by cost ascending (via [`f64::total_cmp`]); equal costs fall
/// back to the canonical split order, so a ranking of `ScoredSplit`s does
/// not depend on the order in which candidates were seen.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredSplit {
    pub cost: f64,
    pub split: Split,
}

impl ScoredSplit {
    pub fn new(cost: f64, split: Split) -> Self {
        Self { cost, split }
    }
}

impl PartialEq for ScoredSplit {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredSplit {}

impl PartialOrd for ScoredSplit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredSplit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.split.cmp(&other.split))
    }
}
