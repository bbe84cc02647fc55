//! Index-based k-combination iterator.

use std::ops::Range;

/// Iterates over all `k`-element subsets of an index range in
/// lexicographic order.
///
/// Only the current combination is held in memory; each call to `next`
/// advances it in place and yields a copy.
///
/// # Examples
///
/// ```
/// use u_partition::enumerate::Combinations;
///
/// let all: Vec<Vec<usize>> = Combinations::new(1..4, 2).collect();
/// assert_eq!(all, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    indices: Vec<usize>,
    end: usize,
    started: bool,
    done: bool,
}

impl Combinations {
    /// Creates an iterator over `k`-subsets of `pool`.
    ///
    /// Yields nothing when `k` exceeds the pool size, and a single empty
    /// combination when `k == 0`.
    pub fn new(pool: Range<usize>, k: usize) -> Self {
        let available = pool.end.saturating_sub(pool.start);
        Self {
            indices: (pool.start..pool.start + k).collect(),
            end: pool.end,
            started: false,
            done: k > available,
        }
    }

    /// Advances `indices` to the next combination. Returns `false` when
    /// the last combination has already been produced.
    fn advance(&mut self) -> bool {
        let k = self.indices.len();
        // Rightmost position that can still move right.
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < self.end - (k - i)) else {
            return false;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
        } else if !self.advance() {
            self.done = true;
            return None;
        }
        Some(self.indices.clone())
    }
}

/// `n choose k`, saturating at `u64::MAX`.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // Exact at every step: acc * (n - i) is divisible by (i + 1).
        acc = acc * (n - i) as u128 / (i + 1) as u128;
        if acc > u64::MAX as u128 {
            return u64::MAX;
        }
    }
    acc as u64
}
