//! Partially sorted array with rank, select and partial-sum queries.
//!
//! The array is built once from an unsorted multiset of weights and answers
//! order-statistics queries over it:
//!
//! ```text
//! input     [50, 10, 40, 20, 30]
//! sorted    [10, 20, 30, 40, 50]      select(r)
//! prefix    [0, 10, 30, 60, 100, 150] partial_sum(r)
//! ```
//!
//! Sorting happens once at construction and prefix sums are precomputed, so
//! every query afterwards is `O(1)` or `O(log n)` and read-only. The stable
//! sorting permutation is kept so that a sorted position can be mapped back
//! to the index of the weight in the caller's input.

use crate::Weight;
use crate::error::{PfcError, Result};

/// Sorted view of a weight multiset supporting rank/select/range-sum queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartiallySortedArray {
    /// Weights in ascending order.
    values: Vec<Weight>,
    /// `prefix_sums[i]` is the sum of the `i` smallest weights (length `n + 1`).
    prefix_sums: Vec<Weight>,
    /// `order[p]` is the input index of the weight at sorted position `p`.
    order: Vec<usize>,
}

impl PartiallySortedArray {
    /// Build the array from an unsorted multiset of weights.
    ///
    /// Equal weights keep their input order. Fails with
    /// [`PfcError::WeightOverflow`] when the total does not fit in a [`Weight`].
    pub fn new(weights: &[Weight]) -> Result<Self> {
        let mut order: Vec<usize> = (0..weights.len()).collect();
        order.sort_by_key(|&i| weights[i]);

        let values: Vec<Weight> = order.iter().map(|&i| weights[i]).collect();

        let mut prefix_sums = Vec::with_capacity(values.len() + 1);
        let mut sum: Weight = 0;
        prefix_sums.push(sum);
        for &w in &values {
            sum = sum.checked_add(w).ok_or(PfcError::WeightOverflow)?;
            prefix_sums.push(sum);
        }

        Ok(Self {
            values,
            prefix_sums,
            order,
        })
    }

    /// Number of weights.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the array holds no weights.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The `r`-th smallest weight (0-indexed).
    ///
    /// # Panics
    ///
    /// Panics if `r >= len()`; an out-of-range rank is a bug in the caller.
    pub fn select(&self, r: usize) -> Weight {
        match self.checked_select(r) {
            Ok(w) => w,
            Err(e) => panic!("select: {e}"),
        }
    }

    /// The `r`-th smallest weight, or [`PfcError::IndexOutOfRange`].
    pub fn checked_select(&self, r: usize) -> Result<Weight> {
        self.values
            .get(r)
            .copied()
            .ok_or_else(|| PfcError::index_out_of_range(r, self.len()))
    }

    /// Number of weights strictly smaller than `x`.
    pub fn rank(&self, x: Weight) -> usize {
        self.values.partition_point(|&v| v < x)
    }

    /// Number of weights smaller than or equal to `x`.
    pub fn rank_right(&self, x: Weight) -> usize {
        self.values.partition_point(|&v| v <= x)
    }

    /// Sum of the `r` smallest weights. `partial_sum(0) == 0`.
    ///
    /// # Panics
    ///
    /// Panics if `r > len()`.
    pub fn partial_sum(&self, r: usize) -> Weight {
        match self.prefix_sums.get(r) {
            Some(&s) => s,
            None => panic!(
                "partial_sum: {}",
                PfcError::index_out_of_range(r, self.len())
            ),
        }
    }

    /// Sum of the weights at sorted positions `left..right`.
    ///
    /// # Panics
    ///
    /// Panics unless `left <= right <= len()`.
    pub fn range_sum(&self, left: usize, right: usize) -> Weight {
        match self.checked_range_sum(left, right) {
            Ok(s) => s,
            Err(e) => panic!("range_sum: {e}"),
        }
    }

    /// Sum of the weights at sorted positions `left..right`, or
    /// [`PfcError::InvalidRange`].
    pub fn checked_range_sum(&self, left: usize, right: usize) -> Result<Weight> {
        if left > right || right > self.len() {
            return Err(PfcError::invalid_range(left, right, self.len()));
        }
        Ok(self.prefix_sums[right] - self.prefix_sums[left])
    }

    /// Sum of all weights.
    pub fn total(&self) -> Weight {
        self.prefix_sums[self.len()]
    }

    /// Input index of the weight at sorted position `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p >= len()`.
    pub fn original_index(&self, p: usize) -> usize {
        self.order[p]
    }

    /// The weights in ascending order.
    pub fn as_sorted(&self) -> &[Weight] {
        &self.values
    }
}
