//! Measurements on code-length vectors.
//!
//! These helpers check that a vector of code lengths describes a complete
//! prefix-free code and measure how well it compresses a text whose symbol
//! frequencies are given by a weight vector.

use crate::Weight;

/// Kraft sum `sum(2^-l)` of a code-length vector.
///
/// A prefix-free code exists for `lengths` iff the sum is at most 1, and the
/// code tree is full iff it is exactly 1.
pub fn kraft_sum(lengths: &[u32]) -> f64 {
    lengths
        .iter()
        .map(|&l| 2.0f64.powi(-(l.min(i32::MAX as u32) as i32)))
        .sum()
}

/// Exact check that `lengths` are the leaf depths of a full binary tree,
/// i.e. that `sum(2^-l) == 1`.
///
/// Works level by level from the deepest leaves up: every level must hold an
/// even number of nodes, which pair into parents one level higher, until a
/// single root remains. A lone `[0]` is a complete code; an empty vector is not.
pub fn is_complete_code(lengths: &[u32]) -> bool {
    let Some(&max) = lengths.iter().max() else {
        return false;
    };

    let mut per_level = vec![0usize; max as usize + 1];
    for &l in lengths {
        per_level[l as usize] += 1;
    }

    let mut carried = 0usize;
    for level in (1..=max as usize).rev() {
        let nodes = per_level[level] + carried;
        if nodes % 2 != 0 {
            return false;
        }
        carried = nodes / 2;
    }
    per_level[0] + carried == 1
}

/// Weighted external path length `sum(weights[i] * lengths[i])`, i.e. the
/// number of bits needed to encode the text described by `weights`.
///
/// # Panics
///
/// Panics if the two slices differ in length.
pub fn weighted_cost(weights: &[Weight], lengths: &[u32]) -> u128 {
    assert_eq!(
        weights.len(),
        lengths.len(),
        "weights and lengths must be aligned"
    );
    weights
        .iter()
        .zip(lengths)
        .map(|(&w, &l)| u128::from(w) * u128::from(l))
        .sum()
}

/// `N` times the entropy of the distribution given by `weights`, rounded up:
/// `ceil(S log2 S - sum(w log2 w))` with `S = sum(weights)`.
///
/// This is a lower bound on [`weighted_cost`] for any prefix-free code, and
/// an optimal code never exceeds it by more than `S` bits.
pub fn n_times_entropy(weights: &[Weight]) -> u64 {
    let total: f64 = weights.iter().map(|&w| w as f64).sum();
    if total == 0.0 {
        return 0;
    }
    let terms: f64 = weights
        .iter()
        .filter(|&&w| w > 0)
        .map(|&w| {
            let w = w as f64;
            w * w.log2()
        })
        .sum();
    let bits = total * total.log2() - terms;
    // absorb rounding noise so exact integers do not round up
    (bits - 1e-9).ceil().max(0.0) as u64
}

/// Compress a code-length vector into `(length, count)` pairs, longest
/// codes first.
///
/// ```
/// use oxipfc_core::metrics::run_lengths;
///
/// assert_eq!(run_lengths(&[3, 3, 2, 2, 3, 3]), vec![(3, 4), (2, 2)]);
/// ```
pub fn run_lengths(lengths: &[u32]) -> Vec<(u32, usize)> {
    let mut sorted = lengths.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut runs: Vec<(u32, usize)> = Vec::new();
    for l in sorted {
        match runs.last_mut() {
            Some((value, count)) if *value == l => *count += 1,
            _ => runs.push((l, 1)),
        }
    }
    runs
}

/// Expand `(length, count)` pairs back into a code-length vector.
pub fn expand_run_lengths(runs: &[(u32, usize)]) -> Vec<u32> {
    runs.iter()
        .flat_map(|&(l, n)| std::iter::repeat_n(l, n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HUFFMAN_ARTICLE: [Weight; 13] = [1, 3, 4, 4, 4, 4, 6, 6, 10, 10, 10, 18, 20];
    const MOFFAT_TURPIN: [Weight; 12] = [1, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 6];

    #[test]
    fn test_kraft_sum() {
        assert_eq!(kraft_sum(&[]), 0.0);
        assert_eq!(kraft_sum(&[0]), 1.0);
        assert_eq!(kraft_sum(&[1, 2, 2]), 1.0);
        assert_eq!(kraft_sum(&[2, 2, 2, 2]), 1.0);
        assert_eq!(kraft_sum(&expand_run_lengths(&[(5, 6), (4, 3), (3, 3), (2, 1)])), 1.0);
    }

    #[test]
    fn test_is_complete_code() {
        assert!(!is_complete_code(&[]));
        assert!(is_complete_code(&[0]));
        assert!(is_complete_code(&[1, 1]));
        assert!(is_complete_code(&[1, 2, 2]));
        assert!(is_complete_code(&[8, 8, 7, 6, 5, 4, 3, 2, 1]));
        assert!(!is_complete_code(&[1, 2]));
        assert!(!is_complete_code(&[1, 1, 1]));
        assert!(!is_complete_code(&[0, 1]));
        assert!(!is_complete_code(&[2, 2, 2]));
    }

    #[test]
    fn test_is_complete_code_deep() {
        // depths of a caterpillar tree over 200 leaves
        let mut lengths: Vec<u32> = (1..200).collect();
        lengths.push(199);
        assert!(is_complete_code(&lengths));
    }

    #[test]
    fn test_weighted_cost() {
        assert_eq!(weighted_cost(&[], &[]), 0);
        assert_eq!(weighted_cost(&[1, 1], &[1, 1]), 2);
        assert_eq!(weighted_cost(&[1, 1, 1, 1], &[2, 2, 2, 2]), 8);

        let mut weights = HUFFMAN_ARTICLE.to_vec();
        weights.sort_unstable();
        let lengths = expand_run_lengths(&[(5, 6), (4, 3), (3, 3), (2, 1)]);
        assert_eq!(weighted_cost(&weights, &lengths), 342);

        let lengths = expand_run_lengths(&[(5, 4), (4, 4), (3, 3), (2, 1)]);
        assert_eq!(weighted_cost(&MOFFAT_TURPIN, &lengths), 84);
    }

    #[test]
    #[should_panic(expected = "aligned")]
    fn test_weighted_cost_misaligned() {
        weighted_cost(&[1, 2], &[1]);
    }

    #[test]
    fn test_n_times_entropy() {
        assert_eq!(n_times_entropy(&[]), 0);
        assert_eq!(n_times_entropy(&[1]), 0);
        assert_eq!(n_times_entropy(&[1, 1]), 2);
        assert_eq!(n_times_entropy(&[1, 1, 1, 1]), 8);
        assert_eq!(n_times_entropy(&HUFFMAN_ARTICLE), 336);
        assert_eq!(n_times_entropy(&MOFFAT_TURPIN), 84);
        assert_eq!(n_times_entropy(&[0, 0, 5]), 0);
    }

    #[test]
    fn test_run_lengths() {
        assert_eq!(run_lengths(&[]), vec![]);
        assert_eq!(run_lengths(&[0]), vec![(0, 1)]);
        assert_eq!(run_lengths(&[1, 1, 1, 1]), vec![(1, 4)]);
        assert_eq!(run_lengths(&[2, 2, 2, 1, 1, 1, 1]), vec![(2, 3), (1, 4)]);
        assert_eq!(run_lengths(&[3, 2, 2, 2, 1]), vec![(3, 1), (2, 3), (1, 1)]);
    }

    #[test]
    fn test_expand_run_lengths() {
        assert_eq!(
            expand_run_lengths(&[(2, 3), (3, 4), (1, 2)]),
            vec![2, 2, 2, 3, 3, 3, 3, 1, 1]
        );
    }
}
