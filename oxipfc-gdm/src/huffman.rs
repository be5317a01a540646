//! Heap-based Huffman code lengths.
//!
//! The textbook construction: repeatedly pop the two lightest roots from a
//! min-heap and push their sum. Kept as the reference the other builders
//! are checked against.

use oxipfc_core::Weight;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Optimal code lengths for `weights`, in input order.
///
/// Sums are accumulated in 128 bits, so any input is accepted.
///
/// ```
/// use oxipfc_gdm::huffman::code_lengths;
///
/// assert_eq!(code_lengths(&[10, 15, 16, 29, 30]), vec![3, 3, 2, 2, 2]);
/// ```
pub fn code_lengths(weights: &[Weight]) -> Vec<u32> {
    let n = weights.len();
    if n <= 1 {
        return vec![0; n];
    }

    // Nodes 0..n are leaves, n.. are created in merge order.
    let mut parent = vec![0usize; 2 * n - 1];
    let mut heap: BinaryHeap<Reverse<(u128, usize)>> = weights
        .iter()
        .enumerate()
        .map(|(i, &w)| Reverse((u128::from(w), i)))
        .collect();

    let mut next = n;
    while let (Some(Reverse((wa, a))), Some(Reverse((wb, b)))) = (heap.pop(), heap.pop()) {
        parent[a] = next;
        parent[b] = next;
        heap.push(Reverse((wa + wb, next)));
        next += 1;
    }

    // The root is the last node; parents always come after their children.
    let root = next - 1;
    let mut depth = vec![0u32; 2 * n - 1];
    for id in (0..root).rev() {
        depth[id] = depth[parent[id]] + 1;
    }
    depth.truncate(n);
    depth
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxipfc_core::metrics::{is_complete_code, weighted_cost};

    #[test]
    fn test_degenerate() {
        assert!(code_lengths(&[]).is_empty());
        assert_eq!(code_lengths(&[3]), vec![0]);
        assert_eq!(code_lengths(&[3, 100]), vec![1, 1]);
    }

    #[test]
    fn test_uniform() {
        assert_eq!(code_lengths(&[1, 1, 1, 1]), vec![2, 2, 2, 2]);
        assert_eq!(code_lengths(&[1; 8]), vec![3; 8]);
    }

    #[test]
    fn test_skewed() {
        let weights: Vec<Weight> = (0..9).map(|i| 1 << i).collect();
        assert_eq!(code_lengths(&weights), vec![8, 8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_cost_and_kraft() {
        let weights = [5, 9, 12, 13, 16, 45];
        let lengths = code_lengths(&weights);
        assert!(is_complete_code(&lengths));
        assert_eq!(weighted_cost(&weights, &lengths), 224);
    }

    #[test]
    fn test_huge_weights() {
        let lengths = code_lengths(&[u64::MAX, u64::MAX, u64::MAX]);
        let mut sorted = lengths.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 2]);
    }
}
