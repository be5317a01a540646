//! Property tests for the partially sorted array queries.

use oxipfc_core::PartiallySortedArray;
use proptest::prelude::*;

proptest! {
    #[test]
    fn select_matches_sorted_copy(weights in prop::collection::vec(0..1000u64, 0..200)) {
        let array = PartiallySortedArray::new(&weights).unwrap();
        let mut sorted = weights.clone();
        sorted.sort_unstable();

        prop_assert_eq!(array.len(), sorted.len());
        for (r, &w) in sorted.iter().enumerate() {
            prop_assert_eq!(array.select(r), w);
        }
    }

    #[test]
    fn rank_counts_smaller_elements(
        weights in prop::collection::vec(0..100u64, 1..200),
        x in 0..120u64,
    ) {
        let array = PartiallySortedArray::new(&weights).unwrap();
        let smaller = weights.iter().filter(|&&w| w < x).count();
        let at_most = weights.iter().filter(|&&w| w <= x).count();

        prop_assert_eq!(array.rank(x), smaller);
        prop_assert_eq!(array.rank_right(x), at_most);
    }

    #[test]
    fn range_sum_matches_slice_sum(
        weights in prop::collection::vec(0..10_000u64, 1..200),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let array = PartiallySortedArray::new(&weights).unwrap();
        let mut sorted = weights.clone();
        sorted.sort_unstable();

        let i = a.index(sorted.len() + 1);
        let j = b.index(sorted.len() + 1);
        let (left, right) = if i <= j { (i, j) } else { (j, i) };

        let expected: u64 = sorted[left..right].iter().sum();
        prop_assert_eq!(array.range_sum(left, right), expected);
        prop_assert_eq!(array.partial_sum(right) - array.partial_sum(left), expected);
    }

    #[test]
    fn original_index_is_a_permutation(weights in prop::collection::vec(0..50u64, 0..100)) {
        let array = PartiallySortedArray::new(&weights).unwrap();
        let mut seen = vec![false; weights.len()];
        for p in 0..array.len() {
            let i = array.original_index(p);
            prop_assert!(!seen[i]);
            seen[i] = true;
            prop_assert_eq!(weights[i], array.select(p));
        }
    }
}
