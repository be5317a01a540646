//! # OxiPFC-GDM: Optimal Prefix-Free Codes
//!
//! This crate computes the code lengths of optimal prefix-free codes
//! (minimum-redundancy codes) with the Group-Dock-Merge algorithm, a variant
//! of van Leeuwen's two-queue construction that merges whole batches of
//! nodes once their relative order is known.
//!
//! ## Features
//!
//! - **Group-Dock-Merge**: few comparisons on inputs whose weights grow fast
//! - **Lazy weights**: tree nodes ask the sorted array for range sums only
//!   when a comparison needs them
//! - **Reference builders**: van Leeuwen's merge and a heap-based Huffman
//! - **Instance statistics**: EI signature, alternation, code-length profile
//!
//! ## Example
//!
//! ```rust
//! use oxipfc_gdm::build_optimal_code_lengths;
//!
//! let lengths = build_optimal_code_lengths(&[1, 1, 1, 1]).unwrap();
//! assert_eq!(lengths, vec![2, 2, 2, 2]);
//!
//! let lengths = build_optimal_code_lengths(&[16, 1, 8, 2, 4]).unwrap();
//! assert_eq!(lengths, vec![1, 4, 2, 4, 3]);
//! ```
//!
//! ## Degenerate inputs
//!
//! | Weights | Lengths  |
//! |---------|----------|
//! | none    | `[]`     |
//! | one     | `[0]`    |
//! | two     | `[1, 1]` |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod depths;
pub mod gdm;
pub mod huffman;
pub mod signature;
pub mod tree;
pub mod van_leeuwen;

pub use config::{GdmConfig, TieBreak};
pub use gdm::{BuildStats, GdmBuilder};
pub use signature::EiStatistics;
pub use tree::{CodeTree, NodeId};

use oxipfc_core::error::Result;
use oxipfc_core::input::validate_weights;
use oxipfc_core::{PartiallySortedArray, Weight};
use std::fmt;

/// Optimal code lengths for `weights`, in input order.
///
/// The i-th entry is the length of the codeword of the symbol with weight
/// `weights[i]`. Fails only when the total weight overflows.
pub fn build_optimal_code_lengths(weights: &[Weight]) -> Result<Vec<u32>> {
    build_optimal_code_lengths_with(weights, GdmConfig::default()).map(|(lengths, _)| lengths)
}

/// Optimal code lengths for `weights` with a custom configuration, together
/// with the builder's counters.
pub fn build_optimal_code_lengths_with(
    weights: &[Weight],
    config: GdmConfig,
) -> Result<(Vec<u32>, BuildStats)> {
    let array = PartiallySortedArray::new(weights)?;
    let (tree, stats) = GdmBuilder::with_config(&array, config).build()?;
    Ok((depths::code_lengths(&tree), stats))
}

/// Optimal code lengths for signed weights; negative weights are rejected.
///
/// ```
/// use oxipfc_core::PfcError;
/// use oxipfc_gdm::build_optimal_code_lengths_signed;
///
/// assert_eq!(build_optimal_code_lengths_signed(&[3, 3]).unwrap(), vec![1, 1]);
/// assert!(matches!(
///     build_optimal_code_lengths_signed(&[3, -3]),
///     Err(PfcError::InvalidWeight { index: 1, value: -3 })
/// ));
/// ```
pub fn build_optimal_code_lengths_signed(weights: &[i64]) -> Result<Vec<u32>> {
    build_optimal_code_lengths(&validate_weights(weights)?)
}

/// Code-length construction algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Group-Dock-Merge.
    #[default]
    Gdm,
    /// Van Leeuwen's two-queue merge.
    VanLeeuwen,
    /// Heap-based Huffman.
    Huffman,
}

impl Algorithm {
    /// Every algorithm, in display order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Gdm, Algorithm::VanLeeuwen, Algorithm::Huffman];

    /// Short name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Gdm => "gdm",
            Algorithm::VanLeeuwen => "van-leeuwen",
            Algorithm::Huffman => "huffman",
        }
    }

    /// Optimal code lengths for `weights`, in input order.
    pub fn code_lengths(self, weights: &[Weight]) -> Result<Vec<u32>> {
        match self {
            Algorithm::Gdm => build_optimal_code_lengths(weights),
            Algorithm::VanLeeuwen => van_leeuwen::code_lengths(weights),
            Algorithm::Huffman => Ok(huffman::code_lengths(weights)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxipfc_core::PfcError;
    use oxipfc_core::metrics::weighted_cost;

    #[test]
    fn test_degenerate_cases() {
        assert!(build_optimal_code_lengths(&[]).unwrap().is_empty());
        assert_eq!(build_optimal_code_lengths(&[7]).unwrap(), vec![0]);
        assert_eq!(build_optimal_code_lengths(&[7, 0]).unwrap(), vec![1, 1]);
    }

    #[test]
    fn test_overflow_rejected() {
        let err = build_optimal_code_lengths(&[u64::MAX, 1]).unwrap_err();
        assert!(matches!(err, PfcError::WeightOverflow));
    }

    #[test]
    fn test_algorithms_agree_on_cost() {
        let weights = [10, 15, 16, 29, 30, 3, 3, 100, 1];
        let costs: Vec<u128> = Algorithm::ALL
            .iter()
            .map(|a| weighted_cost(&weights, &a.code_lengths(&weights).unwrap()))
            .collect();
        assert_eq!(costs[0], costs[1]);
        assert_eq!(costs[1], costs[2]);
    }

    #[test]
    fn test_stats_count_internal_nodes() {
        let weights = [4, 4, 4, 4, 4, 4, 4];
        let (lengths, stats) =
            build_optimal_code_lengths_with(&weights, GdmConfig::CHECKED).unwrap();
        assert_eq!(lengths.len(), 7);
        assert_eq!(stats.internal_nodes(), 6);
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!(Algorithm::default(), Algorithm::Gdm);
        assert_eq!(Algorithm::VanLeeuwen.to_string(), "van-leeuwen");
    }
}
