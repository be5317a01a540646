//! # OxiPFC Core
//!
//! Core components for the OxiPFC prefix-free code library.
//!
//! This crate provides the building blocks shared by every code builder:
//!
//! - [`psa`]: Partially sorted array answering rank/select/range-sum queries
//! - [`metrics`]: Kraft sums, weighted cost, entropy bound, run lengths
//! - [`input`]: Validation and parsing of weight lists
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: CLI                                                 │
//! │     code lengths, corpus statistics, comparisons        │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Builders                                            │
//! │     Group-Dock-Merge, van Leeuwen, Huffman              │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Order statistics (this crate)                       │
//! │     PartiallySortedArray, metrics, input validation     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxipfc_core::PartiallySortedArray;
//! use oxipfc_core::metrics::is_complete_code;
//!
//! let array = PartiallySortedArray::new(&[50, 40, 30, 20, 10]).unwrap();
//! assert_eq!(array.select(0), 10);
//! assert_eq!(array.rank(35), 3);
//! assert_eq!(array.range_sum(1, 3), 50);
//!
//! assert!(is_complete_code(&[1, 2, 2]));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod input;
pub mod metrics;
pub mod psa;

/// A symbol weight (frequency).
pub type Weight = u64;

// Re-exports for convenience
pub use error::{PfcError, Result};
pub use psa::PartiallySortedArray;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::Weight;
    pub use crate::error::{PfcError, Result};
    pub use crate::metrics::{is_complete_code, kraft_sum, weighted_cost};
    pub use crate::psa::PartiallySortedArray;
}
