//! EI signatures and alternation.
//!
//! The EI signature of an instance records, for every node picked by van
//! Leeuwen's merge, whether it was a leaf (`E`) or an internal node (`I`),
//! followed by the kind of the root. Its alternation is the number of
//! maximal runs of `E`: sorted inputs whose leaves and merge results
//! interleave often are the ones where a batched builder saves little.

use crate::depths;
use crate::van_leeuwen::{self, Choice};
use oxipfc_core::error::Result;
use oxipfc_core::{PartiallySortedArray, Weight};
use std::collections::BTreeSet;

/// Statistics of one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EiStatistics {
    /// Sequence of `E`/`I` choices, root last.
    pub signature: String,
    /// Number of maximal runs of `E` in the signature.
    pub alternation: usize,
    /// Optimal code lengths, in input order.
    pub code_lengths: Vec<u32>,
    /// Longest code length (0 for fewer than two weights).
    pub max_code_length: u32,
    /// Number of distinct code lengths.
    pub distinct_code_lengths: usize,
}

impl EiStatistics {
    /// Run van Leeuwen's merge over `weights` and collect its statistics.
    ///
    /// ```
    /// use oxipfc_gdm::signature::EiStatistics;
    ///
    /// let stats = EiStatistics::measure(&[1, 1, 4]).unwrap();
    /// assert_eq!(stats.signature, "EEIEI");
    /// assert_eq!(stats.alternation, 2);
    /// assert_eq!(stats.code_lengths, vec![2, 2, 1]);
    /// ```
    pub fn measure(weights: &[Weight]) -> Result<Self> {
        let array = PartiallySortedArray::new(weights)?;
        let mut signature = String::with_capacity(2 * weights.len());
        let tree = van_leeuwen::build_with(&array, |choice| signature.push(choice.as_char()));
        let code_lengths = depths::code_lengths(&tree);

        let max_code_length = code_lengths.iter().copied().max().unwrap_or(0);
        let distinct_code_lengths = code_lengths.iter().collect::<BTreeSet<_>>().len();

        Ok(Self {
            alternation: alternation(&signature),
            signature,
            code_lengths,
            max_code_length,
            distinct_code_lengths,
        })
    }
}

/// Number of maximal runs of `E` in an EI signature.
pub fn alternation(signature: &str) -> usize {
    let external = Choice::External.as_char();
    let mut runs = 0;
    let mut previous = None;
    for c in signature.chars() {
        if c == external && previous != Some(external) {
            runs += 1;
        }
        previous = Some(c);
    }
    runs
}
