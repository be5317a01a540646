//! Builder configuration.

use oxipfc_core::Weight;

/// Which node to take when the smallest internal node and the next leaf
/// have equal weight during the mix phase.
///
/// Ties never change the cost of the resulting code, only its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Take the leaf first (van Leeuwen's original rule).
    #[default]
    PreferExternal,
    /// Take the internal node first.
    PreferInternal,
}

impl TieBreak {
    /// Whether an internal node of weight `internal` is taken before a leaf
    /// of weight `external`.
    pub fn takes_internal(self, internal: Weight, external: Weight) -> bool {
        match self {
            TieBreak::PreferExternal => internal < external,
            TieBreak::PreferInternal => internal <= external,
        }
    }
}

/// Group-Dock-Merge builder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GdmConfig {
    /// Tie-break rule of the mix phase.
    pub tie_break: TieBreak,
    /// Check ordering and weight invariants after every phase and report
    /// violations as errors. Costs extra weight evaluations.
    pub verify_invariants: bool,
}

impl GdmConfig {
    /// Default configuration: leaves win ties, invariants are checked in
    /// debug builds only.
    pub const DEFAULT: Self = Self {
        tie_break: TieBreak::PreferExternal,
        verify_invariants: cfg!(debug_assertions),
    };

    /// Configuration with invariant checks always enabled.
    pub const CHECKED: Self = Self {
        tie_break: TieBreak::PreferExternal,
        verify_invariants: true,
    };

    /// Create a configuration with the given tie-break rule.
    pub const fn new(tie_break: TieBreak) -> Self {
        Self {
            tie_break,
            verify_invariants: cfg!(debug_assertions),
        }
    }

    /// Enable or disable invariant checks.
    pub const fn with_verification(mut self, verify: bool) -> Self {
        self.verify_invariants = verify;
        self
    }
}

impl Default for GdmConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tie_break() {
        assert!(!TieBreak::PreferExternal.takes_internal(5, 5));
        assert!(TieBreak::PreferExternal.takes_internal(4, 5));
        assert!(TieBreak::PreferInternal.takes_internal(5, 5));
        assert!(!TieBreak::PreferInternal.takes_internal(6, 5));
    }

    #[test]
    fn test_presets() {
        assert_eq!(GdmConfig::default(), GdmConfig::DEFAULT);
        assert!(GdmConfig::CHECKED.verify_invariants);

        let config = GdmConfig::new(TieBreak::PreferInternal).with_verification(false);
        assert_eq!(config.tie_break, TieBreak::PreferInternal);
        assert!(!config.verify_invariants);
    }
}
