//! Command implementations for OxiPFC CLI.

pub mod compare;
pub mod lengths;
pub mod stats;

pub use compare::cmd_compare;
pub use lengths::cmd_lengths;
pub use stats::{ReportFormat, cmd_stats};
