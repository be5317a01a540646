//! Error types for OxiPFC operations.
//!
//! Code construction is a pure, deterministic computation, so there is
//! nothing to retry: every error here is either rejected input or a bug
//! caught by a consistency check.

use std::io;
use thiserror::Error;

/// The main error type for OxiPFC operations.
#[derive(Debug, Error)]
pub enum PfcError {
    /// I/O error while reading weights or corpus files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A negative weight was supplied.
    #[error("Invalid weight {value} at index {index}: weights must be non-negative")]
    InvalidWeight {
        /// Position of the offending weight in the input.
        index: usize,
        /// The rejected value.
        value: i64,
    },

    /// A token in a weight list could not be parsed as an integer.
    #[error("Cannot parse weight {token:?} on line {line}")]
    Parse {
        /// 1-based line number of the token.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// The sum of all weights does not fit in a [`crate::Weight`].
    #[error("Total weight overflows a 64-bit integer")]
    WeightOverflow,

    /// A rank query was issued outside `0..len`.
    #[error("Index {index} out of range for array of length {len}")]
    IndexOutOfRange {
        /// The requested rank.
        index: usize,
        /// Number of elements in the array.
        len: usize,
    },

    /// A range query was issued with bounds outside `0 <= left <= right <= len`.
    #[error("Invalid range {left}..{right} for array of length {len}")]
    InvalidRange {
        /// Left (inclusive) bound.
        left: usize,
        /// Right (exclusive) bound.
        right: usize,
        /// Number of elements in the array.
        len: usize,
    },

    /// An ordering or weight invariant of a tree builder did not hold.
    #[error("Invariant violated during {phase}: {message}")]
    InvariantViolation {
        /// Builder phase in which the check failed.
        phase: &'static str,
        /// Description of the violated invariant.
        message: String,
    },
}

/// Result type alias for OxiPFC operations.
pub type Result<T> = std::result::Result<T, PfcError>;

impl PfcError {
    /// Create an invalid weight error.
    pub fn invalid_weight(index: usize, value: i64) -> Self {
        Self::InvalidWeight { index, value }
    }

    /// Create a parse error.
    pub fn parse(line: usize, token: impl Into<String>) -> Self {
        Self::Parse {
            line,
            token: token.into(),
        }
    }

    /// Create an index out of range error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create an invalid range error.
    pub fn invalid_range(left: usize, right: usize, len: usize) -> Self {
        Self::InvalidRange { left, right, len }
    }

    /// Create an invariant violation error.
    pub fn invariant(phase: &'static str, message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            phase,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PfcError::invalid_weight(3, -7);
        assert!(err.to_string().contains("-7"));
        assert!(err.to_string().contains("index 3"));

        let err = PfcError::index_out_of_range(10, 4);
        assert!(err.to_string().contains("out of range"));

        let err = PfcError::invariant("dock", "internals not sorted");
        assert!(err.to_string().contains("dock"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: PfcError = io_err.into();
        assert!(matches!(err, PfcError::Io(_)));
    }
}
