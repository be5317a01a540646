//! Validation and parsing of weight lists supplied by a host program.
//!
//! Builders work on unsigned [`Weight`]s; anything that arrives as text or
//! as signed integers is checked here, before any work begins.

use crate::Weight;
use crate::error::{PfcError, Result};

/// Convert signed integers to weights, rejecting negative values.
pub fn validate_weights(values: &[i64]) -> Result<Vec<Weight>> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            Weight::try_from(value).map_err(|_| PfcError::invalid_weight(index, value))
        })
        .collect()
}

/// Parse a whitespace- or comma-separated list of integer weights.
///
/// Lines starting with `#` are ignored.
///
/// ```
/// use oxipfc_core::input::parse_weights;
///
/// assert_eq!(parse_weights("1, 2 4\n8").unwrap(), vec![1, 2, 4, 8]);
/// assert!(parse_weights("1 -2").is_err());
/// ```
pub fn parse_weights(text: &str) -> Result<Vec<Weight>> {
    let mut values = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }
        for token in line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            let value: i64 = token
                .parse()
                .map_err(|_| PfcError::parse(line_no + 1, token))?;
            values.push(value);
        }
    }
    validate_weights(&values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_weights() {
        assert_eq!(validate_weights(&[0, 3, 7]).unwrap(), vec![0, 3, 7]);
        assert!(validate_weights(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = validate_weights(&[4, 2, -1, 5]).unwrap_err();
        assert!(matches!(
            err,
            PfcError::InvalidWeight {
                index: 2,
                value: -1
            }
        ));
    }

    #[test]
    fn test_parse_weights() {
        let text = "# sample\n1 1 2\n3,5 , 8\n\n";
        assert_eq!(parse_weights(text).unwrap(), vec![1, 1, 2, 3, 5, 8]);
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = parse_weights("1 2\n3 x4").unwrap_err();
        match err {
            PfcError::Parse { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x4");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
