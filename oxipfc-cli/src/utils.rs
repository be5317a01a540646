//! Shared utilities for OxiPFC CLI commands.

use indicatif::{ProgressBar, ProgressStyle};
use oxipfc_core::Weight;
use oxipfc_core::error::Result;
use oxipfc_core::input::{parse_weights, validate_weights};
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "OXIPFC_LOG";

/// Install the stderr log subscriber. `OXIPFC_LOG` takes precedence over
/// the `--verbose` default.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Create a progress bar with consistent styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    match ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        Ok(style) => pb.set_style(style.progress_chars("█▓▒░ ")),
        Err(e) => tracing::warn!("progress bar template rejected: {e}"),
    }
    pb
}

/// Collect weights from the command line or, failing that, from a file.
///
/// A file named `-`, or no file and no arguments at all, reads standard
/// input.
pub fn read_weights(args: &[i64], file: Option<&Path>) -> Result<Vec<Weight>> {
    match file {
        Some(path) if path != Path::new("-") => {
            let text = std::fs::read_to_string(path)?;
            parse_weights(&text)
        }
        Some(_) => read_stdin(),
        None if args.is_empty() => read_stdin(),
        None => validate_weights(args),
    }
}

fn read_stdin() -> Result<Vec<Weight>> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    parse_weights(&text)
}

/// Render a list of numbers separated by single spaces.
pub fn join<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxipfc_core::PfcError;

    #[test]
    fn test_read_weights_from_args() {
        assert_eq!(read_weights(&[3, 1, 2], None).unwrap(), vec![3, 1, 2]);
    }

    #[test]
    fn test_negative_argument_rejected() {
        let err = read_weights(&[3, -1], None).unwrap_err();
        assert!(matches!(err, PfcError::InvalidWeight { index: 1, value: -1 }));
    }

    #[test]
    fn test_read_weights_from_file() {
        let path = std::env::temp_dir().join(format!("oxipfc-weights-{}.txt", std::process::id()));
        std::fs::write(&path, "# counts\n5, 1\n2\n").unwrap();
        let weights = read_weights(&[], Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(weights, vec![5, 1, 2]);
    }

    #[test]
    fn test_missing_file() {
        let err = read_weights(&[], Some(Path::new("/nonexistent/oxipfc/weights.txt")));
        assert!(matches!(err, Err(PfcError::Io(_))));
    }

    #[test]
    fn test_join() {
        assert_eq!(join(&[1, 2, 3]), "1 2 3");
        assert_eq!(join::<u32>(&[]), "");
    }
}
