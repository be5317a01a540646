//! Lengths command implementation.

use crate::utils::{join, read_weights};
use oxipfc_core::Weight;
use oxipfc_core::metrics::{is_complete_code, kraft_sum, weighted_cost};
use oxipfc_gdm::Algorithm;
use serde::Serialize;
use std::path::Path;

/// JSON output for one code-length computation.
#[derive(Debug, Serialize)]
struct LengthsJson<'a> {
    algorithm: &'static str,
    weights: &'a [Weight],
    lengths: &'a [u32],
    cost: u128,
    kraft_sum: f64,
    complete: bool,
}

pub fn cmd_lengths(
    args: &[i64],
    file: Option<&Path>,
    algorithm: Algorithm,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let weights = read_weights(args, file)?;
    let lengths = algorithm.code_lengths(&weights)?;
    let cost = weighted_cost(&weights, &lengths);
    tracing::debug!(symbols = weights.len(), %algorithm, "computed code lengths");

    if json {
        let output = LengthsJson {
            algorithm: algorithm.name(),
            weights: &weights,
            lengths: &lengths,
            cost,
            kraft_sum: kraft_sum(&lengths),
            complete: is_complete_code(&lengths),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", join(&lengths));
    println!();
    println!("Algorithm: {}", algorithm);
    println!("Symbols: {}", weights.len());
    println!("Cost: {} bits", cost);
    println!(
        "Kraft sum: {} ({})",
        kraft_sum(&lengths),
        if is_complete_code(&lengths) {
            "complete"
        } else {
            "incomplete"
        }
    );

    Ok(())
}
