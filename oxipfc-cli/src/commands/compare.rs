//! Compare command implementation.

use crate::utils::read_weights;
use oxipfc_core::metrics::{n_times_entropy, run_lengths, weighted_cost};
use oxipfc_gdm::{Algorithm, GdmConfig, build_optimal_code_lengths_with};
use std::path::Path;

pub fn cmd_compare(args: &[i64], file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let weights = read_weights(args, file)?;
    let total: u128 = weights.iter().map(|&w| u128::from(w)).sum();

    println!("Symbols: {}", weights.len());
    println!("Total weight: {}", total);
    println!("Entropy bound: {} bits", n_times_entropy(&weights));
    println!();
    println!("{:<12} {:>16}  Profile", "Algorithm", "Cost");
    println!("{}", "-".repeat(48));

    let mut costs = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        let lengths = algorithm.code_lengths(&weights)?;
        let cost = weighted_cost(&weights, &lengths);
        let profile: Vec<String> = run_lengths(&lengths)
            .iter()
            .map(|(length, count)| format!("{length}x{count}"))
            .collect();
        println!("{:<12} {:>16}  {}", algorithm, cost, profile.join(" "));
        costs.push((algorithm, cost));
    }

    let (_, stats) = build_optimal_code_lengths_with(&weights, GdmConfig::CHECKED)?;
    println!();
    println!("GDM statistics:");
    println!("  Cycles: {}", stats.cycles);
    println!(
        "  Nodes: {} group, {} dock, {} mix, {} wrap-up",
        stats.group_nodes, stats.dock_nodes, stats.mix_nodes, stats.wrapup_nodes
    );
    println!("  Comparisons: {}", stats.comparisons);
    println!("  Rank queries: {}", stats.rank_queries);

    if let Some(&(_, expected)) = costs.first() {
        if let Some((algorithm, cost)) = costs.iter().find(|(_, cost)| *cost != expected) {
            return Err(format!(
                "{} cost {} differs from {} cost {}",
                algorithm,
                cost,
                Algorithm::ALL[0],
                expected
            )
            .into());
        }
    }

    println!();
    println!("All costs agree.");
    Ok(())
}
