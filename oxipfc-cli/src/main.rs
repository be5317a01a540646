//! OxiPFC CLI - optimal prefix-free code lengths
//!
//! Computes the code lengths of minimum-redundancy codes for weight lists
//! and measures how hard word-frequency distributions of text files are for
//! code builders.

mod commands;
mod utils;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{ReportFormat, cmd_compare, cmd_lengths, cmd_stats};
use oxipfc_gdm::Algorithm;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxipfc")]
#[command(author, version, about = "Optimal prefix-free code lengths")]
#[command(long_about = "
OxiPFC computes optimal prefix-free (Huffman) code lengths with the
Group-Dock-Merge algorithm, and reports instance statistics.

Weights are given as arguments, or read from a file (or standard input)
as whitespace- or comma-separated integers.

Examples:
  oxipfc lengths 1 1 2 4
  oxipfc lengths --file weights.txt --algorithm huffman --json
  oxipfc compare 10 15 16 29 30
  oxipfc stats corpus/*.txt --format latex

Logging is controlled by the OXIPFC_LOG environment variable
(for example OXIPFC_LOG=oxipfc_gdm=trace).
")]
struct Cli {
    /// Log builder phases to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print optimal code lengths, in input order
    #[command(alias = "l")]
    Lengths {
        /// Weights (negative values are rejected)
        #[arg(allow_negative_numbers = true)]
        weights: Vec<i64>,

        /// Read weights from a file ("-" for standard input)
        #[arg(short, long, conflicts_with = "weights")]
        file: Option<PathBuf>,

        /// Construction algorithm
        #[arg(short, long, value_enum, default_value = "gdm")]
        algorithm: AlgorithmArg,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Measure word-frequency statistics of text files
    #[command(alias = "s")]
    Stats {
        /// Text files to measure
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Report format
        #[arg(short = 'F', long, value_enum, default_value = "text")]
        format: ReportFormat,

        /// Include the EI signature of every file
        #[arg(short, long)]
        signature: bool,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Run every algorithm and check that their costs agree
    #[command(alias = "c")]
    Compare {
        /// Weights (negative values are rejected)
        #[arg(allow_negative_numbers = true)]
        weights: Vec<i64>,

        /// Read weights from a file ("-" for standard input)
        #[arg(short, long, conflicts_with = "weights")]
        file: Option<PathBuf>,
    },
}

/// Construction algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
enum AlgorithmArg {
    /// Group-Dock-Merge
    #[default]
    Gdm,
    /// Van Leeuwen's two-queue merge
    VanLeeuwen,
    /// Heap-based Huffman
    Huffman,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Gdm => Algorithm::Gdm,
            AlgorithmArg::VanLeeuwen => Algorithm::VanLeeuwen,
            AlgorithmArg::Huffman => Algorithm::Huffman,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Lengths {
            weights,
            file,
            algorithm,
            json,
        } => cmd_lengths(&weights, file.as_deref(), algorithm.into(), json),
        Commands::Stats {
            files,
            format,
            signature,
            progress,
        } => cmd_stats(&files, format, signature, progress),
        Commands::Compare { weights, file } => cmd_compare(&weights, file.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
