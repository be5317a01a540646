//! Stats command implementation.
//!
//! Counts the words of each text file and reports how hard the resulting
//! frequency distribution is for a code builder: alphabet size, alternation
//! of the EI signature, longest code and number of distinct code lengths.

use crate::utils::create_progress_bar;
use clap::ValueEnum;
use oxipfc_core::Weight;
use oxipfc_gdm::EiStatistics;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ReportFormat {
    /// Aligned plain-text table
    #[default]
    Text,
    /// JSON array of rows
    Json,
    /// LaTeX array environment
    Latex,
}

/// Statistics of one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStats {
    pub filename: String,
    pub alphabet_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    pub alternation: usize,
    pub max_code_length: u32,
    pub distinct_code_lengths: usize,
}

impl FileStats {
    /// Statistics of the word frequencies of `text`.
    pub fn from_text(filename: String, text: &str, keep_signature: bool) -> oxipfc_core::Result<Self> {
        let frequencies = word_frequencies(text);
        let stats = EiStatistics::measure(&frequencies)?;
        Ok(Self {
            filename,
            alphabet_size: frequencies.len(),
            signature: keep_signature.then_some(stats.signature),
            alternation: stats.alternation,
            max_code_length: stats.max_code_length,
            distinct_code_lengths: stats.distinct_code_lengths,
        })
    }
}

/// Frequencies of the whitespace-separated words of `text`, most common
/// first.
pub fn word_frequencies(text: &str) -> Vec<Weight> {
    let mut counts: HashMap<&str, Weight> = HashMap::new();
    for word in text.split_whitespace() {
        *counts.entry(word).or_insert(0) += 1;
    }
    let mut frequencies: Vec<Weight> = counts.into_values().collect();
    frequencies.sort_unstable_by(|a, b| b.cmp(a));
    frequencies
}

fn measure_file(path: &Path, keep_signature: bool) -> Result<FileStats, String> {
    let bytes = std::fs::read(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    let text = String::from_utf8_lossy(&bytes);
    FileStats::from_text(path.display().to_string(), &text, keep_signature)
        .map_err(|e| format!("{}: {}", path.display(), e))
}

pub fn cmd_stats(
    files: &[PathBuf],
    format: ReportFormat,
    signature: bool,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if files.is_empty() {
        return Err("no input files".into());
    }

    let pb = create_progress_bar(files.len() as u64, progress);
    let rows: Vec<FileStats> = files
        .par_iter()
        .map(|path| {
            let row = measure_file(path, signature);
            pb.inc(1);
            row
        })
        .collect::<Result<_, _>>()?;
    pb.finish_and_clear();

    for row in &rows {
        tracing::debug!(
            file = %row.filename,
            alphabet = row.alphabet_size,
            alternation = row.alternation,
            "measured"
        );
    }

    let report = match format {
        ReportFormat::Text => render_text(&rows),
        ReportFormat::Json => serde_json::to_string_pretty(&rows)?,
        ReportFormat::Latex => render_latex(&rows),
    };
    println!("{}", report);
    Ok(())
}

/// Render rows as an aligned table.
pub fn render_text(rows: &[FileStats]) -> String {
    let width = rows
        .iter()
        .map(|r| r.filename.len())
        .max()
        .unwrap_or(0)
        .max("Filename".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<width$}  {:>8}  {:>11}  {:>13}  {:>16}",
        "Filename", "Alphabet", "Alternation", "MaxCodeLength", "DistinctLengths"
    );
    let _ = write!(out, "{}", "-".repeat(width + 2 + 8 + 2 + 11 + 2 + 13 + 2 + 16));
    for row in rows {
        let _ = write!(
            out,
            "\n{:<width$}  {:>8}  {:>11}  {:>13}  {:>16}",
            row.filename,
            row.alphabet_size,
            row.alternation,
            row.max_code_length,
            row.distinct_code_lengths
        );
        if let Some(signature) = &row.signature {
            let _ = write!(out, "\n  {}", signature);
        }
    }
    out
}

/// Render rows as a LaTeX `array`, one row per file.
pub fn render_latex(rows: &[FileStats]) -> String {
    let mut lines = vec![
        "\\begin{array}[c|c|c|c|c]".to_string(),
        "Filename & alphabet size & alternation & maxCodeLength & nbDistinctCodeLengths \\\\ \\hline"
            .to_string(),
    ];
    for (i, row) in rows.iter().enumerate() {
        let mut line = format!(
            "{} & {} & {} & {} & {}",
            row.filename,
            row.alphabet_size,
            row.alternation,
            row.max_code_length,
            row.distinct_code_lengths
        );
        if i + 1 < rows.len() {
            line.push_str(" \\\\ \\hline");
        }
        lines.push(line);
    }
    lines.push("\\end{array}".to_string());
    lines.join("\n")
}
