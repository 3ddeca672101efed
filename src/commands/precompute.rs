//! Entropy table precomputation
//!
//! Scores every vocabulary word against the full vocabulary and writes the
//! results as JSON, ready to be loaded back as an information table.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::core::Word;
use crate::engine::entropy::entropy_of_guess;
use crate::engine::Engine;

/// Summary of a precompute run
pub struct PrecomputeReport {
    pub entries: usize,
    /// Highest-entropy words, best first
    pub top: Vec<(String, f64)>,
    pub duration: Duration,
    pub output: PathBuf,
}

/// Score every vocabulary word and write the table to `output`
///
/// # Errors
/// Returns an error when the table cannot be serialized or written.
pub fn run_precompute(
    engine: &Engine,
    output: &Path,
    top_n: usize,
) -> Result<PrecomputeReport, io::Error> {
    let vocabulary = engine.vocabulary();
    let candidates: Vec<&Word> = vocabulary.iter().collect();

    let bar = ProgressBar::new(vocabulary.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        bar.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let scored: Vec<(String, f64)> = vocabulary
        .par_iter()
        .map(|word| {
            let entropy = entropy_of_guess(word, &candidates);
            bar.inc(1);
            (word.text().to_string(), entropy)
        })
        .collect();

    let duration = start.elapsed();
    bar.finish_and_clear();

    let table: BTreeMap<&str, f64> = scored
        .iter()
        .map(|(word, entropy)| (word.as_str(), *entropy))
        .collect();
    let json = serde_json::to_string_pretty(&table).map_err(io::Error::other)?;
    fs::write(output, json)?;

    let mut top = scored;
    top.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    top.truncate(top_n);

    Ok(PrecomputeReport {
        entries: vocabulary.len(),
        top,
        duration,
        output: output.to_path_buf(),
    })
}
