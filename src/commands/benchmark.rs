//! Whole-vocabulary benchmark
//!
//! Self-plays every vocabulary word as the secret in parallel and
//! aggregates attempt counts.

use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::engine::{Engine, SessionState};

use super::solve::solve_secret;

/// Aggregated outcome of a benchmark run
pub struct BenchmarkReport {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// attempts -> number of secrets solved in exactly that many attempts
    pub distribution: FxHashMap<usize, usize>,
    /// Mean attempts over solved secrets
    pub average_attempts: f64,
    pub solve_rate: f64,
    pub duration: Duration,
    pub words_per_second: f64,
    /// Secrets the solver did not crack, with their terminal state
    pub failures: Vec<(String, SessionState)>,
}

/// Self-play every vocabulary word (or the first `limit`) as the secret
#[must_use]
pub fn run_benchmark(engine: &Engine, limit: Option<usize>, max_attempts: usize) -> BenchmarkReport {
    let vocabulary = engine.vocabulary();
    let count = limit
        .unwrap_or(vocabulary.len())
        .min(vocabulary.len());
    let secrets = &vocabulary[..count];

    let bar = ProgressBar::new(count as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        bar.set_style(style.progress_chars("█▓▒░"));
    }
    let start = Instant::now();

    let runs: Vec<(String, SessionState, usize)> = secrets
        .par_iter()
        .map(|secret| {
            // Secret comes straight out of the vocabulary, it cannot be unknown
            let (state, attempts) = match solve_secret(engine, secret.text(), max_attempts) {
                Ok(report) => (report.state, report.steps.len()),
                Err(_) => (SessionState::Infeasible, 0),
            };
            bar.inc(1);
            (secret.text().to_string(), state, attempts)
        })
        .collect();

    let duration = start.elapsed();
    bar.finish_and_clear();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failures = Vec::new();
    let mut attempt_total = 0usize;

    for (word, state, attempts) in runs {
        if state == SessionState::Solved {
            *distribution.entry(attempts).or_insert(0) += 1;
            attempt_total += attempts;
        } else {
            failures.push((word, state));
        }
    }

    let solved = count - failures.len();
    let average_attempts = if solved > 0 {
        attempt_total as f64 / solved as f64
    } else {
        0.0
    };
    let solve_rate = if count > 0 {
        solved as f64 / count as f64
    } else {
        0.0
    };
    let words_per_second = if duration.as_secs_f64() > 0.0 {
        count as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    BenchmarkReport {
        total_words: count,
        solved,
        failed: failures.len(),
        distribution,
        average_attempts,
        solve_rate,
        duration,
        words_per_second,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn engine(texts: &[&str]) -> Engine {
        let words = texts.iter().map(|t| Word::new(*t).unwrap()).collect();
        Engine::new(words).unwrap()
    }

    #[test]
    fn small_vocabulary_benchmarks_cleanly() {
        let engine = engine(&["crane", "trace", "react", "cater", "slate", "pious"]);

        let report = run_benchmark(&engine, None, 6);

        assert_eq!(report.total_words, 6);
        assert_eq!(report.solved + report.failed, 6);
        let counted: usize = report.distribution.values().sum();
        assert_eq!(counted, report.solved);
    }

    #[test]
    fn limit_caps_the_run() {
        let engine = engine(&["crane", "trace", "react", "cater", "slate"]);

        let report = run_benchmark(&engine, Some(2), 6);

        assert_eq!(report.total_words, 2);
    }

    #[test]
    fn limit_beyond_vocabulary_is_clamped() {
        let engine = engine(&["crane", "trace"]);

        let report = run_benchmark(&engine, Some(100), 6);

        assert_eq!(report.total_words, 2);
    }

    #[test]
    fn average_only_covers_solved_secrets() {
        let engine = engine(&["crane", "trace", "react", "cater", "slate", "pious"]);

        let report = run_benchmark(&engine, None, 6);

        if report.solved > 0 {
            assert!(report.average_attempts >= 1.0);
            assert!(report.average_attempts <= 6.0);
        }
    }
}
