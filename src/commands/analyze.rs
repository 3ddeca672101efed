//! One-shot information analysis of a single guess

use crate::core::Word;
use crate::engine::entropy::{guess_metrics, GuessMetrics};
use crate::engine::Engine;

/// How much a guess tells you against the full vocabulary
pub struct AnalysisReport {
    pub word: String,
    pub metrics: GuessMetrics,
    pub total_candidates: usize,
}

impl AnalysisReport {
    /// Fraction of the candidate set expected to survive the guess
    #[must_use]
    pub fn expected_survival(&self) -> f64 {
        if self.total_candidates == 0 {
            return 0.0;
        }
        let total = self.total_candidates as f64;
        self.metrics.expected_remaining / total
    }
}

/// Score a word against every candidate in the vocabulary
///
/// The word does not have to be in the vocabulary; any valid five-letter
/// word can be probed.
///
/// # Errors
/// Returns [`crate::core::WordError`] when the input is not a valid
/// five-letter word.
pub fn analyze_word(engine: &Engine, word: &str) -> Result<AnalysisReport, crate::core::WordError> {
    let probe = Word::new(word)?;
    let candidates: Vec<&Word> = engine.vocabulary().iter().collect();
    let metrics = guess_metrics(&probe, &candidates);

    Ok(AnalysisReport {
        word: probe.text().to_string(),
        metrics,
        total_candidates: candidates.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(texts: &[&str]) -> Engine {
        let words = texts.iter().map(|t| Word::new(*t).unwrap()).collect();
        Engine::new(words).unwrap()
    }

    #[test]
    fn analysis_reports_positive_entropy_for_discriminating_word() {
        let engine = engine(&["crane", "trace", "slate", "pious"]);

        let report = analyze_word(&engine, "crane").unwrap();

        assert_eq!(report.word, "crane");
        assert_eq!(report.total_candidates, 4);
        assert!(report.metrics.entropy > 0.0);
    }

    #[test]
    fn probe_outside_vocabulary_is_accepted() {
        let engine = engine(&["crane", "trace"]);

        let report = analyze_word(&engine, "SLATE").unwrap();

        assert_eq!(report.word, "slate");
    }

    #[test]
    fn invalid_probe_is_rejected() {
        let engine = engine(&["crane", "trace"]);

        assert!(analyze_word(&engine, "abc").is_err());
        assert!(analyze_word(&engine, "cr4ne").is_err());
    }

    #[test]
    fn survival_fraction_is_bounded() {
        let engine = engine(&["crane", "trace", "slate", "pious", "mound"]);

        let report = analyze_word(&engine, "crane").unwrap();

        let f = report.expected_survival();
        assert!(f > 0.0 && f <= 1.0);
    }
}
