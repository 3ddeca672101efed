//! Guess selection policy
//!
//! A tiered decision procedure over the remaining candidates:
//!
//! 1. Small candidate sets get an exhaustive entropy search: every
//!    candidate is scored as a prospective guess against the whole set and
//!    the strict maximum wins, ties broken by vocabulary order. This is
//!    O(n²) pattern evaluations, so it is guarded by a size threshold.
//! 2. Larger sets fall back to a precomputed per-word information table,
//!    when any remaining candidate has an entry.
//! 3. Failing that, a letter heuristic: maximize the count of distinct
//!    letters, tie-break by the summed single-letter frequency scores of
//!    those letters, then vocabulary order.
//!
//! The thresholded search trades optimality for responsiveness on the
//! opening turns, when the candidate set is still the whole vocabulary.

use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use super::entropy::entropy_of_guess;

/// Largest candidate set for which the exhaustive entropy search runs
pub const SMALL_SET_THRESHOLD: usize = 500;

/// Read-only scoring tables consulted by the fallback tiers
///
/// Both tables are optional; an absent table is an empty map and simply
/// pushes selection to the next tier.
#[derive(Debug, Clone, Default)]
pub struct ScoreTables {
    /// Single-letter frequency scores, keyed by lowercase ASCII letter
    pub letter_scores: FxHashMap<u8, f64>,
    /// Precomputed per-word information scores (bits), keyed by word text
    pub info_scores: FxHashMap<String, f64>,
}

impl ScoreTables {
    /// Tables with no entries; every lookup degrades to the next tier
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Summed letter frequency score over a word's distinct letters
    #[must_use]
    pub fn letter_information(&self, word: &Word) -> f64 {
        word.unique_letters()
            .iter()
            .map(|c| self.letter_scores.get(c).copied().unwrap_or(0.0))
            .sum()
    }
}

/// Choose the next guess from the remaining candidates
///
/// Candidates must be in vocabulary order; ties at every tier resolve to
/// the first occurrence, so the choice is deterministic and reproducible.
/// Returns `None` only for an empty candidate set.
#[must_use]
pub fn select_guess<'a>(candidates: &[&'a Word], tables: &ScoreTables) -> Option<&'a Word> {
    if candidates.is_empty() {
        return None;
    }

    if candidates.len() <= SMALL_SET_THRESHOLD {
        return best_by_entropy(candidates);
    }

    best_by_info_table(candidates, tables).or_else(|| best_by_letter_heuristic(candidates, tables))
}

/// Exhaustive entropy search over the candidate set
///
/// Scoring is parallelized; the reduction prefers strictly greater entropy
/// and, on exact ties, the lower index, so the result does not depend on
/// rayon's split points.
fn best_by_entropy<'a>(candidates: &[&'a Word]) -> Option<&'a Word> {
    candidates
        .par_iter()
        .enumerate()
        .map(|(index, &guess)| (index, entropy_of_guess(guess, candidates)))
        .reduce_with(|best, next| {
            if next.1 > best.1 || (next.1 == best.1 && next.0 < best.0) {
                next
            } else {
                best
            }
        })
        .map(|(index, _)| candidates[index])
}

/// Highest precomputed information score among the candidates, if any
fn best_by_info_table<'a>(candidates: &[&'a Word], tables: &ScoreTables) -> Option<&'a Word> {
    let mut best: Option<(&'a Word, f64)> = None;

    for &candidate in candidates {
        if let Some(&score) = tables.info_scores.get(candidate.text()) {
            let better = match best {
                Some((_, best_score)) => score > best_score,
                None => true,
            };
            if better {
                best = Some((candidate, score));
            }
        }
    }

    best.map(|(word, _)| word)
}

/// Unique-letter count, then summed letter frequency, then first occurrence
fn best_by_letter_heuristic<'a>(candidates: &[&'a Word], tables: &ScoreTables) -> Option<&'a Word> {
    let mut best: Option<(&'a Word, usize, f64)> = None;

    for &candidate in candidates {
        let unique = candidate.unique_letter_count();
        let freq_sum = tables.letter_information(candidate);

        let better = match best {
            Some((_, best_unique, best_freq)) => {
                unique > best_unique || (unique == best_unique && freq_sum > best_freq)
            }
            None => true,
        };
        if better {
            best = Some((candidate, unique, freq_sum));
        }
    }

    best.map(|(word, _, _)| word)
}
