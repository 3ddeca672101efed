//! Shannon entropy scoring for feedback patterns
//!
//! Given a prospective guess and the set of remaining candidates, computes
//! the expected information gain: the entropy of the distribution of
//! feedback patterns the guess would induce if the secret were drawn from
//! the candidates.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Metrics for evaluating a prospective guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Largest pattern class (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Expected information gain of a guess over the candidate set, in bits
///
/// Partitions the candidates by the pattern each would produce as the
/// secret, then takes the Shannon entropy (base 2) of that distribution.
/// Costs one pattern evaluation per candidate.
///
/// A single candidate gives 0 bits for every guess. An empty candidate set
/// is a caller error; scoring it yields 0 bits rather than a panic.
///
/// # Examples
/// ```
/// use wordle_trainer::core::Word;
/// use wordle_trainer::engine::entropy::entropy_of_guess;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let bits = entropy_of_guess(&guess, &candidate_refs);
/// assert!(bits > 0.0 && bits <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn entropy_of_guess(guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&pattern_counts(guess, candidates))
}

/// Partition candidates by the pattern they would produce against the guess
fn pattern_counts(guess: &Word, candidates: &[&Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let pattern = Pattern::evaluate(candidate, guess);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Shannon entropy of a pattern distribution
///
/// H = -Σ p·log₂(p). Zero for a certain outcome, maximal for a uniform
/// distribution, always in [0, log₂(n)] for n pattern classes.
#[must_use]
pub fn shannon_entropy<S>(counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Full metrics for a prospective guess
///
/// Entropy plus expected-remaining and worst-case partition size, for
/// display in the front-ends.
#[must_use]
pub fn guess_metrics(guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let counts = pattern_counts(guess, candidates);
    let total = candidates.len() as f64;

    let entropy = shannon_entropy(&counts);

    let expected_remaining = counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            p * count as f64
        })
        .sum();

    let max_partition = counts.values().copied().max().unwrap_or(0);

    GuessMetrics {
        entropy,
        expected_remaining,
        max_partition,
    }
}
