//! Self-play against a known secret
//!
//! Runs the solve loop with internally computed feedback and records each
//! turn for display.

use crate::core::Pattern;
use crate::engine::entropy::entropy_of_guess;
use crate::engine::{Engine, EngineError, SessionState};

/// A single turn in a solve run
pub struct SolveStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Entropy of the chosen guess, when more than one candidate remained
    pub entropy: Option<f64>,
}

/// Result of self-playing one secret
pub struct SolveReport {
    pub secret: String,
    pub steps: Vec<SolveStep>,
    pub state: SessionState,
}

impl SolveReport {
    #[must_use]
    pub fn solved(&self) -> bool {
        self.state == SessionState::Solved
    }
}

/// Self-play the engine against a secret
///
/// # Errors
/// Returns [`EngineError::UnknownSecret`] when the secret is not in the
/// vocabulary.
pub fn solve_secret(
    engine: &Engine,
    secret: &str,
    max_attempts: usize,
) -> Result<SolveReport, EngineError> {
    let mut session = engine
        .new_game(Some(secret))?
        .with_max_attempts(max_attempts);

    let mut steps = Vec::new();

    while session.state() == SessionState::InProgress {
        // Score the upcoming guess for the report before the set shrinks
        let entropy = if session.candidates_remaining() > 1 {
            session
                .next_guess()
                .map(|guess| entropy_of_guess(guess, session.candidates()))
        } else {
            None
        };

        let Ok(outcome) = session.play_turn() else {
            break;
        };

        steps.push(SolveStep {
            word: outcome.guess.text().to_string(),
            pattern: outcome.pattern,
            candidates_before: outcome.candidates_before,
            candidates_after: outcome.candidates_after,
            entropy,
        });
    }

    Ok(SolveReport {
        secret: secret.to_lowercase(),
        steps,
        state: session.state(),
    })
}
