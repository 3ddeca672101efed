//! Game session: candidate filtering and the solve-loop state machine
//!
//! A session owns the mutable per-game state: the shrinking candidate set,
//! the attempt counter and the terminal-state bookkeeping. The vocabulary
//! and scoring tables stay in the [`Engine`](super::Engine) and are only
//! borrowed, so any number of sessions can run concurrently against one
//! engine as long as each session stays on a single thread.

use crate::core::{Pattern, WORD_LEN, Word};
use std::collections::BTreeSet;
use std::fmt;

use super::Engine;
use super::selection;

/// Default attempt budget per game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// State of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Guesses are still being made
    InProgress,
    /// The last feedback was all-exact
    Solved,
    /// The attempt budget ran out
    Exhausted,
    /// Contradictory feedback emptied the candidate set
    Infeasible,
}

impl SessionState {
    /// Terminal states produce no further guesses
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in progress",
            Self::Solved => "solved",
            Self::Exhausted => "exhausted",
            Self::Infeasible => "infeasible",
        })
    }
}

/// Error type for invalid session inputs
///
/// These reject the input before any state mutation; the candidate set is
/// untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Feedback applied to a session already in a terminal state
    GameOver(SessionState),
    /// Guess is not a vocabulary member
    NotInVocabulary(String),
    /// Self-play requested on a session constructed without a secret
    NoSecret,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver(state) => write!(f, "Session is already {state}"),
            Self::NotInVocabulary(word) => write!(f, "'{word}' is not in the vocabulary"),
            Self::NoSecret => write!(f, "Session has no secret; feedback must be supplied"),
        }
    }
}

impl std::error::Error for SessionError {}

/// One completed self-play turn
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    pub guess: Word,
    pub pattern: Pattern,
    pub state: SessionState,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// A single game against one secret (known or external)
///
/// Created by [`Engine::new_game`]; exclusively owned by whoever drives the
/// game. Terminal sessions are dead — start a new one to play again.
pub struct GameSession<'a> {
    engine: &'a Engine,
    secret: Option<&'a Word>,
    candidates: Vec<&'a Word>,
    available: [Vec<u8>; WORD_LEN],
    attempts: usize,
    max_attempts: usize,
    state: SessionState,
}

impl<'a> GameSession<'a> {
    pub(super) fn new(engine: &'a Engine, secret: Option<&'a Word>) -> Self {
        let candidates: Vec<&'a Word> = engine.vocabulary().iter().collect();
        let available = availability_index(&candidates);

        Self {
            engine,
            secret,
            candidates,
            available,
            attempts: 0,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            state: SessionState::InProgress,
        }
    }

    /// Override the attempt budget (default 6)
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Feedback observations consumed so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// The secret, when self-playing
    #[must_use]
    pub fn secret(&self) -> Option<&'a Word> {
        self.secret
    }

    /// Remaining candidates, in vocabulary order
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    #[must_use]
    pub fn candidates_remaining(&self) -> usize {
        self.candidates.len()
    }

    /// Letters still appearing in each position across the candidates
    ///
    /// Recomputed from the candidate set after every update; a display and
    /// pruning aid, never a source of truth.
    #[must_use]
    pub fn available_letters(&self) -> &[Vec<u8>; WORD_LEN] {
        &self.available
    }

    /// Whether a word is still a candidate and fits every position's
    /// available letters
    #[must_use]
    pub fn is_viable(&self, word: &Word) -> bool {
        if !self.candidates.iter().any(|c| c.text() == word.text()) {
            return false;
        }
        word.letters()
            .iter()
            .zip(&self.available)
            .all(|(letter, letters)| letters.contains(letter))
    }

    /// The engine's suggested next guess
    ///
    /// `None` only when the session is terminal or the candidate set is
    /// empty.
    #[must_use]
    pub fn next_guess(&self) -> Option<&'a Word> {
        if self.state.is_terminal() {
            return None;
        }
        selection::select_guess(&self.candidates, self.engine.tables())
    }

    /// Record one (guess, pattern) observation and transition the state
    ///
    /// Each observation consumes one attempt. All-exact feedback solves the
    /// game; otherwise the candidate set is filtered to the words that
    /// would have produced the observed pattern. An emptied candidate set
    /// means the feedback was contradictory (`Infeasible`); hitting the
    /// attempt budget without solving means `Exhausted`. Both are ordinary
    /// terminal outcomes, not errors.
    ///
    /// # Errors
    /// Rejects, without mutating any state, feedback applied to a terminal
    /// session and guesses that are not vocabulary members.
    pub fn apply_feedback(
        &mut self,
        guess: &Word,
        pattern: Pattern,
    ) -> Result<SessionState, SessionError> {
        if self.state.is_terminal() {
            return Err(SessionError::GameOver(self.state));
        }
        if !self.engine.contains(guess.text()) {
            return Err(SessionError::NotInVocabulary(guess.text().to_string()));
        }

        self.attempts += 1;

        if pattern.is_perfect() {
            self.state = SessionState::Solved;
            return Ok(self.state);
        }

        self.candidates
            .retain(|candidate| Pattern::evaluate(candidate, guess) == pattern);
        self.available = availability_index(&self.candidates);

        if self.candidates.is_empty() {
            self.state = SessionState::Infeasible;
        } else if self.attempts >= self.max_attempts {
            self.state = SessionState::Exhausted;
        }

        Ok(self.state)
    }

    /// Play one self-play turn: pick a guess, compute its feedback against
    /// the known secret, and apply it
    ///
    /// # Errors
    /// Returns an error on a session without a secret, on a terminal
    /// session, or if no guess is available.
    pub fn play_turn(&mut self) -> Result<TurnOutcome, SessionError> {
        let Some(secret) = self.secret else {
            return Err(SessionError::NoSecret);
        };
        if self.state.is_terminal() {
            return Err(SessionError::GameOver(self.state));
        }

        let Some(guess) = self.next_guess() else {
            // Unreachable while in progress: the selector is total for a
            // non-empty candidate set
            self.state = SessionState::Infeasible;
            return Err(SessionError::GameOver(self.state));
        };

        let candidates_before = self.candidates.len();
        let pattern = Pattern::evaluate(secret, guess);
        let guess = guess.clone();
        let state = self.apply_feedback(&guess, pattern)?;

        Ok(TurnOutcome {
            guess,
            pattern,
            state,
            candidates_before,
            candidates_after: self.candidates.len(),
        })
    }
}

/// Sorted distinct letters per position across the candidates
fn availability_index(candidates: &[&Word]) -> [Vec<u8>; WORD_LEN] {
    let mut sets: [BTreeSet<u8>; WORD_LEN] = std::array::from_fn(|_| BTreeSet::new());

    for candidate in candidates {
        for (position, &letter) in candidate.letters().iter().enumerate() {
            sets[position].insert(letter);
        }
    }

    sets.map(|set| set.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(texts: &[&str]) -> Engine {
        let words = texts.iter().map(|t| Word::new(*t).unwrap()).collect();
        Engine::new(words).unwrap()
    }

    #[test]
    fn fresh_session_holds_full_vocabulary() {
        let engine = engine(&["crane", "trace", "react", "cater"]);
        let session = engine.new_game(None).unwrap();

        assert_eq!(session.state(), SessionState::InProgress);
        assert_eq!(session.attempts(), 0);
        assert_eq!(session.candidates_remaining(), 4);
    }

    #[test]
    fn update_is_monotonic_and_consistent() {
        let engine = engine(&["crane", "trace", "react", "cater", "slate"]);
        let mut session = engine.new_game(None).unwrap();

        let guess = Word::new("trace").unwrap();
        let secret = Word::new("crane").unwrap();
        let pattern = Pattern::evaluate(&secret, &guess);

        let before = session.candidates_remaining();
        session.apply_feedback(&guess, pattern).unwrap();
        let after = session.candidates_remaining();

        assert!(after <= before);

        // Every survivor reproduces the observed pattern; no excluded word
        // does (brute-force cross-check)
        for word in engine.vocabulary() {
            let survives = session.candidates().iter().any(|c| c.text() == word.text());
            let consistent = Pattern::evaluate(word, &guess) == pattern;
            assert_eq!(survives, consistent, "word {}", word.text());
        }
    }

    #[test]
    fn perfect_feedback_solves() {
        let engine = engine(&["crane", "trace", "react"]);
        let mut session = engine.new_game(None).unwrap();

        let guess = Word::new("trace").unwrap();
        let state = session.apply_feedback(&guess, Pattern::PERFECT).unwrap();

        assert_eq!(state, SessionState::Solved);
        assert_eq!(session.attempts(), 1);
        assert!(session.next_guess().is_none());
    }

    #[test]
    fn contradictory_feedback_goes_infeasible() {
        let engine = engine(&["crane", "trace", "react"]);
        let mut session = engine.new_game(None).unwrap();

        // No vocabulary word could produce all-absent feedback against
        // "crane": every word shares a letter with it
        let guess = Word::new("crane").unwrap();
        let state = session.apply_feedback(&guess, Pattern::new(0)).unwrap();

        assert_eq!(state, SessionState::Infeasible);
        assert_eq!(session.candidates_remaining(), 0);
        assert!(session.next_guess().is_none());
    }

    #[test]
    fn attempt_budget_exhausts() {
        let engine = engine(&["crane", "slate", "brake", "grape"]);
        let mut session = engine.new_game(None).unwrap().with_max_attempts(2);

        // Feedback consistent with secret "slate": keeps the set non-empty
        // without ever solving
        let guess = Word::new("crane").unwrap();
        let pattern = Pattern::parse("BBGBG").unwrap();

        let state1 = session.apply_feedback(&guess, pattern).unwrap();
        assert_eq!(state1, SessionState::InProgress);

        let state2 = session.apply_feedback(&guess, pattern).unwrap();
        assert_eq!(state2, SessionState::Exhausted);
        assert_eq!(session.attempts(), 2);
    }

    #[test]
    fn terminal_sessions_reject_feedback() {
        let engine = engine(&["crane", "trace"]);
        let mut session = engine.new_game(None).unwrap();

        let guess = Word::new("crane").unwrap();
        session.apply_feedback(&guess, Pattern::PERFECT).unwrap();

        let result = session.apply_feedback(&guess, Pattern::new(0));
        assert_eq!(
            result,
            Err(SessionError::GameOver(SessionState::Solved))
        );
    }

    #[test]
    fn unknown_guess_rejected_without_mutation() {
        let engine = engine(&["crane", "trace"]);
        let mut session = engine.new_game(None).unwrap();

        let outsider = Word::new("zzzzz").unwrap();
        let result = session.apply_feedback(&outsider, Pattern::new(0));

        assert_eq!(
            result,
            Err(SessionError::NotInVocabulary("zzzzz".to_string()))
        );
        assert_eq!(session.attempts(), 0);
        assert_eq!(session.candidates_remaining(), 2);
        assert_eq!(session.state(), SessionState::InProgress);
    }

    #[test]
    fn single_candidate_next_guess_is_that_candidate() {
        let engine = engine(&["crane"]);
        let session = engine.new_game(None).unwrap();

        let guess = session.next_guess().unwrap();
        assert_eq!(guess.text(), "crane");
    }

    #[test]
    fn self_play_solves_within_budget() {
        let engine = engine(&["crane", "trace", "react", "cater", "slate", "brake"]);

        for secret in engine.vocabulary() {
            let mut session = engine.new_game(Some(secret.text())).unwrap();

            let mut turns = 0;
            while session.state() == SessionState::InProgress {
                session.play_turn().unwrap();
                turns += 1;
                assert!(turns <= DEFAULT_MAX_ATTEMPTS, "solve loop ran away");
            }

            // Consistent feedback can never empty the candidate set
            assert_ne!(session.state(), SessionState::Infeasible);
            assert_eq!(session.state(), SessionState::Solved);
            assert!(session.attempts() <= DEFAULT_MAX_ATTEMPTS);
        }
    }

    #[test]
    fn self_play_requires_secret() {
        let engine = engine(&["crane", "trace"]);
        let mut session = engine.new_game(None).unwrap();

        assert_eq!(session.play_turn(), Err(SessionError::NoSecret));
    }

    #[test]
    fn availability_index_tracks_candidates() {
        let engine = engine(&["crane", "trace"]);
        let mut session = engine.new_game(None).unwrap();

        // Position 0 can be 'c' or 't' while both candidates remain
        assert_eq!(session.available_letters()[0], vec![b'c', b't']);

        let guess = Word::new("trace").unwrap();
        let secret = Word::new("crane").unwrap();
        session
            .apply_feedback(&guess, Pattern::evaluate(&secret, &guess))
            .unwrap();

        assert_eq!(session.candidates_remaining(), 1);
        assert_eq!(session.available_letters()[0], vec![b'c']);
    }

    #[test]
    fn is_viable_checks_membership_and_positions() {
        let engine = engine(&["crane", "trace"]);
        let session = engine.new_game(None).unwrap();

        assert!(session.is_viable(&Word::new("crane").unwrap()));
        assert!(!session.is_viable(&Word::new("slate").unwrap()));
    }
}
