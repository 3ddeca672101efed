//! Engine construction and session creation
//!
//! The engine is the single process-wide home for the vocabulary and the
//! optional scoring tables: loaded once, immutable afterwards, shared by
//! reference with every session it spawns.

use crate::core::Word;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

use super::selection::ScoreTables;
use super::session::GameSession;

/// Error type for engine construction and game creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The vocabulary had no valid words
    EmptyVocabulary,
    /// A self-play secret was not a vocabulary member
    UnknownSecret(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyVocabulary => write!(f, "Vocabulary is empty"),
            Self::UnknownSecret(word) => {
                write!(f, "Secret '{word}' is not in the vocabulary")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Immutable solving engine: vocabulary plus scoring tables
///
/// Construct once, then spawn any number of [`GameSession`]s from it. The
/// engine is read-only after load and safe to share across threads.
pub struct Engine {
    vocabulary: Vec<Word>,
    members: FxHashSet<String>,
    tables: ScoreTables,
}

impl Engine {
    /// Build an engine with empty scoring tables
    ///
    /// # Errors
    /// Returns [`EngineError::EmptyVocabulary`] for an empty word list.
    pub fn new(vocabulary: Vec<Word>) -> Result<Self, EngineError> {
        Self::with_tables(vocabulary, FxHashMap::default(), FxHashMap::default())
    }

    /// Build an engine with letter-frequency and per-word information tables
    ///
    /// Either table may be empty; selection degrades tier by tier. Words
    /// are already length-validated by [`Word::new`] before they get here.
    ///
    /// # Errors
    /// Returns [`EngineError::EmptyVocabulary`] for an empty word list.
    pub fn with_tables(
        vocabulary: Vec<Word>,
        letter_scores: FxHashMap<u8, f64>,
        info_scores: FxHashMap<String, f64>,
    ) -> Result<Self, EngineError> {
        if vocabulary.is_empty() {
            return Err(EngineError::EmptyVocabulary);
        }

        let members = vocabulary.iter().map(|w| w.text().to_string()).collect();

        Ok(Self {
            vocabulary,
            members,
            tables: ScoreTables {
                letter_scores,
                info_scores,
            },
        })
    }

    /// The full vocabulary, in load order
    #[must_use]
    pub fn vocabulary(&self) -> &[Word] {
        &self.vocabulary
    }

    /// Whether a (lowercase) word is a vocabulary member
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.members.contains(text)
    }

    /// The scoring tables consulted by guess selection
    #[must_use]
    pub fn tables(&self) -> &ScoreTables {
        &self.tables
    }

    /// Start a new game
    ///
    /// With a secret the session self-plays (feedback computed internally);
    /// without one the caller supplies feedback each turn.
    ///
    /// # Errors
    /// Returns [`EngineError::UnknownSecret`] when the secret is not a
    /// vocabulary member.
    pub fn new_game(&self, secret: Option<&str>) -> Result<GameSession<'_>, EngineError> {
        let secret_word = match secret {
            Some(text) => {
                let normalized = text.to_lowercase();
                let found = self
                    .vocabulary
                    .iter()
                    .find(|w| w.text() == normalized)
                    .ok_or_else(|| EngineError::UnknownSecret(text.to_string()))?;
                Some(found)
            }
            None => None,
        };

        Ok(GameSession::new(self, secret_word))
    }
}
