//! Word list and score table loading
//!
//! Word lists are plain newline-delimited text; score tables are flat JSON
//! objects mapping a key (word or single letter) to a numeric score.
//! Malformed data is rejected at load time so the engine never constructs
//! with invalid entries.

use crate::core::{Word, WordError};
use rustc_hash::FxHashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for loading word lists and score tables
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    /// A word list line failed validation (1-based line number)
    InvalidWord { line: usize, source: WordError },
    Json(serde_json::Error),
    /// A letter table key was not a single ASCII letter
    BadLetterKey(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidWord { line, source } => {
                write!(f, "Invalid word on line {line}: {source}")
            }
            Self::Json(e) => write!(f, "Invalid score table: {e}"),
            Self::BadLetterKey(key) => {
                write!(f, "Letter table key '{key}' is not a single letter")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidWord { source, .. } => Some(source),
            Self::Json(e) => Some(e),
            Self::BadLetterKey(_) => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Load a newline-delimited word list from a file
///
/// Blank lines are skipped; anything else must be a valid five-letter word.
///
/// # Errors
/// Fails fast on the first unreadable or invalid line.
pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let content = fs::read_to_string(path)?;
    words_from_lines(&content)
}

/// Parse a newline-delimited word list, failing on the first invalid entry
///
/// # Errors
/// Returns [`LoadError::InvalidWord`] with the 1-based line number of the
/// first entry that is not a valid five-letter word.
pub fn words_from_lines(content: &str) -> Result<Vec<Word>, LoadError> {
    let mut words = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let word = Word::new(trimmed).map_err(|source| LoadError::InvalidWord {
            line: index + 1,
            source,
        })?;
        words.push(word);
    }

    Ok(words)
}

/// Convert an embedded (pre-validated) string slice into words
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Load a flat word→score JSON table
///
/// Keys are lowercased; missing tables are the caller's concern (pass no
/// path at all for an empty table) but a present file must parse.
///
/// # Errors
/// Fails on I/O or JSON errors.
pub fn load_info_table<P: AsRef<Path>>(path: P) -> Result<FxHashMap<String, f64>, LoadError> {
    let content = fs::read_to_string(path)?;
    let raw: FxHashMap<String, f64> = serde_json::from_str(&content)?;

    Ok(raw
        .into_iter()
        .map(|(key, value)| (key.to_lowercase(), value))
        .collect())
}

/// Load a flat letter→score JSON table
///
/// Every key must be a single ASCII letter (either case).
///
/// # Errors
/// Fails on I/O or JSON errors and on non-letter keys.
pub fn load_letter_table<P: AsRef<Path>>(path: P) -> Result<FxHashMap<u8, f64>, LoadError> {
    let content = fs::read_to_string(path)?;
    let raw: FxHashMap<String, f64> = serde_json::from_str(&content)?;

    let mut table = FxHashMap::default();
    for (key, value) in raw {
        let lowered = key.to_lowercase();
        let mut chars = lowered.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_lowercase() => {
                table.insert(c as u8, value);
            }
            _ => return Err(LoadError::BadLetterKey(key)),
        }
    }

    Ok(table)
}

/// The embedded default letter-frequency table
#[must_use]
pub fn default_letter_scores() -> FxHashMap<u8, f64> {
    super::LETTER_SCORES.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_lines_valid() {
        let words = words_from_lines("crane\nslate\n\n  irate  \n").unwrap();

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_lines_rejects_bad_entry() {
        let result = words_from_lines("crane\ntoolong\nslate\n");

        assert!(matches!(
            result,
            Err(LoadError::InvalidWord { line: 2, .. })
        ));
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
    }

    #[test]
    fn default_letter_scores_cover_alphabet() {
        let scores = default_letter_scores();

        assert_eq!(scores.len(), 26);
        for c in b'a'..=b'z' {
            assert!(scores.contains_key(&c));
        }
        // 'e' is the most frequent English letter
        let e = scores[&b'e'];
        assert!(scores.values().all(|&v| v <= e));
    }

    #[test]
    fn embedded_vocabulary_is_fully_valid() {
        use crate::wordlists::{WORDS, WORDS_COUNT};

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
        assert_eq!(words.len(), WORDS_COUNT);
    }
}
