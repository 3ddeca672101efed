//! Validated five-letter word representation
//!
//! A `Word` stores its text normalized to ASCII lowercase together with the
//! raw letter bytes used by pattern evaluation and scoring.

use std::fmt;

use super::WORD_LEN;

/// A five-letter word, normalized to ASCII lowercase on construction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NotAlphabetic,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::NotAlphabetic => write!(f, "Word must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new `Word` from a string, normalizing case
    ///
    /// # Errors
    /// Returns `WordError` if the input is not exactly five ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_trainer::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("cran3").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        let count = text.chars().count();
        if count != WORD_LEN {
            return Err(WordError::InvalidLength(count));
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::NotAlphabetic);
        }

        // Five ASCII chars means five bytes
        let letters: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::NotAlphabetic)?;

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    /// Get the letter at a position (0-4)
    ///
    /// # Panics
    /// Panics if `position >= 5`.
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check whether the word contains a letter
    #[inline]
    #[must_use]
    pub fn contains_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Distinct letters in first-occurrence order
    #[must_use]
    pub fn unique_letters(&self) -> Vec<u8> {
        let mut distinct = Vec::with_capacity(WORD_LEN);
        for &c in &self.letters {
            if !distinct.contains(&c) {
                distinct.push(c);
            }
        }
        distinct
    }

    /// Number of distinct letters in the word
    #[must_use]
    pub fn unique_letter_count(&self) -> usize {
        self.unique_letters().len()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.letters(), b"crane");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err()); // Digit
        assert!(Word::new("cran ").is_err()); // Space
        assert!(Word::new("cran!").is_err()); // Punctuation
        assert!(Word::new("crané").is_err()); // Non-ASCII
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.letter_at(0), b'c');
        assert_eq!(word.letter_at(1), b'r');
        assert_eq!(word.letter_at(2), b'a');
        assert_eq!(word.letter_at(3), b'n');
        assert_eq!(word.letter_at(4), b'e');
    }

    #[test]
    fn word_contains_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.contains_letter(b'c'));
        assert!(word.contains_letter(b'e'));
        assert!(!word.contains_letter(b'z'));
    }

    #[test]
    fn unique_letters_no_duplicates() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.unique_letters(), b"crane");
        assert_eq!(word.unique_letter_count(), 5);
    }

    #[test]
    fn unique_letters_with_duplicates() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.unique_letters(), b"sped");
        assert_eq!(word.unique_letter_count(), 4);
    }

    #[test]
    fn unique_letters_all_same() {
        let word = Word::new("aaaaa").unwrap();
        assert_eq!(word.unique_letters(), b"a");
        assert_eq!(word.unique_letter_count(), 1);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_equality_case_insensitive() {
        let word1 = Word::new("crane").unwrap();
        let word2 = Word::new("CRANE").unwrap();
        let word3 = Word::new("slate").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
