//! Feedback pattern evaluation and representation
//!
//! A pattern encodes the per-letter feedback for a guess using base-3
//! encoding:
//! - 0 = absent (letter not in the secret)
//! - 1 = present (letter in the secret, wrong position)
//! - 2 = exact (letter in the correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where the digit for
//! position `i` contributes `digit × 3^i` to the total.

use super::{WORD_LEN, Word};
use std::fmt;

/// Feedback pattern for a guess against a secret
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All exact (the guess is the secret)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check whether every position is exact
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 242
    }

    /// Evaluate the feedback a guess receives against a secret
    ///
    /// Exact two-pass evaluation with a consumption mask, which produces
    /// correct counts when a letter repeats in the guess or the secret:
    ///
    /// 1. First pass: every position where guess and secret agree is marked
    ///    exact, and that secret position is consumed.
    /// 2. Second pass: each remaining guess position scans the secret's
    ///    not-yet-consumed positions left to right; the first match is
    ///    marked present and consumes that secret position.
    /// 3. Everything else is absent.
    ///
    /// # Examples
    /// ```
    /// use wordle_trainer::core::{Pattern, Word};
    ///
    /// let secret = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// let pattern = Pattern::evaluate(&secret, &guess);
    ///
    /// // C absent, R absent, A exact, N absent, E exact
    /// // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
    /// assert_eq!(pattern.value(), 180);
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let mut digits = [0u8; WORD_LEN];
        let mut consumed = [false; WORD_LEN];

        // First pass: exact matches consume their secret position
        for i in 0..WORD_LEN {
            if guess.letter_at(i) == secret.letter_at(i) {
                digits[i] = 2;
                consumed[i] = true;
            }
        }

        // Second pass: first available secret match, left to right
        for i in 0..WORD_LEN {
            if digits[i] == 2 {
                continue;
            }
            for j in 0..WORD_LEN {
                if !consumed[j] && guess.letter_at(i) == secret.letter_at(j) {
                    digits[i] = 1;
                    consumed[j] = true;
                    break;
                }
            }
        }

        Self::from_digits(&digits)
    }

    /// Encode base-3 digits (position 0 first) as a pattern
    fn from_digits(digits: &[u8; WORD_LEN]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for &digit in digits {
            value += digit * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(value)
    }

    /// Decode the pattern into base-3 digits, position 0 first
    #[must_use]
    pub fn digits(self) -> [u8; WORD_LEN] {
        let mut digits = [0u8; WORD_LEN];
        let mut val = self.0;
        for digit in &mut digits {
            *digit = val % 3;
            val /= 3;
        }
        digits
    }

    /// Count the exact positions
    #[must_use]
    pub fn count_exact(self) -> u8 {
        self.digits().iter().filter(|&&d| d == 2).count() as u8
    }

    /// Count the present-but-misplaced positions
    #[must_use]
    pub fn count_present(self) -> u8 {
        self.digits().iter().filter(|&&d| d == 1).count() as u8
    }

    /// Parse a pattern from a string like "GYBGY" or "🟩🟨⬛🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for exact
    /// - 'Y'/'y'/🟨 for present
    /// - 'B'/'b'/'-'/'_'/⬛/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_trainer::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GYBGY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LEN {
            return None;
        }

        let mut digits = [0u8; WORD_LEN];
        for (i, ch) in chars.into_iter().enumerate() {
            digits[i] = match ch {
                'G' | 'g' | '🟩' => 2,
                'Y' | 'y' | '🟨' => 1,
                'B' | 'b' | '-' | '_' | '⬛' | '⬜' => 0,
                _ => return None,
            };
        }

        Some(Self::from_digits(&digits))
    }

    /// Render the pattern as tile emoji
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.digits()
            .iter()
            .map(|digit| match digit {
                2 => '🟩',
                1 => '🟨',
                _ => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    /// Renders as five letters over {G, Y, B}, position 0 first
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits() {
            f.write_str(match digit {
                2 => "G",
                1 => "Y",
                _ => "B",
            })?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::PATTERN_COUNT;

    #[test]
    fn pattern_perfect_constant() {
        assert_eq!(usize::from(Pattern::PERFECT.value()), PATTERN_COUNT - 1);
        assert_eq!(Pattern::PERFECT.value(), 242);
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.count_exact(), 5);
        assert_eq!(Pattern::PERFECT.count_present(), 0);
    }

    #[test]
    fn pattern_all_absent() {
        let secret = Word::new("fghij").unwrap();
        let guess = Word::new("abcde").unwrap();
        let pattern = Pattern::evaluate(&secret, &guess);

        assert_eq!(pattern.value(), 0);
        assert_eq!(pattern.count_exact(), 0);
        assert_eq!(pattern.count_present(), 0);
    }

    #[test]
    fn pattern_self_is_perfect() {
        for text in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = Word::new(text).unwrap();
            assert_eq!(Pattern::evaluate(&w, &w), Pattern::PERFECT);
        }
    }

    #[test]
    fn pattern_crane_vs_trace() {
        // Guessing TRACE against secret CRANE:
        // T absent, R exact, A exact, C present, E exact
        let secret = Word::new("crane").unwrap();
        let guess = Word::new("trace").unwrap();
        let pattern = Pattern::evaluate(&secret, &guess);

        assert_eq!(pattern.to_string(), "BGGYG");
        // 0 + 2×3 + 2×9 + 1×27 + 2×81 = 213
        assert_eq!(pattern.value(), 213);
        assert_eq!(pattern.count_exact(), 3);
        assert_eq!(pattern.count_present(), 1);
    }

    #[test]
    fn pattern_duplicate_letters_speed_vs_erase() {
        // SPEED against secret ERASE:
        // S present, P absent, both Es present, D absent.
        // ERASE has two Es so both guess Es can be satisfied.
        let secret = Word::new("erase").unwrap();
        let guess = Word::new("speed").unwrap();
        let pattern = Pattern::evaluate(&secret, &guess);

        // 1 + 0×3 + 1×9 + 1×27 + 0×81 = 37
        assert_eq!(pattern.value(), 37);
        assert_eq!(pattern.to_string(), "YBYYB");
    }

    #[test]
    fn pattern_duplicate_letters_robot_vs_floor() {
        // ROBOT against secret FLOOR:
        // R present, first O present, B absent, second O exact, T absent.
        let secret = Word::new("floor").unwrap();
        let guess = Word::new("robot").unwrap();
        let pattern = Pattern::evaluate(&secret, &guess);

        // 1 + 1×3 + 0×9 + 2×27 + 0×81 = 58
        assert_eq!(pattern.value(), 58);
        assert_eq!(pattern.count_exact(), 1);
        assert_eq!(pattern.count_present(), 2);
    }

    #[test]
    fn pattern_guess_repeats_letter_secret_has_one() {
        // ALLAY against secret LLAMA: each guess letter can consume at most
        // the secret's supply of that letter.
        let secret = Word::new("llama").unwrap();
        let guess = Word::new("allay").unwrap();
        let pattern = Pattern::evaluate(&secret, &guess);

        // A present, L exact, L present, A present, Y absent
        assert_eq!(pattern.to_string(), "YGYYB");
    }

    #[test]
    fn exact_count_matches_positional_agreement() {
        let pairs = [
            ("crane", "trace"),
            ("floor", "robot"),
            ("erase", "speed"),
            ("aaaaa", "aabbb"),
            ("abcde", "abcde"),
        ];

        for (secret_text, guess_text) in pairs {
            let secret = Word::new(secret_text).unwrap();
            let guess = Word::new(guess_text).unwrap();
            let pattern = Pattern::evaluate(&secret, &guess);

            let agreement = secret
                .letters()
                .iter()
                .zip(guess.letters())
                .filter(|(s, g)| s == g)
                .count();
            assert_eq!(usize::from(pattern.count_exact()), agreement);
        }
    }

    #[test]
    fn non_absent_bounded_by_multiset_intersection() {
        let pairs = [
            ("aaaaa", "aabbb"),
            ("llama", "allay"),
            ("erase", "speed"),
            ("crane", "nacre"),
        ];

        for (secret_text, guess_text) in pairs {
            let secret = Word::new(secret_text).unwrap();
            let guess = Word::new(guess_text).unwrap();
            let pattern = Pattern::evaluate(&secret, &guess);

            let mut intersection = 0usize;
            for c in b'a'..=b'z' {
                let in_secret = secret.letters().iter().filter(|&&x| x == c).count();
                let in_guess = guess.letters().iter().filter(|&&x| x == c).count();
                intersection += in_secret.min(in_guess);
            }

            let non_absent =
                usize::from(pattern.count_exact()) + usize::from(pattern.count_present());
            assert!(non_absent <= intersection);
        }
    }

    #[test]
    fn pattern_parse_valid() {
        let p1 = Pattern::parse("GYGBB").unwrap();
        let p2 = Pattern::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::parse("gyg__").unwrap();
        let p4 = Pattern::parse("GYG--").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1, p4);

        // 2 + 1×3 + 2×9 + 0×27 + 0×81 = 23
        assert_eq!(p1.value(), 23);
    }

    #[test]
    fn pattern_parse_invalid() {
        assert!(Pattern::parse("GYGGYX").is_none()); // Too long
        assert!(Pattern::parse("GYG").is_none()); // Too short
        assert!(Pattern::parse("GXGGY").is_none()); // Invalid char
        assert!(Pattern::parse("").is_none()); // Empty
    }

    #[test]
    fn pattern_display_round_trip() {
        for value in [0u8, 23, 58, 180, 242] {
            let pattern = Pattern::new(value);
            let parsed = Pattern::parse(&pattern.to_string()).unwrap();
            assert_eq!(parsed, pattern);
        }
    }

    #[test]
    fn pattern_to_emoji() {
        assert_eq!(Pattern::new(0).to_emoji(), "⬜⬜⬜⬜⬜");
        assert_eq!(Pattern::PERFECT.to_emoji(), "🟩🟩🟩🟩🟩");
    }
}
