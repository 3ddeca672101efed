//! Formatting utilities for terminal output

use crate::core::Pattern;
use colored::Colorize;

// Tile colors: exact / present / absent
const EXACT_RGB: (u8, u8, u8) = (106, 170, 100);
const PRESENT_RGB: (u8, u8, u8) = (201, 180, 88);
const ABSENT_RGB: (u8, u8, u8) = (120, 124, 126);

/// Render a guess as a row of colored tiles
#[must_use]
pub fn tile_row(word: &str, pattern: Pattern) -> String {
    let digits = pattern.digits();

    word.chars()
        .zip(digits)
        .map(|(letter, digit)| {
            let cell = format!(" {} ", letter.to_ascii_uppercase());
            let (r, g, b) = match digit {
                2 => EXACT_RGB,
                1 => PRESENT_RGB,
                _ => ABSENT_RGB,
            };
            format!("{}", cell.white().bold().on_truecolor(r, g, b))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a pattern as emoji tiles
#[must_use]
pub fn pattern_to_emoji(pattern: Pattern) -> String {
    pattern.to_emoji()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a fixed-width bar
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = 6.0; // Roughly log2(64)
    create_progress_bar(entropy, max_entropy, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_row_contains_uppercase_letters() {
        let row = tile_row("crane", Pattern::PERFECT);
        for letter in ["C", "R", "A", "N", "E"] {
            assert!(row.contains(letter));
        }
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
