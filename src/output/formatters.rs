//! Formatting utilities for terminal output

use crate::core::HintCategory;
use colored::{ColoredString, Colorize};

/// Format hints as glyphs (`$` hit, `!` close, `X` miss)
#[must_use]
pub fn hints_to_glyphs(hints: &[HintCategory]) -> String {
    hints.iter().map(|hint| hint.glyph()).collect()
}

/// Format hints as an emoji string
#[must_use]
pub fn hints_to_emoji(hints: &[HintCategory]) -> String {
    hints.iter().map(|hint| hint.to_emoji()).collect()
}

/// Color a letter by its hint; unscored letters are just bold
#[must_use]
pub fn styled_letter(letter: char, hint: Option<HintCategory>) -> ColoredString {
    let text = letter.to_string();
    match hint {
        None => text.bold(),
        Some(HintCategory::Hit) => text.green().bold(),
        Some(HintCategory::Close) => text.yellow().bold(),
        Some(HintCategory::Miss) => text.bright_black(),
    }
}

/// Color every letter of a scored guess
#[must_use]
pub fn styled_guess(guess: &str, hints: &[HintCategory]) -> String {
    guess
        .chars()
        .zip(hints)
        .map(|(letter, &hint)| styled_letter(letter, Some(hint)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use HintCategory::{Close, Hit, Miss};

    #[test]
    fn glyphs_follow_positions() {
        assert_eq!(hints_to_glyphs(&[Close, Hit, Miss, Miss]), "!$XX");
        assert_eq!(hints_to_glyphs(&[]), "");
    }

    #[test]
    fn emoji_all_hit() {
        assert_eq!(hints_to_emoji(&[Hit; 5]), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_mixed() {
        assert_eq!(hints_to_emoji(&[Miss, Close, Hit]), "⬜🟨🟩");
    }

    #[test]
    fn styled_guess_keeps_letters() {
        colored::control::set_override(false);
        assert_eq!(styled_guess("ABC", &[Hit, Close, Miss]), "A B C");
        assert_eq!(styled_letter('Q', None).to_string(), "Q");
    }
}
