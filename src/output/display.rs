//! Display functions for the line-based game

use super::formatters::{hints_to_emoji, hints_to_glyphs, styled_guess, styled_letter};
use crate::dictionary::Dictionary;
use crate::session::{HintAlphabet, Session, SessionStatus};
use colored::Colorize;

/// Letters per row when printing the hint alphabet
pub const ALPHABET_ROW_WIDTH: usize = 13;

/// Unused attempts drawn as blank rows before the rest are summarized
const MAX_BLANK_ROWS: usize = 10;

/// Print every guess so far, followed by empty rows for unused attempts
pub fn print_board(session: &Session) {
    let width = session.target_length();

    println!("\n{}", "─".repeat(width * 2 + 12).cyan());
    for (i, (guess, hints)) in session.turns().enumerate() {
        println!(
            "  {}. {}   {}",
            (i + 1).to_string().bright_black(),
            styled_guess(guess, hints),
            hints_to_glyphs(hints).bright_black()
        );
    }
    let blanks = vec!["_"; width].join(" ");
    let shown = session.remaining_guesses().min(MAX_BLANK_ROWS);
    for i in session.guess_count()..session.guess_count() + shown {
        println!("  {}. {}", (i + 1).to_string().bright_black(), blanks.bright_black());
    }
    if session.remaining_guesses() > shown {
        let hidden = session.remaining_guesses() - shown;
        println!("  {}", format!("... {hidden} more").bright_black());
    }
    println!("{}", "─".repeat(width * 2 + 12).cyan());
}

/// Print the best known hint for each letter
pub fn print_alphabet(alphabet: &HintAlphabet) {
    let letters: Vec<(char, _)> = alphabet.iter().collect();

    println!("Alphabet:");
    for row in letters.chunks(ALPHABET_ROW_WIDTH) {
        let line: Vec<String> = row
            .iter()
            .map(|&(letter, hint)| styled_letter(letter, hint).to_string())
            .collect();
        println!("  {}", line.join(" "));
    }
}

/// Print the final banner for a decided game
pub fn print_outcome(session: &Session) {
    match session.status() {
        SessionStatus::Victory => {
            let count = session.guess_count();
            println!(
                "\n{}",
                format!(
                    "🎉 Victory! Solved in {count} {}",
                    if count == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            );
        }
        SessionStatus::Defeat => {
            println!(
                "\n{} {}",
                "❌ Out of guesses. It was".red().bold(),
                format!("'{}'", session.target()).bright_yellow().bold()
            );
        }
        SessionStatus::Active | SessionStatus::Error => return,
    }

    println!();
    for hints in session.hint_history() {
        println!("  {}", hints_to_emoji(hints));
    }
    println!();
}

/// Print how many words the dictionary holds for each length
pub fn print_corpus_summary(dictionary: &Dictionary) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "WORD LIST".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("\n   Total words: {}", dictionary.len().to_string().bright_yellow());
    for length in dictionary.lengths() {
        println!(
            "   {length:>3} letters: {:>6}",
            dictionary.words_of_length(length).len()
        );
    }
    println!();
}
