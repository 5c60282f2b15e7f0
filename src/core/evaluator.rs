//! Guess validation and hint calculation
//!
//! All functions normalize their text arguments first (trim, upper-case), so
//! `" crane\n"` and `"CRANE"` are the same guess everywhere in the game.

use super::HintCategory;
use super::error::{CharProblem, GameError, WordProblem};
use crate::dictionary::Dictionary;
use rustc_hash::FxHashMap;

/// Letters a word may contain after normalization
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Whether `ch` belongs to the game alphabet (normalized form only)
#[inline]
#[must_use]
pub const fn is_letter(ch: char) -> bool {
    ch.is_ascii_uppercase()
}

/// Canonical form of any user-supplied text: surrounding whitespace removed,
/// upper-cased.
///
/// # Examples
/// ```
/// use tordle::core::normalize;
///
/// assert_eq!(normalize("  crane\n"), "CRANE");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_uppercase()
}

/// Check whether a guess matches the target, ignoring case and surrounding
/// whitespace
#[must_use]
pub fn is_correct(guess: &str, target: &str) -> bool {
    normalize(guess) == normalize(target)
}

/// Validate a word against the dictionary and the alphabet
///
/// Checks run in a fixed order and stop at the first failure: empty, then
/// dictionary membership, then alphabet.
///
/// # Errors
/// Returns [`GameError::InvalidWord`] describing the first failed check.
pub fn validate_word(word: &str, dictionary: &Dictionary) -> Result<(), GameError> {
    let word = normalize(word);

    if word.is_empty() {
        return Err(GameError::invalid_word(&word, WordProblem::Empty));
    }

    if !dictionary.contains(&word) {
        return Err(GameError::invalid_word(&word, WordProblem::NotInDictionary));
    }

    if !word.chars().all(is_letter) {
        return Err(GameError::invalid_word(&word, WordProblem::NotAlphabetic));
    }

    Ok(())
}

/// Validate a guess for a target of `target_length` letters
///
/// # Errors
/// Returns [`GameError::InvalidLength`] when the normalized guess has the
/// wrong number of characters, otherwise any error from [`validate_word`].
pub fn validate_guess(
    guess: &str,
    target_length: usize,
    dictionary: &Dictionary,
) -> Result<(), GameError> {
    let guess = normalize(guess);

    if guess.chars().count() != target_length {
        return Err(GameError::InvalidLength {
            guess,
            expected: target_length,
        });
    }

    validate_word(&guess, dictionary)
}

/// Validate a single typed letter and return its normalized form
///
/// Used by letter-at-a-time input where there is no full word to check yet.
///
/// # Errors
/// Returns [`GameError::InvalidChar`] unless exactly one alphabet letter
/// remains after normalization.
pub fn validate_char(input: &str) -> Result<char, GameError> {
    let normalized = normalize(input);
    let mut chars = normalized.chars();

    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return Err(GameError::invalid_char(&normalized, CharProblem::NotSingle));
    };

    if !is_letter(ch) {
        return Err(GameError::invalid_char(&normalized, CharProblem::NotALetter));
    }

    Ok(ch)
}

/// Validate `guess` and compute its hints against `target`
///
/// Both strings are normalized first. The guess must have the target's
/// length and be a dictionary word.
///
/// # Errors
/// Returns any error from [`validate_guess`].
///
/// # Examples
/// ```
/// use tordle::core::{HintCategory::*, get_hints};
/// use tordle::dictionary::Dictionary;
///
/// let dictionary = Dictionary::new(["baba", "aaac"]);
/// let hints = get_hints("aaac", "baba", &dictionary).unwrap();
/// assert_eq!(hints, vec![Close, Hit, Miss, Miss]);
/// ```
pub fn get_hints(
    guess: &str,
    target: &str,
    dictionary: &Dictionary,
) -> Result<Vec<HintCategory>, GameError> {
    let guess = normalize(guess);
    let target = normalize(target);

    validate_guess(&guess, target.chars().count(), dictionary)?;

    Ok(evaluate(&guess, &target))
}

/// Compute hints without normalizing or validating
///
/// Returns one category per character of `guess`. Each target letter backs
/// at most one `Hit` or `Close`, so duplicated guess letters never claim the
/// same target letter twice.
///
/// # Algorithm
/// 1. First pass: mark exact position matches as hits
/// 2. Pool every target letter whose position was not a hit
/// 3. Second pass, left to right: a letter found in the pool is close and
///    consumes one pooled occurrence
/// 4. Everything left unmarked is a miss
#[must_use]
pub fn evaluate(guess: &str, target: &str) -> Vec<HintCategory> {
    let guess: Vec<char> = guess.chars().collect();
    let target: Vec<char> = target.chars().collect();
    let mut hints: Vec<Option<HintCategory>> = vec![None; guess.len()];

    // First pass: hits
    for (hint, (g, t)) in hints.iter_mut().zip(guess.iter().zip(&target)) {
        if g == t {
            *hint = Some(HintCategory::Hit);
        }
    }

    // Pool of target letters not consumed by a hit (duplicates counted)
    let mut remaining: FxHashMap<char, usize> = FxHashMap::default();
    for (i, &t) in target.iter().enumerate() {
        if hints.get(i).copied().flatten() != Some(HintCategory::Hit) {
            *remaining.entry(t).or_insert(0) += 1;
        }
    }

    // Second pass: closes claim one pooled occurrence each
    for (hint, g) in hints.iter_mut().zip(&guess) {
        if hint.is_some() {
            continue;
        }
        if let Some(count) = remaining.get_mut(g)
            && *count > 0
        {
            *count -= 1;
            *hint = Some(HintCategory::Close);
        }
    }

    hints
        .into_iter()
        .map(|hint| hint.unwrap_or(HintCategory::Miss))
        .collect()
}
