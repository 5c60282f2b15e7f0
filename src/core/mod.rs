//! Core domain types for the game
//!
//! Hint categories, session status, validation errors and the pure guess
//! evaluator. Nothing here performs I/O or keeps state between calls.

mod error;
mod evaluator;
mod hint;
mod status;

pub use error::{CharProblem, ConstructionError, GameError, WordProblem};
pub use evaluator::{
    ALPHABET, evaluate, get_hints, is_correct, is_letter, normalize, validate_char,
    validate_guess, validate_word,
};
pub use hint::HintCategory;
pub use status::SessionStatus;
