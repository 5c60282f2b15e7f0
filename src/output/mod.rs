//! Terminal output formatting
//!
//! Display utilities for the line-based game and corpus reports.

pub mod display;
pub mod formatters;

pub use display::{print_alphabet, print_board, print_corpus_summary, print_outcome};
