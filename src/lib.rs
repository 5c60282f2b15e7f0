//! Tordle
//!
//! A terminal word-guessing game: find the hidden word within a fixed number
//! of attempts, guided by per-letter hints that handle duplicate letters the
//! way players expect.
//!
//! # Quick Start
//!
//! ```rust
//! use tordle::core::HintCategory;
//! use tordle::dictionary::Dictionary;
//! use tordle::session::{Session, SessionStatus};
//!
//! let dictionary = Dictionary::new(["crane", "slate"]);
//! let mut session = Session::new("crane", 6, &dictionary).unwrap();
//!
//! let hints = session.guess("crane").unwrap();
//! assert_eq!(hints, vec![HintCategory::Hit; 5]);
//! assert_eq!(session.status(), SessionStatus::Victory);
//! ```

// Core domain types and the guess evaluator
pub mod core;

// Word lists
pub mod dictionary;

// Game state machine
pub mod session;

// Game settings
pub mod config;

// Tracing subscriber setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
