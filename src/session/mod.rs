//! Game session state machine
//!
//! A [`Session`] owns one game: the target, the guesses made so far and the
//! hints they produced. Its only mutation is [`Session::guess`]; a new game
//! needs a new session.
//!
//! ```text
//! Active ──correct guess──────────▶ Victory
//!    │
//!    └──last guess used, wrong───▶ Defeat
//! ```

mod alphabet;

pub use alphabet::HintAlphabet;
pub use crate::core::SessionStatus;

use crate::core::{
    ConstructionError, GameError, HintCategory, get_hints, is_correct, normalize, validate_word,
};
use crate::dictionary::Dictionary;

/// A single game against one hidden target word
#[derive(Debug, Clone)]
pub struct Session<'a> {
    target: String,
    total_guesses: usize,
    status: SessionStatus,
    guess_history: Vec<String>,
    hint_history: Vec<Vec<HintCategory>>,
    dictionary: &'a Dictionary,
}

impl<'a> Session<'a> {
    /// Start a game
    ///
    /// # Parameters
    /// - `target`: The word to guess; must be a dictionary word made of letters
    /// - `total_guesses`: Number of attempts allowed; must be positive
    /// - `dictionary`: Words accepted as guesses
    ///
    /// # Errors
    /// Returns [`GameError::Construction`] if the target is invalid or no
    /// guesses are allowed. No session exists in that case.
    ///
    /// # Examples
    /// ```
    /// use tordle::dictionary::Dictionary;
    /// use tordle::session::{Session, SessionStatus};
    ///
    /// let dictionary = Dictionary::new(["crane", "slate"]);
    /// let mut session = Session::new("crane", 6, &dictionary).unwrap();
    ///
    /// session.guess("slate").unwrap();
    /// assert_eq!(session.status(), SessionStatus::Active);
    /// assert_eq!(session.remaining_guesses(), 5);
    ///
    /// assert!(Session::new("zzzzz", 6, &dictionary).is_err());
    /// ```
    pub fn new(
        target: &str,
        total_guesses: usize,
        dictionary: &'a Dictionary,
    ) -> Result<Self, GameError> {
        let result = Self::check_construction(target, total_guesses, dictionary);
        if let Err(err) = &result {
            tracing::debug!(status = %SessionStatus::Error, error = %err, "session rejected");
        }
        result?;

        let target = normalize(target);
        tracing::debug!(
            length = target.chars().count(),
            total_guesses,
            "session started"
        );

        Ok(Self {
            target,
            total_guesses,
            status: SessionStatus::Active,
            guess_history: Vec::new(),
            hint_history: Vec::new(),
            dictionary,
        })
    }

    fn check_construction(
        target: &str,
        total_guesses: usize,
        dictionary: &Dictionary,
    ) -> Result<(), ConstructionError> {
        validate_word(target, dictionary)
            .map_err(|err| ConstructionError::InvalidTarget(Box::new(err)))?;

        if total_guesses == 0 {
            return Err(ConstructionError::NoGuesses);
        }

        Ok(())
    }

    /// Submit a guess and return its hints
    ///
    /// On success the normalized guess and its hints are appended to the
    /// history and the status may move to `Victory` or `Defeat`.
    ///
    /// # Errors
    /// - [`GameError::InactiveSession`] once the game is decided
    /// - [`GameError::NoGuessesRemaining`] if every attempt has been used
    /// - any validation error from [`get_hints`]
    ///
    /// A failed guess leaves the session unchanged.
    pub fn guess(&mut self, input: &str) -> Result<Vec<HintCategory>, GameError> {
        if !self.status.is_active() {
            return Err(GameError::InactiveSession(self.status));
        }
        if self.remaining_guesses() == 0 {
            return Err(GameError::NoGuessesRemaining);
        }

        let guess = normalize(input);
        let hints = get_hints(&guess, &self.target, self.dictionary)?;

        let correct = is_correct(&guess, &self.target);
        self.guess_history.push(guess);
        self.hint_history.push(hints.clone());

        if correct {
            self.status = SessionStatus::Victory;
        } else if self.remaining_guesses() == 0 {
            self.status = SessionStatus::Defeat;
        }

        tracing::debug!(
            turn = self.guess_count(),
            remaining = self.remaining_guesses(),
            status = %self.status,
            "guess accepted"
        );

        Ok(hints)
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// The normalized target word
    #[inline]
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Number of characters in the target
    #[must_use]
    pub fn target_length(&self) -> usize {
        self.target.chars().count()
    }

    #[inline]
    #[must_use]
    pub const fn total_guesses(&self) -> usize {
        self.total_guesses
    }

    #[inline]
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guess_history.len()
    }

    #[inline]
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.total_guesses.saturating_sub(self.guess_history.len())
    }

    /// Accepted guesses in submission order (normalized)
    #[inline]
    #[must_use]
    pub fn guess_history(&self) -> &[String] {
        &self.guess_history
    }

    /// Hints for each accepted guess, parallel to [`Session::guess_history`]
    #[inline]
    #[must_use]
    pub fn hint_history(&self) -> &[Vec<HintCategory>] {
        &self.hint_history
    }

    /// Iterate over (guess, hints) pairs in order
    pub fn turns(&self) -> impl Iterator<Item = (&str, &[HintCategory])> {
        self.guess_history
            .iter()
            .map(String::as_str)
            .zip(self.hint_history.iter().map(Vec::as_slice))
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Best hint seen so far for every letter of the alphabet
    ///
    /// Recomputed from the full history on every call.
    #[must_use]
    pub fn hint_alphabet(&self) -> HintAlphabet {
        HintAlphabet::from_history(&self.guess_history, &self.hint_history)
    }
}
