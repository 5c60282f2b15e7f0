//! Game configuration shared by the play modes

use crate::dictionary::Dictionary;
use crate::session::Session;
use anyhow::{Context, Result};

/// Default number of letters in the target word
pub const DEFAULT_TARGET_LENGTH: usize = 5;

/// Default number of attempts
pub const DEFAULT_TOTAL_GUESSES: usize = 6;

/// Settings for a single game, as chosen on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub target_length: usize,
    pub total_guesses: usize,
    pub show_alphabet: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_length: DEFAULT_TARGET_LENGTH,
            total_guesses: DEFAULT_TOTAL_GUESSES,
            show_alphabet: true,
        }
    }
}

impl GameConfig {
    /// Draw a random target of the configured length and start a session
    ///
    /// # Errors
    ///
    /// Returns an error if the dictionary has no word of the configured
    /// length, or if the session rejects the target or guess count.
    pub fn start_session<'a>(&self, dictionary: &'a Dictionary) -> Result<Session<'a>> {
        let target = dictionary.random_word(self.target_length).with_context(|| {
            format!(
                "no {}-letter words available in the dictionary",
                self.target_length
            )
        })?;

        Ok(Session::new(target, self.total_guesses, dictionary)?)
    }
}
