//! Error types for guess validation and session control
//!
//! Every error here is caused by caller input or a violated precondition.
//! None of them leave a session in a modified state, so callers can show the
//! message and let the player retry.

use super::SessionStatus;
use thiserror::Error;

/// Why a word was rejected by [`validate_word`](super::validate_word)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WordProblem {
    #[error("the empty string is not a valid word")]
    Empty,
    #[error("it does not appear in the dictionary")]
    NotInDictionary,
    #[error("it should only contain letters")]
    NotAlphabetic,
}

/// Why a character was rejected by [`validate_char`](super::validate_char)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CharProblem {
    #[error("not a single character")]
    NotSingle,
    #[error("not a valid letter")]
    NotALetter,
}

/// Why a session could not be created
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("invalid target word: {0}")]
    InvalidTarget(#[source] Box<GameError>),
    #[error("expected total guesses to be positive, got 0")]
    NoGuesses,
}

/// Errors raised by the evaluator and the session state machine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the guess '{guess}' should be {expected} characters long")]
    InvalidLength { guess: String, expected: usize },

    #[error("'{word}' is not a valid word: {problem}")]
    InvalidWord { word: String, problem: WordProblem },

    #[error("'{input}' is {problem}")]
    InvalidChar { input: String, problem: CharProblem },

    #[error("cannot make guesses in an inactive session (status: {0})")]
    InactiveSession(SessionStatus),

    #[error("no guesses remaining")]
    NoGuessesRemaining,

    #[error("cannot start session: {0}")]
    Construction(#[from] ConstructionError),
}

impl GameError {
    pub(crate) fn invalid_word(word: &str, problem: WordProblem) -> Self {
        Self::InvalidWord {
            word: word.to_string(),
            problem,
        }
    }

    pub(crate) fn invalid_char(input: &str, problem: CharProblem) -> Self {
        Self::InvalidChar {
            input: input.to_string(),
            problem,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_input() {
        let err = GameError::InvalidLength {
            guess: "ABCD".to_string(),
            expected: 5,
        };
        assert_eq!(
            err.to_string(),
            "the guess 'ABCD' should be 5 characters long"
        );

        let err = GameError::invalid_word("QQQQQ", WordProblem::NotInDictionary);
        assert_eq!(
            err.to_string(),
            "'QQQQQ' is not a valid word: it does not appear in the dictionary"
        );

        let err = GameError::invalid_char("7", CharProblem::NotALetter);
        assert_eq!(err.to_string(), "'7' is not a valid letter");
    }

    #[test]
    fn construction_wraps_target_error() {
        let inner = GameError::invalid_word("", WordProblem::Empty);
        let err = GameError::from(ConstructionError::InvalidTarget(Box::new(inner)));
        assert_eq!(
            err.to_string(),
            "cannot start session: invalid target word: '' is not a valid word: \
             the empty string is not a valid word"
        );
    }

    #[test]
    fn inactive_session_reports_status() {
        let err = GameError::InactiveSession(SessionStatus::Victory);
        assert_eq!(
            err.to_string(),
            "cannot make guesses in an inactive session (status: victory)"
        );
    }
}
