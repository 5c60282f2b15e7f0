//! Game session status

use std::fmt;

/// Lifecycle state of a game session
///
/// Exactly one status holds at any time. `Victory` and `Defeat` are terminal;
/// `Error` is what a failed construction reports and never accepts guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionStatus {
    #[default]
    Active,
    Victory,
    Defeat,
    Error,
}

impl SessionStatus {
    /// Whether the session still accepts guesses
    #[inline]
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Whether the game has been decided (won or lost)
    #[inline]
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Active => "active",
            Self::Victory => "victory",
            Self::Defeat => "defeat",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}
