//! Per-letter hint categories
//!
//! A guess is scored letter by letter. Each position receives exactly one
//! category, and categories are totally ordered so that the best evidence
//! seen for a letter can be picked with `max`:
//!
//! `Miss < Close < Hit`

use std::fmt;

/// Feedback for a single letter of a guess
///
/// The derived ordering follows declaration order, which is also the
/// precedence used when aggregating hints across guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HintCategory {
    /// Letter does not occur in any unclaimed position of the target
    Miss,
    /// Letter occurs in the target, but at another unclaimed position
    Close,
    /// Letter matches the target at this exact position
    Hit,
}

impl HintCategory {
    /// All categories in ascending precedence
    pub const ALL: [Self; 3] = [Self::Miss, Self::Close, Self::Hit];

    /// Single-character glyph for plain-text output
    ///
    /// # Examples
    /// ```
    /// use tordle::core::HintCategory;
    ///
    /// assert_eq!(HintCategory::Hit.glyph(), '$');
    /// assert_eq!(HintCategory::Close.glyph(), '!');
    /// assert_eq!(HintCategory::Miss.glyph(), 'X');
    /// ```
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Miss => 'X',
            Self::Close => '!',
            Self::Hit => '$',
        }
    }

    /// Colored square used when sharing results
    #[inline]
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Miss => '⬜',
            Self::Close => '🟨',
            Self::Hit => '🟩',
        }
    }
}

impl fmt::Display for HintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Miss => "miss",
            Self::Close => "close",
            Self::Hit => "hit",
        };
        f.write_str(name)
    }
}
