//! Aggregate hint view over a session's history
//!
//! For each letter of the alphabet this records the strongest hint the letter
//! ever received, using the `Miss < Close < Hit` precedence. A letter that was
//! a hit once stays a hit no matter what later guesses show.

use crate::core::{ALPHABET, HintCategory};

/// Best known hint for each letter `A..=Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HintAlphabet {
    best: [Option<HintCategory>; 26],
}

impl HintAlphabet {
    /// Derive the view from parallel guess and hint histories
    ///
    /// Characters outside the alphabet are ignored. The result depends only
    /// on the multiset of (letter, hint) pairs, not on guess order.
    ///
    /// # Examples
    /// ```
    /// use tordle::core::HintCategory::*;
    /// use tordle::session::HintAlphabet;
    ///
    /// let guesses = ["AB".to_string(), "BA".to_string()];
    /// let hints = [vec![Hit, Miss], vec![Close, Miss]];
    /// let alphabet = HintAlphabet::from_history(&guesses, &hints);
    ///
    /// assert_eq!(alphabet.get('A'), Some(Hit));
    /// assert_eq!(alphabet.get('B'), Some(Close));
    /// assert_eq!(alphabet.get('C'), None);
    /// ```
    #[must_use]
    pub fn from_history<G: AsRef<str>>(guesses: &[G], hints: &[Vec<HintCategory>]) -> Self {
        let mut alphabet = Self::default();

        for (guess, guess_hints) in guesses.iter().zip(hints) {
            for (letter, &hint) in guess.as_ref().chars().zip(guess_hints) {
                alphabet.record(letter, hint);
            }
        }

        alphabet
    }

    fn record(&mut self, letter: char, hint: HintCategory) {
        if let Some(slot) = Self::index(letter).map(|i| &mut self.best[i]) {
            *slot = (*slot).max(Some(hint));
        }
    }

    fn index(letter: char) -> Option<usize> {
        letter
            .is_ascii_uppercase()
            .then(|| (letter as u8 - b'A') as usize)
    }

    /// Best hint seen for `letter`, or `None` if it was never guessed
    ///
    /// Lower-case letters are looked up as their upper-case form.
    #[must_use]
    pub fn get(&self, letter: char) -> Option<HintCategory> {
        Self::index(letter.to_ascii_uppercase()).and_then(|i| self.best[i])
    }

    /// All letters in alphabetical order with their best hint
    pub fn iter(&self) -> impl Iterator<Item = (char, Option<HintCategory>)> + '_ {
        ALPHABET.iter().copied().zip(self.best.iter().copied())
    }

    /// Number of letters that have appeared in at least one guess
    #[must_use]
    pub fn seen_count(&self) -> usize {
        self.best.iter().filter(|hint| hint.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::session::Session;
    use HintCategory::{Close, Hit, Miss};

    #[test]
    fn empty_history_has_no_hints() {
        let alphabet = HintAlphabet::from_history::<String>(&[], &[]);
        assert_eq!(alphabet.seen_count(), 0);
        assert!(alphabet.iter().all(|(_, hint)| hint.is_none()));
        assert_eq!(alphabet.iter().count(), 26);
    }

    #[test]
    fn iter_is_alphabetical() {
        let letters: String = HintAlphabet::default().iter().map(|(c, _)| c).collect();
        assert_eq!(letters, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn hit_is_never_downgraded() {
        let words = Dictionary::new(["ABC", "AXY", "XAY", "YXA"]);
        let mut session = Session::new("ABC", 6, &words).unwrap();

        session.guess("AXY").unwrap(); // A hit
        session.guess("XAY").unwrap(); // A close
        assert_eq!(session.hint_alphabet().get('A'), Some(Hit));

        session.guess("YXA").unwrap(); // A close again
        let alphabet = session.hint_alphabet();
        assert_eq!(alphabet.get('A'), Some(Hit));
        assert_eq!(alphabet.get('X'), Some(Miss));
        assert_eq!(alphabet.get('Y'), Some(Miss));
        assert_eq!(alphabet.get('B'), None);
    }

    #[test]
    fn close_upgrades_to_hit_regardless_of_order() {
        let guesses = ["BA", "AB"];
        let forward = HintAlphabet::from_history(&guesses, &[vec![Close, Close], vec![Hit, Hit]]);
        let backward =
            HintAlphabet::from_history(&["AB", "BA"], &[vec![Hit, Hit], vec![Close, Close]]);

        assert_eq!(forward, backward);
        assert_eq!(forward.get('A'), Some(Hit));
        assert_eq!(forward.get('b'), Some(Hit));
    }

    #[test]
    fn duplicate_letters_keep_best_position() {
        // Same letter twice in one guess: one miss, one close
        let alphabet = HintAlphabet::from_history(&["EERIE"], &[vec![Miss, Close, Miss, Miss, Miss]]);
        assert_eq!(alphabet.get('E'), Some(Close));
        assert_eq!(alphabet.get('R'), Some(Miss));
        assert_eq!(alphabet.seen_count(), 3);
    }

    #[test]
    fn non_letters_are_ignored() {
        assert_eq!(HintAlphabet::default().get('1'), None);
        let alphabet = HintAlphabet::from_history(&["A1"], &[vec![Hit, Hit]]);
        assert_eq!(alphabet.seen_count(), 1);
    }
}
