//! Word dictionary for the game
//!
//! Words are normalized on the way in and grouped by character count. Each
//! group is sorted so membership is a binary search, and random targets are
//! drawn uniformly from a single group.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::normalize;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::io;
use std::path::Path;

/// Immutable set of valid words, partitioned by length
#[derive(Debug, Clone)]
pub struct Dictionary {
    words_by_length: FxHashMap<usize, Vec<String>>,
    count: usize,
}

impl Dictionary {
    /// Build a dictionary from any collection of words
    ///
    /// Every word is trimmed and upper-cased before it is stored. Duplicates
    /// are kept and counted.
    ///
    /// # Examples
    /// ```
    /// use tordle::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["crane", " Slate "]);
    /// assert!(dictionary.contains("SLATE"));
    /// assert!(dictionary.contains("crane\n"));
    /// assert!(!dictionary.contains("irate"));
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words_by_length: FxHashMap<usize, Vec<String>> = FxHashMap::default();
        let mut count = 0;

        for word in words {
            let word = normalize(word.as_ref());
            words_by_length
                .entry(word.chars().count())
                .or_default()
                .push(word);
            count += 1;
        }

        // Sorted partitions allow binary search in `contains`
        for partition in words_by_length.values_mut() {
            partition.par_sort_unstable();
        }

        tracing::debug!(
            words = count,
            lengths = words_by_length.len(),
            "dictionary built"
        );

        Self {
            words_by_length,
            count,
        }
    }

    /// Dictionary backed by the corpus compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS))
    }

    /// Load a dictionary from a word list file (one word per line)
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened or read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        loader::load_from_file(path).map(Self::new)
    }

    /// Check whether `word` is a member, after normalization
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let word = normalize(word);
        self.words_by_length
            .get(&word.chars().count())
            .is_some_and(|partition| partition.binary_search(&word).is_ok())
    }

    /// Pick a uniformly random word with exactly `length` characters
    ///
    /// Returns `None` if no word of that length exists.
    #[must_use]
    pub fn random_word(&self, length: usize) -> Option<&str> {
        self.random_word_with(length, &mut rand::rng())
    }

    /// Same as [`Dictionary::random_word`] with a caller-supplied generator
    pub fn random_word_with<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Option<&str> {
        self.words_by_length
            .get(&length)
            .and_then(|partition| partition.choose(rng))
            .map(String::as_str)
    }

    /// All words with exactly `length` characters, sorted
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[String] {
        self.words_by_length
            .get(&length)
            .map_or(&[], Vec::as_slice)
    }

    /// Word lengths present in the dictionary, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.words_by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Number of words inserted (duplicates included)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Default for Dictionary {
    /// The embedded corpus
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn random_word_respects_length() {
        let words = Dictionary::new(["A", "AB", "ABC"]);
        assert_eq!(words.random_word(1), Some("A"));
        assert_eq!(words.random_word(2), Some("AB"));
        assert_eq!(words.random_word(3), Some("ABC"));
        assert_eq!(words.random_word(4), None);
    }

    #[test]
    fn random_word_covers_whole_partition() {
        let expected: HashSet<&str> = ["A", "B", "C", "D"].into_iter().collect();
        let words = Dictionary::new(expected.iter().copied().chain(["EE", "FFF"]));
        let mut rng = StdRng::seed_from_u64(7);

        let actual: HashSet<&str> = (0..200)
            .filter_map(|_| words.random_word_with(1, &mut rng))
            .collect();

        assert_eq!(actual, expected);
    }

    #[test]
    fn random_word_is_uppercase() {
        let words = Dictionary::new(["a"]);
        assert_eq!(words.random_word(1), Some("A"));
    }

    #[test]
    fn contains_members() {
        let expected = ["A", "B", "CC", "DDD"];
        let words = Dictionary::new(expected);
        for word in expected {
            assert!(words.contains(word), "{word} should be present");
        }
    }

    #[test]
    fn contains_rejects_non_members() {
        let words = Dictionary::new(["A", "C", "D"]);
        assert!(!words.contains("B"));
        assert!(!words.contains("EE"));
        assert!(!words.contains(""));
    }

    #[test]
    fn contains_normalizes_query_and_entries() {
        let words = Dictionary::new(["  crane  ", "Slate"]);
        assert!(words.contains("CRANE"));
        assert!(words.contains("slate"));
        assert!(words.contains(" sLaTe\n"));
        assert_eq!(words.words_of_length(5), ["CRANE", "SLATE"]);
    }

    #[test]
    fn len_counts_duplicates() {
        let words = Dictionary::new(["a", "A", "b"]);
        assert_eq!(words.len(), 3);
        assert!(!words.is_empty());
        assert!(Dictionary::new(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn lengths_are_sorted() {
        let words = Dictionary::new(["ABC", "A", "ABCDE", "AB"]);
        assert_eq!(words.lengths(), vec![1, 2, 3, 5]);
        assert!(words.words_of_length(4).is_empty());
    }

    #[test]
    fn embedded_contains_every_letter() {
        let words = Dictionary::embedded();
        assert_eq!(words.len(), WORDS_COUNT);

        let mut rng = StdRng::seed_from_u64(42);
        let sampled: HashSet<&str> = (0..1000)
            .filter_map(|_| words.random_word_with(1, &mut rng))
            .collect();
        let letters: HashSet<String> = crate::core::ALPHABET.iter().map(char::to_string).collect();

        assert_eq!(sampled.len(), 26);
        assert!(sampled.iter().all(|w| letters.contains(*w)));
    }

    #[test]
    fn embedded_has_default_game_words() {
        let words = Dictionary::default();
        assert!(words.random_word(5).is_some());
        assert!(words.contains("crane"));
    }
}
