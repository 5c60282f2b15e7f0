//! Word list loading utilities
//!
//! Provides functions to read word lists from files or embedded constants.
//! Every entry is normalized; entries that normalize to nothing are skipped.

use crate::core::normalize;
use std::fs;
use std::io;
use std::path::Path;

/// Load normalized words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use tordle::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_lines(content.lines());

    tracing::debug!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

/// Normalize an embedded string slice, dropping blank entries
///
/// # Examples
/// ```
/// use tordle::dictionary::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "  ", " slate"]);
/// assert_eq!(words, ["CRANE", "SLATE"]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_normalizes() {
        let words = words_from_slice(&["crane", "Slate", " irate\t"]);
        assert_eq!(words, ["CRANE", "SLATE", "IRATE"]);
    }

    #[test]
    fn words_from_slice_skips_blank() {
        let words = words_from_slice(&["crane", "", "   ", "slate"]);
        assert_eq!(words, ["CRANE", "SLATE"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!("tordle-loader-{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "apple\n\n  Berry \r\ncherry").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, ["APPLE", "BERRY", "CHERRY"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/definitely/not/a/word/list.txt").is_err());
    }

    #[test]
    fn embedded_corpus_is_normalized() {
        use crate::dictionary::{WORDS, WORDS_COUNT};

        assert_eq!(WORDS.len(), WORDS_COUNT);
        assert_eq!(words_from_slice(WORDS).len(), WORDS_COUNT);
        for &word in WORDS {
            assert_eq!(word, normalize(word), "'{word}' is not normalized");
        }
    }
}
