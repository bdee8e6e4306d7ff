//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded
//! constants. Loading a custom list at startup is the one hard-failure path
//! in the game: the error propagates to `main` and ends the process.

use std::fs;
use std::io;
use std::path::Path;

/// Load start words from a newline-delimited file
///
/// Entries are lowercased; blank lines and entries with non-letter
/// characters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} start words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content.lines().filter_map(clean).collect())
}

/// Convert an embedded string slice to an owned word list
///
/// # Examples
/// ```
/// use word_scramble::wordlists::START_WORDS;
/// use word_scramble::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&s| clean(s)).collect()
}

/// Normalize one word-list line, dropping unusable entries
fn clean(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || !trimmed.chars().all(char::is_alphabetic) {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_keeps_valid_words() {
        let input = &["silkworm", "keyboard", "notebook"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0], "silkworm");
        assert_eq!(words[1], "keyboard");
        assert_eq!(words[2], "notebook");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["silkworm", "", "   ", "not a word", "c3po", "keyboard"];
        let words = words_from_slice(input);

        assert_eq!(words, ["silkworm".to_string(), "keyboard".to_string()]);
    }

    #[test]
    fn words_from_slice_lowercases() {
        let input = &["Silkworm", "KEYBOARD"];
        let words = words_from_slice(input);

        assert_eq!(words, ["silkworm".to_string(), "keyboard".to_string()]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_embedded_start_words() {
        use crate::wordlists::START_WORDS;

        let words = words_from_slice(START_WORDS);
        assert_eq!(words.len(), START_WORDS.len());
    }

    #[test]
    fn load_from_missing_file_errors() {
        let result = load_from_file("no/such/file.txt");
        assert!(result.is_err());
    }
}
