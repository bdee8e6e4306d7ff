//! Spelling validation
//!
//! The realness rule delegates to a spelling oracle behind the
//! [`SpellChecker`] trait, so the rule engine stays testable and any
//! dictionary source can be plugged in. [`WordListChecker`] is the default
//! oracle, backed by a plain word set.

use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// A spelling oracle
///
/// Answers whether a span of text is a misspelling; "not misspelled" is
/// what the realness rule treats as a real word.
pub trait SpellChecker {
    /// Report whether `text` is a misspelling
    fn is_misspelled(&self, text: &str) -> bool;
}

/// Spell checker backed by a set of known words
///
/// Any word not in the set counts as misspelled. Lookups are case
/// insensitive; the set is lowercased on construction.
pub struct WordListChecker {
    words: FxHashSet<String>,
}

impl WordListChecker {
    /// Build a checker from a slice of words
    #[must_use]
    pub fn from_slice(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Load a checker from a newline-delimited word file
    ///
    /// Blank lines are skipped and entries are lowercased.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;

        let words = content
            .lines()
            .filter_map(|line| {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_lowercase())
                }
            })
            .collect();

        Ok(Self { words })
    }

    /// Number of words the checker knows
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the checker knows no words at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for WordListChecker {
    fn is_misspelled(&self, text: &str) -> bool {
        !self.words.contains(&text.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_word_is_not_misspelled() {
        let checker = WordListChecker::from_slice(&["silk", "worm"]);

        assert!(!checker.is_misspelled("silk"));
        assert!(!checker.is_misspelled("worm"));
    }

    #[test]
    fn unknown_word_is_misspelled() {
        let checker = WordListChecker::from_slice(&["silk"]);

        assert!(checker.is_misspelled("xz"));
        assert!(checker.is_misspelled("slik"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let checker = WordListChecker::from_slice(&["Silk"]);

        assert!(!checker.is_misspelled("SILK"));
        assert!(!checker.is_misspelled("silk"));
    }

    #[test]
    fn empty_checker_rejects_everything() {
        let checker = WordListChecker::from_slice(&[]);

        assert!(checker.is_empty());
        assert!(checker.is_misspelled("silk"));
    }

    #[test]
    fn len_counts_distinct_words() {
        let checker = WordListChecker::from_slice(&["silk", "worm", "SILK"]);

        assert_eq!(checker.len(), 2);
    }
}
