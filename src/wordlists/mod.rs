//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary: the start words a
//! round can draw its root from, and the dictionary backing the default
//! spell checker.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_words_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn start_words_are_valid_roots() {
        // All start words should be 8 letters, lowercase
        for &word in START_WORDS {
            assert_eq!(word.len(), 8, "Word '{word}' is not 8 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_words_are_lowercase() {
        for &word in DICTIONARY {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn start_words_are_dictionary_words() {
        // Every root word should itself pass the spell checker
        let dictionary: std::collections::HashSet<_> = DICTIONARY.iter().collect();

        for &word in START_WORDS {
            assert!(
                dictionary.contains(&word),
                "Start word '{word}' not in dictionary"
            );
        }
    }

    #[test]
    fn fallback_root_is_a_start_word() {
        assert!(START_WORDS.contains(&crate::core::FALLBACK_ROOT));
    }
}
