//! Submission rules
//!
//! The letter-availability check applied to every submitted word, plus the
//! rejection taxonomy surfaced to the player.

use std::fmt;

/// Why a submitted word was turned away
///
/// Each variant carries the dialog text the game shows for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Already played this round, or the root word itself
    AlreadyUsed,
    /// Cannot be assembled from the root word's letters
    NotConstructible,
    /// Not in the dictionary, or shorter than the minimum length
    NotARealWord,
}

impl Rejection {
    /// Dialog title for this rejection
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word used already",
            Self::NotConstructible => "Word not recognized",
            Self::NotARealWord => "Word not real",
        }
    }

    /// Dialog message for this rejection
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Be more original...",
            Self::NotConstructible => "You can't just make them up, you know...",
            Self::NotARealWord => "That isn't a real word...",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

impl std::error::Error for Rejection {}

/// Check whether `candidate` can be spelled with the letters of `root`
///
/// Walks the candidate one character at a time, crossing the first remaining
/// occurrence off a working copy of the root. Each root letter can be spent
/// once, so a doubled letter in the candidate needs a doubled letter in the
/// root. The root copy is lowercased here; the candidate is expected to be
/// normalized already.
///
/// Linear scans keep this O(len(candidate) × len(root)), which is plenty for
/// natural-language words.
///
/// # Examples
/// ```
/// use word_scramble::core::is_constructible;
///
/// assert!(is_constructible("silk", "silkworm"));
/// assert!(is_constructible("worm", "silkworm"));
/// assert!(!is_constructible("dog", "cat"));
/// ```
#[must_use]
pub fn is_constructible(candidate: &str, root: &str) -> bool {
    let mut remaining: Vec<char> = root.to_lowercase().chars().collect();

    for letter in candidate.chars() {
        match remaining.iter().position(|&c| c == letter) {
            Some(index) => {
                remaining.remove(index);
            }
            None => return false,
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructible_uses_subset_of_letters() {
        assert!(is_constructible("silk", "silkworm"));
        assert!(is_constructible("worm", "silkworm"));
        assert!(is_constructible("milk", "silkworm"));
        assert!(is_constructible("slow", "silkworm"));
    }

    #[test]
    fn constructible_whole_root() {
        // The full root word is constructible from itself; originality is a
        // separate rule.
        assert!(is_constructible("silkworm", "silkworm"));
    }

    #[test]
    fn not_constructible_without_shared_letters() {
        assert!(!is_constructible("dog", "cat"));
    }

    #[test]
    fn not_constructible_when_letter_missing() {
        assert!(!is_constructible("silky", "silkworm")); // no 'y'
    }

    #[test]
    fn duplicate_letters_are_spent() {
        // "silkworm" has a single 'o'
        assert!(!is_constructible("solo", "silkworm"));
        // "assemble" has two 's' and two 'e'
        assert!(is_constructible("seems", "assemble"));
        assert!(!is_constructible("sassy", "assemble"));
    }

    #[test]
    fn empty_candidate_is_constructible() {
        assert!(is_constructible("", "silkworm"));
    }

    #[test]
    fn root_is_lowercased_internally() {
        assert!(is_constructible("silk", "SILKWORM"));
    }

    #[test]
    fn candidate_longer_than_root_fails() {
        assert!(!is_constructible("silkworms", "silkworm"));
    }

    #[test]
    fn rejection_dialog_text() {
        assert_eq!(Rejection::AlreadyUsed.title(), "Word used already");
        assert_eq!(
            Rejection::NotConstructible.message(),
            "You can't just make them up, you know..."
        );
        assert_eq!(Rejection::NotARealWord.title(), "Word not real");
    }

    #[test]
    fn rejection_display_joins_title_and_message() {
        let text = format!("{}", Rejection::AlreadyUsed);
        assert_eq!(text, "Word used already: Be more original...");
    }
}
