//! Single word check command
//!
//! Evaluates one candidate against a root word without a running session,
//! reporting how each rule would judge it.

use crate::core::{GameConfig, is_constructible};
use crate::spell::SpellChecker;

/// Per-rule verdicts for one candidate
pub struct CheckResult {
    pub root: String,
    pub word: String,
    pub constructible: bool,
    pub in_dictionary: bool,
    pub long_enough: bool,
}

impl CheckResult {
    /// Whether a fresh round would accept this word
    ///
    /// Originality is not part of the answer; with no session there are no
    /// used words, and the root itself simply fails nothing else here.
    #[must_use]
    pub const fn is_playable(&self) -> bool {
        self.constructible && self.in_dictionary && self.long_enough
    }
}

/// Evaluate `word` against `root` under the given rules
pub fn check_word<C: SpellChecker>(
    root: &str,
    word: &str,
    checker: &C,
    config: GameConfig,
) -> CheckResult {
    let root = root.trim().to_lowercase();
    let word = word.trim().to_lowercase();

    CheckResult {
        constructible: is_constructible(&word, &root),
        in_dictionary: !checker.is_misspelled(&word),
        long_enough: word.chars().count() >= config.min_word_len,
        root,
        word,
    }
}
