//! Game session state
//!
//! A `Session` owns one round at a time: the root word, the words already
//! played against it, and the running score.

use super::rules::{Rejection, is_constructible};
use crate::spell::SpellChecker;

/// Root word used when the start list has no entries
///
/// Drawing from an empty list degrades to this word instead of failing; a
/// missing or unreadable list is a startup error handled by the loader.
pub const FALLBACK_ROOT: &str = "silkworm";

/// Tunable rule settings for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Shortest word length the realness rule accepts
    pub min_word_len: usize,
    /// Whether accepted words add their length to a running score
    pub scoring: bool,
}

impl GameConfig {
    /// Create a config with the given minimum length and scoring switch
    #[must_use]
    pub const fn new(min_word_len: usize, scoring: bool) -> Self {
        Self {
            min_word_len,
            scoring,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(3, true)
    }
}

/// Outcome of submitting a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Passed every rule and was recorded
    Accepted {
        /// The normalized word as recorded
        word: String,
        /// Points added to the score (0 when scoring is off)
        points: usize,
    },
    /// Failed a rule; state is unchanged
    Rejected(Rejection),
    /// Empty after trimming; state is unchanged and nothing is reported
    Ignored,
}

/// One player's game session
///
/// Borrows the start-word list and owns the spelling oracle. Each submission
/// runs three rules in order (originality, constructibility, realness); the
/// first failure wins and leaves the session untouched.
pub struct Session<'a, C: SpellChecker> {
    checker: C,
    config: GameConfig,
    start_words: &'a [String],
    root_word: String,
    used_words: Vec<String>,
    score: usize,
}

impl<'a, C: SpellChecker> Session<'a, C> {
    /// Create a session and start its first round
    ///
    /// # Parameters
    /// - `start_words`: candidate root words, assumed pre-lowercased
    /// - `checker`: the spelling oracle used by the realness rule
    /// - `config`: rule settings
    pub fn new(start_words: &'a [String], checker: C, config: GameConfig) -> Self {
        let mut session = Self {
            checker,
            config,
            start_words,
            root_word: String::new(),
            used_words: Vec::new(),
            score: 0,
        };
        session.start_round();
        session
    }

    /// Begin a new round
    ///
    /// Picks a root word uniformly at random from the start list, falling
    /// back to [`FALLBACK_ROOT`] when the list is empty, and clears the
    /// played words and score. Never fails.
    pub fn start_round(&mut self) -> &str {
        use rand::prelude::IndexedRandom;

        self.root_word = self
            .start_words
            .choose(&mut rand::rng())
            .map_or_else(|| FALLBACK_ROOT.to_string(), Clone::clone);
        self.used_words.clear();
        self.score = 0;

        &self.root_word
    }

    /// Submit a candidate word
    ///
    /// The raw input is lowercased and trimmed first. Whitespace-only input
    /// is ignored outright. Otherwise the rules run in order and the first
    /// failure is returned; on success the word is recorded at the front of
    /// the played list and, when scoring is on, its length is added to the
    /// score. The call either fully succeeds or leaves state unchanged.
    pub fn submit(&mut self, raw: &str) -> Submission {
        let word = raw.trim().to_lowercase();

        if word.is_empty() {
            return Submission::Ignored;
        }

        if let Err(rejection) = self.validate(&word) {
            return Submission::Rejected(rejection);
        }

        let points = if self.config.scoring {
            word.chars().count()
        } else {
            0
        };
        self.score += points;
        self.used_words.insert(0, word.clone());

        Submission::Accepted { word, points }
    }

    fn validate(&self, word: &str) -> Result<(), Rejection> {
        if !self.is_original(word) {
            return Err(Rejection::AlreadyUsed);
        }
        if !is_constructible(word, &self.root_word) {
            return Err(Rejection::NotConstructible);
        }
        if !self.is_real(word) {
            return Err(Rejection::NotARealWord);
        }
        Ok(())
    }

    fn is_original(&self, word: &str) -> bool {
        !(self.used_words.iter().any(|used| used == word) || word == self.root_word)
    }

    fn is_real(&self, word: &str) -> bool {
        word.chars().count() >= self.config.min_word_len && !self.checker.is_misspelled(word)
    }

    /// The current round's root word
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Words accepted this round, newest first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// The running score for this round
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// The rule settings this session runs with
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }
}
