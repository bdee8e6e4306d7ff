//! Word Scramble
//!
//! A terminal word game: each round draws a random root word, and the player
//! makes as many words as they can from its letters. Submissions must be
//! unused, buildable from the root's letters, and real dictionary words.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{GameConfig, Session, Submission};
//! use word_scramble::spell::WordListChecker;
//!
//! let start_words = vec!["silkworm".to_string()];
//! let checker = WordListChecker::from_slice(&["silk", "worm"]);
//! let mut session = Session::new(&start_words, checker, GameConfig::default());
//!
//! assert_eq!(session.root_word(), "silkworm");
//! match session.submit("silk") {
//!     Submission::Accepted { points, .. } => assert_eq!(points, 4),
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! ```

// Core rule engine
pub mod core;

// Spelling validation
pub mod spell;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
