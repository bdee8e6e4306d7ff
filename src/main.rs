//! Word Scramble - CLI
//!
//! Terminal word game with TUI and plain CLI modes: make words from the
//! letters of a randomly drawn root word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use word_scramble::{
    commands::{check_word, run_simple},
    core::{GameConfig, Session},
    interactive::{App, run_tui},
    output::print_check_result,
    spell::WordListChecker,
    wordlists::{
        DICTIONARY, START_WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Terminal word game: build words from the letters of a random root word",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start words: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Spell-check dictionary: 'embedded' (default) or path to a file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Shortest word length the game accepts
    #[arg(long, global = true, default_value_t = 3)]
    min_len: usize,

    /// Play without a running score
    #[arg(long, global = true)]
    no_scoring: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive game without TUI)
    Simple,

    /// Check how the rules would judge one word against a root word
    Check {
        /// The root word to build from
        root: String,

        /// The candidate word to judge
        word: String,
    },
}

/// Load start words based on the -w flag
fn load_start_words(mode: &str) -> Result<Vec<String>> {
    match mode {
        "embedded" => Ok(words_from_slice(START_WORDS)),
        path => load_from_file(path)
            .with_context(|| format!("failed to load start words from {path}")),
    }
}

/// Load the spell checker based on the -d flag
fn load_checker(mode: &str) -> Result<WordListChecker> {
    match mode {
        "embedded" => Ok(WordListChecker::from_slice(DICTIONARY)),
        path => WordListChecker::from_file(path)
            .with_context(|| format!("failed to load dictionary from {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Loading either list from a file is the one fatal path: a bad flag
    // value ends the process here, before a session exists.
    let start_words = load_start_words(&cli.wordlist)?;
    let checker = load_checker(&cli.dictionary)?;
    let config = GameConfig::new(cli.min_len, !cli.no_scoring);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let app = App::new(&start_words, checker, config);
            run_tui(app)
        }
        Commands::Simple => {
            let mut session = Session::new(&start_words, checker, config);
            run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Check { root, word } => {
            let result = check_word(&root, &word, &checker, config);
            print_check_result(&result);
            Ok(())
        }
    }
}
