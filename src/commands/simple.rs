//! Simple interactive CLI mode
//!
//! Text-based interactive game without TUI

use crate::core::{Rejection, Session, Submission};
use crate::output::formatters::badged_word;
use crate::output::print_round_summary;
use crate::spell::SpellChecker;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<C: SpellChecker>(session: &mut Session<C>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Word Scramble - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make words from the letters of the root word. Each letter can be");
    println!("used once per word, words must be real, and no repeats.\n");
    println!("Commands: 'quit' to exit, 'new' for a new round\n");

    print_round_banner(session);

    loop {
        let input = get_user_input("Enter a word")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                finish_round(session);
                println!("{}", "👋 Thanks for playing!\n".bright_white());
                return Ok(());
            }
            "new" | "n" => {
                finish_round(session);
                session.start_round();
                println!("{}", "🔄 New round started!".bright_cyan());
                print_round_banner(session);
                continue;
            }
            _ => {}
        }

        match session.submit(&input) {
            Submission::Accepted { word, points } => {
                let badge = badged_word(&word).green().bold();
                if session.config().scoring {
                    println!(
                        "  {} {badge}  (+{points}, total {})\n",
                        "✓".green().bold(),
                        session.score().to_string().bright_yellow()
                    );
                } else {
                    println!("  {} {badge}\n", "✓".green().bold());
                }
            }
            Submission::Rejected(rejection) => print_rejection(rejection),
            Submission::Ignored => {}
        }
    }
}

fn print_round_banner<C: SpellChecker>(session: &Session<C>) {
    println!("\n────────────────────────────────────────────────────────────");
    println!(
        "Root word: {}",
        session.root_word().to_uppercase().bright_yellow().bold()
    );
    println!("────────────────────────────────────────────────────────────\n");
}

fn print_rejection(rejection: Rejection) {
    println!(
        "  {} {}  {}\n",
        "✗".red().bold(),
        rejection.title().red().bold(),
        rejection.message().bright_black()
    );
}

fn finish_round<C: SpellChecker>(session: &Session<C>) {
    let score = session.config().scoring.then(|| session.score());
    print_round_summary(session.root_word(), session.used_words(), score);
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
