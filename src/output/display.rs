//! Display functions for command results

use super::formatters::badged_word;
use crate::commands::CheckResult;
use colored::Colorize;

/// Print the result of checking a single word against a root
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checking {} against {}",
        result.word.to_uppercase().bright_yellow().bold(),
        result.root.to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    print_rule("buildable from the root's letters", result.constructible);
    print_rule("found in the dictionary", result.in_dictionary);
    print_rule("long enough to count", result.long_enough);

    println!();
    if result.is_playable() {
        println!(
            "{}",
            format!("✅ {} would be accepted", result.word.to_uppercase())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ {} would be rejected", result.word.to_uppercase())
                .red()
                .bold()
        );
    }
}

fn print_rule(label: &str, passed: bool) {
    if passed {
        println!("  {} {label}", "✓".green());
    } else {
        println!("  {} {label}", "✗".red());
    }
}

/// Print a finished round: root, words found, and the score if kept
pub fn print_round_summary(root: &str, used_words: &[String], score: Option<usize>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ROUND SUMMARY:".bright_cyan().bold(),
        root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if used_words.is_empty() {
        println!("\n  No words found this round.");
    } else {
        println!("\n  Words found ({}):", used_words.len());
        for word in used_words {
            println!("    {}", badged_word(word));
        }
    }

    if let Some(score) = score {
        println!(
            "\n  Total score: {}",
            score.to_string().bright_yellow().bold()
        );
    }
    println!();
}
