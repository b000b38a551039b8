//! Output formatting for CLI commands.
//!
//! This module handles formatting output as either JSON or tab-separated text.

use anyhow::Result;

use super::types::{MatchResult, WordsResult};

/// Print match results.
pub fn print_match_result(result: &MatchResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    for mapping in &result.mappings {
        println!("{mapping}");
    }
    Ok(())
}

/// Print the most informative words of a lexicon.
pub fn print_words(result: &WordsResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!(
        "{} words over {} terms in {}\n",
        result.word_count, result.term_count, result.lexicon
    );
    println!("{:<30} {:<8} TERMS", "WORD", "EC");
    println!("{}", "-".repeat(46));
    for word in &result.words {
        let display = if word.word.chars().count() > 28 {
            let head: String = word.word.chars().take(25).collect();
            format!("{head}...")
        } else {
            word.word.clone()
        };
        println!("{:<30} {:<8.4} {}", display, word.ec, word.terms);
    }

    if result.words.is_empty() {
        println!("No words found.");
    }
    Ok(())
}
