//! Display functions for command results

use super::formatters::{banner, tier_colored, visible_words};
use crate::commands::{PrepareResult, SuggestResult};
use crate::pipeline::TierVisibility;
use colored::Colorize;

/// Print suggestions grouped by length, colored by tier
pub fn print_suggestions(result: &SuggestResult, visibility: TierVisibility) {
    println!("\n{}", banner("Word Game Suggester").black().on_cyan());

    let suggestions = &result.suggestions;
    if suggestions.groups.is_empty() {
        println!(
            "\n{}",
            format!("No permutation of {} matches the pattern", result.letters).red()
        );
        return;
    }

    for (len, words) in &suggestions.groups {
        println!("\n{}\n", format!("Words length : {len} ").white().on_magenta());

        let line: Vec<String> = visible_words(words, visibility)
            .into_iter()
            .map(|w| tier_colored(&w.word, w.tier).to_string())
            .collect();
        println!("{}", line.join(" "));
    }

    println!(
        "\n{} of {} permutations matched ({:.2}s)",
        suggestions.retained,
        suggestions.generated,
        result.duration.as_secs_f64()
    );
}

/// Print the summary of a model preparation
pub fn print_prepare_result(result: &PrepareResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "MODEL PREPARED".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("   Total words:  {}", result.total_words);
    println!("   Total chars:  {}", result.total_chars);
    println!("   Contexts:     {}", result.contexts);
    println!("   Written to:   {}", result.data_dir.display());
    println!("   Time taken:   {:.2}s", result.duration.as_secs_f64());
}
