//! Formatting utilities for terminal output

use crate::pipeline::{BucketedWord, Tier, TierVisibility};
use colored::{ColoredString, Colorize};

/// Color a word by its tier: green, yellow or red
#[must_use]
pub fn tier_colored(word: &str, tier: Tier) -> ColoredString {
    match tier {
        Tier::High => word.green(),
        Tier::Medium => word.yellow(),
        Tier::Low => word.red(),
    }
}

/// The words of one length group that should be shown, best first
#[must_use]
pub fn visible_words(words: &[BucketedWord], visibility: TierVisibility) -> Vec<&BucketedWord> {
    words.iter().filter(|w| visibility.shows(w.tier)).collect()
}

/// Boxed title line, e.g. `# Word Game Suggester #`
#[must_use]
pub fn banner(title: &str) -> String {
    let line = "#".repeat(title.len() + 4);
    format!("{line}\n# {title} #\n{line}")
}
