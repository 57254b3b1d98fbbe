//! Corpus preparation command
//!
//! Reads a word list, counts transitions and writes the model files.

use crate::corpus::{
    DEFAULT_MAX_ORDER, DEFAULT_MIN_LENGTH, TableBuilder, load_word_list, sample_words,
};
use crate::errors::Result;
use crate::model::store::save_model;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Configuration for building a model from a word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepareConfig {
    pub wordlist: PathBuf,
    pub data_dir: PathBuf,
    pub min_length: usize,
    pub max_order: usize,
    /// Random subset size; `None` keeps every word
    pub samples: Option<usize>,
    pub seed: Option<u64>,
    /// Draw a progress bar while counting
    pub progress: bool,
}

impl PrepareConfig {
    #[must_use]
    pub fn new(wordlist: impl Into<PathBuf>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            wordlist: wordlist.into(),
            data_dir: data_dir.into(),
            min_length: DEFAULT_MIN_LENGTH,
            max_order: DEFAULT_MAX_ORDER,
            samples: None,
            seed: None,
            progress: true,
        }
    }
}

/// Result of preparing a model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepareResult {
    pub total_words: usize,
    pub total_chars: usize,
    pub contexts: usize,
    pub data_dir: PathBuf,
    pub duration: Duration,
}

/// Build and save the transition table and dictionary
///
/// # Errors
///
/// Returns an error if:
/// - The word list cannot be read
/// - `max_order` is above the supported maximum
/// - No usable words remain after filtering
/// - The model files cannot be written
///
/// # Panics
///
/// Panics if the progress bar template fails to parse.
pub fn run_prepare(config: &PrepareConfig) -> Result<PrepareResult> {
    let start = Instant::now();

    let words = load_word_list(&config.wordlist, config.min_length)?;
    log::info!(
        "read {} usable words from {}",
        words.len(),
        config.wordlist.display()
    );
    let words = sample_words(&words, config.samples.unwrap_or(0), config.seed);

    let mut builder = TableBuilder::new(config.max_order)?;

    let pb = if config.progress {
        ProgressBar::new(words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("static progress template")
            .progress_chars("█▓▒░"),
    );
    pb.set_message("counting transitions");

    for word in &words {
        builder.add_word(word);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let table = builder.finish()?;
    save_model(&config.data_dir, &table, &words)?;

    Ok(PrepareResult {
        total_words: words.len(),
        total_chars: words.iter().map(String::len).sum(),
        contexts: table.len(),
        data_dir: config.data_dir.clone(),
        duration: start.elapsed(),
    })
}
