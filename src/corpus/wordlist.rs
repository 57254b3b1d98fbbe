//! Word list loading utilities
//!
//! Reads a plain-text word list and keeps the entries usable for training.

use crate::core::MIN_WORD_LEN;
use crate::errors::Result;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::Path;

/// Default minimum word length for training
pub const DEFAULT_MIN_LENGTH: usize = MIN_WORD_LEN;

/// Load words from a file
///
/// Words are separated by any whitespace. See [`words_from_text`] for the
/// entries that are kept.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordgame_suggester::corpus::load_word_list;
///
/// let words = load_word_list("data/wordlist.txt", 3).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_word_list<P: AsRef<Path>>(path: P, min_length: usize) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content, min_length))
}

/// Extract training words from raw text
///
/// Keeps entries of at least `min_length` ASCII letters and upper-cases them.
///
/// # Examples
/// ```
/// use wordgame_suggester::corpus::words_from_text;
///
/// let words = words_from_text("cat\ndog's\nox\nHorse", 3);
/// assert_eq!(words, vec!["CAT", "HORSE"]);
/// ```
#[must_use]
pub fn words_from_text(text: &str, min_length: usize) -> Vec<String> {
    let min_length = min_length.max(1);
    text.split_whitespace()
        .filter(|word| word.len() >= min_length)
        .filter(|word| word.bytes().all(|b| b.is_ascii_alphabetic()))
        .map(str::to_ascii_uppercase)
        .collect()
}

/// Pick `samples` words at random
///
/// Returns every word when `samples` is zero or not smaller than the list.
/// With a seed the selection is reproducible.
#[must_use]
pub fn sample_words(words: &[String], samples: usize, seed: Option<u64>) -> Vec<String> {
    if samples == 0 || samples >= words.len() {
        return words.to_vec();
    }

    match seed {
        Some(seed) => choose(words, samples, &mut StdRng::seed_from_u64(seed)),
        None => choose(words, samples, &mut rand::rng()),
    }
}

fn choose<R: Rng + ?Sized>(words: &[String], samples: usize, rng: &mut R) -> Vec<String> {
    words.choose_multiple(rng, samples).cloned().collect()
}
