//! Offline corpus preparation
//!
//! Turns a plain word list into the transition table and dictionary the
//! suggester loads at startup.

mod builder;
mod wordlist;

pub use builder::{DEFAULT_MAX_ORDER, MAX_SUPPORTED_ORDER, TableBuilder, build_table};
pub use wordlist::{DEFAULT_MIN_LENGTH, load_word_list, sample_words, words_from_text};
