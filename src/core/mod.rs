//! Core domain types
//!
//! The alphabet and the validated letter pool. Everything here is pure and
//! allocation-light.

mod alphabet;
mod letters;

pub use alphabet::{ALPHABET, ALPHABET_LEN, contexts_of_length, is_alphabet_word, letter_index};
pub use letters::{LetterPool, MIN_WORD_LEN};
