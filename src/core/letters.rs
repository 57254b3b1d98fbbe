//! Input letter pool
//!
//! A `LetterPool` is the multiset of letters the player may use, kept in the
//! order they were typed.

use crate::errors::{Result, SuggestError};
use rustc_hash::FxHashMap;
use std::fmt;

/// Smallest pool (and shortest suggestion) the game allows
pub const MIN_WORD_LEN: usize = 3;

/// Validated letters available for building words
///
/// Letters are uppercase ASCII and may repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    text: String,
}

impl LetterPool {
    /// Create a pool from user input
    ///
    /// Input is upper-cased before validation.
    ///
    /// # Errors
    /// Returns `SuggestError::Validation` if:
    /// - Any character is not an ASCII letter
    /// - Fewer than 3 letters are given
    ///
    /// # Examples
    /// ```
    /// use wordgame_suggester::core::LetterPool;
    ///
    /// let pool = LetterPool::new("cat").unwrap();
    /// assert_eq!(pool.text(), "CAT");
    ///
    /// assert!(LetterPool::new("ab").is_err());
    /// assert!(LetterPool::new("c4t").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text: String = text.into().to_ascii_uppercase();

        if !text.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(SuggestError::validation(format!(
                "letters must be alphabetic, got '{text}'"
            )));
        }

        if text.len() < MIN_WORD_LEN {
            return Err(SuggestError::validation(format!(
                "at least {MIN_WORD_LEN} letters are required, got {}",
                text.len()
            )));
        }

        Ok(Self { text })
    }

    /// The letters as typed (upper-cased)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The letters as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters, counting repeats
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: a valid pool holds at least three letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Count of each distinct letter
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &ch in self.letters() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
