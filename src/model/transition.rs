//! Letter transition model
//!
//! Holds the precomputed Markov chain probabilities p(x | context) for every
//! context of length 0..=max order, plus the reference dictionary used for the
//! bonus point. The model is validated once when it is built and never changes
//! afterwards.

use crate::core::{ALPHABET_LEN, contexts_of_length, is_alphabet_word, letter_index};
use crate::errors::{Result, SuggestError};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Serialized transition table: context → next letter → probability
pub type RawTable = BTreeMap<String, BTreeMap<char, f64>>;

/// Persisted transition table with the order it was built for
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct TableRecord<'a> {
    pub max_order: usize,
    pub transitions: Cow<'a, RawTable>,
}

impl<'a> TableRecord<'a> {
    pub(crate) fn new(table: &'a RawTable) -> Self {
        Self {
            max_order: table.keys().map(String::len).max().unwrap_or(0),
            transitions: Cow::Borrowed(table),
        }
    }
}

/// Allowed drift of a row sum away from 1.0
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// Immutable multi-order transition model with its dictionary
#[derive(Debug, Clone)]
pub struct TransitionModel {
    transitions: FxHashMap<String, [f64; ALPHABET_LEN]>,
    dictionary: FxHashSet<String>,
    max_order: usize,
}

impl TransitionModel {
    /// Decode a model from its two persisted byte buffers
    ///
    /// # Errors
    /// Returns `SuggestError::DataCorrupt` if either buffer cannot be decoded,
    /// the recorded max order disagrees with the table, or the table violates
    /// the shape checked by [`TransitionModel::from_parts`].
    pub fn load(table_bytes: &[u8], dictionary_bytes: &[u8]) -> Result<Self> {
        let record: TableRecord = postcard::from_bytes(table_bytes)
            .map_err(|e| SuggestError::corrupt(format!("transition table: {e}")))?;
        let words: Vec<String> = postcard::from_bytes(dictionary_bytes)
            .map_err(|e| SuggestError::corrupt(format!("dictionary: {e}")))?;

        let recorded = record.max_order;
        let model = Self::from_parts(record.transitions.into_owned(), words)?;
        if model.max_order != recorded {
            return Err(SuggestError::corrupt(format!(
                "table records max order {recorded} but its contexts reach {}",
                model.max_order
            )));
        }
        Ok(model)
    }

    /// Build a model from a decoded table and word list
    ///
    /// Checks that:
    /// - every context is made of alphabet letters and the empty context exists
    /// - every row holds all 26 letters with finite probabilities in [0, 1]
    /// - every row sums to 1 within [`PROBABILITY_TOLERANCE`]
    /// - every context of every length up to the max order is present
    ///
    /// # Errors
    /// Returns `SuggestError::DataCorrupt` on the first violated check.
    pub fn from_parts(table: RawTable, words: impl IntoIterator<Item = String>) -> Result<Self> {
        let max_order = table
            .keys()
            .map(String::len)
            .max()
            .ok_or_else(|| SuggestError::corrupt("transition table is empty"))?;

        let mut transitions = FxHashMap::default();
        transitions.reserve(table.len());

        for (context, next) in table {
            if !is_alphabet_word(&context) {
                return Err(SuggestError::corrupt(format!(
                    "context {context:?} contains letters outside A-Z"
                )));
            }
            let row = validate_row(&context, &next)?;
            transitions.insert(context, row);
        }

        for order in 0..=max_order {
            if let Some(missing) = contexts_of_length(order).find(|c| !transitions.contains_key(c)) {
                return Err(SuggestError::corrupt(format!(
                    "context {missing:?} is missing for order {order}"
                )));
            }
        }

        let dictionary: FxHashSet<String> =
            words.into_iter().map(|w| w.to_ascii_uppercase()).collect();

        log::info!(
            "loaded transition model: {} contexts, max order {max_order}, {} dictionary words",
            transitions.len(),
            dictionary.len()
        );

        Ok(Self {
            transitions,
            dictionary,
            max_order,
        })
    }

    /// Probability of `letter` with no preceding context
    ///
    /// # Errors
    /// Returns an error if `letter` is not an uppercase alphabet letter.
    pub fn unconditional_probability(&self, letter: u8) -> Result<f64> {
        self.lookup("", letter)
    }

    /// Probability of `letter` following `context`
    ///
    /// `context` must hold 1..=[`max_order`](Self::max_order) letters; longer
    /// contexts are not truncated and fail the lookup.
    ///
    /// # Errors
    /// Returns `SuggestError::DataCorrupt` if the context is not in the table.
    pub fn conditional_probability(&self, context: &str, letter: u8) -> Result<f64> {
        self.lookup(context, letter)
    }

    /// Highest context length present in the table
    #[inline]
    #[must_use]
    pub const fn max_order(&self) -> usize {
        self.max_order
    }

    /// Check whether `word` is in the reference dictionary
    #[inline]
    #[must_use]
    pub fn is_known_word(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Number of contexts in the table, including the empty one
    #[must_use]
    pub fn context_count(&self) -> usize {
        self.transitions.len()
    }

    /// Number of words in the dictionary
    #[must_use]
    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }

    fn lookup(&self, context: &str, letter: u8) -> Result<f64> {
        let row = self.transitions.get(context).ok_or_else(|| {
            SuggestError::corrupt(format!(
                "no transitions for context {context:?} (max order {})",
                self.max_order
            ))
        })?;
        let index = letter_index(letter).ok_or_else(|| {
            SuggestError::validation(format!("'{}' is not an alphabet letter", char::from(letter)))
        })?;
        Ok(row[index])
    }
}

/// Convert one serialized row into a dense probability array
fn validate_row(context: &str, next: &BTreeMap<char, f64>) -> Result<[f64; ALPHABET_LEN]> {
    let mut row = [0.0; ALPHABET_LEN];

    for (&letter, &p) in next {
        let index = u8::try_from(letter)
            .ok()
            .and_then(letter_index)
            .ok_or_else(|| {
                SuggestError::corrupt(format!(
                    "context {context:?} has transition to non-letter {letter:?}"
                ))
            })?;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(SuggestError::corrupt(format!(
                "context {context:?} has probability {p} for {letter:?}"
            )));
        }
        row[index] = p;
    }

    // Keys are unique and all valid, so the length tells if any are missing
    if next.len() != ALPHABET_LEN {
        return Err(SuggestError::corrupt(format!(
            "context {context:?} maps {} letters, expected {ALPHABET_LEN}",
            next.len()
        )));
    }

    let sum: f64 = row.iter().sum();
    if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
        return Err(SuggestError::corrupt(format!(
            "context {context:?} sums to {sum}, expected 1"
        )));
    }

    Ok(row)
}
