//! Transition table construction
//!
//! Counts letter transitions in a word list for every context order up to a
//! maximum, then normalizes each context into a probability row.
//!
//! # Smoothing
//! Every context of order ≥ 1 starts with a uniform prior of 1/26 per letter,
//! so contexts never seen in the corpus end up uniform instead of missing. The
//! empty context is a plain letter-frequency count with no prior.

use crate::core::{ALPHABET, ALPHABET_LEN, contexts_of_length, letter_index};
use crate::errors::{Result, SuggestError};
use crate::model::RawTable;
use rustc_hash::FxHashMap;

/// Highest order accepted; order 4 already holds 26^4 contexts
pub const MAX_SUPPORTED_ORDER: usize = 4;

/// Default context order for `prepare`
pub const DEFAULT_MAX_ORDER: usize = 3;

/// Accumulates transition counts word by word
///
/// # Invariants
/// - Every context of length 1..=`max_order` has a row from construction on
/// - Rows only ever grow
pub struct TableBuilder {
    max_order: usize,
    letter_counts: [f64; ALPHABET_LEN],
    transitions: FxHashMap<String, [f64; ALPHABET_LEN]>,
    words: usize,
}

impl TableBuilder {
    /// Create a builder with uniform priors for every context
    ///
    /// # Errors
    /// Returns `SuggestError::Validation` if `max_order` exceeds
    /// [`MAX_SUPPORTED_ORDER`].
    pub fn new(max_order: usize) -> Result<Self> {
        if max_order > MAX_SUPPORTED_ORDER {
            return Err(SuggestError::validation(format!(
                "maximum order {max_order} is above the supported {MAX_SUPPORTED_ORDER}"
            )));
        }

        let prior = 1.0 / ALPHABET_LEN as f64;
        let transitions = (1..=max_order)
            .flat_map(contexts_of_length)
            .map(|context| (context, [prior; ALPHABET_LEN]))
            .collect();

        Ok(Self {
            max_order,
            letter_counts: [0.0; ALPHABET_LEN],
            transitions,
            words: 0,
        })
    }

    /// Add one upper-case word to the counts
    ///
    /// Letters outside the alphabet are ignored for the letter frequencies;
    /// any transition touching one is skipped.
    pub fn add_word(&mut self, word: &str) {
        let bytes = word.as_bytes();

        for &b in bytes {
            if let Some(i) = letter_index(b) {
                self.letter_counts[i] += 1.0;
            }
        }

        for order in 1..=self.max_order {
            if bytes.len() <= order {
                continue;
            }
            for start in 0..bytes.len() - order {
                let Ok(context) = std::str::from_utf8(&bytes[start..start + order]) else {
                    continue;
                };
                let next = bytes[start + order];
                if let (Some(row), Some(i)) = (self.transitions.get_mut(context), letter_index(next)) {
                    row[i] += 1.0;
                }
            }
        }

        self.words += 1;
    }

    /// Number of words added so far
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.words
    }

    /// Normalize every context and produce the table
    ///
    /// # Errors
    /// Returns `SuggestError::EmptyCorpus` if no letters were counted.
    pub fn finish(self) -> Result<RawTable> {
        if self.letter_counts.iter().sum::<f64>() <= 0.0 {
            return Err(SuggestError::EmptyCorpus);
        }

        let mut table = RawTable::new();
        table.insert(String::new(), normalize(&self.letter_counts));
        for (context, counts) in self.transitions {
            table.insert(context, normalize(&counts));
        }

        log::debug!(
            "built {} contexts from {} words (max order {})",
            table.len(),
            self.words,
            self.max_order
        );
        Ok(table)
    }
}

/// Build a table from a complete word list
///
/// # Errors
/// Fails on an unsupported order or a corpus without letters.
///
/// # Examples
/// ```
/// use wordgame_suggester::corpus::build_table;
/// use wordgame_suggester::model::TransitionModel;
///
/// let words = vec!["CAT".to_string(), "CAR".to_string()];
/// let table = build_table(&words, 2).unwrap();
/// let model = TransitionModel::from_parts(table, words).unwrap();
///
/// assert_eq!(model.max_order(), 2);
/// let after_c = model.conditional_probability("C", b'A').unwrap();
/// let after_x = model.conditional_probability("X", b'A').unwrap();
/// assert!(after_c > after_x);
/// ```
pub fn build_table(words: &[String], max_order: usize) -> Result<RawTable> {
    let mut builder = TableBuilder::new(max_order)?;
    for word in words {
        builder.add_word(word);
    }
    builder.finish()
}

fn normalize(counts: &[f64; ALPHABET_LEN]) -> std::collections::BTreeMap<char, f64> {
    let total: f64 = counts.iter().sum();
    ALPHABET
        .iter()
        .zip(counts)
        .map(|(&letter, &count)| (char::from(letter), count / total))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PROBABILITY_TOLERANCE, TransitionModel};

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    fn p(table: &RawTable, context: &str, letter: char) -> f64 {
        table[context][&letter]
    }

    #[test]
    fn empty_context_counts_every_letter() {
        let table = build_table(&words(&["AAB", "BA"]), 1).unwrap();
        // Five letters: three A, two B
        assert!((p(&table, "", 'A') - 0.6).abs() < 1e-12);
        assert!((p(&table, "", 'B') - 0.4).abs() < 1e-12);
        assert!(p(&table, "", 'Z').abs() < f64::EPSILON);
    }

    #[test]
    fn transitions_are_smoothed_counts() {
        let table = build_table(&words(&["AB", "AB", "AC"]), 1).unwrap();
        // Row A: prior 1/26 each (sum 1) plus 3 observed transitions
        let total = 1.0 + 3.0;
        let prior = 1.0 / 26.0;
        assert!((p(&table, "A", 'B') - (prior + 2.0) / total).abs() < 1e-12);
        assert!((p(&table, "A", 'C') - (prior + 1.0) / total).abs() < 1e-12);
        assert!((p(&table, "A", 'Z') - prior / total).abs() < 1e-12);
    }

    #[test]
    fn unseen_contexts_are_uniform() {
        let table = build_table(&words(&["CAT"]), 2).unwrap();
        for letter in ['A', 'M', 'Z'] {
            assert!((p(&table, "QQ", letter) - 1.0 / 26.0).abs() < 1e-12);
        }
    }

    #[test]
    fn word_no_longer_than_order_adds_no_transitions() {
        let table = build_table(&words(&["AB"]), 2).unwrap();
        // "AB" has an order-1 transition but nothing of order 2
        assert!(p(&table, "A", 'B') > 1.0 / 26.0);
        assert!((p(&table, "AB", 'A') - 1.0 / 26.0).abs() < 1e-12);
    }

    #[test]
    fn higher_orders_are_counted() {
        let table = build_table(&words(&["THE", "THE", "THY"]), 2).unwrap();
        assert!(p(&table, "TH", 'E') > p(&table, "TH", 'Y'));
        assert!(p(&table, "TH", 'Y') > p(&table, "TH", 'A'));
    }

    #[test]
    fn every_row_is_normalized() {
        let table = build_table(&words(&["STONE", "NOTES", "ONSET"]), 2).unwrap();
        assert_eq!(table.len(), 1 + 26 + 676);
        for row in table.values() {
            let sum: f64 = row.values().sum();
            assert!((sum - 1.0).abs() < PROBABILITY_TOLERANCE);
            assert_eq!(row.len(), 26);
        }
    }

    #[test]
    fn built_table_loads_as_model() {
        let list = words(&["CAT", "ACT", "TACT"]);
        let table = build_table(&list, 3).unwrap();
        let model = TransitionModel::from_parts(table, list).unwrap();
        assert_eq!(model.max_order(), 3);
        assert!(model.is_known_word("TACT"));
    }

    #[test]
    fn order_zero_keeps_only_letter_frequencies() {
        let table = build_table(&words(&["CAT"]), 0).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.contains_key(""));
    }

    #[test]
    fn empty_corpus_fails() {
        assert!(matches!(
            build_table(&[], 2),
            Err(SuggestError::EmptyCorpus)
        ));
    }

    #[test]
    fn unsupported_order_fails() {
        assert!(matches!(
            TableBuilder::new(MAX_SUPPORTED_ORDER + 1),
            Err(SuggestError::Validation(_))
        ));
    }

    #[test]
    fn word_count_tracks_additions() {
        let mut builder = TableBuilder::new(1).unwrap();
        builder.add_word("CAT");
        builder.add_word("DOG");
        assert_eq!(builder.word_count(), 2);
    }
}
