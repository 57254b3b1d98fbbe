//! Multi-order Markov chain scoring
//!
//! A word's score is the sum, over its letters, of the probability of each
//! letter under every context order up to the model's maximum. Short and long
//! contexts are blended additively rather than picking only the longest one.

use super::permutations::PermutationGroup;
use crate::errors::Result;
use crate::model::TransitionModel;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Flat score added to words found in the dictionary
pub const DICTIONARY_BONUS: f64 = 1.0;

/// A candidate word with its score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPermutation {
    pub word: String,
    pub score: f64,
}

/// Scored candidates keyed by length, in input order
pub type ScoredGroup = BTreeMap<usize, Vec<ScoredPermutation>>;

/// Score a single word
///
/// # Formula
/// For letter `w[j]`:
/// - j = 0: p(w[0])
/// - j > 0: Σ p(w[j] | w[j-o..j]) for o in 1..=min(j, max order)
///
/// plus [`DICTIONARY_BONUS`] when `use_bonus` is set and the word is known.
///
/// # Errors
/// Propagates lookup failures from malformed model data.
///
/// # Examples
/// ```
/// # use std::collections::BTreeMap;
/// use wordgame_suggester::model::{RawTable, TransitionModel};
/// use wordgame_suggester::pipeline::score_word;
///
/// // Order-0 model: only the first letter contributes
/// let row: BTreeMap<char, f64> = ('A'..='Z').map(|c| (c, 1.0 / 26.0)).collect();
/// let table: RawTable = [(String::new(), row)].into_iter().collect();
/// let model = TransitionModel::from_parts(table, vec!["CAT".to_string()]).unwrap();
///
/// let plain = score_word("CAT", &model, false).unwrap();
/// let bonus = score_word("CAT", &model, true).unwrap();
/// assert!((plain - 1.0 / 26.0).abs() < 1e-12);
/// assert!((bonus - plain - 1.0).abs() < 1e-12);
/// ```
pub fn score_word(word: &str, model: &TransitionModel, use_bonus: bool) -> Result<f64> {
    let max_order = model.max_order();
    let mut total = 0.0;

    for (j, &letter) in word.as_bytes().iter().enumerate() {
        if j == 0 {
            total += model.unconditional_probability(letter)?;
            continue;
        }

        // Clamp to the longest context the table holds
        let k = j.min(max_order);
        for order in 1..=k {
            total += model.conditional_probability(&word[j - order..j], letter)?;
        }
    }

    if use_bonus && model.is_known_word(word) {
        total += DICTIONARY_BONUS;
    }

    Ok(total)
}

/// Score every candidate, keeping input order within each length
///
/// Candidates are scored in parallel; the model is only read.
///
/// # Errors
/// Propagates the first lookup failure.
pub fn score(group: PermutationGroup, model: &TransitionModel, use_bonus: bool) -> Result<ScoredGroup> {
    group
        .into_iter()
        .map(|(len, words)| -> Result<(usize, Vec<ScoredPermutation>)> {
            let scored = words
                .into_par_iter()
                .map(|word| -> Result<ScoredPermutation> {
                    let score = score_word(&word, model, use_bonus)?;
                    Ok(ScoredPermutation { word, score })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok((len, scored))
        })
        .collect()
}
