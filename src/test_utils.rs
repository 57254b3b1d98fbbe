//! Shared fixtures for unit tests

use crate::core::{ALPHABET, ALPHABET_LEN, contexts_of_length};
use crate::model::{RawTable, TransitionModel};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

/// A row giving every letter probability 1/26
pub(crate) fn uniform_row() -> BTreeMap<char, f64> {
    ALPHABET
        .iter()
        .map(|&b| (char::from(b), 1.0 / ALPHABET_LEN as f64))
        .collect()
}

/// A complete table of uniform rows up to `max_order`
pub(crate) fn uniform_table(max_order: usize) -> RawTable {
    (0..=max_order)
        .flat_map(contexts_of_length)
        .map(|context| (context, uniform_row()))
        .collect()
}

/// A complete table of random normalized rows, reproducible from `seed`
pub(crate) fn random_table(max_order: usize, seed: u64) -> RawTable {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..=max_order)
        .flat_map(contexts_of_length)
        .map(|context| {
            let weights: Vec<f64> = (0..ALPHABET_LEN).map(|_| rng.random_range(0.01..1.0)).collect();
            let total: f64 = weights.iter().sum();
            let row = ALPHABET
                .iter()
                .zip(weights)
                .map(|(&b, w)| (char::from(b), w / total))
                .collect();
            (context, row)
        })
        .collect()
}

/// Uniform model of the given order with a small dictionary
pub(crate) fn uniform_model(max_order: usize, words: &[&str]) -> TransitionModel {
    TransitionModel::from_parts(
        uniform_table(max_order),
        words.iter().map(|w| (*w).to_string()),
    )
    .unwrap()
}
