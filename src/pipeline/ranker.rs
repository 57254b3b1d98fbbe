//! Ranking within each length group

use super::scorer::{ScoredGroup, ScoredPermutation};
use std::collections::BTreeMap;

/// Candidates keyed by length, best score first
pub type RankedGroup = BTreeMap<usize, Vec<ScoredPermutation>>;

/// Sort each length group by descending score
///
/// The sort is stable: equal scores keep their input order.
#[must_use]
pub fn rank(scored: ScoredGroup) -> RankedGroup {
    scored
        .into_iter()
        .map(|(len, mut words)| {
            words.sort_by(|a, b| b.score.total_cmp(&a.score));
            (len, words)
        })
        .collect()
}
