//! Suggestion pipeline
//!
//! Runs the stages in order for one request against a loaded model.

use super::filter::PatternFilter;
use super::permutations::{PermutationGroup, generate};
use super::presenter::{BucketedGroup, bucket};
use super::ranker::rank;
use super::scorer::score;
use crate::core::LetterPool;
use crate::errors::Result;
use crate::model::TransitionModel;

/// Outcome of one suggestion run
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestions {
    /// Tiered words keyed by length, best first
    pub groups: BucketedGroup,
    /// Distinct permutations generated before filtering
    pub generated: usize,
    /// Candidates that survived the pattern filter
    pub retained: usize,
}

/// Word suggester bound to a transition model
pub struct Suggester<'a> {
    model: &'a TransitionModel,
}

impl<'a> Suggester<'a> {
    /// Create a suggester scoring with `model`
    #[must_use]
    pub const fn new(model: &'a TransitionModel) -> Self {
        Self { model }
    }

    /// The model this suggester scores with
    #[must_use]
    pub const fn model(&self) -> &'a TransitionModel {
        self.model
    }

    /// Generate, filter, score, rank and bucket the candidates for `pool`
    ///
    /// # Errors
    ///
    /// Propagates pattern matching failures and model lookup failures from
    /// scoring.
    pub fn suggest(
        &self,
        pool: &LetterPool,
        filter: &PatternFilter,
        use_bonus: bool,
    ) -> Result<Suggestions> {
        let permutations = generate(pool);
        let generated = count(&permutations);
        log::debug!("generated {generated} permutations from {pool}");

        let filtered = filter.filter(permutations)?;
        let retained = count(&filtered);
        log::debug!(
            "{retained} candidates in {} length groups after filtering",
            filtered.len()
        );

        let scored = score(filtered, self.model, use_bonus)?;
        let groups = bucket(rank(scored));

        Ok(Suggestions {
            groups,
            generated,
            retained,
        })
    }
}

fn count(group: &PermutationGroup) -> usize {
    group.values().map(Vec::len).sum()
}
