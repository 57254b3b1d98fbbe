//! Suggestion pipeline
//!
//! letters → permutations → pattern filter → scorer → ranker → tiers

mod engine;
mod filter;
mod permutations;
mod presenter;
mod ranker;
mod scorer;

pub use engine::{Suggester, Suggestions};
pub use filter::{EXCLUDE_NOTHING, MATCH_ALL, PatternFilter, filter};
pub use permutations::{PermutationGroup, generate};
pub use presenter::{BucketedGroup, BucketedWord, Tier, TierVisibility, bucket, classify};
pub use ranker::{RankedGroup, rank};
pub use scorer::{DICTIONARY_BONUS, ScoredGroup, ScoredPermutation, score, score_word};
