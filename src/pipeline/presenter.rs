//! Relative-probability tiers
//!
//! Each length group is split into thirds of its own score range. Tiers are
//! never compared across lengths.

use super::ranker::RankedGroup;
use std::collections::BTreeMap;
use std::fmt;

/// Relative standing of a word within its length group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Top third of the score range
    High,
    /// Middle third
    Medium,
    /// Bottom third
    Low,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        };
        write!(f, "{name}")
    }
}

/// A ranked word tagged with its tier
#[derive(Debug, Clone, PartialEq)]
pub struct BucketedWord {
    pub word: String,
    pub score: f64,
    pub tier: Tier,
}

/// Tiered words keyed by length, best score first
pub type BucketedGroup = BTreeMap<usize, Vec<BucketedWord>>;

/// Which tiers the output layer shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierVisibility {
    pub skip_low: bool,
    pub skip_medium: bool,
}

impl TierVisibility {
    /// Check whether words of `tier` are shown
    #[must_use]
    pub const fn shows(self, tier: Tier) -> bool {
        match tier {
            Tier::High => true,
            Tier::Medium => !self.skip_medium,
            Tier::Low => !self.skip_low,
        }
    }
}

/// Place `score` within the range `[mini, maxi]`
///
/// Thresholds are strict, so a zero-width range puts everything in
/// [`Tier::Low`]. A lone word is promoted by [`bucket`] instead.
///
/// # Examples
/// ```
/// use wordgame_suggester::pipeline::{Tier, classify};
///
/// assert_eq!(classify(0.9, 0.0, 1.0), Tier::High);
/// assert_eq!(classify(0.5, 0.0, 1.0), Tier::Medium);
/// assert_eq!(classify(0.1, 0.0, 1.0), Tier::Low);
/// assert_eq!(classify(0.4, 0.4, 0.4), Tier::Low);
/// ```
#[must_use]
pub fn classify(score: f64, mini: f64, maxi: f64) -> Tier {
    let range = maxi - mini;
    if score > mini + 2.0 * range / 3.0 {
        Tier::High
    } else if score > mini + range / 3.0 {
        Tier::Medium
    } else {
        Tier::Low
    }
}

/// Tag every ranked word with its tier
///
/// A length with a single word marks it [`Tier::High`].
#[must_use]
pub fn bucket(ranked: RankedGroup) -> BucketedGroup {
    ranked
        .into_iter()
        .map(|(len, words)| {
            let single = words.len() == 1;
            let (mini, maxi) = words
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), w| {
                    (lo.min(w.score), hi.max(w.score))
                });

            let tiered = words
                .into_iter()
                .map(|w| BucketedWord {
                    tier: if single {
                        Tier::High
                    } else {
                        classify(w.score, mini, maxi)
                    },
                    word: w.word,
                    score: w.score,
                })
                .collect();
            (len, tiered)
        })
        .collect()
}
