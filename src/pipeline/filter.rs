//! Inclusion/exclusion pattern filter
//!
//! Both patterns are anchored: the whole candidate must match, never a
//! substring. Look-around and backreferences are accepted.

use super::permutations::PermutationGroup;
use crate::errors::{Result, SuggestError};
use fancy_regex::Regex;

/// Include pattern accepting every candidate
pub const MATCH_ALL: &str = ".*";

/// Exclude pattern rejecting nothing
///
/// Anchored, the empty pattern only matches the empty string, and no
/// candidate is ever empty.
pub const EXCLUDE_NOTHING: &str = "";

/// Compiled include and exclude patterns
#[derive(Debug, Clone)]
pub struct PatternFilter {
    include: Regex,
    exclude: Regex,
}

impl PatternFilter {
    /// Compile both patterns
    ///
    /// Matching ignores ASCII case so `a.*` and `A.*` select the same words.
    ///
    /// # Errors
    /// Returns `SuggestError::InvalidPattern` if either pattern does not compile.
    ///
    /// # Examples
    /// ```
    /// use wordgame_suggester::pipeline::PatternFilter;
    ///
    /// let filter = PatternFilter::new("A.*", "").unwrap();
    /// assert!(filter.is_match("ACT").unwrap());
    /// assert!(!filter.is_match("CAT").unwrap());
    ///
    /// assert!(PatternFilter::new("[A-", "").is_err());
    /// ```
    pub fn new(include: &str, exclude: &str) -> Result<Self> {
        Ok(Self {
            include: compile_anchored(include)?,
            exclude: compile_anchored(exclude)?,
        })
    }

    /// Check a single candidate
    ///
    /// # Errors
    /// Returns `SuggestError::PatternMatch` if a pattern exhausts its
    /// backtracking limit on `candidate`.
    pub fn is_match(&self, candidate: &str) -> Result<bool> {
        let matches = |regex: &Regex| {
            regex
                .is_match(candidate)
                .map_err(|source| SuggestError::PatternMatch {
                    candidate: candidate.to_string(),
                    source: Box::new(source),
                })
        };
        Ok(matches(&self.include)? && !matches(&self.exclude)?)
    }

    /// Keep matching candidates, dropping lengths left with none
    ///
    /// # Errors
    /// Propagates the first matching failure from [`PatternFilter::is_match`].
    pub fn filter(&self, group: PermutationGroup) -> Result<PermutationGroup> {
        let mut filtered = PermutationGroup::new();
        for (len, words) in group {
            let mut kept = Vec::new();
            for word in words {
                if self.is_match(&word)? {
                    kept.push(word);
                }
            }
            if !kept.is_empty() {
                filtered.insert(len, kept);
            }
        }
        Ok(filtered)
    }
}

/// Compile `include` and `exclude` and apply them to `group`
///
/// # Errors
/// Returns `SuggestError::InvalidPattern` if either pattern does not compile.
pub fn filter(group: PermutationGroup, include: &str, exclude: &str) -> Result<PermutationGroup> {
    PatternFilter::new(include, exclude)?.filter(group)
}

fn compile_anchored(pattern: &str) -> Result<Regex> {
    let invalid = |source| SuggestError::InvalidPattern {
        pattern: pattern.to_string(),
        source: Box::new(source),
    };

    // Compile bare first so an unbalanced ')' cannot close the anchoring group
    Regex::new(pattern).map_err(invalid)?;

    Regex::new(&format!("(?i)^(?:{pattern})$")).map_err(invalid)
}
