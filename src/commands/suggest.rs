//! Word suggestion command
//!
//! Validates the request, runs the pipeline and times it.

use crate::core::LetterPool;
use crate::errors::Result;
use crate::pipeline::{EXCLUDE_NOTHING, MATCH_ALL, PatternFilter, Suggester, Suggestions};
use std::time::{Duration, Instant};

/// Configuration for one suggestion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestConfig {
    pub letters: String,
    pub pattern: String,
    pub filter: String,
    pub bonus_point: bool,
}

impl SuggestConfig {
    /// Request with match-all include, no exclude and no bonus
    #[must_use]
    pub fn new(letters: impl Into<String>) -> Self {
        Self {
            letters: letters.into(),
            pattern: MATCH_ALL.to_string(),
            filter: EXCLUDE_NOTHING.to_string(),
            bonus_point: false,
        }
    }
}

/// Result of a suggestion request
#[derive(Debug, Clone)]
pub struct SuggestResult {
    pub letters: String,
    pub suggestions: Suggestions,
    pub duration: Duration,
}

/// Suggest words for the configured letters
///
/// # Errors
///
/// Returns an error if:
/// - The letters are not alphabetic or fewer than three
/// - The include or exclude pattern does not compile
/// - The model fails a lookup while scoring
pub fn suggest_words(config: &SuggestConfig, suggester: &Suggester) -> Result<SuggestResult> {
    let start = Instant::now();

    let pool = LetterPool::new(config.letters.as_str())?;
    let filter = PatternFilter::new(&config.pattern, &config.filter)?;
    let suggestions = suggester.suggest(&pool, &filter, config.bonus_point)?;

    let duration = start.elapsed();
    log::info!(
        "{} of {} permutations of {pool} kept in {:.3}s",
        suggestions.retained,
        suggestions.generated,
        duration.as_secs_f64()
    );

    Ok(SuggestResult {
        letters: pool.text().to_string(),
        suggestions,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SuggestError;
    use crate::test_utils::uniform_model;

    #[test]
    fn suggest_normalizes_letters() {
        let model = uniform_model(2, &[]);
        let suggester = Suggester::new(&model);

        let result = suggest_words(&SuggestConfig::new("cat"), &suggester).unwrap();

        assert_eq!(result.letters, "CAT");
        assert_eq!(result.suggestions.retained, 6);
    }

    #[test]
    fn suggest_rejects_short_letters() {
        let model = uniform_model(1, &[]);
        let suggester = Suggester::new(&model);

        let result = suggest_words(&SuggestConfig::new("ab"), &suggester);
        assert!(matches!(result, Err(SuggestError::Validation(_))));
    }

    #[test]
    fn suggest_rejects_non_alphabetic_letters() {
        let model = uniform_model(1, &[]);
        let suggester = Suggester::new(&model);

        let result = suggest_words(&SuggestConfig::new("ab1"), &suggester);
        assert!(matches!(result, Err(SuggestError::Validation(_))));
    }

    #[test]
    fn suggest_rejects_bad_pattern() {
        let model = uniform_model(1, &[]);
        let suggester = Suggester::new(&model);

        let mut config = SuggestConfig::new("cat");
        config.filter = "[".to_string();

        let result = suggest_words(&config, &suggester);
        assert!(matches!(result, Err(SuggestError::InvalidPattern { .. })));
    }

    #[test]
    fn suggest_applies_pattern_and_filter() {
        let model = uniform_model(1, &[]);
        let suggester = Suggester::new(&model);

        let mut config = SuggestConfig::new("cats");
        config.pattern = "....".to_string();
        config.filter = "S.*".to_string();

        let result = suggest_words(&config, &suggester).unwrap();
        let groups = &result.suggestions.groups;

        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![4]);
        // 24 four-letter arrangements, 6 of them start with S
        assert_eq!(groups[&4].len(), 18);
        assert!(groups[&4].iter().all(|w| !w.word.starts_with('S')));
    }
}
