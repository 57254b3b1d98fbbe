//! Permutation generation
//!
//! Every distinct arrangement of k letters from the pool, for each k from 3 to
//! the pool size.

use crate::core::{LetterPool, MIN_WORD_LEN};
use std::collections::BTreeMap;

/// Distinct permutations keyed by length
pub type PermutationGroup = BTreeMap<usize, Vec<String>>;

/// Generate all distinct permutations of the pool, grouped by length
///
/// Repeated letters are walked as a multiset, so each distinct string is
/// produced exactly once. The result equals taking every positional
/// permutation of length k and deduplicating. Strings within a length are in
/// lexicographic order.
///
/// # Examples
/// ```
/// use wordgame_suggester::core::LetterPool;
/// use wordgame_suggester::pipeline::generate;
///
/// let group = generate(&LetterPool::new("aab").unwrap());
/// assert_eq!(group[&3], vec!["AAB", "ABA", "BAA"]);
/// ```
#[must_use]
pub fn generate(pool: &LetterPool) -> PermutationGroup {
    let mut counts: Vec<(u8, usize)> = pool.letter_counts().into_iter().collect();
    counts.sort_unstable_by_key(|&(letter, _)| letter);

    (MIN_WORD_LEN..=pool.len())
        .map(|len| {
            let mut words = Vec::new();
            let mut prefix = Vec::with_capacity(len);
            arrange(&mut counts, len, &mut prefix, &mut words);
            (len, words)
        })
        .collect()
}

/// Extend `prefix` with every remaining letter until it reaches `len`
fn arrange(counts: &mut [(u8, usize)], len: usize, prefix: &mut Vec<u8>, out: &mut Vec<String>) {
    if prefix.len() == len {
        out.push(prefix.iter().map(|&b| char::from(b)).collect());
        return;
    }

    for i in 0..counts.len() {
        let (letter, remaining) = counts[i];
        if remaining == 0 {
            continue;
        }

        counts[i].1 -= 1;
        prefix.push(letter);
        arrange(counts, len, prefix, out);
        prefix.pop();
        counts[i].1 += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;
    use std::collections::BTreeSet;

    fn pool(text: &str) -> LetterPool {
        LetterPool::new(text).unwrap()
    }

    /// Positional permutations of `len` letters, deduplicated
    fn naive(letters: &[u8], len: usize) -> BTreeSet<String> {
        fn walk(letters: &[u8], used: &mut Vec<bool>, prefix: &mut String, len: usize, out: &mut BTreeSet<String>) {
            if prefix.len() == len {
                out.insert(prefix.clone());
                return;
            }
            for i in 0..letters.len() {
                if used[i] {
                    continue;
                }
                used[i] = true;
                prefix.push(char::from(letters[i]));
                walk(letters, used, prefix, len, out);
                prefix.pop();
                used[i] = false;
            }
        }

        let mut out = BTreeSet::new();
        walk(letters, &mut vec![false; letters.len()], &mut String::new(), len, &mut out);
        out
    }

    #[test]
    fn three_distinct_letters() {
        let group = generate(&pool("CAT"));

        assert_eq!(group.len(), 1);
        let words: BTreeSet<&str> = group[&3].iter().map(String::as_str).collect();
        let expected: BTreeSet<&str> = ["CAT", "CTA", "ACT", "ATC", "TCA", "TAC"].into();
        assert_eq!(words, expected);
    }

    #[test]
    fn repeated_letters_deduplicate() {
        let group = generate(&pool("AAB"));
        assert_eq!(group[&3], vec!["AAB", "ABA", "BAA"]);
    }

    #[test]
    fn lengths_run_from_three_to_pool_size() {
        let group = generate(&pool("WORDS"));
        let lengths: Vec<usize> = group.keys().copied().collect();
        assert_eq!(lengths, vec![3, 4, 5]);
    }

    #[test]
    fn distinct_pool_sizes_match_partial_permutations() {
        // P(5,3) = 60, P(5,4) = 120, P(5,5) = 120
        let group = generate(&pool("ABCDE"));
        assert_eq!(group[&3].len(), 60);
        assert_eq!(group[&4].len(), 120);
        assert_eq!(group[&5].len(), 120);
    }

    #[test]
    fn matches_naive_positional_permutations() {
        for text in ["AAB", "ABBA", "BANANA", "LEVEL", "ZZZ"] {
            let p = pool(text);
            let group = generate(&p);
            for (&len, words) in &group {
                let got: BTreeSet<String> = words.iter().cloned().collect();
                assert_eq!(got.len(), words.len(), "duplicates for {text} at {len}");
                assert_eq!(got, naive(p.letters(), len), "mismatch for {text} at {len}");
            }
        }
    }

    #[test]
    fn permutations_respect_pool_multiplicity() {
        let p = pool("BANANA");
        let available = p.letter_counts();

        for (&len, words) in &generate(&p) {
            for word in words {
                assert_eq!(word.len(), len);

                let mut used: FxHashMap<u8, usize> = FxHashMap::default();
                for b in word.bytes() {
                    *used.entry(b).or_insert(0) += 1;
                }
                for (letter, count) in used {
                    assert!(count <= available[&letter], "{word} overuses {}", char::from(letter));
                }
            }
        }
    }

    #[test]
    fn all_same_letter() {
        let group = generate(&pool("ZZZZ"));
        assert_eq!(group[&3], vec!["ZZZ"]);
        assert_eq!(group[&4], vec!["ZZZZ"]);
    }

    #[test]
    fn output_is_sorted() {
        for words in generate(&pool("TEAR")).values() {
            assert!(words.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
