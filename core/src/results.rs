//! Presentation ordering for found words.
//!
//! The search reports raw hits, duplicates included. Callers that show words
//! to a user dedupe them by exact string and order them longest first, ties
//! alphabetical.

use ahash::AHashSet;
use std::cmp::Ordering;

/// Longest first, then ascending lexicographic.
pub fn word_order(a: &str, b: &str) -> Ordering {
    let (la, lb) = (a.chars().count(), b.chars().count());
    lb.cmp(&la).then_with(|| a.cmp(b))
}

/// Deduplicate and sort raw search hits for display.
///
/// # Example
/// ```
/// use boggle_core::results::rank_words;
///
/// let raw = vec!["AT".to_string(), "SAT".into(), "AT".into(), "ATS".into()];
/// assert_eq!(rank_words(raw), vec!["ATS", "SAT", "AT"]);
/// ```
pub fn rank_words<I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let unique: AHashSet<String> = raw.into_iter().collect();
    let mut words: Vec<String> = unique.into_iter().collect();
    words.sort_by(|a, b| word_order(a, b));
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let raw = ["TEA", "TEA", "EAT", "TEA"].map(String::from);
        assert_eq!(rank_words(raw), vec!["EAT", "TEA"]);
    }

    #[test]
    fn longer_words_first() {
        let raw = ["A", "QUIT", "ZOO", "BEE", "QUITE"].map(String::from);
        assert_eq!(rank_words(raw), vec!["QUITE", "QUIT", "BEE", "ZOO", "A"]);
    }

    #[test]
    fn empty_input() {
        assert!(rank_words(Vec::new()).is_empty());
    }
}
