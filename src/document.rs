use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::DocumentError;

/// Term-weight mapping used for TF, IDF and TF-IDF values alike.
pub type TermWeights = IndexMap<String, f64>;

/// WordCount 構造体
/// Occurrence counts of normalized terms within a single document.
/// Produced once by a tokenizer and immutable afterwards; the cached total
/// avoids re-summing when computing TF.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCount {
    #[serde(with = "indexmap::map::serde_seq")]
    counts: IndexMap<String, u64>,
    total: u64,
}

impl WordCount {
    pub fn new() -> Self {
        WordCount {
            counts: IndexMap::new(),
            total: 0,
        }
    }

    /// Record one occurrence of `term`.
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.counts.entry(term.to_string()).or_insert(0);
        *count += 1;
        self.total += 1;
        self
    }

    /// Record occurrences of every term in the slice.
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// Occurrence count of `term`, 0 if absent.
    #[inline]
    pub fn count(&self, term: &str) -> u64 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    /// Total number of term occurrences (sum of all counts).
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct terms.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(term, count)| (term.as_str(), *count))
    }
}

/// What one worker hands back to the coordinator, exactly once.
///
/// A document that could not be read still produces a result: empty maps
/// plus the `failure` marker, so the coordinator's expected-count
/// accounting stays correct.
#[derive(Debug, Clone)]
pub struct DocumentResult {
    /// Stable identifier of the processed document.
    pub path: PathBuf,
    /// Term occurrence counts for this document.
    pub word_count: WordCount,
    /// Term frequency map derived from `word_count`.
    pub term_frequency: TermWeights,
    /// Set when the document could not be read or tokenized.
    pub failure: Option<DocumentError>,
}

impl DocumentResult {
    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_tracks_totals() {
        let mut wc = WordCount::new();
        wc.add_term("cat").add_term("dog").add_term("cat");
        assert_eq!(wc.count("cat"), 2);
        assert_eq!(wc.count("dog"), 1);
        assert_eq!(wc.count("bird"), 0);
        assert_eq!(wc.total(), 3);
        assert_eq!(wc.len(), 2);
    }

    #[test]
    fn add_terms_matches_repeated_add_term() {
        let mut a = WordCount::new();
        a.add_terms(&["x", "y", "x"]);
        let mut b = WordCount::new();
        b.add_term("x").add_term("y").add_term("x");
        assert_eq!(a, b);
    }

    #[test]
    fn empty_word_count() {
        let wc = WordCount::new();
        assert!(wc.is_empty());
        assert_eq!(wc.total(), 0);
        assert!(!wc.contains_term("anything"));
    }
}
