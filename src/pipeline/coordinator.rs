//! Result collection and corpus-wide aggregation.
//!
//! The coordinator is the single writer of the accumulating corpus: workers
//! deliver results over a channel and only this side mutates state. IDF is
//! computed exactly once, and only after every expected result has arrived.
//! An IDF taken over a partial corpus is wrong for every document, so
//! `finalize` refuses a short count instead of under-counting silently.

use std::collections::HashSet;
use std::path::PathBuf;

use indexmap::IndexMap;
use tracing::debug;

use crate::document::{DocumentResult, TermWeights};
use crate::error::ProtocolViolation;
use crate::stats;

/// Collects one result per dispatched worker, then aggregates.
pub(crate) struct Coordinator {
    expected: usize,
    results: Vec<DocumentResult>,
    seen: HashSet<PathBuf>,
}

/// Output of a completed run.
#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    /// Per-document TF-IDF mapping, keyed by document path.
    pub scores: IndexMap<PathBuf, TermWeights>,
    /// The corpus-wide IDF mapping the scores were computed against.
    pub idf: TermWeights,
    /// Documents that failed to read/tokenize. They still occupy a corpus
    /// slot (empty counts) and appear in `scores` with an empty mapping.
    pub failures: Vec<DocumentResult>,
}

impl Coordinator {
    pub(crate) fn new(expected: usize) -> Self {
        Coordinator {
            expected,
            results: Vec::with_capacity(expected),
            seen: HashSet::with_capacity(expected),
        }
    }

    /// Accept one worker result, in any arrival order.
    ///
    /// Duplicate delivery and delivery past the expected count are protocol
    /// violations, not data: they mean a worker broke the exactly-once rule.
    pub(crate) fn accept(&mut self, result: DocumentResult) -> Result<(), ProtocolViolation> {
        if self.results.len() == self.expected {
            return Err(ProtocolViolation::LateResult { path: result.path });
        }
        if !self.seen.insert(result.path.clone()) {
            return Err(ProtocolViolation::DuplicateResult { path: result.path });
        }
        debug!(
            path = %result.path.display(),
            received = self.results.len() + 1,
            expected = self.expected,
            "result collected"
        );
        self.results.push(result);
        Ok(())
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.results.len() == self.expected
    }

    /// Freeze the corpus and aggregate: vocabulary union, IDF once over the
    /// full corpus, then TF-IDF per document against that single IDF map.
    pub(crate) fn finalize(self) -> Result<RunOutcome, ProtocolViolation> {
        if !self.is_complete() {
            return Err(ProtocolViolation::MissingResults {
                expected: self.expected,
                received: self.results.len(),
            });
        }

        let vocabulary = stats::vocabulary(&self.results);
        let idf = stats::inverse_document_frequency(&self.results, &vocabulary);
        debug!(
            documents = self.results.len(),
            vocabulary = vocabulary.len(),
            "corpus frozen, idf computed"
        );

        let mut scores = IndexMap::with_capacity(self.results.len());
        let mut failures = Vec::new();
        for result in self.results {
            scores.insert(
                result.path.clone(),
                stats::tf_idf(&result.term_frequency, &idf),
            );
            if result.is_failed() {
                failures.push(result);
            }
        }

        Ok(RunOutcome {
            scores,
            idf,
            failures,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::WordCount;

    fn result(path: &str, terms: &[&str]) -> DocumentResult {
        let mut word_count = WordCount::new();
        word_count.add_terms(terms);
        let term_frequency = stats::term_frequency(&word_count);
        DocumentResult {
            path: PathBuf::from(path),
            word_count,
            term_frequency,
            failure: None,
        }
    }

    #[test]
    fn collects_until_expected_count() {
        let mut coordinator = Coordinator::new(2);
        assert!(!coordinator.is_complete());
        coordinator.accept(result("a", &["x"])).unwrap();
        assert!(!coordinator.is_complete());
        coordinator.accept(result("b", &["y"])).unwrap();
        assert!(coordinator.is_complete());
    }

    #[test]
    fn duplicate_delivery_is_a_violation() {
        let mut coordinator = Coordinator::new(3);
        coordinator.accept(result("a", &["x"])).unwrap();
        let err = coordinator.accept(result("a", &["x"])).unwrap_err();
        assert!(matches!(err, ProtocolViolation::DuplicateResult { .. }));
    }

    #[test]
    fn late_delivery_is_a_violation() {
        let mut coordinator = Coordinator::new(1);
        coordinator.accept(result("a", &["x"])).unwrap();
        let err = coordinator.accept(result("b", &["y"])).unwrap_err();
        assert!(matches!(err, ProtocolViolation::LateResult { .. }));
    }

    /// The completeness gate: no aggregation output exists until every
    /// expected result has arrived.
    #[test]
    fn finalize_refuses_partial_corpus() {
        let mut coordinator = Coordinator::new(2);
        coordinator.accept(result("a", &["x"])).unwrap();
        let err = coordinator.finalize().unwrap_err();
        assert_eq!(
            err,
            ProtocolViolation::MissingResults {
                expected: 2,
                received: 1,
            }
        );
    }

    #[test]
    fn finalize_of_zero_expected_is_empty() {
        let outcome = Coordinator::new(0).finalize().unwrap();
        assert!(outcome.scores.is_empty());
        assert!(outcome.idf.is_empty());
        assert!(outcome.failures.is_empty());
    }

    /// Regression check against the per-arrival IDF of the original design:
    /// IDF must be taken over the full corpus, never a singleton. With a
    /// singleton corpus every IDF is ln(1) = 0 and every score collapses to
    /// zero; the corpus-wide version keeps document-unique terms nonzero.
    #[test]
    fn idf_uses_full_corpus_not_singleton() {
        let mut coordinator = Coordinator::new(2);
        coordinator.accept(result("a", &["cat", "dog", "dog"])).unwrap();
        coordinator.accept(result("b", &["cat", "cat", "bird"])).unwrap();
        let outcome = coordinator.finalize().unwrap();

        let a = &outcome.scores[&PathBuf::from("a")];
        assert!((a["dog"] - 2.0 / 3.0 * 2.0_f64.ln()).abs() < 1e-9);
        assert!(a["dog"] > 0.0, "singleton-corpus idf would zero this out");
        assert!((a["cat"] - 0.0).abs() < 1e-9);
    }

    #[test]
    fn arrival_order_does_not_change_outcome() {
        let docs = [
            result("a", &["cat", "dog", "dog"]),
            result("b", &["cat", "cat", "bird"]),
            result("c", &["dog", "fish", "fish"]),
        ];

        let mut forward = Coordinator::new(3);
        for doc in docs.iter().cloned() {
            forward.accept(doc).unwrap();
        }
        let mut backward = Coordinator::new(3);
        for doc in docs.iter().rev().cloned() {
            backward.accept(doc).unwrap();
        }

        let fwd = forward.finalize().unwrap();
        let bwd = backward.finalize().unwrap();
        assert_eq!(fwd.idf, bwd.idf);
        for (path, scores) in &fwd.scores {
            assert_eq!(scores, &bwd.scores[path]);
        }
    }

    #[test]
    fn failed_results_surface_but_still_count() {
        let mut coordinator = Coordinator::new(2);
        coordinator.accept(result("ok", &["cat"])).unwrap();
        let mut failed = result("broken", &[]);
        failed.failure = Some(crate::error::DocumentError::ReadFailed {
            path: PathBuf::from("broken"),
            reason: "io".into(),
        });
        coordinator.accept(failed).unwrap();

        let outcome = coordinator.finalize().unwrap();
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.scores.len(), 2);
        // failed doc occupies a corpus slot: "cat" is in 1 of 2 documents
        assert!((outcome.idf["cat"] - 2.0_f64.ln()).abs() < 1e-9);
    }
}
