//! Per-document worker.
//!
//! Each worker owns exactly one document, shares nothing mutable with its
//! siblings, and produces exactly one `DocumentResult`. A tokenize failure
//! becomes a failed result, never a missing one: the coordinator's
//! expected-count accounting must hold even when a file cannot be read.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::document::{DocumentResult, TermWeights};
use crate::stats;
use crate::tokenize::Tokenizer;

/// Process one document: tokenize, compute TF, return the result.
pub(crate) fn process_document(path: PathBuf, tokenizer: &dyn Tokenizer) -> DocumentResult {
    match tokenizer.tokenize(&path) {
        Ok(word_count) => {
            let term_frequency = stats::term_frequency(&word_count);
            debug!(
                path = %path.display(),
                terms = word_count.len(),
                total = word_count.total(),
                "document processed"
            );
            DocumentResult {
                path,
                word_count,
                term_frequency,
                failure: None,
            }
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "document failed, reporting empty result");
            DocumentResult {
                path,
                word_count: Default::default(),
                term_frequency: TermWeights::new(),
                failure: Some(error),
            }
        }
    }
}
