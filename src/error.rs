//! Error types for the TF-IDF pipeline.
//!
//! Two kinds of failure are kept strictly apart:
//! - `DocumentError`: recoverable, scoped to one document. Workers convert
//!   these into failed results so the batch still completes.
//! - `ProtocolViolation`: a broken invariant of the coordinator/worker
//!   protocol. Never recovered; the run aborts rather than emit TF-IDF
//!   numbers computed over a corrupted corpus.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for a pipeline run.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The scoped worker pool could not be built.
    #[error("Failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    /// Coordinator/worker protocol invariant broken.
    #[error("Protocol violation: {0}")]
    Protocol(#[from] ProtocolViolation),

    /// I/O error outside any single document (listing, output).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A broken invariant of the result-delivery protocol.
///
/// All of these indicate a programming error, not bad input: each worker
/// must deliver exactly one result and the coordinator must see exactly
/// `expected` of them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolViolation {
    /// The same document reported more than once.
    #[error("Duplicate result for document '{path}'")]
    DuplicateResult { path: PathBuf },

    /// A result arrived after the expected count was already reached.
    #[error("Result for '{path}' arrived after collection completed")]
    LateResult { path: PathBuf },

    /// Fewer results than workers were dispatched.
    #[error("Received {received} results but expected {expected}")]
    MissingResults { expected: usize, received: usize },
}

/// Per-document failure, recoverable within a run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The document file could not be read.
    #[error("Failed to read document '{path}': {reason}")]
    ReadFailed { path: PathBuf, reason: String },
}

/// Result type alias for PipelineError
pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_violation_converts_to_pipeline_error() {
        let violation = ProtocolViolation::MissingResults {
            expected: 3,
            received: 2,
        };
        let err: PipelineError = violation.into();
        assert!(matches!(err, PipelineError::Protocol(_)));
    }

    #[test]
    fn document_error_formats_path_and_reason() {
        let err = DocumentError::ReadFailed {
            path: "/missing.txt".into(),
            reason: "No such file".into(),
        };
        let text = err.to_string();
        assert!(text.contains("/missing.txt"));
        assert!(text.contains("No such file"));
    }
}
