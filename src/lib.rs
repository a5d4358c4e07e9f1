/// This crate is a concurrent TF-IDF scoring pipeline for document collections.
pub mod config;
pub mod document;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod stats;
pub mod tokenize;

/// TF-IDF Pipeline
/// The top-level struct of this crate. It dispatches one worker per document
/// onto a pool scoped to the run, collects each worker's result exactly once
/// over a channel, and computes the corpus-wide IDF only after every
/// document has reported, then TF-IDF per document against that single IDF
/// mapping.
///
/// Workers share nothing mutable; the coordinator is the single writer of
/// the accumulating corpus. Arrival order never affects the outcome.
///
/// Per-document read failures are recovered into empty, marked results so
/// the batch completes with correct document accounting. Exactly-once
/// delivery is enforced: duplicates and stragglers abort the run instead of
/// corrupting the aggregation.
pub use pipeline::Pipeline;

/// Output of a completed pipeline run: per-document TF-IDF mappings, the
/// corpus IDF they were computed against, and any per-document failures.
pub use pipeline::RunOutcome;

/// Configuration for one pipeline run (worker thread count).
pub use config::PipelineConfig;

/// WordCount structure
/// Occurrence counts of normalized terms within one document, produced once
/// by a tokenizer and immutable afterwards. Base data for TF calculation.
pub use document::WordCount;

/// Term-weight mapping (term → f64), used for TF, IDF and TF-IDF values.
pub use document::TermWeights;

/// The unit of data a worker delivers to the coordinator, exactly once:
/// word counts, the derived TF mapping, and an optional failure marker.
pub use document::DocumentResult;

/// Tokenizer trait and the default file-backed implementation.
/// The trait is object-safe so the pipeline can run against in-memory
/// document sources in tests.
pub use tokenize::{FileTokenizer, Tokenizer};

/// Error types: `PipelineError` for a run, `ProtocolViolation` for broken
/// delivery invariants, `DocumentError` for recoverable per-document
/// failures.
pub use error::{DocumentError, PipelineError, ProtocolViolation};
