//! The concurrent document-processing pipeline.
//!
//! Fan-out/fan-in over a scoped worker pool: one worker per document, one
//! result per worker delivered over a channel, a single coordinator loop
//! draining that channel. The channel closing after the last send is the
//! completion signal; the pool is dropped (and its threads joined) before
//! `run` returns, so no concurrency outlives a run.

pub mod coordinator;
pub mod worker;

use std::path::PathBuf;
use std::sync::Arc;

use rayon::ThreadPoolBuilder;
use tracing::{debug, info, warn};

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::tokenize::{FileTokenizer, Tokenizer};
use coordinator::Coordinator;

pub use coordinator::RunOutcome;

/// TF-IDF pipeline over a fixed document set.
pub struct Pipeline {
    config: PipelineConfig,
    tokenizer: Arc<dyn Tokenizer>,
}

impl Pipeline {
    /// Pipeline over real files, with the default tokenizer.
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_tokenizer(config, Arc::new(FileTokenizer::new()))
    }

    /// Pipeline with a caller-supplied tokenizer (in-memory sources, tests).
    pub fn with_tokenizer(config: PipelineConfig, tokenizer: Arc<dyn Tokenizer>) -> Self {
        Pipeline { config, tokenizer }
    }

    /// Process every document and return per-document TF-IDF mappings.
    ///
    /// Blocks until all workers have reported and aggregation is done.
    /// Per-document read failures are recovered into failed results and
    /// surfaced in the outcome; protocol violations abort the run.
    pub fn run(&self, documents: Vec<PathBuf>) -> Result<RunOutcome> {
        let expected = documents.len();
        if expected == 0 {
            info!("no documents to process");
            return Ok(RunOutcome::default());
        }

        // pool scoped to this run; dropped (threads joined) on return
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.config.worker_threads)
            .thread_name(|i| format!("tfidf-worker-{i}"))
            .build()?;
        debug!(
            documents = expected,
            threads = pool.current_num_threads(),
            "dispatching workers"
        );

        let (tx, rx) = crossbeam_channel::unbounded();
        for path in documents {
            let tx = tx.clone();
            let tokenizer = Arc::clone(&self.tokenizer);
            pool.spawn(move || {
                let result = worker::process_document(path, tokenizer.as_ref());
                // the one send this worker gets; channel may already be
                // gone if the coordinator aborted on a violation
                let _ = tx.send(result);
            });
        }
        // close our end so the receive loop ends after the last worker send
        drop(tx);

        let mut coordinator = Coordinator::new(expected);
        for result in rx.iter() {
            coordinator.accept(result)?;
        }

        let outcome = coordinator.finalize()?;
        for failed in &outcome.failures {
            warn!(path = %failed.path.display(), "document produced no terms (read failure)");
        }
        info!(
            documents = outcome.scores.len(),
            vocabulary = outcome.idf.len(),
            failed = outcome.failures.len(),
            "pipeline run complete"
        );
        Ok(outcome)
    }
}
