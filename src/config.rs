/// Configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Number of worker threads in the scoped pool.
    /// 0 lets rayon pick one thread per available core.
    pub worker_threads: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig { worker_threads: 0 }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_worker_threads(mut self, worker_threads: usize) -> Self {
        self.worker_threads = worker_threads;
        self
    }
}
