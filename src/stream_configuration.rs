//! Configuration types for Stream terminal operations

/// Worker configuration for parallel terminal operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Upper bound on worker threads; 0 is treated as 1
    pub concurrency: usize,
    /// Name given to spawned worker threads
    pub thread_name: Option<String>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            concurrency: num_cpus::get(),
            thread_name: Some("fluent-worker".to_string()),
        }
    }
}

impl ParallelConfig {
    pub fn with_concurrency(concurrency: usize) -> Self {
        Self { concurrency, ..Default::default() }
    }

    /// Number of workers to launch for `units` work units, never 0.
    ///
    /// `None` means the element count is unknown.
    pub fn workers_for(&self, units: Option<usize>) -> usize {
        let concurrency = self.concurrency.max(1);
        match units {
            Some(n) => concurrency.min(n).max(1),
            None => concurrency,
        }
    }
}

/// Buffer configuration for collecting streams of unknown size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferConfig {
    pub initial_capacity: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self { initial_capacity: 10 }
    }
}
