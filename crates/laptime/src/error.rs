use thiserror::Error;

/// Returned by timer statistics when too few samples have been recorded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Timer has {samples} sample(s), at least {required} required")]
pub struct EmptyTimerError {
    pub samples: usize,
    pub required: usize,
}

#[derive(Error, Debug)]
pub enum BenchTimerError {
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
