/// How a bulk operation visits the timers of a [`crate::BenchTimer`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Plain loop on the calling thread.
    Sequential,
    /// Fan out over a rayon pool and join before returning.
    #[default]
    Concurrent,
}

impl ExecutionMode {
    pub fn is_concurrent(&self) -> bool {
        matches!(self, ExecutionMode::Concurrent)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Threads {
    Single,
    #[default]
    Auto,
    Multi(usize),
}

impl Threads {
    pub fn number_of_threads(&self) -> usize {
        match self {
            Threads::Single => 1,
            Threads::Multi(num) => (*num).max(1),
            Threads::Auto => std::thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_of_threads() {
        assert_eq!(Threads::Single.number_of_threads(), 1);
        assert_eq!(Threads::Multi(6).number_of_threads(), 6);
        assert_eq!(Threads::Multi(0).number_of_threads(), 1);
        assert!(Threads::Auto.number_of_threads() >= 1);
    }

    #[test]
    fn test_default_mode_is_concurrent() {
        assert!(ExecutionMode::default().is_concurrent());
        assert!(!ExecutionMode::Sequential.is_concurrent());
    }
}
