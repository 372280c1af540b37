use fxhash::FxHashMap;
use rayon::iter::{IntoParallelRefMutIterator, ParallelIterator};
use tracing::{debug, instrument};

use crate::{
    error::BenchTimerError,
    execution::{ExecutionMode, Threads},
    timer::Timer,
    unit::DurationUnit,
};

/// A registry of independently titled [`Timer`]s.
///
/// Lookups by title are best-effort: operations on a title that was never
/// added (or was removed) do nothing.
#[derive(Debug)]
pub struct BenchTimer<U: DurationUnit> {
    timers: FxHashMap<String, Timer<U>>,
    // rayon's global pool when unset
    thread_pool: Option<rayon::ThreadPool>,
}

impl<U: DurationUnit> Default for BenchTimer<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: DurationUnit> BenchTimer<U> {
    pub fn new() -> Self {
        Self {
            timers: FxHashMap::default(),
            thread_pool: None,
        }
    }

    /// Creates a registry whose concurrent bulk operations run on a dedicated
    /// pool sized by `threads`.
    pub fn with_threads(threads: Threads) -> Result<Self, BenchTimerError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads.number_of_threads())
            .thread_name(|index| format!("laptime-{index}"))
            .build()?;

        Ok(Self {
            timers: FxHashMap::default(),
            thread_pool: Some(thread_pool),
        })
    }

    /// Inserts a fresh timer under `title`, replacing any previous one.
    pub fn add(&mut self, title: impl Into<String>) -> &mut Timer<U> {
        let timer = self.timers.entry(title.into()).or_default();
        *timer = Timer::new();
        timer
    }

    pub fn find(&self, title: &str) -> Option<&Timer<U>> {
        self.timers.get(title)
    }

    pub fn find_mut(&mut self, title: &str) -> Option<&mut Timer<U>> {
        self.timers.get_mut(title)
    }

    pub fn start(&mut self, title: &str) {
        if let Some(timer) = self.lookup(title) {
            timer.start();
        }
    }

    pub fn stop(&mut self, title: &str) {
        if let Some(timer) = self.lookup(title) {
            timer.stop();
        }
    }

    pub fn timestamp(&mut self, title: &str) {
        if let Some(timer) = self.lookup(title) {
            timer.timestamp();
        }
    }

    #[instrument(skip(self), level = "debug")]
    pub fn start_all(&mut self, mode: ExecutionMode) {
        self.apply_to_all(mode, |timer| timer.start());
    }

    #[instrument(skip(self), level = "debug")]
    pub fn stop_all(&mut self, mode: ExecutionMode) {
        self.apply_to_all(mode, |timer| {
            timer.stop();
        });
    }

    /// Copy of every title and timer, unaffected by later changes to the
    /// registry.
    pub fn get_all(&self) -> FxHashMap<String, Timer<U>> {
        self.timers.clone()
    }

    pub fn remove(&mut self, title: &str) {
        if self.timers.remove(title).is_none() {
            debug!(title, "No timer to remove");
        }
    }

    pub fn remove_all(&mut self) {
        self.timers.clear();
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.timers.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Timer<U>)> {
        self.timers
            .iter()
            .map(|(title, timer)| (title.as_str(), timer))
    }

    fn lookup(&mut self, title: &str) -> Option<&mut Timer<U>> {
        let timer = self.timers.get_mut(title);
        if timer.is_none() {
            debug!(title, "No timer with this title");
        }
        timer
    }

    fn apply_to_all<F>(&mut self, mode: ExecutionMode, op: F)
    where
        F: Fn(&mut Timer<U>) + Send + Sync,
    {
        debug!(timers = self.timers.len(), "Applying to all timers");
        match mode {
            ExecutionMode::Sequential => self.timers.values_mut().for_each(op),
            ExecutionMode::Concurrent => {
                let timers = &mut self.timers;
                match &self.thread_pool {
                    Some(thread_pool) => thread_pool.install(|| fan_out(timers, &op)),
                    None => fan_out(timers, &op),
                }
            }
        }
    }
}

// Returns once every timer has been visited.
fn fan_out<U, F>(timers: &mut FxHashMap<String, Timer<U>>, op: &F)
where
    U: DurationUnit,
    F: Fn(&mut Timer<U>) + Sync,
{
    timers.par_iter_mut().for_each(|(_, timer)| op(timer));
}
