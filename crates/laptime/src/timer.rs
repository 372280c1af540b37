use std::time::{Duration, Instant};

use tracing::trace;

use crate::{
    error::EmptyTimerError,
    unit::{DurationUnit, Ticks},
};

/// A restartable stopwatch recording elapsed-time samples in `U` ticks.
///
/// Every sample is measured against the instant captured by [`Timer::start`],
/// so the sequence is cumulative and non-decreasing. The first sample of a
/// session is always zero.
#[derive(Debug, Clone, Default)]
pub struct Timer<U: DurationUnit> {
    start: Option<Instant>,
    stop: Option<Instant>,
    samples: Vec<Ticks<U>>,
    running: bool,
}

impl<U: DurationUnit> Timer<U> {
    pub fn new() -> Self {
        Self {
            start: None,
            stop: None,
            samples: Vec::new(),
            running: false,
        }
    }

    pub fn reset(&mut self) {
        self.start = None;
        self.stop = None;
        self.samples.clear();
        self.running = false;
    }

    /// Starts a new session, discarding anything recorded before.
    pub fn start(&mut self) {
        self.reset();
        self.samples.push(Ticks::ZERO);
        self.start = Some(Instant::now());
        self.running = true;
    }

    /// Records the time elapsed since [`Timer::start`] and returns the
    /// captured instant, or `None` when the timer is not running.
    pub fn timestamp(&mut self) -> Option<Instant> {
        if !self.running {
            trace!("Ignoring timestamp on idle timer");
            return None;
        }

        let start = self.start?;
        let now = Instant::now();
        self.samples.push(Ticks::from_duration(now.duration_since(start)));

        Some(now)
    }

    /// Records a final sample and ends the session. No-op when idle.
    pub fn stop(&mut self) -> Option<Instant> {
        if !self.running {
            trace!("Ignoring stop on idle timer");
            return None;
        }

        let now = self.timestamp()?;
        self.stop = Some(now);
        self.running = false;

        Some(now)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn all_samples(&self) -> &[Ticks<U>] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn start_timestamp(&self) -> Option<Instant> {
        self.start
    }

    pub fn stop_timestamp(&self) -> Option<Instant> {
        self.stop
    }

    /// Wall time of the current session at full clock resolution: up to now
    /// while running, up to the stop instant once stopped.
    pub fn elapsed(&self) -> Option<Duration> {
        let start = self.start?;
        match self.stop {
            Some(stop) => Some(stop.duration_since(start)),
            None => Some(start.elapsed()),
        }
    }

    /// The most recent sample, i.e. the total time recorded so far.
    pub fn latest_duration(&self) -> Result<Ticks<U>, EmptyTimerError> {
        self.samples.last().copied().ok_or(EmptyTimerError {
            samples: 0,
            required: 1,
        })
    }

    /// Latest cumulative sample divided by the number of samples.
    ///
    /// This is not the mean of the gaps between samples; the leading zero
    /// sample counts towards the divisor. See [`Timer::mean_lap`] for the
    /// per-iteration figure.
    pub fn average_time(&self) -> Result<Ticks<U>, EmptyTimerError> {
        let latest = self.latest_duration()?;
        Ok(latest / self.samples.len() as u64)
    }

    /// Gaps between consecutive samples.
    pub fn laps(&self) -> impl Iterator<Item = Ticks<U>> + '_ {
        self.samples.windows(2).map(|pair| pair[1] - pair[0])
    }

    /// Mean of [`Timer::laps`]. Needs at least two samples.
    pub fn mean_lap(&self) -> Result<Ticks<U>, EmptyTimerError> {
        let count = self.samples.len();
        if count < 2 {
            return Err(EmptyTimerError {
                samples: count,
                required: 2,
            });
        }

        Ok(self.laps().sum::<Ticks<U>>() / (count - 1) as u64)
    }
}
