//! Stopwatches that record cumulative elapsed-time samples, and a registry
//! driving many titled stopwatches at once.

pub mod bench_timer;
pub mod error;
pub mod execution;
mod macros;
pub mod timer;
pub mod unit;

#[doc(hidden)]
pub use tracing;

pub use bench_timer::BenchTimer;
pub use error::{BenchTimerError, EmptyTimerError};
pub use execution::{ExecutionMode, Threads};
pub use timer::Timer;
pub use unit::{
    Days, DurationUnit, Hours, Microseconds, Milliseconds, Minutes, Months, Nanoseconds, Seconds,
    Ticks, Weeks, Years,
};
