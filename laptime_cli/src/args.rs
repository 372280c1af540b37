use clap::{Args, ValueEnum};
use laptime::{ExecutionMode, Threads};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum UnitArg {
    #[value(name = "ns")]
    Nanoseconds,
    #[value(name = "us")]
    Microseconds,
    #[value(name = "ms")]
    Milliseconds,
    #[value(name = "s")]
    Seconds,
    #[value(name = "min")]
    Minutes,
    #[value(name = "h")]
    Hours,
    #[value(name = "d")]
    Days,
    #[value(name = "w")]
    Weeks,
    #[value(name = "mo")]
    Months,
    #[value(name = "y")]
    Years,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ModeArg {
    Sequential,
    Concurrent,
}

impl From<ModeArg> for ExecutionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Sequential => ExecutionMode::Sequential,
            ModeArg::Concurrent => ExecutionMode::Concurrent,
        }
    }
}

#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Unit the samples are recorded in
    #[arg(short, long, value_enum, default_value_t = UnitArg::Milliseconds)]
    pub unit: UnitArg,

    /// How bulk start/stop visits the timers
    #[arg(short, long, value_enum, default_value_t = ModeArg::Concurrent)]
    pub mode: ModeArg,

    /// Threads used by concurrent bulk operations (0 = one per core)
    #[arg(short, long, default_value_t = 0)]
    pub threads: usize,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl CommonArgs {
    pub fn threads(&self) -> Threads {
        match self.threads {
            0 => Threads::Auto,
            1 => Threads::Single,
            n => Threads::Multi(n),
        }
    }
}

/// Calls the generic `$run` with the duration unit picked on the command line.
#[macro_export]
macro_rules! with_unit {
    ($unit:expr, $run:ident($($arg:expr),* $(,)?)) => {
        match $unit {
            $crate::args::UnitArg::Nanoseconds => $run::<laptime::Nanoseconds>($($arg),*),
            $crate::args::UnitArg::Microseconds => $run::<laptime::Microseconds>($($arg),*),
            $crate::args::UnitArg::Milliseconds => $run::<laptime::Milliseconds>($($arg),*),
            $crate::args::UnitArg::Seconds => $run::<laptime::Seconds>($($arg),*),
            $crate::args::UnitArg::Minutes => $run::<laptime::Minutes>($($arg),*),
            $crate::args::UnitArg::Hours => $run::<laptime::Hours>($($arg),*),
            $crate::args::UnitArg::Days => $run::<laptime::Days>($($arg),*),
            $crate::args::UnitArg::Weeks => $run::<laptime::Weeks>($($arg),*),
            $crate::args::UnitArg::Months => $run::<laptime::Months>($($arg),*),
            $crate::args::UnitArg::Years => $run::<laptime::Years>($($arg),*),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suffix<U: laptime::DurationUnit>() -> &'static str {
        U::SUFFIX
    }

    #[test]
    fn test_every_unit_is_selectable() {
        let names: Vec<String> = UnitArg::value_variants()
            .iter()
            .filter_map(|unit| unit.to_possible_value())
            .map(|value| value.get_name().to_owned())
            .collect();

        assert_eq!(names, ["ns", "us", "ms", "s", "min", "h", "d", "w", "mo", "y"]);
        assert_eq!(crate::with_unit!(UnitArg::Years, suffix()), "y");
        assert_eq!(crate::with_unit!(UnitArg::Days, suffix()), "d");
        assert_eq!(crate::with_unit!(UnitArg::Microseconds, suffix()), "µs");
    }
}
