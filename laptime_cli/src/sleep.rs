use std::{thread, time::Duration};

use clap::Args;
use laptime::{BenchTimer, DurationUnit, ExecutionMode};
use tracing::info;

use crate::{args::CommonArgs, parsers, report};

#[derive(Args, Debug)]
pub struct SleepArgs {
    /// Number of timers started and stopped together
    #[arg(short = 'n', long, default_value_t = 3)]
    timers: usize,

    /// Time to sleep between the bulk start and the bulk stop (e.g. "250ms", "PT2S")
    #[arg(short, long, value_parser = parsers::parse_duration, default_value = "250ms")]
    duration: jiff::SignedDuration,

    #[command(flatten)]
    common: CommonArgs,
}

pub fn run(args: SleepArgs) -> Result<(), anyhow::Error> {
    crate::with_unit!(args.common.unit, run_with_unit(&args))
}

fn run_with_unit<U: DurationUnit>(args: &SleepArgs) -> Result<(), anyhow::Error> {
    let sleep = Duration::try_from(args.duration)?;
    let mode = ExecutionMode::from(args.common.mode);
    let mut bench = BenchTimer::<U>::with_threads(args.common.threads())?;

    for i in 0..args.timers {
        bench.add(format!("timer #{i}"));
    }

    info!(?mode, timers = args.timers, "Sleeping for {:?}", sleep);
    bench.start_all(mode);
    thread::sleep(sleep);
    bench.stop_all(mode);

    report::print(&report::collect_reports(&bench.get_all()), args.common.json)
}
