use std::hint::black_box;

use clap::Args;
use laptime::{BenchTimer, DurationUnit};
use rand::{SeedableRng, rngs::SmallRng};
use tracing::{debug, info};

use crate::{args::CommonArgs, report, workload};

#[derive(Args, Debug)]
pub struct StringsArgs {
    /// Number of timed loops, each generating longer strings than the last
    #[arg(short, long, default_value_t = 5)]
    loops: usize,

    /// Strings generated per loop
    #[arg(short, long, default_value_t = 100_000)]
    iterations: usize,

    /// Length step between loops
    #[arg(short, long, default_value_t = 20)]
    base_length: usize,

    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    #[command(flatten)]
    common: CommonArgs,
}

pub fn run(args: StringsArgs) -> Result<(), anyhow::Error> {
    crate::with_unit!(args.common.unit, run_with_unit(&args))
}

fn run_with_unit<U: DurationUnit>(args: &StringsArgs) -> Result<(), anyhow::Error> {
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut bench = BenchTimer::<U>::with_threads(args.common.threads())?;

    bench.add("main").start();

    for i in 1..=args.loops {
        let len = args.base_length * i;
        let title = format!("loop #{i}, size {len}");
        debug!("Running {title}");

        let timer = bench.add(title);
        timer.start();
        for _ in 0..args.iterations {
            black_box(workload::generate_string(&mut rng, len));
            timer.timestamp();
        }
        timer.stop();
    }

    bench.stop_all(args.common.mode.into());
    let timers = bench.get_all();
    bench.remove_all();

    info!("Collected {} timers", timers.len());
    report::print(&report::collect_reports(&timers), args.common.json)
}
