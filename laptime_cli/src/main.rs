use clap::{Parser, Subcommand};
use tracing::info;

use crate::{sleep::SleepArgs, strings::StringsArgs};

mod args;
mod parsers;
mod report;
mod sleep;
mod strings;
mod workload;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Time random string generation, one timer per string length
    Strings {
        #[command(flatten)]
        args: StringsArgs,
    },
    /// Start several timers together, sleep, then stop them together
    Sleep {
        #[command(flatten)]
        args: SleepArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Strings { args }) => strings::run(args)?,
        Some(Commands::Sleep { args }) => sleep::run(args)?,
        None => info!("No command provided, see --help"),
    }

    Ok(())
}
