//! Purble Pairs in the terminal.
//!
//! Play against the AI on stdin/stdout. Log lines go to stderr and are
//! filtered with `RUST_LOG` (default `warn`).

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use purble_pairs::{Controller, GameBuilder};

#[derive(Debug, Parser)]
#[command(name = "purble-pairs", about = "Memory-matching game against a simple AI")]
struct Args {
    /// Deal a specific board (replays the same game layout)
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the pauses around AI moves and misses
    #[arg(long)]
    fast: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut builder = GameBuilder::new();
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    if args.fast {
        builder = builder.fast();
    }
    let (engine, config) = builder.build();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut controller = Controller::new(engine, config.pacing, stdin.lock(), stdout.lock());
    controller
        .run()
        .with_context(|| format!("game with seed {} ended early", config.seed.unwrap_or_default()))?;

    Ok(())
}
