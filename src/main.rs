//! Benchmark runner for the four product kernels.

use std::io;

use clap::Parser;
use matprod::default_thread_count;
use matprod::harness::{BenchConfig, run_benchmark};

/// Times naive, cache-reordered, vectorized and parallel matrix products.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Rows and columns of every matrix
    #[arg(long, default_value_t = 1000)]
    size: usize,

    /// Seed for the operand generator
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Worker threads for the parallel kernel [default: available cores]
    #[arg(long)]
    threads: Option<usize>,

    /// Don't wait for enter between kernels
    #[arg(long)]
    no_pause: bool,

    /// Relative tolerance when comparing results
    #[arg(long, default_value_t = 1e-9)]
    tolerance: f64,
}

impl From<Args> for BenchConfig {
    fn from(args: Args) -> Self {
        BenchConfig {
            size: args.size,
            seed: args.seed,
            threads: args.threads.unwrap_or_else(default_thread_count),
            pause: !args.no_pause,
            tolerance: args.tolerance,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let config = BenchConfig::from(Args::parse());

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_benchmark(&config, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
