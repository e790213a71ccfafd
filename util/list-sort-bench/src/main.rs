//! Times the linked list merge sorts over a range of list lengths.
//!
//! Output is a few `#` comment lines describing the run, followed by one tab separated row per
//! list length: length, mean sort time, total time of all iterations including list setup,
//! fastest and slowest sort, all in seconds. `--json` prints one JSON object per length instead.
//! `--count-comparisons` prints comparison counts of three engines on the same lists.
//!
//! Every sorted list is verified. A bad sort ends the process with exit code 1 (out of order),
//! 2 (wrong length) or 3 (reset chain damaged).

mod measure;
mod report;

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use list_sort_research::verify::VerifyError;
use list_test_tools::lists::Placement;
use thiserror::Error;
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "list-sort-bench")]
#[command(about = "Times linked list merge sorts over a range of list lengths", long_about = None)]
pub struct Args {
    /// Sort engine to time
    #[arg(short = 'e', long, default_value = "recursive")]
    pub engine: String,

    /// Beginning list length
    #[arg(short = 'b', long, default_value_t = 1_000)]
    pub begin: usize,

    /// Sort lists up to, but not including, this length
    #[arg(short = 'u', long, default_value_t = 18_000_000)]
    pub until: usize,

    /// Increment of list length
    #[arg(short = 'i', long, default_value_t = 200_000)]
    pub increment: usize,

    /// Sorts per list length
    #[arg(short = 'n', long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub iterations: u32,

    /// Initial key order
    #[arg(long, value_enum, default_value_t = Pattern::Random)]
    pub pattern: Pattern,

    /// Placement of list nodes in memory
    #[arg(long, value_enum, default_value_t = LayoutArg::Prepended)]
    pub layout: LayoutArg,

    /// Draw random keys from the operating system's cryptographic generator
    #[arg(short = 'c', long)]
    pub crypto: bool,

    /// Give the sorted list fresh random keys and sort it again instead of building a new list
    #[arg(short = 'R', long)]
    pub reuse: bool,

    /// Report comparison counts of the recursive, bottom-up and doubling sorts instead of times
    #[arg(long, conflicts_with_all = ["engine", "reuse"])]
    pub count_comparisons: bool,

    /// Print JSON lines instead of tab separated rows
    #[arg(long)]
    pub json: bool,

    /// Pin the benchmark thread to this core
    #[arg(long)]
    pub pin_core: Option<usize>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Pattern {
    Random,
    Ascending,
    Descending,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// Nodes pushed onto the head, addresses descend along the list
    Prepended,
    /// Addresses ascend along the list
    AddressOrdered,
    /// Nodes at random addresses
    Scattered,
}

impl From<LayoutArg> for Placement {
    fn from(layout: LayoutArg) -> Self {
        match layout {
            LayoutArg::Prepended => Placement::Prepended,
            LayoutArg::AddressOrdered => Placement::AddressOrdered,
            LayoutArg::Scattered => Placement::Scattered,
        }
    }
}

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("unknown engine {0:?}, expected one of: {1}")]
    UnknownEngine(String, String),
    #[error("increment must be at least 1")]
    ZeroIncrement,
    #[error("{engine} sort, iteration {iteration}: {source}")]
    Verify {
        engine: &'static str,
        iteration: u32,
        #[source]
        source: VerifyError,
    },
    #[error("could not encode report row")]
    Json(#[from] serde_json::Error),
}

impl BenchError {
    fn exit_code(&self) -> u8 {
        match self {
            BenchError::Verify { source, .. } => source.exit_code(),
            // EX_USAGE
            BenchError::UnknownEngine(..) | BenchError::ZeroIncrement => 64,
            BenchError::Json(_) => 70,
        }
    }
}

fn main() -> ExitCode {
    // Logs go to stderr, stdout carries the report.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let args = Args::parse();

    if let Some(core) = args.pin_core {
        measure::pin_thread_to_core(core);
    }

    let result = if args.count_comparisons {
        measure::count_comparisons(&args)
    } else {
        measure::time_sorts(&args)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "benchmark failed");
            ExitCode::from(err.exit_code())
        }
    }
}
