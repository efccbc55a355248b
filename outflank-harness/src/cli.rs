//! Command-line configuration.

use clap::Parser;
use std::path::PathBuf;

/// Solve a file of Othello positions exactly, one score per position.
#[derive(Clone, Debug, Parser)]
#[command(name = "outflank", version)]
pub struct Cli {
    /// Problem file: a count, then one position per line, each optionally
    /// followed by a reference score
    #[arg(short, long)]
    pub input: PathBuf,

    /// Result file to write
    #[arg(short, long)]
    pub output: PathBuf,

    /// Worker threads (0 = one per core)
    #[arg(short, long, default_value_t = 0)]
    pub threads: usize,

    /// Lower bound of the search window
    #[arg(
        long,
        default_value_t = -64,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i8).range(-64..=64),
    )]
    pub alpha: i8,

    /// Upper bound of the search window
    #[arg(
        long,
        default_value_t = 64,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i8).range(-64..=64),
    )]
    pub beta: i8,

    /// Fail if any score differs from its reference
    #[arg(long)]
    pub strict: bool,

    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}
