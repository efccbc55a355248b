//! Batch driver for the `outflank` solver.
//!
//! Loads a problem file, solves every position on a worker pool, and writes one
//! scored line per position in input order. Positions are solved independently;
//! only the result file is written from a single thread, after the pool finishes.

pub mod cli;
pub mod problems;
pub mod report;

use anyhow::{bail, Context, Result};
use cli::Cli;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use log::{debug, info};
use outflank_solver::{Problem, Solution};
use rayon::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::time::{Duration, Instant};

/// What a run did, for reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub problems: usize,
    pub nodes: u64,
    /// Sum of `|reference - score|`, if any problem carried a reference.
    pub diff: Option<u64>,
    pub elapsed: Duration,
}

/// Load, solve, and write results as configured by `cli`.
pub fn run(cli: &Cli) -> Result<Summary> {
    if cli.alpha >= cli.beta {
        bail!("--alpha ({}) must be below --beta ({})", cli.alpha, cli.beta);
    }

    let entries = problems::load_problems(&cli.input)
        .with_context(|| format!("failed to load problems from {}", cli.input.display()))?;
    info!("loaded {} problems from {}", entries.len(), cli.input.display());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(cli.threads)
        .build()
        .context("failed to start worker pool")?;
    debug!("solving on {} threads", pool.current_num_threads());

    let progress = if cli.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(entries.len() as u64)
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} ({per_sec})")?,
    );

    let batch: Vec<Problem> = entries
        .iter()
        .map(|entry| Problem::new(entry.position.board, cli.alpha, cli.beta))
        .collect();

    let start = Instant::now();
    let solutions: Vec<Solution> = pool.install(|| {
        outflank_solver::solve_par_iter(&batch)
            .progress_with(progress.clone())
            .collect()
    });
    let elapsed = start.elapsed();
    progress.finish_and_clear();

    let scores: Vec<i8> = solutions.iter().map(|solution| solution.score).collect();
    let nodes: u64 = solutions.iter().map(|solution| solution.nodes).sum();
    info!(
        "solved {} problems in {:.3}s ({} nodes)",
        entries.len(),
        elapsed.as_secs_f64(),
        nodes
    );

    let output = File::create(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;
    report::write_results(BufWriter::new(output), &entries, &scores)
        .with_context(|| format!("failed to write results to {}", cli.output.display()))?;
    info!("wrote results to {}", cli.output.display());

    let diff = report::reference_diff(&entries, &scores);
    if let Some(diff) = diff {
        info!("diff: {}", diff);
        if cli.strict && diff > 0 {
            bail!("scores differ from their references (diff {})", diff);
        }
    }

    Ok(Summary {
        problems: entries.len(),
        nodes,
        diff,
        elapsed,
    })
}
