use anyhow::Result;
use clap::Parser;
use outflank_harness::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let summary = outflank_harness::run(&cli)?;
    if let Some(diff) = summary.diff {
        eprintln!("diff: {}", diff);
    }

    Ok(())
}
