//! tourney-diff
//!
//! Compares the result files written by the mutex and atomic builds of the
//! tournament program, ignoring lines that carry thread ids.

mod cli;
mod driver;
mod logging;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use td_compare::ComparisonPlan;
use tracing::info;

use cli::Args;

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    logging::init(args.verbose);

    let plan = ComparisonPlan::standard(args.base_dir()).with_counts(args.counts.clone());
    let options = args.compare_options();

    let stdout = io::stdout();
    let summary = driver::run(&plan, &options, &mut stdout.lock())?;

    if let Some(path) = &args.json {
        summary
            .write_json(path)
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
        info!(path = %path.display(), "summary written");
    }

    // Mismatches only change the exit status when asked to.
    if args.strict && !summary.passed() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
