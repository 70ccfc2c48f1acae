//! Subcommand dispatch
//!
//! Resolves settings and flags from the parsed arguments and hands off to
//! the batch runners. Run-level failures (missing required root, bad
//! configuration) propagate out of here; per-file failures are already
//! absorbed inside the batch.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::ArgMatches;
use log::debug;

use crate::batch::{run_convert, run_rebrand, run_strip, BatchStats};
use crate::config::load_settings;

/// Execute the subcommand selected on the command line
pub fn perform_processing_based_on_arguments(matches: &ArgMatches) -> Result<()> {
    let config_path = matches.get_one::<String>("config").map(PathBuf::from);
    let settings = load_settings(config_path.as_deref())?;
    let dry_run = matches.get_flag("dry");

    if dry_run {
        debug!("Dry run: no files will be written");
    }

    let stats: BatchStats = match matches.subcommand() {
        Some(("strip", sub)) => run_strip(&settings, path_option(sub, "root").as_deref(), dry_run)?,
        Some(("rebrand", sub)) => {
            run_rebrand(&settings, path_option(sub, "root").as_deref(), dry_run)?
        }
        Some(("convert", sub)) => run_convert(
            &settings,
            path_option(sub, "root").as_deref(),
            path_option(sub, "dest").as_deref(),
            dry_run,
        )?,
        _ => return Err(anyhow!("No subcommand provided")),
    };

    debug!(
        "Batch finished: {} processed, {} skipped, {} failed",
        stats.processed, stats.skipped, stats.failed
    );

    Ok(())
}

fn path_option(matches: &ArgMatches, id: &str) -> Option<PathBuf> {
    matches
        .get_one::<String>(id)
        .map(|value| PathBuf::from(shellexpand::tilde(value).to_string()))
}
