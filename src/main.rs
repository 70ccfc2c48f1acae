use std::process::exit;

use anyhow::Result;

use prompt_tools::prelude::{
    get_log_file, get_matches, get_verbosity, init_logger,
    perform_processing_based_on_arguments,
};

fn main() {
    human_panic::setup_panic!();

    if let Err(error) = run() {
        eprintln!("Error: {error}");
        exit(1);
    }
}

fn run() -> Result<()> {
    let matches = get_matches()?;

    let log_file = get_log_file(&matches);
    init_logger(get_verbosity(&matches), &log_file)?;

    perform_processing_based_on_arguments(&matches)
}
