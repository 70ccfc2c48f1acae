use clap::{command, crate_description, crate_name, crate_version, Arg, ArgMatches, Command};

use crate::constants::{
    CONFIG_HELP, DEST_HELP, DRY_RUN_HELP, LOG_FILE_DEFAULT, LOG_FILE_HELP, ROOT_HELP,
    VERBOSE_HELP,
};
use crate::errors::Result;
use crate::logging::LogLevel;

/// Sets up and returns command-line argument matches
///
/// Global arguments:
/// - `config`: Path to the configuration file
/// - `dry`: Run without writing any files
/// - `verbose`: Increase verbosity level
/// - `log_file`: Also write log output to a file
///
/// Subcommands:
/// - `strip`: Remove fenced copyright blocks from Markdown files
/// - `rebrand`: Apply the brand/name substitution table
/// - `convert`: Generate TypeScript modules from Markdown prompts
pub fn get_matches() -> Result<ArgMatches> {
    // define arg for reading from a specific config file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP)
        .global(true);

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(clap::ArgAction::SetTrue)
        .global(true);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count)
        .global(true);

    // define arg for log file
    let arg_log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .default_value(LOG_FILE_DEFAULT)
        .global(true);

    let arg_root = Arg::new("root").short('r').long("root").help(ROOT_HELP);

    let matches = command!()
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_config)
        .arg(arg_dry)
        .arg(arg_log_file)
        .arg(arg_verbose)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("strip")
                .about("Remove fenced copyright blocks from Markdown prompt files")
                .arg(arg_root.clone()),
        )
        .subcommand(
            Command::new("rebrand")
                .about("Apply literal brand/name substitutions across prompt files")
                .arg(arg_root.clone()),
        )
        .subcommand(
            Command::new("convert")
                .about("Generate TypeScript modules from Markdown prompts")
                .arg(arg_root)
                .arg(Arg::new("dest").short('d').long("dest").help(DEST_HELP)),
        )
        .get_matches();

    Ok(matches)
}

/// Gets the verbosity level from the command-line arguments
///
/// Counts the occurrences of the "verbose" flag and converts the count to
/// a LogLevel value.
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Gets the log file path from the command-line arguments
///
/// The tilde-expanded path, or an empty string when file logging is off.
pub fn get_log_file(matches: &ArgMatches) -> String {
    let filename = matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string());
    shellexpand::tilde(&filename).to_string()
}
