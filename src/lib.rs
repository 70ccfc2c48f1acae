pub use cli::*;
pub use errors::*;
pub use runner::*;

pub mod batch;
pub mod cli;
pub mod config;
pub mod constants;
pub mod content;
pub mod discovery;
pub mod errors;
pub mod logging;
pub mod module_gen;
pub mod runner;
pub mod transforms;

pub mod prelude {
    pub use crate::batch::{
        run_convert, run_rebrand, run_strip, BatchStats, FileTask, TaskOutcome,
    };
    pub use crate::cli::{get_log_file, get_matches, get_verbosity};
    pub use crate::config::{load_settings, ConversionSpec, Replacement, Settings};
    pub use crate::errors::{
        config_parsing_error, directory_not_found_error, file_operation_error, generic_error,
        glob_pattern_error, invalid_encoding_error, replacement_order_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{format_message, init_default_logger, init_logger, LogLevel};
    pub use crate::runner::perform_processing_based_on_arguments;
}
