/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "prompt_tools";

/// Application name used for identification
pub const APPLICATION: &str = "prompt_tools";

/// Name of the configuration file probed in the per-user config directory
pub const CONFIG_FILE_NAME: &str = "ptools.yaml";

/// Glob pattern matching Markdown files in a single directory
pub const MARKDOWN_GLOB: &str = "*.md";

/// Glob pattern matching Markdown files recursively
pub const MARKDOWN_GLOB_RECURSIVE: &str = "**/*.md";

/// Glob pattern matching every file in a single directory
pub const ANY_FILE_GLOB: &str = "*.*";

/// Opening marker of a fenced copyright block
pub const COPYRIGHT_FENCE: &str = "```copyright";

/// Width of the separator line printed around batch reports
pub const SEPARATOR_WIDTH: usize = 50;

/// Default path for the log file (empty means console-only logging)
pub const LOG_FILE_DEFAULT: &str = "";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read from a specific config file";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Run without writing any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log-file command-line option
pub const LOG_FILE_HELP: &str = "Also write log output to the given file";

/// Help text for the root command-line option
pub const ROOT_HELP: &str = "Prompts root directory to process";

/// Help text for the dest command-line option
pub const DEST_HELP: &str = "Destination directory for generated modules";
