//! Batch runner
//!
//! One shared load → skip-check → transform → sink routine drives all
//! three tasks. A single task's failure is caught at the task boundary,
//! reported, and never stops the batch; the runner always attempts every
//! task and always prints the final summary.

use std::path::{Path, PathBuf};

use colored::Colorize;
use log::{debug, error};

use crate::config::Settings;
use crate::constants::{ANY_FILE_GLOB, SEPARATOR_WIDTH};
use crate::content::{read_text, write_text};
use crate::discovery::{find_files, find_markdown_files, require_directory};
use crate::errors::Result;
use crate::logging::format_message;
use crate::module_gen::markdown_to_module;
use crate::transforms::{
    apply_replacements, collapse_blank_lines, has_copyright_block, has_replacement_target,
    strip_copyright_blocks,
};

/// One source-to-destination file transformation unit
#[derive(Debug, Clone)]
pub struct FileTask {
    /// Where the input text is read from
    pub source: PathBuf,
    /// Where the result is written; may equal the source for in-place edits
    pub destination: PathBuf,
}

impl FileTask {
    /// Create an in-place task
    pub fn in_place(path: &Path) -> FileTask {
        FileTask {
            source: path.to_path_buf(),
            destination: path.to_path_buf(),
        }
    }
}

/// Outcome of a single file task
#[derive(Debug, Clone, PartialEq)]
pub enum TaskOutcome {
    /// The transform applied and the destination was written
    Written,
    /// No qualifying pattern was present; nothing was written
    Skipped,
    /// The task failed; the batch continues
    Failed(String),
}

/// Counters for a batch run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchStats {
    /// Number of files transformed and written
    pub processed: usize,
    /// Number of files with no qualifying pattern
    pub skipped: usize,
    /// Number of per-file failures
    pub failed: usize,
}

impl BatchStats {
    /// Creates empty stats
    pub fn new() -> Self {
        BatchStats::default()
    }

    /// Record a task outcome
    pub fn record(&mut self, outcome: &TaskOutcome) {
        match outcome {
            TaskOutcome::Written => self.processed += 1,
            TaskOutcome::Skipped => self.skipped += 1,
            TaskOutcome::Failed(_) => self.failed += 1,
        }
    }

    /// The final summary line of a batch report
    pub fn summary_line(&self) -> String {
        format!(
            "Done! {} processed, {} skipped, {} failed.",
            self.processed, self.skipped, self.failed
        )
    }
}

/// Execute one file task with the given skip rule and transform
///
/// Every error is caught here and turned into `TaskOutcome::Failed`; no
/// error crosses the task boundary into the batch loop.
pub fn process_task<Q, T>(task: &FileTask, qualifies: Q, transform: T, dry_run: bool) -> TaskOutcome
where
    Q: Fn(&str) -> bool,
    T: Fn(&str) -> String,
{
    let content = match read_text(&task.source) {
        Ok(content) => content,
        Err(e) => return TaskOutcome::Failed(e.to_string()),
    };

    if !qualifies(&content) {
        return TaskOutcome::Skipped;
    }

    let transformed = transform(&content);

    if dry_run {
        debug!(
            "Dry run: would write {} bytes to {}",
            transformed.len(),
            task.destination.display()
        );
        return TaskOutcome::Written;
    }

    match write_text(&task.destination, &transformed) {
        Ok(()) => TaskOutcome::Written,
        Err(e) => TaskOutcome::Failed(e.to_string()),
    }
}

/// Print the fixed-width separator line of a batch report
pub fn print_separator() {
    println!("{}", "=".repeat(SEPARATOR_WIDTH));
}

/// Print the per-file status line for an outcome
fn report_outcome(label: &str, outcome: &TaskOutcome) {
    match outcome {
        TaskOutcome::Written => {
            let plain = format!("[OK] {label}");
            let colored = format!("{} {label}", "[OK]".green());
            println!("{}", format_message(&plain, &colored));
        }
        TaskOutcome::Skipped => {
            let plain = format!("[SKIP] {label}");
            let colored = format!("{} {label}", "[SKIP]".yellow());
            println!("{}", format_message(&plain, &colored));
        }
        TaskOutcome::Failed(message) => {
            let plain = format!("[FAIL] {label} - {message}");
            let colored = format!("{} {label} - {message}", "[FAIL]".red());
            println!("{}", format_message(&plain, &colored));
            error!("Task failed for {label}: {message}");
        }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

/// Run a set of in-place tasks and report each outcome
fn run_in_place_tasks<Q, T>(
    files: &[PathBuf],
    qualifies: Q,
    transform: T,
    dry_run: bool,
) -> BatchStats
where
    Q: Fn(&str) -> bool,
    T: Fn(&str) -> String,
{
    let mut stats = BatchStats::new();

    for path in files {
        let task = FileTask::in_place(path);
        let outcome = process_task(&task, &qualifies, &transform, dry_run);
        report_outcome(&file_label(path), &outcome);
        stats.record(&outcome);
    }

    stats
}

/// Remove fenced copyright blocks from every Markdown file under the root
///
/// In-place edit over the recursive `.md` enumeration. Files without the
/// opening marker are skipped, which also makes re-runs report skips
/// instead of rewriting already-clean files.
pub fn run_strip(settings: &Settings, root_override: Option<&Path>, dry_run: bool) -> Result<BatchStats> {
    let root = root_override.unwrap_or(&settings.prompts_root);
    require_directory(root)?;

    let files = find_markdown_files(root, true)?;

    println!("Found {} Markdown files", files.len());
    print_separator();

    let stats = run_in_place_tasks(
        &files,
        has_copyright_block,
        |content| collapse_blank_lines(&strip_copyright_blocks(content)),
        dry_run,
    );

    print_separator();
    println!("{}", stats.summary_line());

    Ok(stats)
}

/// Apply the ordered brand/name substitution table across the prompt files
///
/// Scans top-level `.md` files plus every file of the configured
/// subdirectories. Files containing none of the find-strings are skipped;
/// after a successful pass nothing qualifies any more, so a second run
/// reports skips only.
pub fn run_rebrand(
    settings: &Settings,
    root_override: Option<&Path>,
    dry_run: bool,
) -> Result<BatchStats> {
    let root = root_override.unwrap_or(&settings.prompts_root);
    require_directory(root)?;

    let mut files = find_markdown_files(root, false)?;
    for subdir in &settings.rebrand_subdirs {
        files.extend(find_files(&root.join(subdir), ANY_FILE_GLOB)?);
    }

    println!("Found {} files", files.len());
    print_separator();

    let replacements = settings.replacements.clone();
    let stats = run_in_place_tasks(
        &files,
        |content| has_replacement_target(content, &replacements),
        |content| apply_replacements(content, &replacements),
        dry_run,
    );

    print_separator();
    println!("{}", stats.summary_line());

    Ok(stats)
}

/// Convert the enumerated Markdown prompts into module artifacts
///
/// Each descriptor's destination lives in a parallel generated tree whose
/// parent directories are created on demand. A declared source that does
/// not exist is reported as skipped, distinctly from failures during
/// processing.
pub fn run_convert(
    settings: &Settings,
    root_override: Option<&Path>,
    dest_override: Option<&Path>,
    dry_run: bool,
) -> Result<BatchStats> {
    let root = root_override.unwrap_or(&settings.prompts_root);
    let dest = dest_override.unwrap_or(&settings.module_root);

    print_separator();
    println!("Converting Markdown prompts to TypeScript modules");
    print_separator();

    let mut stats = BatchStats::new();

    for conversion in &settings.conversions {
        let source = root.join(&conversion.source);
        let destination = dest.join(&conversion.target);

        if !source.exists() {
            println!("[SKIP] Source not found: {}", source.display());
            stats.record(&TaskOutcome::Skipped);
            continue;
        }

        let task = FileTask {
            source,
            destination: destination.clone(),
        };
        let outcome = process_task(
            &task,
            |_| true,
            |content| {
                markdown_to_module(content, &conversion.export_name, &conversion.description)
            },
            dry_run,
        );
        report_outcome(&destination.display().to_string(), &outcome);
        stats.record(&outcome);
    }

    print_separator();
    println!("{}", stats.summary_line());

    Ok(stats)
}
