//! CLI commands

mod changelog_entry;
mod completions;
mod init;
mod release_notes;
mod stamp;

pub use changelog_entry::ChangelogEntryCommand;
pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use release_notes::ReleaseNotesCommand;
pub use stamp::StampCommand;

use std::path::{Path, PathBuf};

use release_tasks_core::config::{load_config_or_default, Config};
use release_tasks_tasks::{execute, Task, TaskReporterRegistry, TaskStatus};

use crate::cli::{output, Cli, OutputFormat};
use crate::exit_codes;

/// Load configuration for the current directory
fn load_config() -> anyhow::Result<(PathBuf, Config)> {
    let cwd = std::env::current_dir()?;
    let (config, _) = load_config_or_default(&cwd)?;
    Ok((cwd, config))
}

/// Resolve a path from a flag or the configuration against the working directory
fn resolve(cwd: &Path, flag: Option<&PathBuf>, configured: &Path) -> PathBuf {
    cwd.join(flag.map(PathBuf::as_path).unwrap_or(configured))
}

/// Run a task, print its result and map it to an exit code
fn run_task(task: &dyn Task, cli: &Cli) -> anyhow::Result<i32> {
    let result = execute(task, &TaskReporterRegistry::new());

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => match result.status {
            TaskStatus::Completed if !cli.quiet => output::success(&result.message),
            TaskStatus::Skipped if !cli.quiet => output::warning(&result.message),
            TaskStatus::Failed => output::error(&result.message),
            _ => {}
        },
    }

    Ok(if result.succeeded() {
        exit_codes::SUCCESS
    } else {
        exit_codes::ERROR
    })
}
