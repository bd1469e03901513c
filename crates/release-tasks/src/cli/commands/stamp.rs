//! Stamp command

use std::path::PathBuf;

use clap::{Args, ValueHint};
use tracing::info;

use release_tasks_changelog::StampOptions;
use release_tasks_tasks::StampChangelogTask;

use super::{load_config, resolve, run_task};
use crate::cli::Cli;

/// Stamp the markdown changelog heading with version and date
#[derive(Debug, Args)]
pub struct StampCommand {
    /// Markdown changelog (defaults to the configured changelog file)
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub changelog_file: Option<PathBuf>,

    /// Version for the heading
    #[arg(long, value_name = "VERSION")]
    pub version_number: String,

    /// Stamp even if stamp.enabled is false
    #[arg(long, conflicts_with = "no_stamp")]
    pub stamp: bool,

    /// Do not stamp even if stamp.enabled is true
    #[arg(long)]
    pub no_stamp: bool,

    /// Treat the build as a non-release build (nothing is stamped)
    #[arg(long)]
    pub no_release: bool,
}

impl StampCommand {
    /// Whether stamping was requested, given the configured default
    fn requested(&self, configured: bool) -> bool {
        if self.stamp {
            true
        } else if self.no_stamp {
            false
        } else {
            configured
        }
    }

    /// Execute the stamp command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        info!(version = %self.version_number, "executing stamp command");
        let (cwd, config) = load_config()?;

        let options = StampOptions::new(
            resolve(&cwd, self.changelog_file.as_ref(), &config.changelog.file),
            self.version_number.clone(),
            self.requested(config.stamp.enabled),
        )
        .with_release(config.release && !self.no_release);

        run_task(&StampChangelogTask::new(options), cli)
    }
}
