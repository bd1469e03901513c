//! Changelog entry command

use std::path::PathBuf;

use clap::{Args, ValueHint};
use tracing::info;

use release_tasks_changelog::ChangelogEntryOptions;
use release_tasks_core::ConfigError;
use release_tasks_tasks::CreateChangelogEntryTask;

use super::{load_config, resolve, run_task};
use crate::cli::Cli;

/// Prepend a Debian changelog entry built from the markdown changelog
#[derive(Debug, Args)]
pub struct ChangelogEntryCommand {
    /// Markdown changelog (defaults to the configured changelog file)
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub changelog_file: Option<PathBuf>,

    /// Version for the new stanza
    #[arg(long, value_name = "VERSION")]
    pub version_number: String,

    /// Source package name (defaults to debian.product)
    #[arg(long, value_name = "NAME")]
    pub product_name: Option<String>,

    /// Debian changelog to update (defaults to debian.changelog)
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub debian_changelog: Option<PathBuf>,

    /// Target distribution, e.g. "stable"
    #[arg(long)]
    pub stability: Option<String>,

    /// Upload urgency, e.g. "medium"
    #[arg(long)]
    pub urgency: Option<String>,

    /// Maintainer as "Name <email>"
    #[arg(long, value_name = "AUTHOR")]
    pub author: Option<String>,

    /// Treat the build as a non-release build (UNRELEASED stanza)
    #[arg(long)]
    pub no_release: bool,
}

impl ChangelogEntryCommand {
    /// Execute the changelog entry command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        info!(version = %self.version_number, "executing changelog-entry command");
        let (cwd, config) = load_config()?;

        let product_name = self
            .product_name
            .clone()
            .or(config.debian.product)
            .ok_or_else(|| ConfigError::MissingField("product name (--product-name or debian.product)".to_string()))?;

        let options = ChangelogEntryOptions {
            changelog_file: resolve(&cwd, self.changelog_file.as_ref(), &config.changelog.file),
            version_number: self.version_number.clone(),
            product_name,
            debian_changelog: resolve(&cwd, self.debian_changelog.as_ref(), &config.debian.changelog),
            stability: self.stability.clone().or(config.debian.stability),
            urgency: self.urgency.clone().or(config.debian.urgency),
            changelog_author_info: self.author.clone().or(config.debian.author),
            release: config.release && !self.no_release,
        };

        run_task(&CreateChangelogEntryTask::new(options), cli)
    }
}
