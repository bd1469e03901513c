//! Release notes command

use std::path::PathBuf;

use clap::{Args, ValueHint};
use tracing::info;

use release_tasks_changelog::{default_html_path, ReleaseNotesOptions, RendererRegistry};
use release_tasks_core::ConfigError;
use release_tasks_tasks::CreateReleaseNotesHtmlTask;

use super::{load_config, resolve, run_task};
use crate::cli::Cli;

/// Render the markdown changelog into release notes HTML
#[derive(Debug, Args)]
pub struct ReleaseNotesCommand {
    /// Markdown changelog (defaults to the configured changelog file)
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub changelog_file: Option<PathBuf>,

    /// HTML page to create or update (defaults to release_notes.html_file,
    /// then the changelog path with an .htm extension)
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub html_file: Option<PathBuf>,

    /// Class of the element that receives the notes
    #[arg(long, value_name = "CLASS")]
    pub marker_class: Option<String>,

    /// Markdown flavor: commonmark or gfm
    #[arg(long, value_parser = ["commonmark", "gfm"])]
    pub flavor: Option<String>,
}

impl ReleaseNotesCommand {
    /// Execute the release notes command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        info!("executing release-notes command");
        let (cwd, config) = load_config()?;

        let changelog_file = resolve(&cwd, self.changelog_file.as_ref(), &config.changelog.file);
        let html_file = match self.html_file.as_ref().or(config.release_notes.html_file.as_ref()) {
            Some(path) => cwd.join(path),
            None => default_html_path(&changelog_file),
        };

        let flavor = self
            .flavor
            .clone()
            .unwrap_or(config.release_notes.flavor);
        let registry = RendererRegistry::new();
        let renderer = registry.get(&flavor).ok_or_else(|| ConfigError::InvalidValue {
            field: "flavor".to_string(),
            message: format!("must be one of: {}", registry.names().join(", ")),
        })?;

        let options = ReleaseNotesOptions::new(changelog_file, Some(html_file)).with_marker_class(
            self.marker_class
                .clone()
                .unwrap_or(config.release_notes.marker_class),
        );

        run_task(
            &CreateReleaseNotesHtmlTask::new(options).with_renderer(renderer),
            cli,
        )
    }
}
