//! The changelog operations as tasks

use std::sync::Arc;

use release_tasks_changelog::{
    create_changelog_entry, stamp_changelog, ChangelogEntryOptions, MarkdownRenderer,
    ReleaseNotesOptions, ReleaseNotesOutcome, ReleaseNotesWriter, StampOptions, StampOutcome,
};
use release_tasks_core::{Result, TaskKind};

use crate::task::{Task, TaskOutcome};

/// Prepends a Debian changelog stanza built from the markdown changelog
pub struct CreateChangelogEntryTask {
    pub options: ChangelogEntryOptions,
}

impl CreateChangelogEntryTask {
    pub fn new(options: ChangelogEntryOptions) -> Self {
        Self { options }
    }
}

impl Task for CreateChangelogEntryTask {
    fn kind(&self) -> TaskKind {
        TaskKind::ChangelogEntry
    }

    fn run(&self) -> Result<TaskOutcome> {
        let report = create_changelog_entry(&self.options)?;
        Ok(TaskOutcome::completed(format!(
            "added '{}' with {} item(s) to {}",
            report.header,
            report.item_count,
            self.options.debian_changelog.display()
        )))
    }
}

/// Stamps the markdown changelog heading with version and date
pub struct StampChangelogTask {
    pub options: StampOptions,
}

impl StampChangelogTask {
    pub fn new(options: StampOptions) -> Self {
        Self { options }
    }
}

impl Task for StampChangelogTask {
    fn kind(&self) -> TaskKind {
        TaskKind::StampChangelog
    }

    fn run(&self) -> Result<TaskOutcome> {
        Ok(match stamp_changelog(&self.options)? {
            StampOutcome::Stamped { heading } => TaskOutcome::completed(format!(
                "stamped {} with '{}'",
                self.options.changelog_file.display(),
                heading
            )),
            StampOutcome::NotRequested => TaskOutcome::skipped("stamping not requested"),
            StampOutcome::NotRelease => TaskOutcome::skipped("not a release build"),
        })
    }
}

/// Renders the markdown changelog into release notes HTML
pub struct CreateReleaseNotesHtmlTask {
    pub options: ReleaseNotesOptions,
    writer: ReleaseNotesWriter,
}

impl CreateReleaseNotesHtmlTask {
    pub fn new(options: ReleaseNotesOptions) -> Self {
        Self {
            options,
            writer: ReleaseNotesWriter::new(),
        }
    }

    /// Render with a specific markdown renderer
    pub fn with_renderer(mut self, renderer: Arc<dyn MarkdownRenderer>) -> Self {
        self.writer = ReleaseNotesWriter::with_renderer(renderer);
        self
    }
}

impl Task for CreateReleaseNotesHtmlTask {
    fn kind(&self) -> TaskKind {
        TaskKind::ReleaseNotesHtml
    }

    fn run(&self) -> Result<TaskOutcome> {
        let html = self.options.html_file.display();
        Ok(match self.writer.write(&self.options)? {
            ReleaseNotesOutcome::Created => TaskOutcome::completed(format!("created {}", html)),
            ReleaseNotesOutcome::Updated => TaskOutcome::completed(format!("updated {}", html)),
            ReleaseNotesOutcome::MarkerNotFound => TaskOutcome::skipped(format!(
                "{} has no element with class '{}'",
                html, self.options.marker_class
            )),
        })
    }
}
