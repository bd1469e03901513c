//! Debian changelog entry creation from a markdown changelog

use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, Local};
use release_tasks_core::{ChangelogError, Result};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::debian::{
    backup_path, DebianStanza, ANONYMOUS_AUTHOR, DEFAULT_URGENCY, RELEASED_STABILITY,
    UNRELEASED_STABILITY,
};
use crate::fs::{join_lines, read_lines, write_atomic};
use crate::markdown::latest_entry_items;

/// Inputs for prepending a stanza to a Debian changelog
#[derive(Debug, Clone)]
pub struct ChangelogEntryOptions {
    /// Markdown changelog to read the newest entry from
    pub changelog_file: PathBuf,
    /// Version for the stanza header
    pub version_number: String,
    /// Source package name for the stanza header
    pub product_name: String,
    /// Debian changelog to update
    pub debian_changelog: PathBuf,
    /// Distribution; defaults depend on `release`
    pub stability: Option<String>,
    /// Urgency; defaults to `low`
    pub urgency: Option<String>,
    /// Maintainer name and e-mail
    pub changelog_author_info: Option<String>,
    /// Whether this is a release build
    pub release: bool,
}

impl ChangelogEntryOptions {
    /// Create options with the required inputs and default optional ones
    pub fn new(
        changelog_file: impl Into<PathBuf>,
        version_number: impl Into<String>,
        product_name: impl Into<String>,
        debian_changelog: impl Into<PathBuf>,
    ) -> Self {
        Self {
            changelog_file: changelog_file.into(),
            version_number: version_number.into(),
            product_name: product_name.into(),
            debian_changelog: debian_changelog.into(),
            stability: None,
            urgency: None,
            changelog_author_info: None,
            release: true,
        }
    }

    /// Set the distribution
    pub fn with_stability(mut self, stability: impl Into<String>) -> Self {
        self.stability = Some(stability.into());
        self
    }

    /// Set the urgency
    pub fn with_urgency(mut self, urgency: impl Into<String>) -> Self {
        self.urgency = Some(urgency.into());
        self
    }

    /// Set the maintainer
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.changelog_author_info = Some(author.into());
        self
    }

    /// Mark the build as a release or not
    pub fn with_release(mut self, release: bool) -> Self {
        self.release = release;
        self
    }

    /// Distribution after applying defaults
    pub fn effective_stability(&self) -> &str {
        match non_empty(&self.stability) {
            Some(stability) => stability,
            None if self.release => RELEASED_STABILITY,
            None => UNRELEASED_STABILITY,
        }
    }

    /// Urgency after applying defaults
    pub fn effective_urgency(&self) -> &str {
        non_empty(&self.urgency).unwrap_or(DEFAULT_URGENCY)
    }

    /// Maintainer after applying defaults
    pub fn effective_author(&self) -> &str {
        non_empty(&self.changelog_author_info).unwrap_or(ANONYMOUS_AUTHOR)
    }

    fn check_required(&self) -> Result<()> {
        if self.changelog_file.as_os_str().is_empty() {
            return Err(ChangelogError::MissingInput("changelog_file").into());
        }
        if self.version_number.is_empty() {
            return Err(ChangelogError::MissingInput("version_number").into());
        }
        if self.product_name.is_empty() {
            return Err(ChangelogError::MissingInput("product_name").into());
        }
        if self.debian_changelog.as_os_str().is_empty() {
            return Err(ChangelogError::MissingInput("debian_changelog").into());
        }
        Ok(())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// What an entry creation wrote
#[derive(Debug, Clone, Serialize)]
pub struct EntryReport {
    /// The stanza header line
    pub header: String,
    /// Number of body items in the new stanza
    pub item_count: usize,
    /// Number of lines carried over from the previous changelog
    pub previous_line_count: usize,
    /// Where the previous changelog was kept
    pub backup: PathBuf,
}

/// Prepend a stanza built from the newest markdown entry, dated now
pub fn create_changelog_entry(options: &ChangelogEntryOptions) -> Result<EntryReport> {
    create_changelog_entry_at(options, Local::now().fixed_offset())
}

/// Prepend a stanza built from the newest markdown entry with a given date.
///
/// The previous changelog is copied to its `.old` sibling first, then the
/// combined content replaces the changelog in a single rename.
#[instrument(skip(options), fields(version = %options.version_number, product = %options.product_name))]
pub fn create_changelog_entry_at(
    options: &ChangelogEntryOptions,
    date: DateTime<FixedOffset>,
) -> Result<EntryReport> {
    options.check_required()?;
    info!(
        changelog = %options.changelog_file.display(),
        debian = %options.debian_changelog.display(),
        "creating debian changelog entry"
    );

    let markdown = read_existing(&options.changelog_file)?;
    let previous = read_existing(&options.debian_changelog)?;

    let backup = backup_previous(&options.debian_changelog)?;

    let stanza = DebianStanza {
        product: options.product_name.clone(),
        version: options.version_number.clone(),
        stability: options.effective_stability().to_string(),
        urgency: options.effective_urgency().to_string(),
        author: options.effective_author().to_string(),
        date,
        items: latest_entry_items(markdown.iter().map(String::as_str)),
    };
    debug!(
        items = stanza.items.len(),
        nested = stanza.items.iter().filter(|i| i.is_nested()).count(),
        "markdown entry converted"
    );

    let mut lines = stanza.to_lines();
    lines.extend(previous.iter().cloned());

    write_atomic(&options.debian_changelog, &join_lines(&lines)).map_err(|source| {
        ChangelogError::WriteFailed {
            path: options.debian_changelog.clone(),
            source,
        }
    })?;

    let report = EntryReport {
        header: stanza.header(),
        item_count: stanza.items.len(),
        previous_line_count: previous.len(),
        backup,
    };
    info!(header = %report.header, items = report.item_count, "debian changelog updated");
    Ok(report)
}

fn read_existing(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(ChangelogError::FileNotFound(path.to_path_buf()).into());
    }
    Ok(read_lines(path).map_err(ChangelogError::Io)?)
}

fn backup_previous(path: &Path) -> Result<PathBuf> {
    let backup = backup_path(path);
    let to_error = |source: std::io::Error| ChangelogError::BackupFailed {
        path: path.to_path_buf(),
        source,
    };
    if backup == path {
        return Err(to_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "changelog already has the backup extension",
        ))
        .into());
    }

    match std::fs::remove_file(&backup) {
        Ok(()) => debug!(backup = %backup.display(), "removed stale backup"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(to_error(e).into()),
    }
    std::fs::copy(path, &backup).map_err(to_error)?;

    debug!(backup = %backup.display(), "previous changelog backed up");
    Ok(backup)
}
