//! Core types for release-tasks

use serde::{Deserialize, Serialize};

/// The release tasks this workspace knows how to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskKind {
    /// Prepend a Debian changelog stanza built from the markdown changelog
    ChangelogEntry,
    /// Stamp the markdown changelog heading with version and date
    StampChangelog,
    /// Render the markdown changelog into release notes HTML
    ReleaseNotesHtml,
}

impl TaskKind {
    /// Returns the string representation of the task kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ChangelogEntry => "changelog-entry",
            Self::StampChangelog => "stamp-changelog",
            Self::ReleaseNotesHtml => "release-notes-html",
        }
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TaskKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "changelog-entry" | "debian" => Ok(Self::ChangelogEntry),
            "stamp-changelog" | "stamp" => Ok(Self::StampChangelog),
            "release-notes-html" | "release-notes" | "html" => Ok(Self::ReleaseNotesHtml),
            _ => Err(format!("Unknown task: {}", s)),
        }
    }
}
