//! Error types for release-tasks

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ReleaseTasksError
pub type Result<T> = std::result::Result<T, ReleaseTasksError>;

/// Main error type for release-tasks operations
#[derive(Debug, Error)]
pub enum ReleaseTasksError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// Release notes rendering errors
    #[error(transparent)]
    ReleaseNotes(#[from] ReleaseNotesError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// Missing required field
    #[error("Missing required value: {0}")]
    MissingField(String),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Changelog file not found
    #[error("Changelog file not found at {0}")]
    FileNotFound(PathBuf),

    /// A required input was empty
    #[error("Missing required input: {0}")]
    MissingInput(&'static str),

    /// Failed to back up the previous changelog
    #[error("Failed to back up {path}: {source}")]
    BackupFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write changelog
    #[error("Failed to write changelog {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Release notes rendering errors
#[derive(Debug, Error)]
pub enum ReleaseNotesError {
    /// The markdown source does not exist
    #[error("The given markdown file ({0}) does not exist.")]
    MarkdownNotFound(PathBuf),

    /// The target HTML document could not be parsed
    #[error("Failed to parse {path}: {message}")]
    InvalidDocument { path: PathBuf, message: String },

    /// The rendered markdown is not well-formed markup
    #[error("Rendered release notes are not well-formed: {0}")]
    MalformedFragment(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReleaseTasksError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}
