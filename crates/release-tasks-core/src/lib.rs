//! Release Tasks Core - shared foundation for the release-tasks workspace
//!
//! This crate provides the error types, configuration loading and the small
//! set of shared types used by the changelog operations and the CLI.

pub mod config;
pub mod error;
pub mod types;

pub use error::{ChangelogError, ConfigError, ReleaseNotesError, ReleaseTasksError, Result};
pub use types::TaskKind;
