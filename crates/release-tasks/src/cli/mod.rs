//! CLI definition and command handling

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use commands::{
    ChangelogEntryCommand, CompletionsCommand, InitCommand, ReleaseNotesCommand, StampCommand,
};

/// release-tasks - changelog and release notes maintenance for build pipelines
#[derive(Debug, Parser)]
#[command(name = "release-tasks")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub directory: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Prepend a Debian changelog entry built from the markdown changelog
    ChangelogEntry(ChangelogEntryCommand),

    /// Stamp the markdown changelog heading with version and date
    Stamp(StampCommand),

    /// Render the markdown changelog into release notes HTML
    ReleaseNotes(ReleaseNotesCommand),

    /// Write a default configuration file
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

impl Cli {
    /// Execute the CLI command, returning the process exit code
    pub fn execute(&self) -> anyhow::Result<i32> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match &self.command {
            Commands::ChangelogEntry(cmd) => cmd.execute(self),
            Commands::Stamp(cmd) => cmd.execute(self),
            Commands::ReleaseNotes(cmd) => cmd.execute(self),
            Commands::Init(cmd) => cmd.execute(self),
            Commands::Completions(cmd) => cmd.execute(self),
        }
    }
}
