//! Completion scripts for the task commands

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, CommandFactory, ValueHint};
use clap_complete::{generate, generate_to, Shell};
use tracing::info;

use crate::cli::{output, Cli};
use crate::exit_codes;

const BIN_NAME: &str = "release-tasks";

/// Print or install a shell completion script
#[derive(Debug, Args)]
pub struct CompletionsCommand {
    /// Shell to generate the script for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script into this directory under the name the shell expects
    #[arg(long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub dir: Option<PathBuf>,
}

/// Completion script for `shell`. Path flags complete as files and
/// `--flavor` offers the known renderers.
pub fn completion_script(shell: Shell) -> Vec<u8> {
    let mut buffer = Vec::new();
    generate(shell, &mut Cli::command(), BIN_NAME, &mut buffer);
    buffer
}

impl CompletionsCommand {
    /// Execute the completions command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        info!(shell = %self.shell, dir = ?self.dir, "executing completions command");

        match &self.dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                let path = generate_to(self.shell, &mut Cli::command(), BIN_NAME, dir)?;
                if !cli.quiet {
                    output::success(&format!(
                        "{} completions written to {}",
                        self.shell,
                        output::path_style().apply_to(path.display())
                    ));
                }
            }
            None => std::io::stdout().write_all(&completion_script(self.shell))?,
        }

        Ok(exit_codes::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn script(shell: Shell) -> String {
        String::from_utf8(completion_script(shell)).unwrap()
    }

    #[test]
    fn test_bash_script_lists_task_flags() {
        let bash = script(Shell::Bash);
        for word in ["changelog-entry", "release-notes", "--debian-changelog", "--no-release"] {
            assert!(bash.contains(word), "missing {word}");
        }
    }

    #[test]
    fn test_fish_script_offers_flavors() {
        let fish = script(Shell::Fish);
        assert!(fish.contains("flavor"));
        assert!(fish.contains("gfm"));
    }

    #[test]
    fn test_writes_into_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let dir = temp.path().join("completions");
        let cli = Cli::try_parse_from([
            "release-tasks",
            "-q",
            "completions",
            "bash",
            "--dir",
            dir.to_str().unwrap(),
        ])
        .unwrap();

        let crate::cli::Commands::Completions(cmd) = &cli.command else {
            panic!("expected completions command");
        };
        assert_eq!(cmd.execute(&cli).unwrap(), exit_codes::SUCCESS);

        let written: Vec<_> = std::fs::read_dir(&dir).unwrap().collect();
        assert_eq!(written.len(), 1);
    }
}
