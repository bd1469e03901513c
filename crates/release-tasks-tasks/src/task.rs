//! Task abstraction

use release_tasks_core::{Result, TaskKind};
use serde::{Deserialize, Serialize};

/// A unit of work a build host can run
pub trait Task {
    /// Which task this is
    fn kind(&self) -> TaskKind;

    /// Run the task once
    fn run(&self) -> Result<TaskOutcome>;
}

/// How a task finished when it did not fail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "status")]
pub enum TaskOutcome {
    /// The task changed its target
    Completed { detail: String },
    /// The task decided there was nothing to do
    Skipped { reason: String },
}

impl TaskOutcome {
    /// Completed with a detail message
    pub fn completed(detail: impl Into<String>) -> Self {
        Self::Completed {
            detail: detail.into(),
        }
    }

    /// Skipped with a reason
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }

    /// Human readable message
    pub fn message(&self) -> &str {
        match self {
            Self::Completed { detail } => detail,
            Self::Skipped { reason } => reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_message() {
        assert_eq!(TaskOutcome::completed("wrote 3 items").message(), "wrote 3 items");
        assert_eq!(TaskOutcome::skipped("not a release").message(), "not a release");
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&TaskOutcome::skipped("nothing")).unwrap();
        assert_eq!(json, r#"{"status":"skipped","reason":"nothing"}"#);
    }
}
