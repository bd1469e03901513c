//! Running a single task

use std::time::{Duration, Instant};

use release_tasks_core::TaskKind;
use serde::Serialize;
use tracing::debug;

use crate::reporter::{TaskEvent, TaskReporterRegistry};
use crate::task::{Task, TaskOutcome};

/// Final status of a task run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Completed,
    Skipped,
    Failed,
}

/// Result of a task run
#[derive(Debug, Clone, Serialize)]
pub struct TaskResult {
    /// Which task ran
    pub task: TaskKind,
    /// How it finished
    pub status: TaskStatus,
    /// Detail, skip reason or error text
    pub message: String,
    /// Wall time in milliseconds
    pub duration_ms: u128,
}

impl TaskResult {
    /// The success flag reported to the build host
    pub fn succeeded(&self) -> bool {
        self.status != TaskStatus::Failed
    }
}

/// Run a task exactly once. Errors are reported and folded into a failed
/// result instead of being returned.
pub fn execute(task: &dyn Task, reporters: &TaskReporterRegistry) -> TaskResult {
    let kind = task.kind();
    reporters.broadcast(&TaskEvent::Started { kind });

    let start = Instant::now();
    let outcome = task.run();
    let duration = start.elapsed();

    let result = match outcome {
        Ok(TaskOutcome::Completed { detail }) => {
            reporters.broadcast(&TaskEvent::Completed {
                kind,
                detail: detail.clone(),
                duration,
            });
            finished(kind, TaskStatus::Completed, detail, duration)
        }
        Ok(TaskOutcome::Skipped { reason }) => {
            reporters.broadcast(&TaskEvent::Skipped {
                kind,
                reason: reason.clone(),
            });
            finished(kind, TaskStatus::Skipped, reason, duration)
        }
        Err(e) => {
            let error = e.to_string();
            reporters.broadcast(&TaskEvent::Failed {
                kind,
                error: error.clone(),
                duration,
            });
            finished(kind, TaskStatus::Failed, error, duration)
        }
    };

    debug!(task = %kind, status = ?result.status, "task finished");
    result
}

fn finished(task: TaskKind, status: TaskStatus, message: String, duration: Duration) -> TaskResult {
    TaskResult {
        task,
        status,
        message,
        duration_ms: duration.as_millis(),
    }
}
