//! Task execution reporting

use std::sync::{Arc, Mutex};
use std::time::Duration;

use release_tasks_core::TaskKind;

/// Events emitted while running a task
#[derive(Debug, Clone)]
pub enum TaskEvent {
    /// A task is starting
    Started { kind: TaskKind },
    /// A task changed its target
    Completed {
        kind: TaskKind,
        detail: String,
        duration: Duration,
    },
    /// A task had nothing to do
    Skipped { kind: TaskKind, reason: String },
    /// A task failed
    Failed {
        kind: TaskKind,
        error: String,
        duration: Duration,
    },
}

/// Trait for reporting task progress
pub trait TaskReporter: Send + Sync {
    /// Handle a task event
    fn report(&self, event: &TaskEvent);
}

/// Reporter that logs to tracing
#[derive(Debug, Default)]
pub struct TracingReporter;

impl TaskReporter for TracingReporter {
    fn report(&self, event: &TaskEvent) {
        match event {
            TaskEvent::Started { kind } => {
                tracing::info!("Starting {}", kind);
            }
            TaskEvent::Completed {
                kind,
                detail,
                duration,
            } => {
                tracing::info!("{} completed in {}ms: {}", kind, duration.as_millis(), detail);
            }
            TaskEvent::Skipped { kind, reason } => {
                tracing::info!("{} skipped: {}", kind, reason);
            }
            TaskEvent::Failed {
                kind,
                error,
                duration,
            } => {
                tracing::error!("{} failed after {}ms: {}", kind, duration.as_millis(), error);
            }
        }
    }
}

/// Reporter that collects events for later inspection
#[derive(Debug, Default)]
pub struct CollectingReporter {
    events: Mutex<Vec<TaskEvent>>,
}

impl CollectingReporter {
    /// Get all collected events
    pub fn events(&self) -> Vec<TaskEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl TaskReporter for CollectingReporter {
    fn report(&self, event: &TaskEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

/// Registry of task reporters
pub struct TaskReporterRegistry {
    reporters: Vec<Arc<dyn TaskReporter>>,
}

impl TaskReporterRegistry {
    pub fn new() -> Self {
        Self {
            reporters: vec![Arc::new(TracingReporter)],
        }
    }

    pub fn empty() -> Self {
        Self {
            reporters: Vec::new(),
        }
    }

    pub fn register<R: TaskReporter + 'static>(&mut self, reporter: R) {
        self.reporters.push(Arc::new(reporter));
    }

    /// Register a reporter the caller keeps a handle to
    pub fn register_shared(&mut self, reporter: Arc<dyn TaskReporter>) {
        self.reporters.push(reporter);
    }

    pub fn all(&self) -> &[Arc<dyn TaskReporter>] {
        &self.reporters
    }

    /// Broadcast an event to all registered reporters
    pub fn broadcast(&self, event: &TaskEvent) {
        for reporter in &self.reporters {
            reporter.report(event);
        }
    }
}

impl Default for TaskReporterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_reporter() {
        let reporter = CollectingReporter::default();

        reporter.report(&TaskEvent::Started {
            kind: TaskKind::StampChangelog,
        });
        reporter.report(&TaskEvent::Completed {
            kind: TaskKind::StampChangelog,
            detail: "stamped".to_string(),
            duration: Duration::from_millis(3),
        });

        assert_eq!(reporter.events().len(), 2);
    }

    #[test]
    fn test_tracing_reporter() {
        let reporter = TracingReporter;

        // Just verify it doesn't panic
        reporter.report(&TaskEvent::Started {
            kind: TaskKind::ChangelogEntry,
        });
        reporter.report(&TaskEvent::Failed {
            kind: TaskKind::ChangelogEntry,
            error: "boom".to_string(),
            duration: Duration::from_millis(1),
        });
    }

    #[test]
    fn test_broadcast() {
        let collecting = Arc::new(CollectingReporter::default());
        let mut registry = TaskReporterRegistry::empty();
        registry.register_shared(collecting.clone());

        registry.broadcast(&TaskEvent::Skipped {
            kind: TaskKind::ReleaseNotesHtml,
            reason: "no marker".to_string(),
        });

        assert_eq!(collecting.events().len(), 1);
    }

    #[test]
    fn test_register() {
        let mut registry = TaskReporterRegistry::empty();
        assert!(registry.all().is_empty());

        registry.register(TracingReporter);
        registry.register(CollectingReporter::default());
        assert_eq!(registry.all().len(), 2);
        assert_eq!(TaskReporterRegistry::new().all().len(), 1);
    }
}
