//! Release Tasks hosting - run changelog operations as build tasks
//!
//! Each operation is wrapped in a [`Task`]; [`execute`] runs one, reports
//! its progress and reduces the result to the success flag a build host
//! expects.

pub mod reporter;
pub mod runner;
pub mod task;
pub mod tasks;

pub use reporter::{CollectingReporter, TaskEvent, TaskReporter, TaskReporterRegistry, TracingReporter};
pub use runner::{execute, TaskResult, TaskStatus};
pub use task::{Task, TaskOutcome};
pub use tasks::{CreateChangelogEntryTask, CreateReleaseNotesHtmlTask, StampChangelogTask};
