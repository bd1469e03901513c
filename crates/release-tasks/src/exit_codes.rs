//! Exit codes for the CLI

use release_tasks_core::{ConfigError, ReleaseTasksError};

/// Success
pub const SUCCESS: i32 = 0;

/// General error, including a failed task
pub const ERROR: i32 = 1;

/// Configuration error or missing required input
pub const CONFIG_ERROR: i32 = 2;

/// Map an error that escaped a command to an exit code
pub fn for_error(error: &anyhow::Error) -> i32 {
    if error.downcast_ref::<ConfigError>().is_some() {
        return CONFIG_ERROR;
    }
    match error.downcast_ref::<ReleaseTasksError>() {
        Some(ReleaseTasksError::Config(_)) => CONFIG_ERROR,
        _ => ERROR,
    }
}
