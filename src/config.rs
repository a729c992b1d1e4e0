//! Process configuration for todo.
//!
//! Resolved once at startup from CLI arguments and the environment, then
//! threaded through command dispatch. Operations never read the environment
//! themselves.

use std::path::PathBuf;

/// Default task file, relative to the current working directory.
pub const DEFAULT_FILE: &str = "todos.txt";

/// Environment variable naming the assignee for newly created tasks.
pub const ASSIGNEE_ENV: &str = "TODO_USERNAME";

/// Assignee used when the environment does not provide one.
pub const DEFAULT_ASSIGNEE: &str = "Unknown";

/// Settings for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the task file.
    pub file: PathBuf,
    /// Assignee for tasks created by this invocation.
    pub assignee: String,
}

impl Config {
    /// Resolve the configuration from an optional file override and the raw
    /// assignee environment value. An unset or empty assignee falls back to
    /// [`DEFAULT_ASSIGNEE`].
    pub fn resolve(file: Option<PathBuf>, assignee: Option<String>) -> Self {
        Self {
            file: file.unwrap_or_else(|| PathBuf::from(DEFAULT_FILE)),
            assignee: assignee
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| DEFAULT_ASSIGNEE.to_string()),
        }
    }

    /// Resolve from the process environment. Called once, at dispatch.
    pub fn from_env(file: Option<PathBuf>) -> Self {
        Self::resolve(file, std::env::var(ASSIGNEE_ENV).ok())
    }
}
