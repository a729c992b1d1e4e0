//! Error types for todo
//!
//! Exit codes:
//! - 0: Success (including silent no-ops and unknown commands)
//! - 2: Usage error (clap rejects the arguments before we run)
//! - 3: Malformed data in the task file
//! - 4: Operation failed (I/O, serialization)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the todo CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USAGE_ERROR: i32 = 2;
    pub const DATA_ERROR: i32 = 3;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for todo operations
#[derive(Error, Debug)]
pub enum Error {
    // Data errors (exit code 3)
    #[error("malformed record in {path} at line {line}: {source}")]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        source: serde_json::Error,
    },

    // Operation failures (exit code 4)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MalformedRecord { .. } => exit_codes::DATA_ERROR,
            Error::Io(_) | Error::Json(_) => exit_codes::OPERATION_FAILED,
        }
    }
}

/// Result type alias for todo operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_failure() -> serde_json::Error {
        serde_json::from_str::<crate::task::Task>("{").unwrap_err()
    }

    #[test]
    fn malformed_record_maps_to_data_error() {
        let err = Error::MalformedRecord {
            path: PathBuf::from("todos.txt"),
            line: 3,
            source: parse_failure(),
        };
        assert_eq!(err.exit_code(), exit_codes::DATA_ERROR);
    }

    #[test]
    fn io_error_maps_to_operation_failed() {
        let err = Error::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.exit_code(), exit_codes::OPERATION_FAILED);
    }

    #[test]
    fn malformed_record_names_path_and_line() {
        let err = Error::MalformedRecord {
            path: PathBuf::from("todos.txt"),
            line: 7,
            source: parse_failure(),
        };
        let message = err.to_string();
        assert!(message.contains("todos.txt"));
        assert!(message.contains("line 7"));
    }
}
