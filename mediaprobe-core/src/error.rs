// ============================================================================
// mediaprobe-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for mediaprobe-core
//
// The report parser itself never fails: malformed fragments are absorbed
// field by field. The errors here belong to everything around it: running
// ffprobe, reading files, configuration, and the strict parse variant that
// reports an empty or marker-less report explicitly.
//
// KEY COMPONENTS:
// - CoreError: Main error enum
// - CoreResult: Type alias for Result<T, CoreError>
// - Helper functions for the process-related variants

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Custom error type for the mediaprobe-core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Required external command '{0}' not found or failed to execute")]
    DependencyNotFound(String),

    #[error("Failed to execute {0}: {1}")]
    CommandStart(String, io::Error),

    #[error("Command {0} failed with status {1}. Stderr: {2}")]
    CommandFailed(String, ExitStatus, String),

    #[error("Probe report for '{0}' is empty")]
    EmptyReport(String),

    #[error("Probe report for '{0}' contains no [FORMAT] or [STREAM] section")]
    NoSections(String),

    #[error("No suitable media files found in input directory")]
    NoFilesFound,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for mediaprobe-core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Creates a `CommandStart` error for a process that could not be spawned.
pub fn command_start_error(cmd: impl Into<String>, error: io::Error) -> CoreError {
    CoreError::CommandStart(cmd.into(), error)
}

/// Creates a `CommandFailed` error from an exit status and captured stderr.
pub fn command_failed_error(
    cmd: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(cmd.into(), status, stderr.into())
}
