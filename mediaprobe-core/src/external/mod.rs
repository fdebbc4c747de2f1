// ============================================================================
// mediaprobe-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the ffprobe CLI
//
// Everything that spawns a process lives here. Report parsing itself never
// touches the filesystem or a child process; it only receives the text an
// FfprobeExecutor hands back.
//
// KEY COMPONENTS:
// - FfprobeExecutor trait and the process-backed CommandFfprobeExecutor
// - Argument building and command-line rendering for logs and errors
// - Dependency checking

use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};

use std::io;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Traits and implementations for executing ffprobe
pub mod ffprobe_executor;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffprobe_executor::{
    CommandFfprobeExecutor, FfprobeExecutor, PROBE_FLAGS, display_command_line, log_command,
    probe_args,
};

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that an external command can be started by running it with `-version`.
///
/// A missing binary maps to [`CoreError::DependencyNotFound`] and any other
/// spawn failure to [`CoreError::CommandStart`]. A tool that starts but exits
/// non-zero is [`CoreError::CommandFailed`].
///
/// ```rust,no_run
/// use mediaprobe_core::external::check_dependency;
///
/// match check_dependency("ffprobe") {
///     Ok(()) => println!("ffprobe is available"),
///     Err(e) => eprintln!("ffprobe check failed: {}", e),
/// }
/// ```
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(status) if status.success() => {
            log::debug!("Found dependency: {}", cmd_name);
            Ok(())
        }
        Ok(status) => {
            log::warn!("Dependency '{}' exited with {} on -version.", cmd_name, status);
            Err(command_failed_error(format!("{cmd_name} -version"), status, ""))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{}' not found.", cmd_name);
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{}': {}", cmd_name, e);
            Err(command_start_error(cmd_name, e))
        }
    }
}
