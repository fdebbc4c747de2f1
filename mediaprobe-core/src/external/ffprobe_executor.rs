//! Running ffprobe to obtain a "pretty" text report for a media file.
//!
//! The [`FfprobeExecutor`] trait is the seam between report parsing and the
//! external tool, so tests can feed canned reports without ffprobe installed.

use crate::config::ProbeConfig;
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Flags passed to ffprobe ahead of the input path.
pub const PROBE_FLAGS: [&str; 4] = ["-hide_banner", "-show_format", "-show_streams", "-pretty"];

/// Produces the ffprobe report text for a media file.
pub trait FfprobeExecutor: Send + Sync {
    /// Returns the captured stdout of `ffprobe -hide_banner -show_format -show_streams -pretty <path>`.
    fn report(&self, path: &Path) -> CoreResult<String>;
}

/// [`FfprobeExecutor`] that spawns the ffprobe binary.
#[derive(Debug, Clone)]
pub struct CommandFfprobeExecutor {
    program: PathBuf,
}

impl CommandFfprobeExecutor {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_config(config: &ProbeConfig) -> Self {
        Self::new(config.ffprobe_path.clone())
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for CommandFfprobeExecutor {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_FFPROBE_PATH)
    }
}

impl FfprobeExecutor for CommandFfprobeExecutor {
    fn report(&self, path: &Path) -> CoreResult<String> {
        let mut cmd = Command::new(&self.program);
        cmd.args(probe_args(path));
        log_command(&cmd);

        let program = self.program.display().to_string();
        let output = cmd.output().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                log::warn!("Dependency '{}' not found.", program);
                CoreError::DependencyNotFound(program.clone())
            } else {
                command_start_error(display_command_line(&self.program, path), e)
            }
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            log::warn!(
                "ffprobe exited with {} for {}",
                output.status,
                path.display()
            );
            return Err(command_failed_error(
                display_command_line(&self.program, path),
                output.status,
                stderr.trim(),
            ));
        }
        if !stderr.trim().is_empty() {
            log::debug!("ffprobe stderr for {}: {}", path.display(), stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Argument vector for probing `path`, flags first.
pub fn probe_args(path: &Path) -> Vec<OsString> {
    PROBE_FLAGS
        .iter()
        .map(OsString::from)
        .chain(std::iter::once(path.as_os_str().to_owned()))
        .collect()
}

/// Human-readable command line; the path is double-quoted when it contains whitespace.
pub fn display_command_line(program: &Path, path: &Path) -> String {
    format!(
        "{} {} {}",
        program.display(),
        PROBE_FLAGS.join(" "),
        quote_if_needed(&path.display().to_string())
    )
}

/// Logs a command at debug level, quoting arguments that contain whitespace.
pub fn log_command(cmd: &Command) {
    let program = cmd.get_program().to_string_lossy();
    let args: Vec<String> = cmd
        .get_args()
        .map(|arg| quote_if_needed(&arg.to_string_lossy()))
        .collect();
    log::debug!("Executing command: {} {}", program, args.join(" "));
}

fn quote_if_needed(arg: &str) -> String {
    if arg.chars().any(char::is_whitespace) {
        format!("\"{}\"", arg)
    } else {
        arg.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_args_order() {
        let args = probe_args(Path::new("/media/movie.mkv"));
        let args: Vec<_> = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(
            args,
            vec![
                "-hide_banner",
                "-show_format",
                "-show_streams",
                "-pretty",
                "/media/movie.mkv"
            ]
        );
    }

    #[test]
    fn test_path_with_space_is_one_argument() {
        let args = probe_args(Path::new("/media/My Movie.mkv"));
        assert_eq!(args.len(), 5);
        assert_eq!(args[4], OsString::from("/media/My Movie.mkv"));
    }

    #[test]
    fn test_display_command_line_quotes_spaces() {
        assert_eq!(
            display_command_line(Path::new("ffprobe"), Path::new("/media/My Movie.mkv")),
            "ffprobe -hide_banner -show_format -show_streams -pretty \"/media/My Movie.mkv\""
        );
        assert_eq!(
            display_command_line(Path::new("ffprobe"), Path::new("clip.mp4")),
            "ffprobe -hide_banner -show_format -show_streams -pretty clip.mp4"
        );
    }

    #[test]
    fn test_missing_binary_is_dependency_error() {
        let executor = CommandFfprobeExecutor::new("mediaprobe-no-such-ffprobe-binary");
        match executor.report(Path::new("clip.mkv")) {
            Err(CoreError::DependencyNotFound(name)) => {
                assert_eq!(name, "mediaprobe-no-such-ffprobe-binary")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_from_config_uses_configured_path() {
        let config = ProbeConfig {
            ffprobe_path: PathBuf::from("/opt/ffprobe"),
            ..ProbeConfig::default()
        };
        let executor = CommandFfprobeExecutor::from_config(&config);
        assert_eq!(executor.program(), Path::new("/opt/ffprobe"));
    }
}
