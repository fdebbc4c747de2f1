//! Configuration structures and constants for the mediaprobe-core library.
//!
//! This module holds the settings for running ffprobe and probing batches of
//! files. Parsing a report needs no configuration at all.

mod builder;
pub mod utils;

use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};

pub use builder::ProbeConfigBuilder;

// Default constants

/// Default ffprobe executable, resolved through `PATH`.
pub const DEFAULT_FFPROBE_PATH: &str = "ffprobe";

/// File extensions picked up when a directory is probed.
pub const DEFAULT_MEDIA_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "mov", "m4v", "avi", "webm", "ts", "mpg", "mpeg", "wmv", "flv",
];

/// Environment variable overriding [`ProbeConfig::ffprobe_path`].
pub const ENV_FFPROBE_PATH: &str = "MEDIAPROBE_FFPROBE";

/// Environment variable overriding [`ProbeConfig::strict`].
pub const ENV_STRICT: &str = "MEDIAPROBE_STRICT";

/// Environment variable overriding [`ProbeConfig::jobs`].
pub const ENV_JOBS: &str = "MEDIAPROBE_JOBS";

/// Environment variable overriding [`ProbeConfig::extensions`] (comma-separated).
pub const ENV_EXTENSIONS: &str = "MEDIAPROBE_EXTENSIONS";

/// Settings for probing files with ffprobe.
///
/// # Examples
///
/// ```rust
/// use mediaprobe_core::config::ProbeConfigBuilder;
///
/// let config = ProbeConfigBuilder::new()
///     .ffprobe_path("/usr/local/bin/ffprobe")
///     .strict(true)
///     .jobs(4)
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeConfig {
    /// ffprobe executable to run
    pub ffprobe_path: PathBuf,

    /// Reject empty or marker-less reports instead of returning default descriptors
    pub strict: bool,

    /// Number of files probed in parallel
    pub jobs: usize,

    /// Extensions (without dot, case-insensitive) used for directory discovery
    pub extensions: Vec<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            ffprobe_path: PathBuf::from(DEFAULT_FFPROBE_PATH),
            strict: false,
            jobs: default_jobs(),
            extensions: DEFAULT_MEDIA_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl ProbeConfig {
    /// Defaults overridden by the `MEDIAPROBE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the `MEDIAPROBE_*` keys.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            ffprobe_path: utils::get_env_path(&lookup, ENV_FFPROBE_PATH, defaults.ffprobe_path),
            strict: utils::get_env_bool(&lookup, ENV_STRICT, defaults.strict),
            jobs: utils::get_env_usize(&lookup, ENV_JOBS, defaults.jobs),
            extensions: utils::get_env_list(&lookup, ENV_EXTENSIONS, defaults.extensions),
        }
    }

    /// Checks the settings for values that cannot work.
    pub fn validate(&self) -> CoreResult<()> {
        if self.ffprobe_path.as_os_str().is_empty() {
            return Err(CoreError::Config("ffprobe path must not be empty".to_string()));
        }
        if self.jobs == 0 {
            return Err(CoreError::Config("jobs must be at least 1".to_string()));
        }
        if self.extensions.is_empty() {
            return Err(CoreError::Config(
                "at least one media extension is required".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_jobs() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
