// ============================================================================
// mediaprobe-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for ProbeConfig
//
// Fluent construction of ProbeConfig on top of its defaults. Values that
// cannot work (zero jobs, empty extension list) are caught by
// ProbeConfig::validate, not here.

use std::path::PathBuf;

use super::ProbeConfig;

/// Builder for creating ProbeConfig instances.
#[derive(Debug, Clone, Default)]
pub struct ProbeConfigBuilder {
    config: ProbeConfig,
}

impl ProbeConfigBuilder {
    /// Creates a new builder starting from [`ProbeConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing configuration, e.g. one read with [`ProbeConfig::from_env`].
    pub fn from_config(config: ProbeConfig) -> Self {
        Self { config }
    }

    /// Sets the ffprobe executable.
    pub fn ffprobe_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.ffprobe_path = path.into();
        self
    }

    /// Sets whether empty or marker-less reports are errors.
    pub fn strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    /// Sets the number of files probed in parallel.
    pub fn jobs(mut self, jobs: usize) -> Self {
        self.config.jobs = jobs;
        self
    }

    /// Replaces the extension list used for directory discovery.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Builds the ProbeConfig.
    pub fn build(self) -> ProbeConfig {
        self.config
    }
}
