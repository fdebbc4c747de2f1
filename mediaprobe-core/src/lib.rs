//! Core library for turning ffprobe's text report into typed media descriptors.
//!
//! The heart of the crate is [`parse_report`], which reads the output of
//! `ffprobe -hide_banner -show_format -show_streams -pretty <file>` and always
//! returns a [`MediaDescriptor`]: malformed values fall back to defaults,
//! unknown keys are kept in `extra_fields`. [`parse_timecode`] handles the
//! `H:MM:SS.ffffff` timestamps found in those reports.
//!
//! Running ffprobe itself goes through the [`FfprobeExecutor`] trait, with
//! [`probe_file`] and [`probe_files`] on top for single files and batches.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mediaprobe_core::{CommandFfprobeExecutor, ProbeConfig, find_media_files, probe_files};
//! use std::path::Path;
//!
//! let config = ProbeConfig::from_env();
//! let executor = CommandFfprobeExecutor::from_config(&config);
//!
//! let files = find_media_files(Path::new("/path/to/videos"), &config.extensions).unwrap();
//! for probed in probe_files(&executor, &files, &config).unwrap() {
//!     match probed.result {
//!         Ok(media) => println!("{}: {:.1}s, {} streams", media.filename, media.duration_seconds, media.streams.len()),
//!         Err(e) => eprintln!("{}: {}", probed.path.display(), e),
//!     }
//! }
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod probe;
pub mod report;
pub mod timecode;
pub mod utils;

// Re-exports for public API
pub use config::{ProbeConfig, ProbeConfigBuilder};
pub use discovery::find_media_files;
pub use error::{CoreError, CoreResult};
pub use external::{CommandFfprobeExecutor, FfprobeExecutor, check_dependency};
pub use probe::{ProbedFile, probe_file, probe_files};
pub use report::{
    MediaDescriptor, ParseStats, ParsedReport, ReportParser, StreamDescriptor, StreamKind,
    parse_report, parse_report_strict,
};
pub use timecode::{format_timecode, parse_timecode, try_parse_timecode};
pub use utils::{format_bytes, format_dimensions};
