// ============================================================================
// mediaprobe-core/src/probe.rs
// ============================================================================
//
// PROBING: ffprobe execution followed by report parsing
//
// Ties an FfprobeExecutor to the report parser. Batches run on a dedicated
// rayon pool sized from ProbeConfig::jobs; results keep the input order and
// one failing file never aborts the rest.

use crate::config::ProbeConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::FfprobeExecutor;
use crate::report::{MediaDescriptor, ReportParser, parse_report_strict};

use rayon::prelude::*;
use std::io;
use std::path::{Path, PathBuf};

/// Outcome of probing one file in a batch.
#[derive(Debug)]
pub struct ProbedFile {
    pub path: PathBuf,
    pub result: CoreResult<MediaDescriptor>,
}

/// Runs the executor for `path` and parses its report.
///
/// The descriptor's `filename` is the path as given. With `strict` set, an
/// empty report or one without section markers is an error instead of a
/// default descriptor.
pub fn probe_file<E>(executor: &E, path: &Path, strict: bool) -> CoreResult<MediaDescriptor>
where
    E: FfprobeExecutor + ?Sized,
{
    let filename = path.display().to_string();
    let raw = executor.report(path)?;

    if strict {
        return parse_report_strict(&filename, &raw);
    }

    let parsed = ReportParser::parse(filename, &raw);
    if !parsed.stats.saw_sections() {
        log::warn!("No [FORMAT] or [STREAM] sections in ffprobe output for {}", path.display());
    }
    Ok(parsed.descriptor)
}

/// Probes every path in parallel using `config.jobs` worker threads.
///
/// The outer error covers configuration and thread pool setup only. Per-file
/// failures are reported in the matching [`ProbedFile`].
pub fn probe_files<E>(
    executor: &E,
    paths: &[PathBuf],
    config: &ProbeConfig,
) -> CoreResult<Vec<ProbedFile>>
where
    E: FfprobeExecutor + ?Sized,
{
    config.validate()?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .build()
        .map_err(|e| CoreError::Io(io::Error::other(format!("Failed to initialize thread pool: {}", e))))?;

    log::debug!("Probing {} files with {} jobs", paths.len(), config.jobs);

    let results = pool.install(|| {
        paths
            .par_iter()
            .map(|path| {
                let result = probe_file(executor, path, config.strict);
                if let Err(e) = &result {
                    log::warn!("Failed to probe {}: {}", path.display(), e);
                }
                ProbedFile {
                    path: path.clone(),
                    result,
                }
            })
            .collect()
    });

    Ok(results)
}
