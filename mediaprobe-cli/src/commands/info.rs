// mediaprobe-cli/src/commands/info.rs
//
// `mediaprobe info`: runs ffprobe on files and directories and prints the
// parsed descriptors.

use anyhow::{Context, Result, bail};
use mediaprobe_core::{
    CommandFfprobeExecutor, CoreError, MediaDescriptor, ProbeConfig, ProbeConfigBuilder,
    check_dependency, find_media_files, format_bytes, probe_files,
};
use std::path::PathBuf;

use crate::cli::InfoArgs;
use crate::output::{print_descriptor, print_error, print_warning};

/// Builds the probe configuration: environment first, then command-line flags.
pub fn build_config(args: &InfoArgs) -> ProbeConfig {
    let mut builder = ProbeConfigBuilder::from_config(ProbeConfig::from_env());
    if let Some(ffprobe) = &args.ffprobe {
        builder = builder.ffprobe_path(ffprobe.clone());
    }
    if let Some(jobs) = args.jobs {
        builder = builder.jobs(usize::from(jobs));
    }
    if args.strict {
        builder = builder.strict(true);
    }
    builder.build()
}

/// Expands directories into their media files; plain files pass through.
pub fn collect_inputs(paths: &[PathBuf], extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            match find_media_files(path, extensions) {
                Ok(found) => files.extend(found),
                Err(CoreError::NoFilesFound) => {
                    print_warning(&format!("No media files found in {}", path.display()))
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("Failed to read {}", path.display()));
                }
            }
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            bail!("Input path '{}' does not exist", path.display());
        }
    }
    Ok(files)
}

pub fn run_info(args: InfoArgs) -> Result<()> {
    let config = build_config(&args);
    config.validate()?;

    let files = collect_inputs(&args.paths, &config.extensions)?;
    if files.is_empty() {
        bail!("No media files to probe");
    }

    let executor = CommandFfprobeExecutor::from_config(&config);
    let ffprobe = executor.program().to_string_lossy().into_owned();
    check_dependency(&ffprobe).context("ffprobe is required for the info command")?;

    log::debug!("Probing {} file(s) with {}", files.len(), ffprobe);
    let results = probe_files(&executor, &files, &config)?;

    let mut failures = 0usize;
    let mut descriptors: Vec<MediaDescriptor> = Vec::with_capacity(results.len());
    for probed in results {
        match probed.result {
            Ok(media) => {
                if !args.json {
                    let size = std::fs::metadata(&probed.path).ok().map(|m| format_bytes(m.len()));
                    print_descriptor(&media, size);
                }
                descriptors.push(media);
            }
            Err(e) => {
                failures += 1;
                print_error(&format!("{}: {}", probed.path.display(), e));
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&descriptors)?);
    }

    if failures > 0 {
        bail!("{} of {} file(s) could not be probed", failures, files.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn args(paths: Vec<PathBuf>) -> InfoArgs {
        InfoArgs {
            paths,
            json: false,
            ffprobe: None,
            jobs: None,
            strict: false,
        }
    }

    #[test]
    fn test_flags_override_config() {
        let mut info = args(vec![]);
        info.ffprobe = Some(PathBuf::from("/opt/ffprobe"));
        info.jobs = Some(2);
        info.strict = true;

        let config = build_config(&info);
        assert_eq!(config.ffprobe_path, PathBuf::from("/opt/ffprobe"));
        assert_eq!(config.jobs, 2);
        assert!(config.strict);
    }

    #[test]
    fn test_collect_inputs_expands_directories() -> Result<()> {
        let dir = tempfile::tempdir()?;
        File::create(dir.path().join("b.mkv"))?;
        File::create(dir.path().join("a.mp4"))?;
        File::create(dir.path().join("readme.txt"))?;
        let single = dir.path().join("readme.txt");

        let extensions = vec!["mkv".to_string(), "mp4".to_string()];
        let files = collect_inputs(&[dir.path().to_path_buf(), single.clone()], &extensions)?;

        assert_eq!(
            files,
            vec![dir.path().join("a.mp4"), dir.path().join("b.mkv"), single]
        );
        Ok(())
    }

    #[test]
    fn test_collect_inputs_rejects_missing_path() {
        let extensions = vec!["mkv".to_string()];
        let result = collect_inputs(&[PathBuf::from("no/such/input.mkv")], &extensions);
        assert!(result.is_err());
    }
}
