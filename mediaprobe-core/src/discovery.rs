//! File discovery for probing whole directories.
//!
//! Only the top level of the directory is searched. Extensions are matched
//! case-insensitively against the configured list.

use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

/// Finds media files directly inside `input_dir` whose extension is in `extensions`.
///
/// The result is sorted by path. Returns [`CoreError::NoFilesFound`] when
/// nothing matches.
///
/// ```rust,no_run
/// use mediaprobe_core::find_media_files;
/// use std::path::Path;
///
/// let files = find_media_files(Path::new("/path/to/videos"), &["mkv", "mp4"]).unwrap();
/// for file in files {
///     println!("{}", file.display());
/// }
/// ```
pub fn find_media_files<S: AsRef<str>>(
    input_dir: &Path,
    extensions: &[S],
) -> CoreResult<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(input_dir)?;
    let mut files: Vec<PathBuf> = read_dir
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if !path.is_file() {
                return None;
            }
            let ext = path.extension()?.to_str()?;
            extensions
                .iter()
                .any(|wanted| wanted.as_ref().trim_start_matches('.').eq_ignore_ascii_case(ext))
                .then_some(path)
        })
        .collect();

    if files.is_empty() {
        return Err(CoreError::NoFilesFound);
    }
    files.sort();
    log::debug!("Found {} media files in {}", files.len(), input_dir.display());
    Ok(files)
}
