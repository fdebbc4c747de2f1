// mediaprobe-core/tests/discovery_tests.rs

use mediaprobe_core::config::DEFAULT_MEDIA_EXTENSIONS;
use mediaprobe_core::discovery::find_media_files;
use mediaprobe_core::error::CoreError;
use std::fs::{self, File};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_find_media_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input_dir = dir.path();

    File::create(input_dir.join("b_movie.mkv"))?;
    File::create(input_dir.join("a_clip.MP4"))?; // case-insensitive
    File::create(input_dir.join("notes.txt"))?;
    File::create(input_dir.join("cover.jpg"))?;
    fs::create_dir(input_dir.join("extras"))?;
    File::create(input_dir.join("extras").join("nested.mkv"))?; // not searched

    let files = find_media_files(input_dir, DEFAULT_MEDIA_EXTENSIONS)?;

    let names: Vec<_> = files
        .iter()
        .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a_clip.MP4", "b_movie.mkv"]);

    dir.close()?;
    Ok(())
}

#[test]
fn test_find_media_files_custom_extensions() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("movie.mkv"))?;
    File::create(dir.path().join("song.flac"))?;

    let files = find_media_files(dir.path(), &[".flac".to_string()])?;
    assert_eq!(files, vec![dir.path().join("song.flac")]);
    Ok(())
}

#[test]
fn test_find_media_files_empty() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("document.txt"))?;

    match find_media_files(dir.path(), DEFAULT_MEDIA_EXTENSIONS) {
        Err(CoreError::NoFilesFound) => {}
        other => panic!("Unexpected result: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_find_media_files_nonexistent_dir() {
    let missing = PathBuf::from("surely_this_does_not_exist_42_integration");
    assert!(matches!(
        find_media_files(&missing, DEFAULT_MEDIA_EXTENSIONS),
        Err(CoreError::Io(_))
    ));
}
