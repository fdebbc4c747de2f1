// Runs `mediaprobe info` against a shell script standing in for ffprobe.
// Kept in its own test binary so no other test forks while the script is
// being written.

#![cfg(unix)]

use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use std::os::unix::fs::PermissionsExt;
use tempfile::tempdir;

const CLIP_REPORT: &str = include_str!("fixtures/clip_mp4.txt");

#[test]
fn test_info_command_with_fake_ffprobe() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    let report = dir.path().join("report.txt");
    std::fs::write(&report, CLIP_REPORT)?;

    let script = dir.path().join("ffprobe");
    std::fs::write(
        &script,
        format!(
            "#!/bin/sh\nif [ \"$1\" = \"-version\" ]; then exit 0; fi\ncat '{}'\n",
            report.display()
        ),
    )?;
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))?;

    let media_dir = dir.path().join("media");
    std::fs::create_dir(&media_dir)?;
    std::fs::write(media_dir.join("My Clip.mp4"), "dummy content")?;
    std::fs::write(media_dir.join("notes.txt"), "not media")?;

    let output = Command::cargo_bin("mediaprobe")?
        .args(["info", "--json", "--jobs", "1", "--ffprobe"])
        .arg(&script)
        .arg(&media_dir)
        .output()?;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let items = json.as_array().ok_or("expected a JSON array")?;
    assert_eq!(items.len(), 1);
    assert!(items[0]["filename"].as_str().unwrap_or_default().ends_with("My Clip.mp4"));
    assert_eq!(items[0]["format_long_name"], "QuickTime / MOV");

    Command::cargo_bin("mediaprobe")?
        .args(["--no-color", "info", "--ffprobe"])
        .arg(&script)
        .arg(media_dir.join("My Clip.mp4"))
        .assert()
        .success()
        .stdout(contains("File size"))
        .stdout(contains("13 B"));

    Ok(())
}
