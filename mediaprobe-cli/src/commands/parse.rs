// mediaprobe-cli/src/commands/parse.rs
//
// `mediaprobe parse`: parses a report saved from
// `ffprobe -hide_banner -show_format -show_streams -pretty`.

use anyhow::{Context, Result};
use mediaprobe_core::{MediaDescriptor, ReportParser, parse_report_strict};
use std::io::Read;
use std::path::Path;

use crate::cli::ParseArgs;
use crate::output::{print_descriptor, print_warning};

const STDIN_MARKER: &str = "-";

fn read_report(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_MARKER {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read report from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read report '{}'", path.display()))
    }
}

/// Parses report text according to the command flags.
pub fn parse_text(args: &ParseArgs, raw: &str) -> Result<MediaDescriptor> {
    let filename = match &args.filename {
        Some(name) => name.clone(),
        None if args.report.as_os_str() == STDIN_MARKER => String::new(),
        None => args.report.display().to_string(),
    };

    if args.strict {
        return Ok(parse_report_strict(&filename, raw)?);
    }

    let parsed = ReportParser::parse(filename, raw);
    if !parsed.stats.saw_sections() {
        print_warning("No [FORMAT] or [STREAM] sections found; the descriptor is empty");
    }
    Ok(parsed.descriptor)
}

pub fn run_parse(args: ParseArgs) -> Result<()> {
    let raw = read_report(&args.report)?;
    let media = parse_text(&args, &raw)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&media)?);
    } else {
        print_descriptor(&media, None);
    }
    Ok(())
}
