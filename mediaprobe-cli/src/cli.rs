// mediaprobe-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    name = "mediaprobe",
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Mediaprobe: ffprobe report inspector",
    long_about = "Probes media files with ffprobe and turns its pretty-printed report into structured descriptors."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (RUST_LOG overrides this)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probes media files (or directories of them) with ffprobe
    Info(InfoArgs),
    /// Parses a saved ffprobe report
    Parse(ParseArgs),
    /// Converts timecodes such as 1:02:03.250 to seconds
    Timecode(TimecodeArgs),
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Media files or directories to probe
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Print descriptors as JSON
    #[arg(long)]
    pub json: bool,

    /// ffprobe executable to use
    #[arg(long, value_name = "FFPROBE")]
    pub ffprobe: Option<PathBuf>,

    /// Number of files probed in parallel
    #[arg(short, long, value_name = "JOBS", value_parser = clap::value_parser!(u16).range(1..))]
    pub jobs: Option<u16>,

    /// Treat empty or section-less ffprobe output as an error
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Report file to parse, or - for stdin
    #[arg(value_name = "REPORT")]
    pub report: PathBuf,

    /// Filename to record in the descriptor (defaults to the report path)
    #[arg(long, value_name = "NAME")]
    pub filename: Option<String>,

    /// Print the descriptor as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat empty or section-less input as an error
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct TimecodeArgs {
    /// Timecodes in [[H:]M:]S[.fraction] form
    #[arg(required = true, value_name = "TEXT", allow_hyphen_values = true)]
    pub values: Vec<String>,
}
