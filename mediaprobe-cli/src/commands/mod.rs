//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of one subcommand.

/// `info`: probe files with ffprobe and print their descriptors.
pub mod info;
/// `parse`: parse a saved ffprobe report from a file or stdin.
pub mod parse;
/// `timecode`: convert ffprobe timecodes to seconds.
pub mod timecode;
