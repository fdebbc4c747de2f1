//! Line-oriented parser for ffprobe's sectioned key/value report.
//!
//! The parser walks the report once, tracking which section it is in:
//!
//! ```text
//! [FORMAT]            -> Section::Format
//! format_name=...     -> FormatField table, else format extra_fields
//! [/FORMAT]           -> Section::None
//! [STREAM]            -> push a new StreamDescriptor, Section::Stream
//! codec_type=video    -> StreamField table, else stream extra_fields
//! [/STREAM]           -> Section::None
//! ```
//!
//! Any closing marker (`[/SIDE_DATA]` included) leaves the current section,
//! so lines after a nested block and before the next opening marker are
//! ignored. Malformed input never stops the parse; see [`parse_report`].

use serde::Serialize;

use super::descriptor::{MediaDescriptor, StreamDescriptor};
use super::fields::{Conversion, FormatField, StreamField};
use crate::error::{CoreError, CoreResult};

const CLOSE_MARKER: &str = "[/";
const FORMAT_MARKER: &str = "[FORMAT]";
const STREAM_MARKER: &str = "[STREAM]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Format,
    Stream,
}

/// Counters collected while parsing one report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Lines after line-ending normalization
    pub lines: usize,
    pub format_sections: usize,
    pub stream_sections: usize,
    /// Values stored into a named attribute
    pub mapped_fields: usize,
    /// Values appended to an `extra_fields` list
    pub extra_fields: usize,
    /// Lines outside any section, or without a `=`
    pub ignored_lines: usize,
    /// Numeric or timecode values replaced by their default
    pub fallbacks: usize,
}

impl ParseStats {
    /// True when at least one `[FORMAT]` or `[STREAM]` marker was seen.
    pub fn saw_sections(&self) -> bool {
        self.format_sections + self.stream_sections > 0
    }
}

/// A parsed descriptor together with the counters of the parse that built it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReport {
    pub descriptor: MediaDescriptor,
    pub stats: ParseStats,
}

/// Incremental report parser. One instance parses one report.
#[derive(Debug)]
pub struct ReportParser {
    section: Section,
    media: MediaDescriptor,
    stats: ParseStats,
}

impl ReportParser {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            section: Section::None,
            media: MediaDescriptor::new(filename),
            stats: ParseStats::default(),
        }
    }

    /// Parses a complete report, normalizing `\r\n`, `\r` and `\n` line endings.
    pub fn parse(filename: impl Into<String>, raw_text: &str) -> ParsedReport {
        let mut parser = Self::new(filename);
        for line in split_lines(raw_text) {
            parser.feed_line(line);
        }
        parser.finish()
    }

    /// Feeds one line, without its line terminator.
    pub fn feed_line(&mut self, line: &str) {
        self.stats.lines += 1;

        if line.starts_with(CLOSE_MARKER) {
            self.section = Section::None;
        } else if line.starts_with(FORMAT_MARKER) {
            self.stats.format_sections += 1;
            self.section = Section::Format;
        } else if line.starts_with(STREAM_MARKER) {
            self.stats.stream_sections += 1;
            self.media.streams.push(StreamDescriptor::default());
            self.section = Section::Stream;
        } else if self.section == Section::None {
            self.stats.ignored_lines += 1;
        } else if let Some((key, value)) = line.split_once('=') {
            self.store(key, value);
        } else {
            log::trace!("Ignoring line without '=': {line:?}");
            self.stats.ignored_lines += 1;
        }
    }

    /// Runs the post-pass and returns the descriptor with its statistics.
    pub fn finish(mut self) -> ParsedReport {
        self.media.derive_video_geometry();
        log::debug!(
            "Parsed probe report for '{}': {} stream(s), {} mapped, {} extra, {} ignored, {} fallback(s)",
            self.media.filename,
            self.media.streams.len(),
            self.stats.mapped_fields,
            self.stats.extra_fields,
            self.stats.ignored_lines,
            self.stats.fallbacks,
        );
        ParsedReport {
            descriptor: self.media,
            stats: self.stats,
        }
    }

    fn store(&mut self, key: &str, value: &str) {
        let (conversion, extras) = match self.section {
            Section::Format => match FormatField::lookup(key) {
                Some(field) => (Some(field.apply(&mut self.media, value)), None),
                None => (None, Some(&mut self.media.extra_fields)),
            },
            Section::Stream => {
                let Some(stream) = self.media.streams.last_mut() else {
                    return;
                };
                match StreamField::lookup(key) {
                    Some(field) => (Some(field.apply(stream, value)), None),
                    None => (None, Some(&mut stream.extra_fields)),
                }
            }
            Section::None => return,
        };

        if let Some(extras) = extras {
            extras.push((key.to_string(), value.to_string()));
            self.stats.extra_fields += 1;
        }
        match conversion {
            Some(Conversion::Stored) => self.stats.mapped_fields += 1,
            Some(Conversion::Defaulted) => {
                log::trace!("Field '{key}' of '{}' fell back to its default", self.media.filename);
                self.stats.mapped_fields += 1;
                self.stats.fallbacks += 1;
            }
            None => {}
        }
    }
}

/// Splits text into lines, treating `\r\n`, a bare `\r` and a bare `\n` alike.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\r', '\n']) {
            Some(pos) => {
                let skip = if current[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[pos + skip..]);
                Some(&current[..pos])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

/// Parses an ffprobe `-show_format -show_streams -pretty` report.
///
/// This never fails. Malformed fragments are absorbed locally:
///
/// - a timestamp that does not match `[[h:]m:]s[.f]` becomes 0 seconds;
/// - an integer that does not parse becomes the field's default (`-1` for
///   `index`, 0 otherwise);
/// - a line without `=` inside a section is dropped;
/// - an unknown key is kept, in order, in the current record's `extra_fields`.
///
/// Empty input yields a descriptor with every field at its default. Callers
/// that must distinguish that case can check [`MediaDescriptor::is_default`]
/// or use [`parse_report_strict`].
///
/// # Examples
///
/// ```
/// use mediaprobe_core::parse_report;
///
/// let report = "[FORMAT]\nformat_name=mov,mp4\nduration=0:01:02.500000\n[/FORMAT]\n";
/// let media = parse_report("clip.mp4", report);
/// assert_eq!(media.format_name.as_deref(), Some("mov,mp4"));
/// assert!((media.duration_seconds - 62.5).abs() < 1e-9);
/// ```
pub fn parse_report(filename: &str, raw_text: &str) -> MediaDescriptor {
    ReportParser::parse(filename, raw_text).descriptor
}

/// Parses a report like [`parse_report`], but rejects input that cannot be a report.
///
/// # Errors
///
/// * `CoreError::EmptyReport` - the text is empty or only whitespace
/// * `CoreError::NoSections` - no `[FORMAT]` or `[STREAM]` marker was found
pub fn parse_report_strict(filename: &str, raw_text: &str) -> CoreResult<MediaDescriptor> {
    if raw_text.trim().is_empty() {
        return Err(CoreError::EmptyReport(filename.to_string()));
    }

    let parsed = ReportParser::parse(filename, raw_text);
    if !parsed.stats.saw_sections() {
        return Err(CoreError::NoSections(filename.to_string()));
    }
    Ok(parsed.descriptor)
}
