//! Key dispatch tables for the `[FORMAT]` and `[STREAM]` sections.
//!
//! Each table maps a report key to a typed slot. Lookup ignores ASCII case.
//! Keys not in a table belong in the record's `extra_fields`; the parser
//! handles that branch.

use std::str::FromStr;

use super::descriptor::{MediaDescriptor, StreamDescriptor};
use crate::timecode::try_parse_timecode;

/// Outcome of storing one value into a typed slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// The value was stored as read.
    Stored,
    /// The value did not convert and the slot's default was stored instead.
    Defaulted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatField {
    FormatName,
    FormatLongName,
    Duration,
    BitRate,
}

const FORMAT_FIELDS: &[(&str, FormatField)] = &[
    ("format_name", FormatField::FormatName),
    ("format_long_name", FormatField::FormatLongName),
    ("duration", FormatField::Duration),
    ("bit_rate", FormatField::BitRate),
];

impl FormatField {
    pub fn lookup(key: &str) -> Option<Self> {
        lookup(FORMAT_FIELDS, key)
    }

    pub fn apply(self, media: &mut MediaDescriptor, value: &str) -> Conversion {
        match self {
            FormatField::FormatName => store_text(&mut media.format_name, value),
            FormatField::FormatLongName => store_text(&mut media.format_long_name, value),
            FormatField::Duration => store_timecode(&mut media.duration_seconds, value),
            FormatField::BitRate => store_text(&mut media.bit_rate, value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamField {
    Index,
    CodecName,
    CodecLongName,
    CodecType,
    CodecTimeBase,
    CodecTagString,
    CodecTag,
    Width,
    Height,
    SampleAspectRatio,
    DisplayAspectRatio,
    PixelFormat,
    FrameRate,
    StartTime,
    Duration,
    FrameCount,
    SampleRate,
    Channels,
    ChannelLayout,
}

const STREAM_FIELDS: &[(&str, StreamField)] = &[
    ("index", StreamField::Index),
    ("codec_name", StreamField::CodecName),
    ("codec_long_name", StreamField::CodecLongName),
    ("codec_type", StreamField::CodecType),
    ("codec_time_base", StreamField::CodecTimeBase),
    ("codec_tag_string", StreamField::CodecTagString),
    ("codec_tag", StreamField::CodecTag),
    ("width", StreamField::Width),
    ("height", StreamField::Height),
    ("sample_aspect_ratio", StreamField::SampleAspectRatio),
    ("display_aspect_ratio", StreamField::DisplayAspectRatio),
    ("pix_fmt", StreamField::PixelFormat),
    ("r_frame_rate", StreamField::FrameRate),
    ("start_time", StreamField::StartTime),
    ("duration", StreamField::Duration),
    ("nb_frames", StreamField::FrameCount),
    ("sample_rate", StreamField::SampleRate),
    ("channels", StreamField::Channels),
    ("channel_layout", StreamField::ChannelLayout),
];

/// Stream index stored when the report's `index` value is not an integer.
pub const INVALID_STREAM_INDEX: i32 = -1;

impl StreamField {
    pub fn lookup(key: &str) -> Option<Self> {
        lookup(STREAM_FIELDS, key)
    }

    pub fn apply(self, stream: &mut StreamDescriptor, value: &str) -> Conversion {
        match self {
            StreamField::Index => store_number(&mut stream.index, value, INVALID_STREAM_INDEX),
            StreamField::CodecName => store_text(&mut stream.codec_name, value),
            StreamField::CodecLongName => store_text(&mut stream.codec_long_name, value),
            StreamField::CodecType => store_text(&mut stream.codec_type, value),
            StreamField::CodecTimeBase => store_text(&mut stream.codec_time_base, value),
            StreamField::CodecTagString => store_text(&mut stream.codec_tag_string, value),
            StreamField::CodecTag => store_text(&mut stream.codec_tag, value),
            StreamField::Width => store_number(&mut stream.width, value, 0),
            StreamField::Height => store_number(&mut stream.height, value, 0),
            StreamField::SampleAspectRatio => store_text(&mut stream.sample_aspect_ratio, value),
            StreamField::DisplayAspectRatio => store_text(&mut stream.display_aspect_ratio, value),
            StreamField::PixelFormat => store_text(&mut stream.pixel_format, value),
            StreamField::FrameRate => store_text(&mut stream.frame_rate, value),
            StreamField::StartTime => store_timecode(&mut stream.start_time_seconds, value),
            StreamField::Duration => store_timecode(&mut stream.duration_seconds, value),
            StreamField::FrameCount => store_number(&mut stream.frame_count, value, 0),
            StreamField::SampleRate => store_text(&mut stream.sample_rate, value),
            StreamField::Channels => store_number(&mut stream.channels, value, 0),
            StreamField::ChannelLayout => store_text(&mut stream.channel_layout, value),
        }
    }
}

fn lookup<F: Copy>(table: &[(&str, F)], key: &str) -> Option<F> {
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, field)| *field)
}

fn store_text(slot: &mut Option<String>, value: &str) -> Conversion {
    *slot = Some(value.to_string());
    Conversion::Stored
}

/// Parses an integer, tolerating surrounding whitespace; stores `default` on failure.
fn store_number<T: FromStr>(slot: &mut T, value: &str, default: T) -> Conversion {
    match value.trim().parse::<T>() {
        Ok(number) => {
            *slot = number;
            Conversion::Stored
        }
        Err(_) => {
            log::trace!("Value '{value}' is not an integer, using default");
            *slot = default;
            Conversion::Defaulted
        }
    }
}

fn store_timecode(slot: &mut f64, value: &str) -> Conversion {
    match try_parse_timecode(value) {
        Some(duration) => {
            *slot = duration.as_secs_f64();
            Conversion::Stored
        }
        None => {
            *slot = 0.0;
            Conversion::Defaulted
        }
    }
}
