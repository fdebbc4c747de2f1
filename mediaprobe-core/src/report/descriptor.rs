//! Typed descriptors produced by the report parser.
//!
//! A [`MediaDescriptor`] describes one probed container and owns its
//! [`StreamDescriptor`]s. Both are plain values: built fresh by a single
//! parse call and never mutated afterwards.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Ordered `(key, value)` pairs that had no named attribute.
///
/// Insertion order is kept and duplicate keys are preserved.
pub type ExtraFields = Vec<(String, String)>;

/// Prefix ffprobe puts in front of container and stream tags.
const TAG_PREFIX: &str = "TAG:";

/// Broad category of an elementary stream, derived from `codec_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamKind {
    Video,
    Audio,
    Subtitle,
    Attachment,
    Data,
    Other,
}

impl From<&str> for StreamKind {
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "video" => StreamKind::Video,
            "audio" => StreamKind::Audio,
            "subtitle" => StreamKind::Subtitle,
            "attachment" => StreamKind::Attachment,
            "data" => StreamKind::Data,
            _ => StreamKind::Other,
        }
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamKind::Video => write!(f, "Video"),
            StreamKind::Audio => write!(f, "Audio"),
            StreamKind::Subtitle => write!(f, "Subtitle"),
            StreamKind::Attachment => write!(f, "Attachment"),
            StreamKind::Data => write!(f, "Data"),
            StreamKind::Other => write!(f, "Other"),
        }
    }
}

/// One elementary stream section of a probe report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    /// Stream index within the container. `-1` if the report value was not an integer.
    pub index: i32,

    /// Codec name (e.g. `h264`)
    pub codec_name: Option<String>,

    /// Codec description (e.g. `H.264 / AVC / MPEG-4 AVC / MPEG-4 part 10`)
    pub codec_long_name: Option<String>,

    /// Codec type as reported: usually `video`, `audio`, `subtitle`
    pub codec_type: Option<String>,

    pub codec_time_base: Option<String>,

    /// FourCC tag (e.g. `avc1`)
    pub codec_tag_string: Option<String>,

    /// FourCC integer value as reported (e.g. `0x31637661`)
    pub codec_tag: Option<String>,

    pub width: i32,
    pub height: i32,

    /// Sample aspect ratio (e.g. `64:45`)
    pub sample_aspect_ratio: Option<String>,

    /// Display aspect ratio (e.g. `16:9`)
    pub display_aspect_ratio: Option<String>,

    /// Pixel format (e.g. `yuv420p`)
    pub pixel_format: Option<String>,

    /// Raw `r_frame_rate` text (e.g. `25/1`). See [`StreamDescriptor::frame_rate_fps`].
    pub frame_rate: Option<String>,

    /// `nb_frames`, or 0 when unknown
    pub frame_count: i64,

    /// Raw sample rate text (e.g. `48000 Hz` in pretty mode)
    pub sample_rate: Option<String>,

    pub channels: i32,

    /// Channel layout name (e.g. `stereo`)
    pub channel_layout: Option<String>,

    pub start_time_seconds: f64,
    pub duration_seconds: f64,

    /// Fields of this stream section without a named attribute
    pub extra_fields: ExtraFields,
}

impl StreamDescriptor {
    /// Category of this stream; [`StreamKind::Other`] when `codec_type` is missing.
    pub fn kind(&self) -> StreamKind {
        self.codec_type
            .as_deref()
            .map(StreamKind::from)
            .unwrap_or(StreamKind::Other)
    }

    /// True when `codec_type` is `video`, ignoring case.
    pub fn is_video(&self) -> bool {
        self.kind() == StreamKind::Video
    }

    /// Frame rate evaluated from the raw `frame_rate` text.
    ///
    /// Accepts `num/den` and plain decimal forms. Returns `None` for a zero
    /// denominator (ffprobe reports `0/0` for streams without a rate) or any
    /// text that is not a number.
    pub fn frame_rate_fps(&self) -> Option<f64> {
        let raw = self.frame_rate.as_deref()?.trim();
        let fps = match raw.split_once('/') {
            Some((num, den)) => {
                let num = num.trim().parse::<f64>().ok()?;
                let den = den.trim().parse::<f64>().ok()?;
                if den == 0.0 {
                    return None;
                }
                num / den
            }
            None => raw.parse::<f64>().ok()?,
        };
        fps.is_finite().then_some(fps)
    }

    pub fn start_time(&self) -> Duration {
        Duration::try_from_secs_f64(self.start_time_seconds).unwrap_or_default()
    }

    pub fn duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.duration_seconds).unwrap_or_default()
    }

    /// First extra value stored under `key`, compared case-insensitively.
    pub fn extra(&self, key: &str) -> Option<&str> {
        find_extra(&self.extra_fields, key)
    }

    /// `TAG:` entries of this stream with the prefix removed, in report order.
    pub fn tags(&self) -> Vec<(&str, &str)> {
        collect_tags(&self.extra_fields)
    }
}

/// Structured description of one probed media container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaDescriptor {
    /// Name of the probed file as given to the parser
    pub filename: String,

    /// Format name (e.g. `mov,mp4,m4a,3gp,3g2,mj2`)
    pub format_name: Option<String>,

    /// Format description (e.g. `QuickTime / MOV`)
    pub format_long_name: Option<String>,

    /// Container duration in seconds, 0 when absent or unparseable
    pub duration_seconds: f64,

    /// Raw bit rate text; the unit depends on how ffprobe was invoked
    pub bit_rate: Option<String>,

    /// Streams in report order
    pub streams: Vec<StreamDescriptor>,

    /// Format fields without a named attribute
    pub extra_fields: ExtraFields,

    /// Width of the first video stream, 0 if there is none
    pub width: i32,

    /// Height of the first video stream, 0 if there is none
    pub height: i32,
}

impl MediaDescriptor {
    /// Creates an empty descriptor for `filename`.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Default::default()
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.duration_seconds).unwrap_or_default()
    }

    pub fn video_streams(&self) -> Vec<&StreamDescriptor> {
        self.streams_of(StreamKind::Video)
    }

    pub fn audio_streams(&self) -> Vec<&StreamDescriptor> {
        self.streams_of(StreamKind::Audio)
    }

    pub fn subtitle_streams(&self) -> Vec<&StreamDescriptor> {
        self.streams_of(StreamKind::Subtitle)
    }

    /// The first video stream in report order, the one `width`/`height` come from.
    pub fn primary_video_stream(&self) -> Option<&StreamDescriptor> {
        self.streams.iter().find(|s| s.is_video())
    }

    /// First extra format value stored under `key`, compared case-insensitively.
    pub fn extra(&self, key: &str) -> Option<&str> {
        find_extra(&self.extra_fields, key)
    }

    /// Container `TAG:` entries with the prefix removed, in report order.
    pub fn tags(&self) -> Vec<(&str, &str)> {
        collect_tags(&self.extra_fields)
    }

    /// True when nothing besides the filename was filled in.
    ///
    /// Parsing never fails, so this is how a caller tells "the probe produced
    /// nothing" apart from "the probe succeeded with gaps".
    pub fn is_default(&self) -> bool {
        *self == Self::new(self.filename.clone())
    }

    /// Copies the first video stream's geometry into `width`/`height`.
    pub(crate) fn derive_video_geometry(&mut self) {
        let (width, height) = self
            .primary_video_stream()
            .map(|video| (video.width, video.height))
            .unwrap_or((0, 0));
        self.width = width;
        self.height = height;
    }

    fn streams_of(&self, kind: StreamKind) -> Vec<&StreamDescriptor> {
        self.streams.iter().filter(|s| s.kind() == kind).collect()
    }
}

fn find_extra<'a>(fields: &'a [(String, String)], key: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v.as_str())
}

fn collect_tags(fields: &[(String, String)]) -> Vec<(&str, &str)> {
    fields
        .iter()
        .filter_map(|(k, v)| k.strip_prefix(TAG_PREFIX).map(|tag| (tag, v.as_str())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(codec_type: &str, width: i32, height: i32) -> StreamDescriptor {
        StreamDescriptor {
            codec_type: Some(codec_type.to_string()),
            width,
            height,
            ..Default::default()
        }
    }

    #[test]
    fn test_stream_kind_is_case_insensitive() {
        assert_eq!(StreamKind::from("video"), StreamKind::Video);
        assert_eq!(StreamKind::from("VIDEO"), StreamKind::Video);
        assert_eq!(StreamKind::from("Audio"), StreamKind::Audio);
        assert_eq!(StreamKind::from("subtitle"), StreamKind::Subtitle);
        assert_eq!(StreamKind::from("attachment"), StreamKind::Attachment);
        assert_eq!(StreamKind::from("data"), StreamKind::Data);
        assert_eq!(StreamKind::from("unknown"), StreamKind::Other);
        assert_eq!(StreamDescriptor::default().kind(), StreamKind::Other);
    }

    #[test]
    fn test_frame_rate_fps() {
        let mut s = StreamDescriptor::default();
        assert_eq!(s.frame_rate_fps(), None);

        s.frame_rate = Some("25/1".to_string());
        assert_eq!(s.frame_rate_fps(), Some(25.0));

        s.frame_rate = Some("30000/1001".to_string());
        let fps = s.frame_rate_fps().unwrap();
        assert!((fps - 29.97).abs() < 0.001);

        s.frame_rate = Some("24".to_string());
        assert_eq!(s.frame_rate_fps(), Some(24.0));

        s.frame_rate = Some("0/0".to_string());
        assert_eq!(s.frame_rate_fps(), None);

        s.frame_rate = Some("fast".to_string());
        assert_eq!(s.frame_rate_fps(), None);

        // The raw text is never rewritten.
        assert_eq!(s.frame_rate.as_deref(), Some("fast"));
    }

    #[test]
    fn test_stream_filters_and_primary_video() {
        let mut media = MediaDescriptor::new("clip.mp4");
        media.streams = vec![
            stream("audio", 0, 0),
            stream("Video", 1280, 720),
            stream("video", 1920, 1080),
            stream("subtitle", 0, 0),
        ];

        assert_eq!(media.video_streams().len(), 2);
        assert_eq!(media.audio_streams().len(), 1);
        assert_eq!(media.subtitle_streams().len(), 1);
        assert_eq!(media.primary_video_stream().map(|s| s.width), Some(1280));

        media.derive_video_geometry();
        assert_eq!((media.width, media.height), (1280, 720));
    }

    #[test]
    fn test_geometry_without_video_is_zero() {
        let mut media = MediaDescriptor::new("song.flac");
        media.width = 7;
        media.streams = vec![stream("audio", 0, 0)];
        media.derive_video_geometry();
        assert_eq!((media.width, media.height), (0, 0));
    }

    #[test]
    fn test_extra_lookup_and_tags() {
        let mut media = MediaDescriptor::new("movie.mkv");
        media.extra_fields = vec![
            ("nb_streams".to_string(), "2".to_string()),
            ("TAG:title".to_string(), "First".to_string()),
            ("TAG:encoder".to_string(), "libebml".to_string()),
            ("TAG:title".to_string(), "Second".to_string()),
        ];

        assert_eq!(media.extra("NB_STREAMS"), Some("2"));
        assert_eq!(media.extra("tag:title"), Some("First"));
        assert_eq!(media.extra("size"), None);
        assert_eq!(
            media.tags(),
            vec![("title", "First"), ("encoder", "libebml"), ("title", "Second")]
        );
    }

    #[test]
    fn test_is_default() {
        let media = MediaDescriptor::new("empty.mkv");
        assert!(media.is_default());

        let mut media = MediaDescriptor::new("partial.mkv");
        media.extra_fields.push((String::new(), "orphan".to_string()));
        assert!(!media.is_default());
    }

    #[test]
    fn test_durations() {
        let s = StreamDescriptor {
            start_time_seconds: 1.5,
            duration_seconds: -3.0,
            ..Default::default()
        };
        assert_eq!(s.start_time(), Duration::from_millis(1500));
        assert_eq!(s.duration(), Duration::ZERO);
    }
}
