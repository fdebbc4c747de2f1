//! Timecode parsing for ffprobe's pretty-printed timestamps.
//!
//! ffprobe's `-pretty` mode renders durations and start times as
//! `H:MM:SS.ffffff`, but other tools (and older ffprobe builds) emit shorter
//! shapes such as `62.5` or `1:02`. [`parse_timecode`] accepts all of them:
//!
//! ```text
//! [[H:]M:]S[(.|,)F]
//! ```
//!
//! where every component is a run of ASCII digits of any length. The
//! function is total: any text that does not match the whole grammar yields
//! [`Duration::ZERO`].

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

static TIMECODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:(?P<h>[0-9]+):)?(?P<m>[0-9]+):)?(?P<s>[0-9]+)(?:[.,](?P<f>[0-9]+))?$")
        .expect("timecode pattern is valid")
});

/// Parses `[[H:]M:]S[.F]` into a [`Duration`]. Returns zero on any mismatch.
///
/// Components fold base 60 as `((H * 60) + M) * 60 + S`; the fractional part
/// is a decimal fraction of a second added afterwards, so `"1.5"` is 1.5 s
/// and `"1.05"` is 1.05 s. A bare number is always seconds. Surrounding
/// whitespace and signs are not accepted.
///
/// # Examples
///
/// ```
/// use mediaprobe_core::parse_timecode;
/// use std::time::Duration;
///
/// assert_eq!(parse_timecode("1:2:3"), Duration::from_secs(3723));
/// assert_eq!(parse_timecode("12"), Duration::from_secs(12));
/// assert_eq!(parse_timecode("abc"), Duration::ZERO);
/// ```
#[must_use]
pub fn parse_timecode(text: &str) -> Duration {
    try_parse_timecode(text).unwrap_or(Duration::ZERO)
}

/// Like [`parse_timecode`], but returns `None` instead of zero when the text
/// does not match the grammar or does not fit in a [`Duration`].
#[must_use]
pub fn try_parse_timecode(text: &str) -> Option<Duration> {
    let Some(caps) = TIMECODE_RE.captures(text) else {
        log::trace!("Timecode '{text}' does not match [[h:]m:]s[.f]");
        return None;
    };

    let component = |name: &str| -> Option<u64> {
        caps.name(name).map_or(Some(0), |m| m.as_str().parse::<u64>().ok())
    };

    let whole = component("h")
        .and_then(|h| h.checked_mul(60)?.checked_add(component("m")?))
        .and_then(|m| m.checked_mul(60)?.checked_add(component("s")?));
    let Some(whole) = whole else {
        log::trace!("Timecode '{text}' is out of range");
        return None;
    };

    Some(Duration::new(
        whole,
        fraction_nanos(caps.name("f").map_or("", |m| m.as_str())),
    ))
}

/// Reads a decimal fraction of a second as nanoseconds, ignoring digits past
/// nanosecond precision.
fn fraction_nanos(digits: &str) -> u32 {
    let digits = &digits[..digits.len().min(9)];
    let scale = 10u32.pow(9 - digits.len() as u32);
    digits.parse::<u32>().map_or(0, |n| n * scale)
}

/// Formats a duration the way ffprobe's pretty mode does: `H:MM:SS.ffffff`.
#[must_use]
pub fn format_timecode(duration: Duration) -> String {
    let micros = duration.as_micros();
    let hours = micros / 3_600_000_000;
    let minutes = (micros / 60_000_000) % 60;
    let seconds = (micros / 1_000_000) % 60;
    let fraction = micros % 1_000_000;
    format!("{hours}:{minutes:02}:{seconds:02}.{fraction:06}")
}
