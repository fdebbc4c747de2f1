// ============================================================================
// mediaprobe-cli/src/output.rs
// ============================================================================
//
// TERMINAL OUTPUT: Human-readable rendering of media descriptors
//
// Report output goes to stdout; errors and warnings go to stderr. Color is
// decided once at startup from the terminal (supports-color, which honors
// NO_COLOR) and the --no-color flag.

use mediaprobe_core::{MediaDescriptor, StreamDescriptor, StreamKind, format_dimensions, format_timecode};
use owo_colors::{OwoColorize, Style};
use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

static USE_COLOR: AtomicBool = AtomicBool::new(false);

/// Enables color when stdout supports it and the user did not opt out.
pub fn init_color(no_color: bool) {
    let supported = supports_color::on(supports_color::Stream::Stdout).is_some();
    USE_COLOR.store(supported && !no_color, Ordering::Relaxed);
}

fn paint<T: Display>(text: T, style: Style) -> String {
    if USE_COLOR.load(Ordering::Relaxed) {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Print a heading with a separating rule
pub fn print_heading(text: &str) {
    let line = "=".repeat(50);
    println!("{}", paint(&line, Style::new().bright_blue()));
    println!("{}", paint(format!(" {} ", text), Style::new().bold().bright_white()));
    println!("{}", paint(&line, Style::new().bright_blue()));
}

/// Print a section heading (smaller than main heading)
pub fn print_section(text: &str) {
    println!("{}", paint(format!("-- {} --", text), Style::new().bold().white()));
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("  {:<14} {}", paint(format!("{}:", label), Style::new().bright_cyan()), value);
}

pub fn print_warning(message: &str) {
    eprintln!("{} {}", paint("warning:", Style::new().yellow().bold()), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", paint("error:", Style::new().bright_red().bold()), message);
}

/// Prints the full human-readable view of one descriptor.
pub fn print_descriptor(media: &MediaDescriptor, file_size: Option<String>) {
    let title = if media.filename.is_empty() {
        "(unnamed)"
    } else {
        media.filename.as_str()
    };
    print_heading(title);

    print_info("Format", describe_format(media));
    print_info(
        "Duration",
        format!("{} ({:.3} s)", format_timecode(media.duration()), media.duration_seconds),
    );
    if let Some(bit_rate) = &media.bit_rate {
        print_info("Bit rate", bit_rate);
    }
    if let Some(dimensions) = format_dimensions(media.width, media.height) {
        print_info("Resolution", dimensions);
    }
    if let Some(size) = file_size {
        print_info("File size", size);
    }
    for (key, value) in media.tags() {
        print_info(key, value);
    }

    if media.streams.is_empty() {
        return;
    }
    print_section(&format!("{} stream(s)", media.streams.len()));
    for stream in &media.streams {
        println!("  {}", describe_stream(stream));
    }
}

fn describe_format(media: &MediaDescriptor) -> String {
    match (&media.format_name, &media.format_long_name) {
        (Some(name), Some(long)) => format!("{} ({})", name, long),
        (Some(name), None) => name.clone(),
        (None, Some(long)) => long.clone(),
        (None, None) => "unknown".to_string(),
    }
}

/// One-line summary of a stream, e.g. `#0 Video: h264 1920x1080 yuv420p 25 fps`.
pub fn describe_stream(stream: &StreamDescriptor) -> String {
    let mut parts = vec![format!(
        "#{} {}: {}",
        stream.index,
        stream.kind(),
        stream.codec_name.as_deref().unwrap_or("unknown")
    )];

    match stream.kind() {
        StreamKind::Video => {
            parts.extend(format_dimensions(stream.width, stream.height));
            parts.extend(stream.pixel_format.clone());
            if let Some(fps) = stream.frame_rate_fps() {
                parts.push(format_fps(fps));
            }
        }
        StreamKind::Audio => {
            parts.extend(stream.sample_rate.clone());
            if let Some(layout) = &stream.channel_layout {
                parts.push(layout.clone());
            } else if stream.channels > 0 {
                parts.push(format!("{} ch", stream.channels));
            }
        }
        _ => {}
    }

    if let Some(language) = stream
        .tags()
        .into_iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("language"))
        .map(|(_, value)| value)
    {
        parts.push(format!("[{}]", language));
    }

    parts.join(" ")
}

fn format_fps(fps: f64) -> String {
    if fps.fract().abs() < 1e-9 {
        format!("{:.0} fps", fps)
    } else {
        format!("{:.3} fps", fps)
    }
}
