use mediaprobe_core::{ReportParser, format_timecode};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Usage: cargo run -p mediaprobe-core --example parse_saved_report -- report.txt
    let path = env::args().nth(1).ok_or("usage: parse_saved_report <report.txt>")?;
    let raw = std::fs::read_to_string(&path)?;

    let parsed = ReportParser::parse(path.as_str(), &raw);
    let media = &parsed.descriptor;

    println!("Format:   {}", media.format_name.as_deref().unwrap_or("unknown"));
    println!("Duration: {}", format_timecode(media.duration()));
    println!("Size:     {}x{}", media.width, media.height);
    for stream in &media.streams {
        println!(
            "  stream {} ({}): {}",
            stream.index,
            stream.kind(),
            stream.codec_name.as_deref().unwrap_or("?")
        );
    }

    println!("\nParse statistics:");
    println!("{}", serde_json::to_string_pretty(&parsed.stats)?);
    Ok(())
}
