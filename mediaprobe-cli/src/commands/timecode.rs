// mediaprobe-cli/src/commands/timecode.rs
//
// `mediaprobe timecode`: prints the seconds value of each timecode.

use anyhow::Result;
use mediaprobe_core::try_parse_timecode;
use std::time::Duration;

use crate::cli::TimecodeArgs;

/// `<text>\t<seconds>`; unparseable input prints 0 like the report parser does.
pub fn timecode_line(text: &str) -> String {
    let seconds = try_parse_timecode(text)
        .unwrap_or_else(|| {
            log::warn!("'{}' is not a timecode, using 0", text);
            Duration::ZERO
        })
        .as_secs_f64();
    format!("{}\t{}", text, seconds)
}

pub fn run_timecode(args: TimecodeArgs) -> Result<()> {
    for value in &args.values {
        println!("{}", timecode_line(value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timecode_line() {
        assert_eq!(timecode_line("5"), "5\t5");
        assert_eq!(timecode_line("1:2:3"), "1:2:3\t3723");
        assert_eq!(timecode_line("01:02:03.250"), "01:02:03.250\t3723.25");
        assert_eq!(timecode_line("abc"), "abc\t0");
    }
}
