// ============================================================================
// mediaprobe-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger initialization for the CLI
//
// The core library only emits through the `log` facade. The CLI installs
// env_logger on stderr so log lines never mix with report output on stdout.
//
// USAGE:
// - default: info
// - -v/--verbose: debug (probe command lines, parse statistics)
// - RUST_LOG=trace: per-line fallbacks inside the parser

use log::LevelFilter;

/// Level used when RUST_LOG is not set.
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs env_logger writing to stderr. RUST_LOG, when present, wins.
pub fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(default_level(verbose))
        .format_timestamp(None)
        .format_target(false)
        .target(env_logger::Target::Stderr);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second init (e.g. in tests) is harmless.
    let _ = builder.try_init();
}
