// mediaprobe-cli/src/lib.rs
//
// Library portion of the mediaprobe CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, InfoArgs, ParseArgs, TimecodeArgs};
pub use commands::info::run_info;
pub use commands::parse::run_parse;
pub use commands::timecode::run_timecode;

/// Dispatches a parsed command line to its subcommand.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Info(args) => run_info(args),
        Commands::Parse(args) => run_parse(args),
        Commands::Timecode(args) => run_timecode(args),
    }
}
