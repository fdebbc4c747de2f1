// mediaprobe-cli/src/main.rs
//
// Entry point for the `mediaprobe` binary: parses arguments, sets up logging
// and color, runs the selected command and maps failure to exit code 1.

use clap::Parser;
use mediaprobe_cli::{Cli, logging, output, run};
use std::process;

fn main() {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose);
    output::init_color(cli.no_color);

    if let Err(e) = run(cli) {
        output::print_error(&format!("{:#}", e));
        process::exit(1);
    }
}
