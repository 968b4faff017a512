#![forbid(unsafe_code)]

//! Demonstration binary for the argument store

use cmdline_parser::cli;
use cmdline_parser::output::stdout_color_choice;
use std::process;
use termcolor::StandardStream;

/// Exit code when the driver cannot start
const EXIT_ERROR: i32 = 1;

fn main() {
    // Non-UTF-8 arguments are kept, with invalid bytes replaced
    let args = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());

    let parser = match cli::build_parser(args) {
        Ok(parser) => parser,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(EXIT_ERROR);
        }
    };

    env_logger::Builder::new()
        .filter_level(cli::log_level(&parser))
        .format_timestamp_secs()
        .init();

    let mut stdout = StandardStream::stdout(stdout_color_choice());
    process::exit(cli::run(&parser, &mut stdout));
}
