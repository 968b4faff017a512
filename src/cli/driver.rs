#![forbid(unsafe_code)]

//! Demonstration driver
//!
//! Interprets a fixed set of flags with the store's query primitives:
//!
//! - `-h`, `--help`: print the help text
//! - `-v`, `--version`: print the version text
//! - `-f`, `--file <path>`: mandatory file path
//! - `-V`, `--verbose`: optional verbose switch
//!
//! Help wins over version, and version over the file path check.
//!
//! When stdout is a terminal, help and version output is styled with ANSI
//! bold escapes and is not the exact plain layout. Piped output is plain.

use crate::config::{Config, ConfigError};
use crate::output::{write_help, write_version};
use crate::parser::CmdLineParser;
use log::LevelFilter;
use std::io::{self, Write};
use termcolor::WriteColor;

/// Metadata the driver describes itself with
pub const DEFAULT_CONFIG: &str = include_str!("default_app.toml");

/// Exit codes for the driver
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;

const HELP_FLAGS: [&str; 2] = ["-h", "--help"];
const VERSION_FLAGS: [&str; 2] = ["-v", "--version"];
const FILE_FLAGS: [&str; 2] = ["-f", "--file"];
const VERBOSE_FLAGS: [&str; 2] = ["-V", "--verbose"];

/// Build a store holding the default metadata and the given tokens
pub fn build_parser<I, S>(args: I) -> Result<CmdLineParser, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let config = Config::parse(DEFAULT_CONFIG)?;

    let mut parser = CmdLineParser::new();
    config.apply(&mut parser);
    parser.parse(args);

    Ok(parser)
}

/// Whether any verbose alias was passed
pub fn is_verbose(parser: &CmdLineParser) -> bool {
    has_any(parser, &VERBOSE_FLAGS)
}

/// Log level for the invocation: debug when verbose, warnings otherwise
pub fn log_level(parser: &CmdLineParser) -> LevelFilter {
    if is_verbose(parser) {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Run the driver against an already populated store
///
/// Output goes to `out`; styling is applied only if `out` supports color.
///
/// # Returns
///
/// Exit code:
/// - 0: Success, including a missing file path (help is shown instead)
/// - 1: Output could not be written
pub fn run<W: WriteColor>(parser: &CmdLineParser, out: &mut W) -> i32 {
    match run_inner(parser, out) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Failed to write output: {}", e);
            EXIT_ERROR
        }
    }
}

fn run_inner<W: WriteColor>(parser: &CmdLineParser, out: &mut W) -> io::Result<()> {
    log::debug!("parsed {} tokens: {:?}", parser.args().len(), parser.args());

    if has_any(parser, &HELP_FLAGS) {
        write_help(out, parser.usage_info())?;
        return out.flush();
    }

    if has_any(parser, &VERSION_FLAGS) {
        write_version(out, parser.app_info())?;
        return out.flush();
    }

    let Some(file_path) = first_value(parser, &FILE_FLAGS) else {
        writeln!(out, "Missing file path\n")?;
        write_help(out, parser.usage_info())?;
        return out.flush();
    };
    writeln!(out, "File path: {}", file_path)?;

    writeln!(out, "Verbose option passed: {}", is_verbose(parser))?;
    out.flush()
}

fn has_any(parser: &CmdLineParser, flags: &[&str]) -> bool {
    flags.iter().any(|flag| parser.has_option(flag))
}

/// Value of the first alias that carries one, in alias order
fn first_value<'a>(parser: &'a CmdLineParser, flags: &[&str]) -> Option<&'a str> {
    flags.iter().find_map(|flag| {
        let value = parser.get_option(flag);
        if value.is_some() {
            log::debug!("file path taken from {}", flag);
        }
        value
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::NoColor;

    fn run_with(args: &[&str]) -> (i32, String) {
        let parser = build_parser(args.iter().copied()).unwrap();
        let mut out = NoColor::new(Vec::new());
        let code = run(&parser, &mut out);
        (code, String::from_utf8(out.into_inner()).unwrap())
    }

    const HELP: &str = "Usage: AppExec -f <file_path> [OPTIONS]\n\
                        \t-V, --verbose\t\tenable verbose messages\n\
                        \t-f, --file\t\tfile path\n\
                        \t-h, --help\t\tshow help message\n\
                        \t-v, --version\t\tshow version\n";

    #[test]
    fn test_default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();

        assert_eq!(config.app.name, "Application name");
        assert_eq!(config.usage.exe_name, "AppExec");
        assert_eq!(config.usage.options.len(), 4);
    }

    #[test]
    fn test_help_flags() {
        for flag in HELP_FLAGS {
            let (code, output) = run_with(&["exe", flag]);
            assert_eq!(code, 0);
            assert_eq!(output, HELP, "Unexpected help output for {}", flag);
        }
    }

    #[test]
    fn test_version_flags() {
        for flag in VERSION_FLAGS {
            let (code, output) = run_with(&["exe", flag]);
            assert_eq!(code, 0);
            assert_eq!(output, "Application name 1.0.0\nApplication description\n");
        }
    }

    #[test]
    fn test_help_wins_over_version() {
        let (_, output) = run_with(&["exe", "-v", "--help"]);

        assert_eq!(output, HELP);
    }

    #[test]
    fn test_missing_file_shows_help() {
        let (code, output) = run_with(&["exe"]);

        assert_eq!(code, 0);
        assert_eq!(output, format!("Missing file path\n\n{}", HELP));
    }

    #[test]
    fn test_file_flag_without_value() {
        let (_, output) = run_with(&["exe", "-f"]);

        assert!(output.starts_with("Missing file path\n"));
    }

    #[test]
    fn test_short_file_flag() {
        let (code, output) = run_with(&["exe", "-f", "input.txt"]);

        assert_eq!(code, 0);
        assert_eq!(
            output,
            "File path: input.txt\nVerbose option passed: false\n"
        );
    }

    #[test]
    fn test_long_file_flag_with_verbose() {
        let (_, output) = run_with(&["exe", "--verbose", "--file", "data.bin"]);

        assert_eq!(output, "File path: data.bin\nVerbose option passed: true\n");
    }

    #[test]
    fn test_short_file_flag_preferred_over_long() {
        let (_, output) = run_with(&["exe", "--file", "long.txt", "-f", "short.txt"]);

        assert!(output.starts_with("File path: short.txt\n"));
    }

    #[test]
    fn test_dangling_short_flag_falls_back_to_long() {
        let (_, output) = run_with(&["exe", "--file", "long.txt", "-f"]);

        assert!(output.starts_with("File path: long.txt\n"));
    }

    #[test]
    fn test_log_level() {
        let quiet = build_parser(["exe"]).unwrap();
        let verbose = build_parser(["exe", "-V"]).unwrap();

        assert_eq!(log_level(&quiet), LevelFilter::Warn);
        assert_eq!(log_level(&verbose), LevelFilter::Debug);
    }
}
