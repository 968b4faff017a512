#![forbid(unsafe_code)]

//! Help and version output with optional terminal styling
//!
//! The text written here is identical to
//! [`AppInfo::version_text`] and [`UsageInfo::help_text`]; styling only
//! wraps parts of it in color escapes, so with `ColorChoice::Never` the
//! output is byte-for-byte the plain rendering.

use crate::parser::{AppInfo, UsageInfo};
use std::io::{self, IsTerminal, Write};
use termcolor::{ColorChoice, ColorSpec, WriteColor};

/// Write the version text, with the application name in bold
pub fn write_version<W: WriteColor>(out: &mut W, app: &AppInfo) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    write!(out, "{}", app.name)?;
    out.reset()?;
    writeln!(out, " {}", app.version)?;
    writeln!(out, "{}", app.description)?;
    Ok(())
}

/// Write the help text, with the `Usage:` label and option labels in bold
pub fn write_help<W: WriteColor>(out: &mut W, usage: &UsageInfo) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    write!(out, "Usage:")?;
    out.reset()?;
    writeln!(out, " {} {}", usage.exe_name, usage.pattern)?;

    for (label, description) in &usage.options {
        write!(out, "\t")?;
        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "{}", label)?;
        out.reset()?;
        writeln!(out, "\t\t{}", description)?;
    }

    Ok(())
}

/// Choose styling for stdout: color only when it is a terminal
///
/// Piped output never carries escapes, so it stays identical to the plain
/// rendering.
pub fn stdout_color_choice() -> ColorChoice {
    if io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}
