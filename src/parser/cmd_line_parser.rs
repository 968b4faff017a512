#![forbid(unsafe_code)]

//! The argument store
//!
//! `CmdLineParser` keeps the raw invocation tokens together with the metadata
//! used to render help and version text. There is no grammar: every query is
//! an exact-match scan over the stored tokens.

use super::app_info::{AppInfo, OptionsMap, UsageInfo};
use std::io::{self, Write};

/// Command line argument store
///
/// Construct one per invocation, set metadata, ingest the tokens with
/// [`parse`](Self::parse), then query. Every operation is total: missing
/// options and values are reported as `false` / `None`, never as errors.
///
/// Writers need `&mut self`, so once ingestion is done the store can be
/// shared freely between readers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmdLineParser {
    args: Vec<String>,
    app: AppInfo,
    usage: UsageInfo,
}

impl CmdLineParser {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the invocation tokens, program name included
    ///
    /// Replaces any previously stored tokens.
    pub fn parse<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
    }

    /// Store at most `argc` tokens from `argv`
    ///
    /// Mirrors the `(argc, argv)` pair handed to a process entry point: the
    /// count is bounded by the caller rather than by the slice length.
    pub fn parse_bounded<S: AsRef<str>>(&mut self, argc: usize, argv: &[S]) {
        self.parse(argv.iter().take(argc).map(|arg| arg.as_ref().to_string()));
    }

    /// The stored tokens in invocation order
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Whether `option` appears as an exact token
    pub fn has_option(&self, option: &str) -> bool {
        self.args.iter().any(|arg| arg == option)
    }

    /// The token following the first occurrence of `option`
    ///
    /// Returns `None` when `option` is absent or is the last token. The
    /// following token is returned as-is, even when it looks like another
    /// option.
    pub fn get_option(&self, option: &str) -> Option<&str> {
        let position = self.args.iter().position(|arg| arg == option)?;
        self.args.get(position + 1).map(String::as_str)
    }

    pub fn set_app_name(&mut self, name: impl Into<String>) {
        self.app.name = name.into();
    }

    pub fn app_name(&self) -> &str {
        &self.app.name
    }

    pub fn set_app_version(&mut self, version: impl Into<String>) {
        self.app.version = version.into();
    }

    pub fn app_version(&self) -> &str {
        &self.app.version
    }

    pub fn set_app_description(&mut self, description: impl Into<String>) {
        self.app.description = description.into();
    }

    pub fn app_description(&self) -> &str {
        &self.app.description
    }

    /// Replace the whole application metadata at once
    pub fn set_app_info(&mut self, app: AppInfo) {
        self.app = app;
    }

    pub fn app_info(&self) -> &AppInfo {
        &self.app
    }

    /// Version text, see [`AppInfo::version_text`]
    pub fn version_text(&self) -> String {
        self.app.version_text()
    }

    /// Write the version text to `writer`
    pub fn write_version<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.version_text().as_bytes())
    }

    /// Print the version text to stdout
    pub fn show_version(&self) {
        // A closed stdout is not something the caller can act on
        let _ = self.write_version(&mut io::stdout().lock());
    }

    /// Set the usage information shown by the help text
    ///
    /// `options` replaces the previous mapping entirely.
    pub fn set_app_usage_info(
        &mut self,
        exe_name: impl Into<String>,
        options_usage_info: impl Into<String>,
        options: OptionsMap,
    ) {
        self.usage = UsageInfo {
            exe_name: exe_name.into(),
            pattern: options_usage_info.into(),
            options,
        };
    }

    /// Replace the whole usage information at once
    pub fn set_usage_info(&mut self, usage: UsageInfo) {
        self.usage = usage;
    }

    pub fn usage_info(&self) -> &UsageInfo {
        &self.usage
    }

    pub fn exe_app_name(&self) -> &str {
        &self.usage.exe_name
    }

    pub fn options_usage_info(&self) -> &str {
        &self.usage.pattern
    }

    /// Option labels and descriptions used by the help text
    ///
    /// Clone the map to get a snapshot that can be modified independently.
    pub fn options(&self) -> &OptionsMap {
        &self.usage.options
    }

    /// Help text, see [`UsageInfo::help_text`]
    pub fn help_text(&self) -> String {
        self.usage.help_text()
    }

    /// Write the help text to `writer`
    pub fn write_help<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.help_text().as_bytes())
    }

    /// Print the help text to stdout
    pub fn show_help(&self) {
        let _ = self.write_help(&mut io::stdout().lock());
    }
}
