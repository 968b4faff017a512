#![forbid(unsafe_code)]

//! Application and usage metadata shown in version and help output

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Option label (e.g. `"-h, --help"`) to human-readable description.
///
/// Ordered by key: help output lists options in this order.
pub type OptionsMap = BTreeMap<String, String>;

/// Application identity used by the version output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

/// Usage information used by the help output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UsageInfo {
    /// Executable name shown after `Usage:`
    pub exe_name: String,
    /// Free-form usage pattern, e.g. `[OPTIONS]`
    pub pattern: String,
    pub options: OptionsMap,
}

impl AppInfo {
    /// Format the two-line version text: `"<name> <version>"` then the description
    pub fn version_text(&self) -> String {
        format!("{} {}\n{}\n", self.name, self.version, self.description)
    }
}

impl UsageInfo {
    /// Format the help text: the usage line followed by one line per option
    pub fn help_text(&self) -> String {
        let mut output = format!("Usage: {} {}\n", self.exe_name, self.pattern);

        for (label, description) in &self.options {
            output.push_str(&format!("\t{}\t\t{}\n", label, description));
        }

        output
    }
}
