//! Argument store and the metadata it renders

mod app_info;
mod cmd_line_parser;

pub use app_info::{AppInfo, OptionsMap, UsageInfo};
pub use cmd_line_parser::CmdLineParser;
