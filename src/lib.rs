#![forbid(unsafe_code)]

//! cmdline-parser: a minimal command line argument store
//!
//! The store keeps the raw invocation tokens, answers exact-match presence and
//! value queries, and renders help and version text from metadata supplied by
//! the caller. There is no grammar, validation or type coercion.

pub mod cli;
pub mod config;
pub mod output;
pub mod parser;

pub use parser::{AppInfo, CmdLineParser, OptionsMap, UsageInfo};
