//! Demonstration driver built on the argument store

pub mod driver;

// Re-export types for convenient access
pub use driver::{DEFAULT_CONFIG, build_parser, is_verbose, log_level, run};
