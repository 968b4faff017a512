//! Terminal rendering of help and version text

pub mod styled;

pub use styled::{stdout_color_choice, write_help, write_version};
