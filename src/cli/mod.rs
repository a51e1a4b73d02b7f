//! CLI module - argument parsing, prompting, rendering and the menu loop

pub mod args;
pub mod commands;
pub mod prompt;
pub mod render;
pub mod session;

pub use args::{Cli, Commands, GlobalOpts, OutputFormat, TableStyle};
