//! Command-line interface for album-rater.
//!
//! Subcommands look albums up, rate them in one go and manage the config
//! file. Without a subcommand an interactive session runs on the terminal.

mod commands;

pub use commands::{Cli, Commands, resolve_config, run_command};
