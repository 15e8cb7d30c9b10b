//! Album Rater - rate an album track by track and get a shareable verdict.
//!
//! Looks an album up through one of two metadata providers (Deezer or
//! Last.fm), collects a 0-10 rating per track, derives the best and worst
//! track plus an overall score, and renders a summary card as a PNG.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod infographic;
pub mod model;
pub mod provider;
pub mod rating;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging (stderr, so prompts and summaries stay clean on stdout)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("album_rater=warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run_command(&args)
}
