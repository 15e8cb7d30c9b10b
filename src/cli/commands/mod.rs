//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `search`: look an album up and print it
//! - `rate`: rate an album, print the verdict, export the card
//! - `config`: show or initialise the config file
//! - `interactive`: the search → rate → export → start over loop
//!
//! `session` holds the terminal plumbing they share.

mod config;
mod interactive;
mod rate;
mod search;
mod session;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::provider::ProviderKind;

pub use config::cmd_config;
pub use interactive::cmd_interactive;
pub use rate::cmd_rate;
pub use search::cmd_search;

/// Album Rater CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Metadata provider (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub provider: Option<ProviderKind>,

    /// Last.fm API key (or set LASTFM_API_KEY env var)
    #[arg(long, global = true, env = "LASTFM_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Directory infographics are written to
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Look up an album and print its tracklist
    Search {
        /// Artist name
        artist: String,
        /// Album title
        album: String,
    },
    /// Rate every track of an album and export the summary card
    Rate {
        /// Artist name
        artist: String,
        /// Album title
        album: String,
        /// Ratings in track order, e.g. 7,9,9,3 (prompted per track when omitted)
        #[arg(long, value_delimiter = ',')]
        ratings: Option<Vec<String>>,
        /// Print the verdict without writing a PNG
        #[arg(long)]
        no_export: bool,
    },
    /// Show the effective configuration, or write it to the config file
    Config {
        /// Write the config file
        #[arg(long)]
        init: bool,
        /// Overwrite an existing config file when used with --init
        #[arg(long, requires = "init")]
        force: bool,
    },
}

/// Load the config file (or the one named by `--config`) and apply flag overrides.
pub fn resolve_config(cli: &Cli) -> Config {
    let config = match &cli.config {
        Some(path) => crate::config::load_from(path),
        None => crate::config::load(),
    };
    apply_overrides(cli, config)
}

fn apply_overrides(cli: &Cli, mut config: Config) -> Config {
    if let Some(provider) = cli.provider {
        config.provider.active = provider;
    }
    if let Some(key) = &cli.api_key {
        config.credentials.lastfm_api_key = Some(key.clone());
    }
    if let Some(dir) = &cli.output_dir {
        config.export.output_dir = Some(dir.clone());
    }
    config
}

/// Run the specified CLI command, or the interactive session when there is none.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = resolve_config(cli);
    let rt = Runtime::new()?;

    match &cli.command {
        Some(Commands::Search { artist, album }) => cmd_search(&rt, &config, artist, album),
        Some(Commands::Rate {
            artist,
            album,
            ratings,
            no_export,
        }) => cmd_rate(&rt, &config, artist, album, ratings.as_deref(), *no_export),
        Some(Commands::Config { init, force }) => {
            cmd_config(cli.config.as_deref(), &config, *init, *force)
        }
        None => cmd_interactive(&rt, &config),
    }
}
