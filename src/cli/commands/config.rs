//! Configuration commands.

use std::path::Path;

use crate::config::{self, Config, ConfigError};
use crate::error::Error;

/// Show the effective configuration, or write it out with `init`
pub fn cmd_config(
    path_override: Option<&Path>,
    config: &Config,
    init: bool,
    force: bool,
) -> anyhow::Result<()> {
    let path = match path_override {
        Some(path) => path.to_path_buf(),
        None => config::config_path().ok_or(Error::from(ConfigError::NoConfigDir))?,
    };

    if init {
        if path.exists() && !force {
            println!("Config already exists at {}", path.display());
            println!("Use --force to overwrite it.");
            return Ok(());
        }
        config::save_to(config, &path).map_err(Error::from)?;
        println!("✓ Wrote {}", path.display());
        return Ok(());
    }

    print!("{}", render(&path, config)?);
    Ok(())
}

fn render(path: &Path, config: &Config) -> anyhow::Result<String> {
    let status = if path.exists() { "" } else { " (not created yet)" };
    let body = toml::to_string_pretty(&masked(config))?;
    Ok(format!("# {}{}\n\n{}", path.display(), status, body))
}

/// Copy of the config with the API key hidden.
fn masked(config: &Config) -> Config {
    let mut shown = config.clone();
    if let Some(key) = shown.credentials.lastfm_api_key.as_mut() {
        let visible: String = key.chars().take(4).collect();
        *key = format!("{}…", visible);
    }
    shown
}
