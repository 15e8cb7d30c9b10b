//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\album-rater\config.toml
//! - macOS: ~/Library/Application Support/album-rater/config.toml
//! - Linux: ~/.config/album-rater/config.toml
//!
//! The file is optional and human-editable. Command-line flags override
//! whatever it says.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::provider::ProviderKind;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which metadata provider to use
    pub provider: ProviderConfig,

    /// API credentials
    pub credentials: Credentials,

    /// Infographic export settings
    pub export: ExportConfig,
}

/// Provider selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// "deezer" or "lastfm"
    pub active: ProviderKind,
}

/// API credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Last.fm API key (only needed for the lastfm provider)
    pub lastfm_api_key: Option<String>,
}

/// Export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Where PNGs are written (empty = current directory)
    pub output_dir: Option<PathBuf>,

    /// Multiplier applied to the base card size
    pub pixel_ratio: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            pixel_ratio: 4,
        }
    }
}

impl ExportConfig {
    /// Output directory, defaulting to the current directory
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("album-rater"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    load_from(&path)
}

/// Load configuration from a specific file, falling back to defaults
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to the default location
///
/// Creates the config directory if it doesn't exist.
pub fn save(config: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    save_to(config, &path)?;
    Ok(path)
}

/// Save configuration to a specific file
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[provider]"));
        assert!(toml.contains("active = \"deezer\""));
        assert!(toml.contains("[credentials]"));
        assert!(toml.contains("[export]"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.provider.active = ProviderKind::LastFm;
        config.credentials.lastfm_api_key = Some("test-key-123".to_string());
        config.export.pixel_ratio = 2;

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();

        assert_eq!(parsed.provider.active, ProviderKind::LastFm);
        assert_eq!(
            parsed.credentials.lastfm_api_key,
            Some("test-key-123".to_string())
        );
        assert_eq!(parsed.export.pixel_ratio, 2);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
[credentials]
lastfm_api_key = "my-key"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.credentials.lastfm_api_key, Some("my-key".to_string()));
        assert_eq!(config.provider.active, ProviderKind::Deezer);
        assert_eq!(config.export.pixel_ratio, 4);
        assert_eq!(config.export.output_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(&dir.path().join("nope.toml"));
        assert_eq!(config.provider.active, ProviderKind::Deezer);
    }

    #[test]
    fn test_load_from_invalid_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is [not toml").unwrap();

        let config = load_from(&path);

        assert!(config.credentials.lastfm_api_key.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.provider.active = ProviderKind::LastFm;

        save_to(&config, &path).unwrap();
        let loaded = load_from(&path);

        assert_eq!(loaded.provider.active, ProviderKind::LastFm);
        assert!(!path.with_extension("toml.tmp").exists());
    }
}
