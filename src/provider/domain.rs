//! Provider-level types that don't depend on any particular API.

use serde::{Deserialize, Serialize};

/// Which metadata source is active. Exactly one per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Deezer catalog search
    #[default]
    Deezer,
    /// Last.fm album info, artist image via MusicBrainz + Wikimedia Commons
    #[value(name = "lastfm")]
    #[serde(rename = "lastfm")]
    LastFm,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::Deezer => write!(f, "deezer"),
            ProviderKind::LastFm => write!(f, "lastfm"),
        }
    }
}

/// Errors that can occur while fetching an album
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    EmptyTracklist(String),

    #[error("{0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ProviderError::Parse(err.to_string())
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}
