//! Last.fm API Data Transfer Objects
//!
//! These types match what the Last.fm 2.0 JSON API returns.
//! DO NOT use these types outside the lastfm module - convert to domain types.
//!
//! API Reference: https://www.last.fm/api
//!
//! Last.fm's JSON is an automatic translation of its XML API, which shows in a
//! few quirks handled here:
//! - a list with a single element is serialized as a bare object
//! - numbers sometimes arrive as strings
//! - element text lives under a `#text` key

use serde::{Deserialize, Deserializer, Serialize};

/// `?method=album.getinfo`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlbumInfoResponse {
    pub album: Option<AlbumInfo>,
    /// Last.fm error code, present on failure
    pub error: Option<i64>,
    pub message: Option<String>,
}

/// Album details
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlbumInfo {
    /// Artist name (a plain string in album.getinfo)
    pub artist: String,
    pub name: String,
    pub mbid: Option<String>,
    pub url: Option<String>,
    /// Cover art in several sizes, smallest first
    #[serde(default)]
    pub image: Vec<Image>,
    pub tracks: Option<Tracks>,
}

/// Sized image reference
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Image {
    #[serde(rename = "#text", default)]
    pub url: String,
    /// "small", "medium", "large", "extralarge", "mega" or ""
    #[serde(default)]
    pub size: String,
}

/// Track listing wrapper
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tracks {
    #[serde(default)]
    pub track: OneOrMany<Track>,
}

/// Track within an album
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Track {
    pub name: String,
    /// Length in seconds; null for many tracks
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub duration: Option<u64>,
}

/// `?method=artist.getinfo`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistInfoResponse {
    pub artist: Option<ArtistInfo>,
    pub error: Option<i64>,
    pub message: Option<String>,
}

/// Artist details (only what we use)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistInfo {
    pub name: String,
    /// MusicBrainz artist ID, often empty or missing
    pub mbid: Option<String>,
}

/// Error body returned with non-2xx responses
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: i64,
    pub message: String,
}

/// A list that collapses to a bare object when it has one element
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// Accept `239`, `239.0`, `"239"` or `null`.
fn lenient_seconds<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u64),
        Float(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Int(secs)) => Some(secs),
        Some(Raw::Float(secs)) if secs.is_finite() && secs >= 0.0 => Some(secs as u64),
        Some(Raw::Float(_)) => None,
        Some(Raw::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================
