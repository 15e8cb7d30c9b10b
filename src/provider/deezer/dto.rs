//! Deezer API Data Transfer Objects
//!
//! These types match what the Deezer public API returns.
//! DO NOT use these types outside the deezer module - convert to domain types.
//!
//! API Reference: https://developers.deezer.com/api
//!
//! Deezer reports failures as HTTP 200 with an `error` object instead of the
//! expected payload, so every top-level response carries an optional `error`.

use serde::{Deserialize, Serialize};

/// `GET /search/album?q=...`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    /// Matching albums, best match first
    #[serde(default)]
    pub data: Vec<AlbumSummary>,
    /// Total number of matches
    pub total: Option<u64>,
    /// Present instead of `data` when the request failed
    pub error: Option<ApiError>,
}

/// Album as it appears in search results
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlbumSummary {
    pub id: u64,
    pub title: String,
    /// Bare cover URL (redirects to a default size)
    pub cover: Option<String>,
    pub cover_small: Option<String>,
    pub cover_medium: Option<String>,
    pub cover_big: Option<String>,
    pub cover_xl: Option<String>,
    /// Absolute URL of the album's track listing
    pub tracklist: String,
    pub artist: ArtistSummary,
}

/// Artist reference embedded in an album
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistSummary {
    pub id: u64,
    pub name: String,
}

/// `GET /album/{id}/tracks` (one page)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TracklistResponse {
    #[serde(default)]
    pub data: Vec<Track>,
    pub total: Option<u64>,
    /// URL of the next page, absent on the last page
    pub next: Option<String>,
    pub error: Option<ApiError>,
}

/// Track in a tracklist
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Track {
    pub title: String,
    /// Duration in seconds
    #[serde(default)]
    pub duration: u64,
}

/// `GET /artist/{id}`
///
/// Every field is optional because an error response has none of them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Artist {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub picture: Option<String>,
    pub picture_small: Option<String>,
    pub picture_medium: Option<String>,
    pub picture_big: Option<String>,
    pub picture_xl: Option<String>,
    pub error: Option<ApiError>,
}

/// Error object returned in place of a payload
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub message: String,
    pub code: Option<i64>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// ============================================================================
