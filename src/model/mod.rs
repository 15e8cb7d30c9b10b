//! Core data models for album rating.
//!
//! Defines the canonical, provider-agnostic entities: [`Track`], [`Album`] and
//! [`AlbumData`], plus their rated counterparts [`RatedTrack`] and [`RatedAlbum`].
//!
//! Every provider adapter converts its own wire format into these types; nothing
//! downstream of `provider` ever sees a DTO.

use std::time::Duration;

/// A single track as listed by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Track title
    pub name: String,
    /// Track length (whole seconds; zero when the provider doesn't know)
    pub duration: Duration,
}

impl Track {
    pub fn new(name: impl Into<String>, duration_secs: u64) -> Self {
        Self {
            name: name.into(),
            duration: Duration::from_secs(duration_secs),
        }
    }
}

/// Canonical album record. Track order matches the source tracklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    /// Artist name as reported by the provider
    pub artist: String,
    /// Album title as reported by the provider
    pub name: String,
    /// Cover image URL (real or placeholder, never empty)
    pub cover_url: String,
    /// Tracks in source order
    pub tracks: Vec<Track>,
}

/// Provider output envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumData {
    pub album: Album,
    /// Artist profile picture, if one could be found
    pub artist_image_url: Option<String>,
}

/// A track together with the user's rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatedTrack {
    pub track: Track,
    /// Rating in `0..=10`, or `None` while unrated
    pub rating: Option<u8>,
}

impl RatedTrack {
    pub fn name(&self) -> &str {
        &self.track.name
    }
}

/// An album whose tracks carry ratings. Same length and order as the source [`Album`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatedAlbum {
    pub artist: String,
    pub name: String,
    pub cover_url: String,
    pub tracks: Vec<RatedTrack>,
}

impl RatedAlbum {
    /// Wrap a freshly fetched album with every rating absent.
    pub fn unrated(album: Album) -> Self {
        Self {
            artist: album.artist,
            name: album.name,
            cover_url: album.cover_url,
            tracks: album
                .tracks
                .into_iter()
                .map(|track| RatedTrack {
                    track,
                    rating: None,
                })
                .collect(),
        }
    }

    /// Set (or clear) the rating of the track at `index`.
    ///
    /// Returns `false` if there is no such track.
    pub fn set_rating(&mut self, index: usize, rating: Option<u8>) -> bool {
        match self.tracks.get_mut(index) {
            Some(track) => {
                track.rating = rating;
                true
            }
            None => false,
        }
    }
}

/// Format a duration as `m:ss`.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}
