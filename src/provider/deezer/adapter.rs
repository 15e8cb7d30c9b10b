//! Adapter layer: Convert Deezer DTOs to domain models
//!
//! This is the ONLY place where Deezer DTO types are converted to domain types.

use super::dto;
use crate::model::Track;
use crate::provider::artwork::first_usable;
use crate::provider::domain::ProviderError;

/// The search hit we treat as the album the user meant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumMatch {
    pub title: String,
    pub artist_name: String,
    pub artist_id: u64,
    /// Absolute URL of the first tracklist page
    pub tracklist_url: String,
    pub cover_url: Option<String>,
}

/// Take the first search result as authoritative.
pub fn first_match(response: dto::SearchResponse) -> Result<AlbumMatch, ProviderError> {
    if let Some(error) = response.error {
        return Err(ProviderError::NotFound(format!(
            "Deezer API Error: {}",
            error.message
        )));
    }

    let album = response
        .data
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::NotFound("Album not found on Deezer".to_string()))?;

    let cover_url = best_cover(&album);

    Ok(AlbumMatch {
        title: album.title,
        artist_name: album.artist.name,
        artist_id: album.artist.id,
        tracklist_url: album.tracklist,
        cover_url,
    })
}

/// Convert one tracklist page, preserving order.
pub fn to_tracks(tracks: Vec<dto::Track>) -> Vec<Track> {
    tracks
        .into_iter()
        .map(|t| Track::new(t.title, t.duration))
        .collect()
}

/// Largest available album cover: xl, big, medium, small, then the bare URL.
pub fn best_cover(album: &dto::AlbumSummary) -> Option<String> {
    first_usable([
        album.cover_xl.as_deref(),
        album.cover_big.as_deref(),
        album.cover_medium.as_deref(),
        album.cover_small.as_deref(),
        album.cover.as_deref(),
    ])
}

/// Largest available artist picture, same preference as covers.
pub fn best_picture(artist: &dto::Artist) -> Option<String> {
    first_usable([
        artist.picture_xl.as_deref(),
        artist.picture_big.as_deref(),
        artist.picture_medium.as_deref(),
        artist.picture_small.as_deref(),
        artist.picture.as_deref(),
    ])
}
