//! Adapter layer: Convert Last.fm DTOs to domain models
//!
//! This is the ONLY place where Last.fm DTO types are converted to domain types.

use super::dto;
use crate::model::{Album, Track};
use crate::provider::artwork::placeholder_cover_url;
use crate::provider::domain::ProviderError;

/// Error codes that mean our credential is the problem, not the query.
const INVALID_API_KEY: i64 = 10;
const SUSPENDED_API_KEY: i64 = 26;

/// Convert an album.getinfo response into a canonical album.
///
/// `searched_artist`/`searched_album` are the user's inputs, used to seed the
/// placeholder cover when Last.fm has no artwork.
pub fn to_album(
    response: dto::AlbumInfoResponse,
    searched_artist: &str,
    searched_album: &str,
) -> Result<Album, ProviderError> {
    if let Some(code) = response.error {
        return Err(api_error(code, response.message.as_deref().unwrap_or("")));
    }

    let info = response
        .album
        .ok_or_else(|| ProviderError::NotFound("Album not found on Last.fm.".to_string()))?;

    let tracks: Vec<Track> = info
        .tracks
        .map(|t| t.track.into_vec())
        .unwrap_or_default()
        .into_iter()
        .map(|t| Track::new(t.name, t.duration.unwrap_or(0)))
        .collect();

    if tracks.is_empty() {
        return Err(ProviderError::EmptyTracklist(
            "Last.fm album has no tracklist.".to_string(),
        ));
    }

    let cover_url = best_image(&info.image)
        .unwrap_or_else(|| placeholder_cover_url(searched_artist, searched_album));

    Ok(Album {
        artist: info.artist,
        name: info.name,
        cover_url,
        tracks,
    })
}

/// Extract a usable MusicBrainz ID from an artist.getinfo response.
pub fn to_artist_mbid(response: dto::ArtistInfoResponse) -> Result<Option<String>, ProviderError> {
    if let Some(code) = response.error {
        return Err(api_error(code, response.message.as_deref().unwrap_or("")));
    }

    Ok(response
        .artist
        .and_then(|a| a.mbid)
        .map(|mbid| mbid.trim().to_string())
        .filter(|mbid| !mbid.is_empty()))
}

/// Map a Last.fm error code to our error taxonomy.
pub fn api_error(code: i64, message: &str) -> ProviderError {
    match code {
        INVALID_API_KEY | SUSPENDED_API_KEY => {
            ProviderError::Configuration(format!("Last.fm rejected the API key: {}", message))
        }
        _ => ProviderError::NotFound(format!("Last.fm API Error: {}", message)),
    }
}

/// Pick the largest cover: "mega", then "extralarge", then the last entry.
pub fn best_image(images: &[dto::Image]) -> Option<String> {
    let sized = |size: &str| {
        images
            .iter()
            .find(|i| i.size == size)
            .filter(|i| !i.url.is_empty())
    };

    sized("mega")
        .or_else(|| sized("extralarge"))
        .or_else(|| images.last())
        .map(|i| i.url.clone())
        .filter(|url| !url.is_empty())
}
