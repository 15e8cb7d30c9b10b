//! Last.fm HTTP client
//!
//! Read-only calls against the Last.fm 2.0 web service. Every call needs an
//! API key (https://www.last.fm/api/account/create).

use serde::de::DeserializeOwned;

use super::{adapter, dto};
use crate::model::Album;
use crate::provider::domain::ProviderError;

/// Last.fm API client
pub struct LastFmClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl LastFmClient {
    /// Create a new client
    pub fn new() -> Self {
        Self::with_base_url("https://ws.audioscrobbler.com/2.0/")
    }

    /// Create a client against a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .build()
            .unwrap_or_default();

        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// `album.getinfo`, converted to a canonical album
    pub async fn album_info(
        &self,
        api_key: &str,
        artist: &str,
        album: &str,
    ) -> Result<Album, ProviderError> {
        let response: dto::AlbumInfoResponse = self
            .call(&[
                ("method", "album.getinfo"),
                ("api_key", api_key),
                ("artist", artist),
                ("album", album),
            ])
            .await?;

        adapter::to_album(response, artist, album)
    }

    /// `artist.getinfo`, reduced to the artist's MusicBrainz ID
    pub async fn artist_mbid(
        &self,
        api_key: &str,
        artist: &str,
    ) -> Result<Option<String>, ProviderError> {
        let response: dto::ArtistInfoResponse = self
            .call(&[
                ("method", "artist.getinfo"),
                ("api_key", api_key),
                ("artist", artist),
            ])
            .await?;

        adapter::to_artist_mbid(response)
    }

    /// Call a method and parse the JSON response
    async fn call<T: DeserializeOwned>(
        &self,
        params: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let response = self
            .http_client
            .get(&self.base_url)
            .query(params)
            .query(&[("format", "json")])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            // Last.fm usually explains itself in the body
            if let Ok(error) = response.json::<dto::ErrorResponse>().await {
                return Err(adapter::api_error(error.error, &error.message));
            }
            return Err(ProviderError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))
    }
}

impl Default for LastFmClient {
    fn default() -> Self {
        Self::new()
    }
}
