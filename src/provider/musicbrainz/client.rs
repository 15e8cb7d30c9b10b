//! MusicBrainz HTTP client
//!
//! See: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! IMPORTANT: MusicBrainz requires a User-Agent header and rate limits to 1 req/sec.
//! We make at most one request per album lookup.

use super::dto;
use crate::provider::domain::ProviderError;

/// MusicBrainz API client
pub struct MusicBrainzClient {
    http_client: reqwest::Client,
    base_url: String,
}

/// User agent string - MusicBrainz requires this
pub(crate) const USER_AGENT: &str = concat!(
    "AlbumRater/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/album-rater)"
);

impl MusicBrainzClient {
    /// Create a new client
    pub fn new() -> Self {
        Self::with_base_url("https://musicbrainz.org/ws/2")
    }

    /// Create a client against a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();

        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Look up an artist and return the target of its "image" relationship
    pub async fn artist_image_url(&self, mbid: &str) -> Result<Option<String>, ProviderError> {
        let url = format!("{}/artist/{}", self.base_url, mbid);

        let response = self
            .http_client
            .get(&url)
            .query(&[("inc", "url-rels"), ("fmt", "json")])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound(format!(
                "MusicBrainz artist {} not found",
                mbid
            )));
        }

        if !status.is_success() {
            if let Ok(error) = response.json::<dto::ApiError>().await {
                return Err(ProviderError::Network(error.error));
            }
            return Err(ProviderError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let artist = response
            .json::<dto::ArtistResponse>()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        Ok(artist.image_url().map(str::to_string))
    }
}

impl Default for MusicBrainzClient {
    fn default() -> Self {
        Self::new()
    }
}
