//! Deezer HTTP client
//!
//! Talks to the public Deezer API. No API key required.
//! See: https://developers.deezer.com/api

use std::future::Future;

use serde::de::DeserializeOwned;

use super::{adapter, dto};
use crate::model::Track;
use crate::provider::domain::ProviderError;

/// Stop following `next` links after this many tracklist pages.
const MAX_TRACKLIST_PAGES: usize = 20;

/// Deezer API client
pub struct DeezerClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl DeezerClient {
    /// Create a new client
    pub fn new() -> Self {
        Self::with_base_url("https://api.deezer.com")
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

    /// Search albums and return the first hit
    pub async fn search_album(&self, query: &str) -> Result<adapter::AlbumMatch, ProviderError> {
        let url = format!("{}/search/album", self.base_url);
        tracing::debug!("Deezer search: {:?}", query);

        let response: dto::SearchResponse = self.get_json(&url, &[("q", query)]).await?;
        adapter::first_match(response)
    }

    /// Fetch the complete tracklist, following pagination
    pub async fn album_tracks(&self, tracklist_url: &str) -> Result<Vec<Track>, ProviderError> {
        collect_tracklist(tracklist_url, |url| async move {
            self.get_json::<dto::TracklistResponse>(&url, &[]).await
        })
        .await
    }

    /// Fetch an artist's largest profile picture
    pub async fn artist_picture(&self, artist_id: u64) -> Result<Option<String>, ProviderError> {
        let url = format!("{}/artist/{}", self.base_url, artist_id);
        let artist: dto::Artist = self.get_json(&url, &[]).await?;

        if let Some(error) = &artist.error {
            return Err(ProviderError::NotFound(format!(
                "Deezer artist {}: {}",
                artist_id, error.message
            )));
        }

        Ok(adapter::best_picture(&artist))
    }

    /// Send a GET request and parse the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let response = self.http_client.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
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

/// Walk a paginated tracklist from `first_url` through its `next` links.
///
/// An error payload on any page fails the whole listing, as does a tracklist
/// still continuing after [`MAX_TRACKLIST_PAGES`]: a partial album can't be rated.
async fn collect_tracklist<F, Fut>(
    first_url: &str,
    mut fetch_page: F,
) -> Result<Vec<Track>, ProviderError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<dto::TracklistResponse, ProviderError>>,
{
    let mut tracks = Vec::new();
    let mut next = Some(first_url.to_string());
    let mut pages = 0;

    while let Some(url) = next.take() {
        if pages == MAX_TRACKLIST_PAGES {
            return Err(ProviderError::NotFound(format!(
                "Deezer tracklist is longer than {} pages",
                MAX_TRACKLIST_PAGES
            )));
        }

        tracing::debug!("Deezer tracklist page {}: {}", pages + 1, url);
        let page = fetch_page(url).await?;
        pages += 1;

        if let Some(error) = page.error {
            return Err(ProviderError::NotFound(format!(
                "Deezer tracklist unavailable: {}",
                error.message
            )));
        }

        tracks.extend(adapter::to_tracks(page.data));
        next = page.next;
    }

    Ok(tracks)
}

impl Default for DeezerClient {
    fn default() -> Self {
        Self::new()
    }
}
