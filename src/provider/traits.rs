//! Trait definitions for external API clients.
//!
//! Providers are generic over these traits so the orchestration logic can be
//! tested without a network. Production code uses the real clients; tests
//! substitute the mocks below.

use async_trait::async_trait;

use super::deezer::AlbumMatch;
use super::domain::ProviderError;
use crate::model::{Album, Track};

/// Deezer catalog operations.
#[async_trait]
pub trait DeezerApi: Send + Sync {
    /// Search albums and return the first hit.
    async fn search_album(&self, query: &str) -> Result<AlbumMatch, ProviderError>;

    /// Fetch every track listed at `tracklist_url`, in order.
    async fn album_tracks(&self, tracklist_url: &str) -> Result<Vec<Track>, ProviderError>;

    /// Fetch the largest picture of an artist.
    async fn artist_picture(&self, artist_id: u64) -> Result<Option<String>, ProviderError>;
}

/// Last.fm operations. The API key is passed per call.
#[async_trait]
pub trait LastFmApi: Send + Sync {
    /// Fetch album details as a canonical album.
    async fn album_info(
        &self,
        api_key: &str,
        artist: &str,
        album: &str,
    ) -> Result<Album, ProviderError>;

    /// Look up the MusicBrainz ID Last.fm has on file for an artist.
    async fn artist_mbid(
        &self,
        api_key: &str,
        artist: &str,
    ) -> Result<Option<String>, ProviderError>;
}

/// MusicBrainz operations.
#[async_trait]
pub trait MusicBrainzApi: Send + Sync {
    /// URL of the artist's "image" relationship, if it has one.
    async fn artist_image_url(&self, mbid: &str) -> Result<Option<String>, ProviderError>;
}

/// Wikimedia Commons operations.
#[async_trait]
pub trait CommonsApi: Send + Sync {
    /// Direct file URL for a `File:...` page title.
    async fn file_url(&self, title: &str) -> Result<Option<String>, ProviderError>;
}

// Implement traits for real clients

#[async_trait]
impl DeezerApi for super::deezer::DeezerClient {
    async fn search_album(&self, query: &str) -> Result<AlbumMatch, ProviderError> {
        self.search_album(query).await
    }

    async fn album_tracks(&self, tracklist_url: &str) -> Result<Vec<Track>, ProviderError> {
        self.album_tracks(tracklist_url).await
    }

    async fn artist_picture(&self, artist_id: u64) -> Result<Option<String>, ProviderError> {
        self.artist_picture(artist_id).await
    }
}

#[async_trait]
impl LastFmApi for super::lastfm::LastFmClient {
    async fn album_info(
        &self,
        api_key: &str,
        artist: &str,
        album: &str,
    ) -> Result<Album, ProviderError> {
        self.album_info(api_key, artist, album).await
    }

    async fn artist_mbid(
        &self,
        api_key: &str,
        artist: &str,
    ) -> Result<Option<String>, ProviderError> {
        self.artist_mbid(api_key, artist).await
    }
}

#[async_trait]
impl MusicBrainzApi for super::musicbrainz::MusicBrainzClient {
    async fn artist_image_url(&self, mbid: &str) -> Result<Option<String>, ProviderError> {
        self.artist_image_url(mbid).await
    }
}

#[async_trait]
impl CommonsApi for super::commons::CommonsClient {
    async fn file_url(&self, title: &str) -> Result<Option<String>, ProviderError> {
        self.file_url(title).await
    }
}
