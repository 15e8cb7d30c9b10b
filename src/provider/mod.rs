//! Music metadata providers - fetch an album from an external service and
//! normalize it into the canonical [`Album`](crate::model::Album) shape.
//!
//! # Architecture
//!
//! Same split for every external API:
//! - **DTOs** (`*/dto.rs`) - exact API response shapes, contract-tested
//! - **Adapters** (`*/adapter.rs`) - the only place DTOs become domain types
//! - **Clients** (`*/client.rs`) - reqwest HTTP clients
//! - **Traits** (`traits.rs`) - seams between providers and clients, mocked in tests
//!
//! Two interchangeable providers implement [`MusicDataProvider`]:
//! - [`DeezerProvider`] - catalog search, tracklist and artist picture fetched concurrently
//! - [`LastFmProvider`] - album info, artist picture via MusicBrainz and Wikimedia Commons
//!
//! Exactly one is active, picked by [`build_provider`] from configuration.
//! Failures on the primary path (search, tracklist, credentials) are errors;
//! failures while looking for an artist picture just mean "no picture".

pub mod artwork;
pub mod commons;
pub mod deezer;
pub mod domain;
pub mod lastfm;
pub mod musicbrainz;
pub mod traits;

use async_trait::async_trait;

use crate::config::Config;
use crate::model::AlbumData;

pub use artwork::placeholder_cover_url;
pub use deezer::DeezerProvider;
pub use domain::{ProviderError, ProviderKind};
pub use lastfm::LastFmProvider;

/// A source of album metadata.
#[async_trait]
pub trait MusicDataProvider: Send + Sync {
    /// Find the album matching the user's artist/album input, plus an artist picture if available.
    async fn fetch_album_and_artist(
        &self,
        artist: &str,
        album: &str,
    ) -> Result<AlbumData, ProviderError>;
}

#[async_trait]
impl<P: MusicDataProvider + ?Sized> MusicDataProvider for Box<P> {
    async fn fetch_album_and_artist(
        &self,
        artist: &str,
        album: &str,
    ) -> Result<AlbumData, ProviderError> {
        (**self).fetch_album_and_artist(artist, album).await
    }
}

/// Build the provider selected by configuration.
pub fn build_provider(config: &Config) -> Box<dyn MusicDataProvider> {
    let kind = config.provider.active;
    tracing::info!("Using {} provider", kind);

    match kind {
        ProviderKind::Deezer => Box::new(DeezerProvider::new()),
        ProviderKind::LastFm => Box::new(LastFmProvider::new(
            config.credentials.lastfm_api_key.clone(),
        )),
    }
}
