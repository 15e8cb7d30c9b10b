//! Last.fm implementation of [`MusicDataProvider`].

use async_trait::async_trait;

use crate::model::AlbumData;
use crate::provider::commons::{self, CommonsClient};
use crate::provider::domain::ProviderError;
use crate::provider::musicbrainz::MusicBrainzClient;
use crate::provider::traits::{CommonsApi, LastFmApi, MusicBrainzApi};
use crate::provider::MusicDataProvider;

use super::LastFmClient;

/// Value shipped in example configs; treated the same as no key at all.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_LAST_FM_API_KEY";

/// Album lookup backed by Last.fm, with MusicBrainz/Commons artist images
pub struct LastFmProvider<L = LastFmClient, M = MusicBrainzClient, W = CommonsClient> {
    api_key: Option<String>,
    lastfm: L,
    musicbrainz: M,
    commons: W,
}

impl LastFmProvider {
    /// Provider talking to the real services
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_apis(
            api_key,
            LastFmClient::new(),
            MusicBrainzClient::new(),
            CommonsClient::new(),
        )
    }
}

impl<L, M, W> LastFmProvider<L, M, W>
where
    L: LastFmApi,
    M: MusicBrainzApi,
    W: CommonsApi,
{
    /// Provider over arbitrary API implementations
    pub fn with_apis(api_key: Option<String>, lastfm: L, musicbrainz: M, commons: W) -> Self {
        Self {
            api_key,
            lastfm,
            musicbrainz,
            commons,
        }
    }

    /// The configured key, unless it's missing, blank or the placeholder
    fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }

    /// Best-effort artist picture. Every failure collapses to `None`.
    async fn artist_image(&self, artist: &str) -> Option<String> {
        let api_key = self.credential()?;

        let mbid = match self.lastfm.artist_mbid(api_key, artist).await {
            Ok(Some(mbid)) => mbid,
            Ok(None) => {
                tracing::debug!("No MusicBrainz ID for artist {:?}", artist);
                return None;
            }
            Err(e) => {
                tracing::debug!("Last.fm artist lookup failed: {}", e);
                return None;
            }
        };

        let image_url = match self.musicbrainz.artist_image_url(&mbid).await {
            Ok(Some(url)) => url,
            Ok(None) => return None,
            Err(e) => {
                tracing::debug!("MusicBrainz artist lookup failed: {}", e);
                return None;
            }
        };

        let Some(title) = commons::file_title(&image_url) else {
            return Some(image_url);
        };

        match self.commons.file_url(&title).await {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!("Commons lookup for {} failed: {}", title, e);
                None
            }
        }
    }
}

#[async_trait]
impl<L, M, W> MusicDataProvider for LastFmProvider<L, M, W>
where
    L: LastFmApi,
    M: MusicBrainzApi,
    W: CommonsApi,
{
    async fn fetch_album_and_artist(
        &self,
        artist: &str,
        album: &str,
    ) -> Result<AlbumData, ProviderError> {
        let api_key = self.credential().ok_or_else(|| {
            ProviderError::Configuration(
                "Last.fm API Key is not configured. Set credentials.lastfm_api_key in the config file or LASTFM_API_KEY."
                    .to_string(),
            )
        })?;

        let album = self.lastfm.album_info(api_key, artist, album).await?;
        tracing::info!("Last.fm match: {} - {}", album.artist, album.name);

        // Sequential: the chain needs the canonical artist name
        let artist_image_url = self.artist_image(&album.artist).await;

        Ok(AlbumData {
            album,
            artist_image_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::traits::mocks::{MockCommons, MockLastFm, MockMusicBrainz};

    const KEY: &str = "real-key";

    fn provider(
        lastfm: MockLastFm,
        musicbrainz: MockMusicBrainz,
        commons: MockCommons,
    ) -> LastFmProvider<MockLastFm, MockMusicBrainz, MockCommons> {
        LastFmProvider::with_apis(Some(KEY.to_string()), lastfm, musicbrainz, commons)
    }

    #[tokio::test]
    async fn test_missing_key_is_configuration_error() {
        for key in [None, Some(String::new()), Some(PLACEHOLDER_API_KEY.to_string())] {
            let provider = LastFmProvider::with_apis(
                key,
                MockLastFm::found(),
                MockMusicBrainz::with_image("https://example.com/a.jpg"),
                MockCommons::resolving("https://upload.example.com/a.jpg"),
            );

            let result = provider.fetch_album_and_artist("Radiohead", "OK Computer").await;

            assert!(matches!(result, Err(ProviderError::Configuration(_))));
            assert_eq!(provider.lastfm.album_calls(), 0);
        }
    }

    #[tokio::test]
    async fn test_commons_image_is_resolved() {
        let provider = provider(
            MockLastFm::found(),
            MockMusicBrainz::with_image("https://commons.wikimedia.org/wiki/File:Radiohead.jpg"),
            MockCommons::resolving("https://upload.wikimedia.org/Radiohead.jpg"),
        );

        let data = provider
            .fetch_album_and_artist("Radiohead", "OK Computer")
            .await
            .unwrap();

        assert_eq!(data.album.name, "OK Computer");
        assert_eq!(
            data.artist_image_url.as_deref(),
            Some("https://upload.wikimedia.org/Radiohead.jpg")
        );
        assert_eq!(
            provider.commons.titles(),
            vec!["File:Radiohead.jpg".to_string()]
        );
    }

    #[tokio::test]
    async fn test_non_commons_image_used_directly() {
        let provider = provider(
            MockLastFm::found(),
            MockMusicBrainz::with_image("https://example.com/band.jpg"),
            MockCommons::failing(),
        );

        let data = provider
            .fetch_album_and_artist("Radiohead", "OK Computer")
            .await
            .unwrap();

        assert_eq!(
            data.artist_image_url.as_deref(),
            Some("https://example.com/band.jpg")
        );
        assert!(provider.commons.titles().is_empty());
    }

    #[tokio::test]
    async fn test_chain_failures_degrade_to_no_image() {
        let mut no_mbid = MockLastFm::found();
        no_mbid.mbid = Ok(None);
        let mut mbid_error = MockLastFm::found();
        mbid_error.mbid = Err(ProviderError::Network("reset".to_string()));

        let cases = [
            provider(no_mbid, MockMusicBrainz::with_image("https://x"), MockCommons::failing()),
            provider(mbid_error, MockMusicBrainz::with_image("https://x"), MockCommons::failing()),
            provider(MockLastFm::found(), MockMusicBrainz::failing(), MockCommons::failing()),
            provider(MockLastFm::found(), MockMusicBrainz::without_image(), MockCommons::failing()),
            provider(
                MockLastFm::found(),
                MockMusicBrainz::with_image("https://commons.wikimedia.org/wiki/File:X.jpg"),
                MockCommons::failing(),
            ),
        ];

        for provider in cases {
            let data = provider
                .fetch_album_and_artist("Radiohead", "OK Computer")
                .await
                .unwrap();
            assert!(data.artist_image_url.is_none());
            assert_eq!(data.album.tracks.len(), 2);
        }
    }

    #[tokio::test]
    async fn test_album_errors_propagate() {
        let mut lastfm = MockLastFm::found();
        lastfm.album = Err(ProviderError::NotFound("Album not found on Last.fm.".to_string()));
        let provider = provider(lastfm, MockMusicBrainz::failing(), MockCommons::failing());

        let result = provider.fetch_album_and_artist("Nobody", "Nothing").await;

        assert!(matches!(result, Err(ProviderError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_key_is_trimmed_and_passed_through() {
        let provider = LastFmProvider::with_apis(
            Some("  real-key ".to_string()),
            MockLastFm::found(),
            MockMusicBrainz::without_image(),
            MockCommons::failing(),
        );

        provider
            .fetch_album_and_artist("Radiohead", "OK Computer")
            .await
            .unwrap();

        assert_eq!(provider.lastfm.keys_seen(), vec![KEY.to_string(), KEY.to_string()]);
    }
}
