//! Deezer implementation of [`MusicDataProvider`].

use async_trait::async_trait;

use crate::model::{Album, AlbumData};
use crate::provider::artwork::placeholder_cover_url;
use crate::provider::domain::ProviderError;
use crate::provider::traits::DeezerApi;
use crate::provider::MusicDataProvider;

use super::DeezerClient;

/// Album lookup backed by the Deezer catalog
pub struct DeezerProvider<C = DeezerClient> {
    api: C,
}

impl DeezerProvider<DeezerClient> {
    /// Provider talking to the real Deezer API
    pub fn new() -> Self {
        Self::with_api(DeezerClient::new())
    }
}

impl Default for DeezerProvider<DeezerClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: DeezerApi> DeezerProvider<C> {
    /// Provider over any [`DeezerApi`] implementation
    pub fn with_api(api: C) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<C: DeezerApi> MusicDataProvider for DeezerProvider<C> {
    async fn fetch_album_and_artist(
        &self,
        artist: &str,
        album: &str,
    ) -> Result<AlbumData, ProviderError> {
        let query = format!("{artist} {album}");
        let found = self.api.search_album(&query).await?;
        tracing::info!("Deezer match: {} - {}", found.artist_name, found.title);

        // Tracklist is required, the picture is a nice-to-have
        let (tracks, picture) = futures::join!(
            self.api.album_tracks(&found.tracklist_url),
            self.api.artist_picture(found.artist_id),
        );

        let artist_image_url = picture.unwrap_or_else(|e| {
            tracing::debug!("Deezer artist picture unavailable: {}", e);
            None
        });

        let tracks = tracks?;
        if tracks.is_empty() {
            return Err(ProviderError::EmptyTracklist(
                "Deezer album found, but has no tracklist.".to_string(),
            ));
        }

        let cover_url = found
            .cover_url
            .unwrap_or_else(|| placeholder_cover_url(artist, album));

        Ok(AlbumData {
            album: Album {
                artist: found.artist_name,
                name: found.title,
                cover_url,
                tracks,
            },
            artist_image_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Track;
    use crate::provider::traits::mocks::MockDeezer;

    #[tokio::test]
    async fn test_fetch_builds_canonical_album() {
        let provider = DeezerProvider::with_api(MockDeezer::found());

        let data = provider
            .fetch_album_and_artist("Daft Punk", "Discovery")
            .await
            .unwrap();

        assert_eq!(data.album.artist, "Daft Punk");
        assert_eq!(data.album.name, "Discovery");
        assert_eq!(data.album.cover_url, "https://cdn.example.com/cover_xl.jpg");
        assert_eq!(
            data.album.tracks,
            vec![
                Track::new("One More Time", 320),
                Track::new("Aerodynamic", 212)
            ]
        );
        assert_eq!(
            data.artist_image_url.as_deref(),
            Some("https://cdn.example.com/picture_xl.jpg")
        );
    }

    #[tokio::test]
    async fn test_search_query_combines_artist_and_album() {
        let mock = MockDeezer::found();
        let provider = DeezerProvider::with_api(mock);

        provider
            .fetch_album_and_artist("Daft Punk", "Discovery")
            .await
            .unwrap();

        assert_eq!(
            provider.api.queries(),
            vec!["Daft Punk Discovery".to_string()]
        );
    }

    #[tokio::test]
    async fn test_not_found_propagates() {
        let provider = DeezerProvider::with_api(MockDeezer::not_found());

        let result = provider.fetch_album_and_artist("Nobody", "Nothing").await;

        assert!(matches!(result, Err(ProviderError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_empty_tracklist_fails() {
        let mut mock = MockDeezer::found();
        mock.tracks = Ok(vec![]);
        let provider = DeezerProvider::with_api(mock);

        let result = provider.fetch_album_and_artist("Daft Punk", "Discovery").await;

        assert!(matches!(result, Err(ProviderError::EmptyTracklist(_))));
    }

    #[tokio::test]
    async fn test_tracklist_failure_fails_whole_fetch() {
        let mut mock = MockDeezer::found();
        mock.tracks = Err(ProviderError::Network("reset".to_string()));
        let provider = DeezerProvider::with_api(mock);

        let result = provider.fetch_album_and_artist("Daft Punk", "Discovery").await;

        assert!(matches!(result, Err(ProviderError::Network(_))));
    }

    #[tokio::test]
    async fn test_artist_picture_failure_is_not_fatal() {
        let mut mock = MockDeezer::found();
        mock.picture = Err(ProviderError::Network("timeout".to_string()));
        let provider = DeezerProvider::with_api(mock);

        let data = provider
            .fetch_album_and_artist("Daft Punk", "Discovery")
            .await
            .unwrap();

        assert!(data.artist_image_url.is_none());
        assert_eq!(data.album.tracks.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_cover_uses_placeholder() {
        let mut mock = MockDeezer::found();
        if let Ok(found) = mock.search.as_mut() {
            found.cover_url = None;
        }
        let provider = DeezerProvider::with_api(mock);

        let data = provider
            .fetch_album_and_artist("Daft Punk", "Discovery")
            .await
            .unwrap();

        assert_eq!(
            data.album.cover_url,
            placeholder_cover_url("Daft Punk", "Discovery")
        );
    }
}
