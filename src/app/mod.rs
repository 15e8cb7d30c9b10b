//! The rating session: search, rate, summarize, export, start over.
//!
//! Structured like an Elm-style UI without the UI:
//! - `state` - the [`Session`] and its derived values
//! - `messages` - every event a session reacts to
//! - `update` - pure transitions returning an [`Effect`]
//!
//! [`App`] is the runtime: it owns the provider and exporter, performs
//! effects and feeds their results back in as messages.

mod messages;
mod state;
mod update;

pub use messages::Message;
pub use state::{Screen, SearchField, SearchQuery, Session};
pub use update::{Effect, update};

use crate::infographic::InfographicExporter;
use crate::provider::MusicDataProvider;

/// A session wired to a metadata provider and an exporter.
pub struct App<P, E> {
    provider: P,
    exporter: E,
    session: Session,
}

impl<P: MusicDataProvider, E: InfographicExporter> App<P, E> {
    pub fn new(provider: P, exporter: E) -> Self {
        Self {
            provider,
            exporter,
            session: Session::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    #[cfg(test)]
    pub fn exporter(&self) -> &E {
        &self.exporter
    }

    /// Apply a message and run whatever it triggers until the session settles.
    pub async fn dispatch(&mut self, message: Message) {
        let mut next = Some(message);
        while let Some(message) = next.take() {
            let effect = update(&mut self.session, message);
            next = self.perform(effect).await;
        }
    }

    async fn perform(&self, effect: Effect) -> Option<Message> {
        match effect {
            Effect::None => None,
            Effect::FetchAlbum { artist, album } => {
                tracing::info!("Searching for {} - {}", artist, album);
                let result = self.provider.fetch_album_and_artist(&artist, &album).await;
                Some(Message::AlbumLoaded(result))
            }
            Effect::ExportInfographic { data, file_name } => {
                let result = self.exporter.export(&data, &file_name).await;
                Some(Message::DownloadFinished(result))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infographic::mocks::MockExporter;
    use crate::provider::ProviderError;
    use crate::provider::traits::mocks::MockProvider;
    use crate::test_utils::sample_album_data;

    async fn search(app: &mut App<MockProvider, MockExporter>, artist: &str, album: &str) {
        app.dispatch(Message::SearchQueryChanged(SearchField::Artist, artist.to_string()))
            .await;
        app.dispatch(Message::SearchQueryChanged(SearchField::Album, album.to_string()))
            .await;
        app.dispatch(Message::SearchSubmitted).await;
    }

    async fn rate_all(app: &mut App<MockProvider, MockExporter>, inputs: &[&str]) {
        for (index, input) in inputs.iter().enumerate() {
            app.dispatch(Message::TrackRatingChanged {
                index,
                input: input.to_string(),
            })
            .await;
        }
    }

    #[tokio::test]
    async fn test_full_session() {
        let mut app = App::new(
            MockProvider::returning(sample_album_data()),
            MockExporter::succeeding(),
        );

        search(&mut app, "Pink Floyd", "The Wall").await;
        assert_eq!(app.session().screen, Screen::Rating);
        assert_eq!(
            app.provider.searches(),
            vec![("Pink Floyd".to_string(), "The Wall".to_string())]
        );

        rate_all(&mut app, &["8", "6", "10"]).await;
        app.dispatch(Message::GenerateInfographic).await;
        assert_eq!(app.session().screen, Screen::Infographic);

        app.dispatch(Message::DownloadRequested).await;
        assert_eq!(app.session().screen, Screen::Infographic);
        assert_eq!(
            app.exporter.file_names(),
            vec!["Pink_Floyd-The_Wall-rating.png".to_string()]
        );
        assert_eq!(
            app.session().last_export,
            Some(std::path::PathBuf::from("/tmp/Pink_Floyd-The_Wall-rating.png"))
        );

        app.dispatch(Message::StartOver).await;
        assert_eq!(*app.session(), Session::default());
    }

    #[tokio::test]
    async fn test_provider_failure_surfaces_message() {
        let mut app = App::new(
            MockProvider::failing(ProviderError::Configuration(
                "Last.fm API key is not configured.".to_string(),
            )),
            MockExporter::succeeding(),
        );

        search(&mut app, "Björk", "Homogenic").await;

        assert_eq!(app.session().screen, Screen::Search);
        assert_eq!(
            app.session().error_message.as_deref(),
            Some("Last.fm API key is not configured.")
        );
    }

    #[tokio::test]
    async fn test_blank_search_never_reaches_provider() {
        let mut app = App::new(
            MockProvider::returning(sample_album_data()),
            MockExporter::succeeding(),
        );

        search(&mut app, "Björk", "  ").await;

        assert!(app.provider.searches().is_empty());
        assert_eq!(app.session().screen, Screen::Search);
    }

    #[tokio::test]
    async fn test_export_failure_keeps_infographic() {
        let mut app = App::new(
            MockProvider::returning(sample_album_data()),
            MockExporter::failing("disk full"),
        );
        search(&mut app, "Pink Floyd", "The Wall").await;
        rate_all(&mut app, &["1", "2", "3"]).await;
        app.dispatch(Message::GenerateInfographic).await;

        app.dispatch(Message::DownloadRequested).await;

        assert_eq!(app.session().screen, Screen::Infographic);
        assert!(app.session().last_export.is_none());
        assert!(app.session().error_message.is_none());
        assert_eq!(app.exporter.file_names().len(), 1);
    }
}
