//! Session state for the rating flow.

use std::path::PathBuf;

use crate::infographic::infographic_filename;
use crate::model::RatedAlbum;
use crate::rating::{self, InfographicData};

/// Which step of the flow the user is on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Search,
    Loading,
    Rating,
    Generating,
    Infographic,
}

/// One of the two search inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Artist,
    Album,
}

/// Artist and album text as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub artist: String,
    pub album: String,
}

impl SearchQuery {
    pub fn new(artist: impl Into<String>, album: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            album: album.into(),
        }
    }

    pub fn set(&mut self, field: SearchField, value: String) {
        match field {
            SearchField::Artist => self.artist = value,
            SearchField::Album => self.album = value,
        }
    }

    /// Both fields contain something other than whitespace.
    pub fn is_ready(&self) -> bool {
        !self.artist.trim().is_empty() && !self.album.trim().is_empty()
    }
}

/// Everything one rating session holds. `Session::default()` is the
/// initial, empty search state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub screen: Screen,
    /// Shown on the search screen after a failed lookup
    pub error_message: Option<String>,
    pub query: SearchQuery,
    pub album: Option<RatedAlbum>,
    /// Artist picture, or the album cover when there is none
    pub background_url: String,
    /// Where the most recent card was written
    pub last_export: Option<PathBuf>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derived on every read; gates the move to the infographic.
    pub fn is_rating_complete(&self) -> bool {
        self.album.as_ref().is_some_and(rating::is_complete)
    }

    /// Card data for the current album, if it is completely rated.
    pub fn infographic_data(&self) -> Option<InfographicData> {
        let album = self.album.as_ref()?;
        InfographicData::from_album(album, &self.background_url)
    }

    /// Output file name for the current album.
    pub fn export_file_name(&self) -> Option<String> {
        self.album
            .as_ref()
            .map(|album| infographic_filename(&album.artist, &album.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::rated_album;

    #[test]
    fn test_query_readiness() {
        assert!(!SearchQuery::default().is_ready());
        assert!(!SearchQuery::new("Björk", "   ").is_ready());
        assert!(!SearchQuery::new("", "Homogenic").is_ready());
        assert!(SearchQuery::new("Björk", "Homogenic").is_ready());
    }

    #[test]
    fn test_query_set() {
        let mut query = SearchQuery::default();
        query.set(SearchField::Artist, "Björk".to_string());
        query.set(SearchField::Album, "Homogenic".to_string());
        assert_eq!(query, SearchQuery::new("Björk", "Homogenic"));
    }

    #[test]
    fn test_completeness_is_derived() {
        let mut session = Session::new();
        assert!(!session.is_rating_complete());
        assert!(session.infographic_data().is_none());

        session.album = Some(rated_album(&[Some(4), None]));
        assert!(!session.is_rating_complete());

        session.album.as_mut().unwrap().set_rating(1, Some(8));
        assert!(session.is_rating_complete());
    }

    #[test]
    fn test_infographic_data_uses_background() {
        let session = Session {
            album: Some(rated_album(&[Some(4), Some(8)])),
            background_url: "https://example.com/artist.jpg".to_string(),
            ..Session::default()
        };

        let data = session.infographic_data().unwrap();

        assert_eq!(data.background_url, "https://example.com/artist.jpg");
        assert_eq!(data.best_song.name(), "Track 2");
        assert_eq!(data.overall_score, 6.0);
    }

    #[test]
    fn test_export_file_name() {
        let session = Session {
            album: Some(rated_album(&[Some(4)])),
            ..Session::default()
        };
        assert_eq!(
            session.export_file_name().as_deref(),
            Some("Test_Artist-Test_Album-rating.png")
        );
    }
}
