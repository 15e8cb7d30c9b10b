//! Message types for the rating session.

use std::path::PathBuf;

use super::state::SearchField;
use crate::infographic::ExportError;
use crate::model::AlbumData;
use crate::provider::ProviderError;

/// Everything that can happen to a session
#[derive(Debug)]
pub enum Message {
    // Search
    SearchQueryChanged(SearchField, String),
    SearchSubmitted,
    AlbumLoaded(Result<AlbumData, ProviderError>),

    // Rating
    /// Raw text for one track's rating; parsed and clamped on arrival
    TrackRatingChanged { index: usize, input: String },
    GenerateInfographic,

    // Export
    DownloadRequested,
    DownloadFinished(Result<PathBuf, ExportError>),

    StartOver,
}
