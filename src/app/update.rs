//! Update handler for session messages.
//!
//! `update` is synchronous and never touches the network; when a message
//! needs async work it returns an [`Effect`] for the runtime to perform, and
//! the outcome comes back as another [`Message`].

use super::messages::Message;
use super::state::{Screen, Session};
use crate::model::RatedAlbum;
use crate::rating::{InfographicData, parse_rating_input};

/// Async work requested by [`update`]
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Look the album up; answer with [`Message::AlbumLoaded`]
    FetchAlbum { artist: String, album: String },
    /// Render and save the card; answer with [`Message::DownloadFinished`]
    ExportInfographic {
        data: InfographicData,
        file_name: String,
    },
}

/// Apply a message to the session.
pub fn update(session: &mut Session, message: Message) -> Effect {
    match message {
        Message::SearchQueryChanged(field, value) => {
            if session.screen == Screen::Search {
                session.query.set(field, value);
            }
            Effect::None
        }
        Message::SearchSubmitted => handle_search_submitted(session),
        Message::AlbumLoaded(result) => {
            if session.screen != Screen::Loading {
                tracing::debug!("Ignoring album result outside the loading screen");
                return Effect::None;
            }
            match result {
                Ok(data) => {
                    session.background_url = data
                        .artist_image_url
                        .filter(|url| !url.trim().is_empty())
                        .unwrap_or_else(|| data.album.cover_url.clone());
                    tracing::info!(
                        "Loaded {} - {} ({} tracks)",
                        data.album.artist,
                        data.album.name,
                        data.album.tracks.len()
                    );
                    session.album = Some(RatedAlbum::unrated(data.album));
                    session.screen = Screen::Rating;
                }
                Err(e) => {
                    tracing::warn!("Album lookup failed: {}", e);
                    session.error_message = Some(e.to_string());
                    session.screen = Screen::Search;
                }
            }
            Effect::None
        }
        Message::TrackRatingChanged { index, input } => {
            if session.screen != Screen::Rating {
                return Effect::None;
            }
            let updated = session
                .album
                .as_mut()
                .is_some_and(|album| album.set_rating(index, parse_rating_input(&input)));
            if !updated {
                tracing::debug!("No track at index {}", index);
            }
            Effect::None
        }
        Message::GenerateInfographic => {
            if session.screen == Screen::Rating && session.is_rating_complete() {
                session.screen = Screen::Infographic;
            }
            Effect::None
        }
        Message::DownloadRequested => handle_download_requested(session),
        Message::DownloadFinished(result) => {
            if session.screen != Screen::Generating {
                tracing::debug!("Ignoring export result outside the generating screen");
                return Effect::None;
            }
            match result {
                Ok(path) => {
                    tracing::info!("Infographic saved to {:?}", path);
                    session.last_export = Some(path);
                }
                Err(e) => tracing::error!("Image generation failed: {}", e),
            }
            session.screen = Screen::Infographic;
            Effect::None
        }
        Message::StartOver => {
            if session.screen == Screen::Loading {
                tracing::debug!("Ignoring start over while loading");
            } else {
                *session = Session::default();
            }
            Effect::None
        }
    }
}

fn handle_search_submitted(session: &mut Session) -> Effect {
    if session.screen != Screen::Search || !session.query.is_ready() {
        return Effect::None;
    }

    session.error_message = None;
    session.screen = Screen::Loading;
    Effect::FetchAlbum {
        artist: session.query.artist.trim().to_string(),
        album: session.query.album.trim().to_string(),
    }
}

fn handle_download_requested(session: &mut Session) -> Effect {
    if session.screen != Screen::Infographic {
        return Effect::None;
    }

    match (session.infographic_data(), session.export_file_name()) {
        (Some(data), Some(file_name)) => {
            session.screen = Screen::Generating;
            Effect::ExportInfographic { data, file_name }
        }
        _ => Effect::None,
    }
}
