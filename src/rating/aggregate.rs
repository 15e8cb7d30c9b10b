//! Aggregation of a rated album into summary statistics.

use crate::model::{RatedAlbum, RatedTrack};

use super::MAX_RATING;

/// Best track, worst track and overall score of a completely rated album.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSummary {
    pub best: RatedTrack,
    pub worst: RatedTrack,
    /// Mean rating rounded to one decimal place
    pub overall_score: f64,
}

/// Everything the summary card needs. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct InfographicData {
    pub album: RatedAlbum,
    pub best_song: RatedTrack,
    pub worst_song: RatedTrack,
    pub overall_score: f64,
    /// Artist picture, or the album cover when no picture was found
    pub background_url: String,
}

impl InfographicData {
    /// Combine an album, its summary and the chosen background.
    pub fn new(album: RatedAlbum, summary: RatingSummary, background_url: String) -> Self {
        Self {
            album,
            best_song: summary.best,
            worst_song: summary.worst,
            overall_score: summary.overall_score,
            background_url,
        }
    }

    /// Build the card data directly, or `None` if the album isn't completely rated.
    pub fn from_album(album: &RatedAlbum, background_url: &str) -> Option<Self> {
        let summary = summarize(album)?;
        Some(Self::new(album.clone(), summary, background_url.to_string()))
    }
}

/// True when the album has tracks and every one carries a rating in `0..=10`.
pub fn is_complete(album: &RatedAlbum) -> bool {
    !album.tracks.is_empty()
        && album
            .tracks
            .iter()
            .all(|t| matches!(t.rating, Some(r) if r <= MAX_RATING))
}

/// Summarize a completely rated album.
///
/// Returns `None` when [`is_complete`] is false. Ties keep the earliest track:
/// a later track only replaces the current best/worst when strictly
/// better/worse.
pub fn summarize(album: &RatedAlbum) -> Option<RatingSummary> {
    if !is_complete(album) {
        return None;
    }

    let first = album.tracks.first()?;
    let mut best = first;
    let mut worst = first;
    let mut best_rating = first.rating?;
    let mut worst_rating = best_rating;
    let mut total: u32 = 0;

    for track in &album.tracks {
        let rating = track.rating?;
        if rating > best_rating {
            best = track;
            best_rating = rating;
        }
        if rating < worst_rating {
            worst = track;
            worst_rating = rating;
        }
        total += u32::from(rating);
    }

    let mean = f64::from(total) / album.tracks.len() as f64;

    Some(RatingSummary {
        best: best.clone(),
        worst: worst.clone(),
        overall_score: round_to_tenth(mean),
    })
}

/// Round half away from zero to one decimal place.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
