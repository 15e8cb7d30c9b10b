//! Test utilities and fixtures for album-rater tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{rated_album, sample_album_data};
//!
//! #[test]
//! fn test_something() {
//!     let album = rated_album(&[Some(7), Some(9), None]);
//!     // ... test logic
//! }
//! ```

use crate::model::{Album, AlbumData, RatedAlbum, RatedTrack, Track};

/// Creates a three-track album with sensible defaults.
///
/// Use struct update syntax to customize:
///
/// ```ignore
/// let album = Album { tracks: vec![], ..sample_album() };
/// ```
pub fn sample_album() -> Album {
    Album {
        artist: "Pink Floyd".to_string(),
        name: "The Wall".to_string(),
        cover_url: "https://example.com/the-wall.jpg".to_string(),
        tracks: vec![
            Track::new("In the Flesh?", 199),
            Track::new("The Thin Ice", 147),
            Track::new("Another Brick in the Wall, Part 1", 191),
        ],
    }
}

/// Provider output wrapping [`sample_album`], with an artist picture.
pub fn sample_album_data() -> AlbumData {
    AlbumData {
        album: sample_album(),
        artist_image_url: Some("https://example.com/pink-floyd.jpg".to_string()),
    }
}

/// Creates a rated album with one track per entry, named "Track 1", "Track 2", ...
pub fn rated_album(ratings: &[Option<u8>]) -> RatedAlbum {
    RatedAlbum {
        artist: "Test Artist".to_string(),
        name: "Test Album".to_string(),
        cover_url: "https://example.com/cover.jpg".to_string(),
        tracks: ratings
            .iter()
            .enumerate()
            .map(|(i, &rating)| RatedTrack {
                track: Track::new(format!("Track {}", i + 1), 180 + i as u64),
                rating,
            })
            .collect(),
    }
}
