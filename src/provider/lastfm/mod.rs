//! Last.fm provider
//!
//! Album details come from Last.fm's `album.getinfo`. Last.fm no longer serves
//! artist pictures, so the artist image is looked up through a chain:
//! Last.fm artist → MusicBrainz ID → MusicBrainz "image" link → Wikimedia Commons file.
//!
//! API docs: https://www.last.fm/api

pub mod dto;
mod adapter;
mod client;
mod provider;

pub use client::LastFmClient;
pub use provider::{LastFmProvider, PLACEHOLDER_API_KEY};
