//! Deezer catalog provider
//!
//! Searches the Deezer catalog for "artist album", takes the first hit, then
//! fetches its tracklist and the artist's picture concurrently.
//!
//! API docs: https://developers.deezer.com/api

pub mod dto;
mod adapter;
mod client;
mod provider;

pub use adapter::AlbumMatch;
pub use client::DeezerClient;
pub use provider::DeezerProvider;
