//! MusicBrainz API integration
//!
//! Used only to find an artist picture: MusicBrainz stores links to external
//! resources ("url relationships"), one of which may be an image.
//!
//! API docs: https://musicbrainz.org/doc/MusicBrainz_API

pub mod dto;
mod client;

pub use client::MusicBrainzClient;
pub(crate) use client::USER_AGENT;
