//! Wikimedia Commons integration
//!
//! MusicBrainz image relationships usually point at a Commons *file page*
//! (`https://commons.wikimedia.org/wiki/File:...`), which is HTML. The
//! imageinfo API turns the page title into a direct upload URL.

pub mod dto;
mod client;

pub use client::CommonsClient;

/// Prefix of Commons file page URLs
pub const FILE_PAGE_PREFIX: &str = "https://commons.wikimedia.org/wiki/File:";

/// Extract the `File:...` page title from a Commons file page URL.
///
/// Returns `None` for anything that isn't a Commons file page.
pub fn file_title(url: &str) -> Option<String> {
    let name = url.strip_prefix(FILE_PAGE_PREFIX)?;
    if name.is_empty() {
        return None;
    }
    // Page URLs are percent-encoded; the API wants the plain title
    let name = urlencoding::decode(name)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| name.to_string());
    Some(format!("File:{}", name))
}
