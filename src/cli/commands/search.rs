//! Album lookup command.

use std::io::Write;
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::error::ResultExt;
use crate::model::RatedAlbum;
use crate::provider::build_provider;

use super::session::write_tracklist;

/// Look up an album and print what the provider returned
pub fn cmd_search(rt: &Runtime, config: &Config, artist: &str, album: &str) -> anyhow::Result<()> {
    let provider = build_provider(config);

    let data = rt
        .block_on(provider.fetch_album_and_artist(artist, album))
        .with_context(format!("Looking up {} - {}", artist, album))?;

    let cover_url = data.album.cover_url.clone();
    let mut out = std::io::stdout().lock();
    write_tracklist(&mut out, &RatedAlbum::unrated(data.album))?;

    writeln!(out)?;
    writeln!(out, "  Cover:  {}", cover_url)?;
    match data.artist_image_url {
        Some(url) => writeln!(out, "  Artist: {}", url)?,
        None => writeln!(out, "  Artist: (no picture found)")?,
    }
    Ok(())
}
