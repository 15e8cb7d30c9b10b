//! One-shot rating command.

use std::io;
use tokio::runtime::Runtime;

use crate::app::{App, Message};
use crate::config::Config;
use crate::error::Error;
use crate::infographic::PngExporter;
use crate::provider::build_provider;

use super::session;

/// Rate an album, print the verdict and (unless `no_export`) write the card
pub fn cmd_rate(
    rt: &Runtime,
    config: &Config,
    artist: &str,
    album: &str,
    ratings: Option<&[String]>,
    no_export: bool,
) -> anyhow::Result<()> {
    let mut app = App::new(
        build_provider(config),
        PngExporter::from_config(&config.export),
    );
    let mut out = io::stdout().lock();

    rt.block_on(async {
        session::search(&mut app, artist, album).await?;

        match ratings {
            Some(ratings) => session::apply_ratings(&mut app, ratings).await?,
            None => {
                if let Some(album) = &app.session().album {
                    write_header(&mut out, &album.artist, &album.name, album.tracks.len())?;
                }
                let mut input = io::stdin().lock();
                session::prompt_ratings(&mut app, &mut input, &mut out).await?;
            }
        }

        app.dispatch(Message::GenerateInfographic).await;
        let Some(data) = app.session().infographic_data() else {
            return Err(Error::invalid_input("every track needs a rating from 0 to 10").into());
        };
        session::write_summary(&mut out, &data)?;

        if !no_export {
            session::export(&mut app, &mut out).await?;
        }
        Ok::<(), anyhow::Error>(())
    })
}

fn write_header(out: &mut impl io::Write, artist: &str, album: &str, tracks: usize) -> io::Result<()> {
    writeln!(out, "Rating {} - {} ({} tracks)", artist, album, tracks)
}
