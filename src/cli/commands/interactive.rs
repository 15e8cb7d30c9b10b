//! Interactive session: search → rate → export → start over, until the user quits.

use anyhow::bail;
use std::io::{self, BufRead, Write};
use tokio::runtime::Runtime;

use crate::app::{App, Message};
use crate::config::Config;
use crate::infographic::{InfographicExporter, PngExporter};
use crate::provider::{MusicDataProvider, build_provider};

use super::session;

/// Run the interactive session on the terminal
pub fn cmd_interactive(rt: &Runtime, config: &Config) -> anyhow::Result<()> {
    let mut app = App::new(
        build_provider(config),
        PngExporter::from_config(&config.export),
    );
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    rt.block_on(run_loop(&mut app, &mut input, &mut out))
}

async fn run_loop<P, E>(
    app: &mut App<P, E>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()>
where
    P: MusicDataProvider,
    E: InfographicExporter,
{
    writeln!(out, "Rate an album track by track. Leave the artist empty to quit.")?;

    loop {
        writeln!(out)?;
        let Some(artist) = ask(input, out, "Artist: ")?.filter(|a| !a.is_empty()) else {
            break;
        };
        let Some(album) = ask(input, out, "Album:  ")? else {
            break;
        };

        if let Err(e) = session::search(app, &artist, &album).await {
            writeln!(out, "✗ {}", e)?;
            continue;
        }

        if let Some(album) = &app.session().album {
            writeln!(out)?;
            writeln!(
                out,
                "{} - {} ({} tracks)",
                album.artist,
                album.name,
                album.tracks.len()
            )?;
        }
        session::prompt_ratings(app, input, out).await?;

        app.dispatch(Message::GenerateInfographic).await;
        let Some(data) = app.session().infographic_data() else {
            bail!("Rating finished without a complete album");
        };
        session::write_summary(out, &data)?;

        writeln!(out)?;
        if confirm(input, out, "Save infographic? [Y/n] ")? {
            session::export(app, out).await?;
        }

        let again = confirm(input, out, "Rate another album? [Y/n] ")?;
        app.dispatch(Message::StartOver).await;
        if !again {
            break;
        }
    }

    Ok(())
}

fn ask(input: &mut impl BufRead, out: &mut impl Write, prompt: &str) -> io::Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    session::read_line(input)
}

/// Yes unless the answer starts with "n"; end of input counts as no.
fn confirm(input: &mut impl BufRead, out: &mut impl Write, prompt: &str) -> io::Result<bool> {
    Ok(match ask(input, out, prompt)? {
        Some(answer) => !answer.to_lowercase().starts_with('n'),
        None => false,
    })
}
