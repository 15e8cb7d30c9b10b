//! Terminal plumbing shared by `rate` and the interactive session.

use anyhow::bail;
use std::io::{self, BufRead, Write};

use crate::app::{App, Message, Screen, SearchField, SearchQuery};
use crate::error::Error;
use crate::infographic::InfographicExporter;
use crate::model::{RatedAlbum, format_duration};
use crate::provider::MusicDataProvider;
use crate::rating::{InfographicData, MAX_RATING, rating_info};

/// Search through the session; on success it is on the rating screen.
pub(super) async fn search<P, E>(app: &mut App<P, E>, artist: &str, album: &str) -> anyhow::Result<()>
where
    P: MusicDataProvider,
    E: InfographicExporter,
{
    if !SearchQuery::new(artist, album).is_ready() {
        return Err(Error::invalid_input("both artist and album are required").into());
    }

    app.dispatch(Message::SearchQueryChanged(
        SearchField::Artist,
        artist.to_string(),
    ))
    .await;
    app.dispatch(Message::SearchQueryChanged(
        SearchField::Album,
        album.to_string(),
    ))
    .await;
    app.dispatch(Message::SearchSubmitted).await;

    let session = app.session();
    if session.screen == Screen::Rating {
        return Ok(());
    }
    match &session.error_message {
        Some(message) => bail!("{}", message),
        None => bail!("Search did not complete"),
    }
}

fn current_album<P, E>(app: &App<P, E>) -> anyhow::Result<&RatedAlbum>
where
    P: MusicDataProvider,
    E: InfographicExporter,
{
    match &app.session().album {
        Some(album) => Ok(album),
        None => bail!("No album loaded"),
    }
}

/// Apply ratings given up front (e.g. `--ratings 7,9,9,3`).
pub(super) async fn apply_ratings<P, E>(app: &mut App<P, E>, ratings: &[String]) -> anyhow::Result<()>
where
    P: MusicDataProvider,
    E: InfographicExporter,
{
    let count = current_album(app)?.tracks.len();
    if ratings.len() != count {
        return Err(Error::invalid_input(format!(
            "expected {} ratings (one per track), got {}",
            count,
            ratings.len()
        ))
        .into());
    }

    for (index, input) in ratings.iter().enumerate() {
        app.dispatch(Message::TrackRatingChanged {
            index,
            input: input.trim().to_string(),
        })
        .await;
    }

    let album = current_album(app)?;
    if let Some((index, _)) = album
        .tracks
        .iter()
        .enumerate()
        .find(|(_, t)| t.rating.is_none())
    {
        return Err(Error::invalid_input(format!(
            "rating {:?} for track {} is not a number",
            ratings[index],
            index + 1
        ))
        .into());
    }
    Ok(())
}

/// Prompt for each track's rating until every track has one.
pub(super) async fn prompt_ratings<P, E>(
    app: &mut App<P, E>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()>
where
    P: MusicDataProvider,
    E: InfographicExporter,
{
    let tracks: Vec<_> = current_album(app)?
        .tracks
        .iter()
        .map(|t| (t.name().to_string(), t.track.duration))
        .collect();

    for (index, (name, duration)) in tracks.into_iter().enumerate() {
        loop {
            write!(
                out,
                "{:>3}. {} ({}) [0-{}]: ",
                index + 1,
                name,
                format_duration(duration),
                MAX_RATING
            )?;
            out.flush()?;

            let Some(line) = read_line(input)? else {
                bail!("Input closed before every track was rated");
            };
            app.dispatch(Message::TrackRatingChanged { index, input: line })
                .await;

            let rated = current_album(app)?
                .tracks
                .get(index)
                .is_some_and(|t| t.rating.is_some());
            if rated {
                break;
            }
            writeln!(out, "     Enter a whole number from 0 to {}.", MAX_RATING)?;
        }
    }
    Ok(())
}

/// Export the card, reporting where it went. Failures are only logged.
pub(super) async fn export<P, E>(app: &mut App<P, E>, out: &mut impl Write) -> anyhow::Result<()>
where
    P: MusicDataProvider,
    E: InfographicExporter,
{
    let previous = app.session().last_export.clone();
    app.dispatch(Message::DownloadRequested).await;

    match &app.session().last_export {
        Some(path) if previous.as_ref() != Some(path) => {
            writeln!(out, "✓ Saved {}", path.display())?;
        }
        _ => tracing::debug!("No infographic written"),
    }
    Ok(())
}

/// Read one trimmed line; `None` at end of input.
pub(super) fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub(super) fn write_tracklist(out: &mut impl Write, album: &RatedAlbum) -> io::Result<()> {
    writeln!(out, "{} - {} ({} tracks)", album.artist, album.name, album.tracks.len())?;
    for (i, track) in album.tracks.iter().enumerate() {
        writeln!(
            out,
            "{:>3}. {} ({})",
            i + 1,
            track.name(),
            format_duration(track.track.duration)
        )?;
    }
    Ok(())
}

pub(super) fn write_summary(out: &mut impl Write, data: &InfographicData) -> io::Result<()> {
    let verdict = rating_info(Some(data.overall_score));
    let album = &data.album;

    writeln!(out)?;
    writeln!(out, "{} - {}", album.artist, album.name)?;
    for (i, track) in album.tracks.iter().enumerate() {
        let info = rating_info(track.rating.map(f64::from));
        writeln!(
            out,
            "{:>3}. {:<40} {:>2}  {}",
            i + 1,
            track.name(),
            track.rating.unwrap_or(0),
            info.label
        )?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "  Best:    {} ({})",
        data.best_song.name(),
        data.best_song.rating.unwrap_or(0)
    )?;
    writeln!(
        out,
        "  Worst:   {} ({})",
        data.worst_song.name(),
        data.worst_song.rating.unwrap_or(0)
    )?;
    writeln!(
        out,
        "  Overall: {:.1} / {} ({})",
        data.overall_score, MAX_RATING, verdict.label
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infographic::mocks::MockExporter;
    use crate::provider::traits::mocks::MockProvider;
    use crate::test_utils::{rated_album, sample_album_data};
    use std::io::Cursor;

    fn app() -> App<MockProvider, MockExporter> {
        App::new(
            MockProvider::returning(sample_album_data()),
            MockExporter::succeeding(),
        )
    }

    #[tokio::test]
    async fn test_search_requires_both_fields() {
        let mut app = app();

        let err = search(&mut app, "Pink Floyd", " ").await.unwrap_err();

        assert!(err.to_string().contains("both artist and album"));
    }

    #[tokio::test]
    async fn test_apply_ratings() {
        let mut app = app();
        search(&mut app, "Pink Floyd", "The Wall").await.unwrap();

        let ratings = vec!["7".to_string(), " 9 ".to_string(), "15".to_string()];
        apply_ratings(&mut app, &ratings).await.unwrap();

        let album = app.session().album.as_ref().unwrap();
        let stored: Vec<_> = album.tracks.iter().map(|t| t.rating).collect();
        assert_eq!(stored, vec![Some(7), Some(9), Some(10)]);
    }

    #[tokio::test]
    async fn test_apply_ratings_wrong_count() {
        let mut app = app();
        search(&mut app, "Pink Floyd", "The Wall").await.unwrap();

        let err = apply_ratings(&mut app, &["7".to_string()]).await.unwrap_err();

        assert!(err.to_string().contains("expected 3 ratings"));
    }

    #[tokio::test]
    async fn test_apply_ratings_rejects_non_numbers() {
        let mut app = app();
        search(&mut app, "Pink Floyd", "The Wall").await.unwrap();

        let ratings = vec!["7".to_string(), "great".to_string(), "3".to_string()];
        let err = apply_ratings(&mut app, &ratings).await.unwrap_err();

        assert!(err.to_string().contains("track 2"));
    }

    #[tokio::test]
    async fn test_prompt_ratings_reprompts_on_garbage() {
        let mut app = app();
        search(&mut app, "Pink Floyd", "The Wall").await.unwrap();
        let mut input = Cursor::new("8\nloud\n6\n-2\n");
        let mut out = Vec::new();

        prompt_ratings(&mut app, &mut input, &mut out).await.unwrap();

        let album = app.session().album.as_ref().unwrap();
        let stored: Vec<_> = album.tracks.iter().map(|t| t.rating).collect();
        assert_eq!(stored, vec![Some(8), Some(6), Some(0)]);
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Enter a whole number from 0 to 10."));
        assert!(printed.contains("In the Flesh? (3:19)"));
    }

    #[tokio::test]
    async fn test_prompt_ratings_fails_on_eof() {
        let mut app = app();
        search(&mut app, "Pink Floyd", "The Wall").await.unwrap();
        let mut input = Cursor::new("8\n");
        let mut out = Vec::new();

        let result = prompt_ratings(&mut app, &mut input, &mut out).await;

        assert!(result.is_err());
    }

    #[test]
    fn test_write_summary() {
        let album = rated_album(&[Some(7), Some(9), Some(9), Some(3)]);
        let data = InfographicData::from_album(&album, "").unwrap();
        let mut out = Vec::new();

        write_summary(&mut out, &data).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Best:    Track 2 (9)"));
        assert!(printed.contains("Worst:   Track 4 (3)"));
        assert!(printed.contains("Overall: 7.0 / 10 (Good)"));
    }

    #[test]
    fn test_read_line_trims_and_detects_eof() {
        let mut input = Cursor::new("  Björk \n");
        assert_eq!(read_line(&mut input).unwrap(), Some("Björk".to_string()));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }
}
