//! Card rasterization.
//!
//! Layout is defined on a 360x450 grid and multiplied by the pixel ratio:
//!
//! ```text
//! +------------------------------------+
//! | [cover]  [ 7.8  Great            ] |
//! |          [=======score=====      ] |
//! |          Artist - Album            |
//! |------------------------------------|
//! | * [=========== track 1 ]           |  * gold = best
//! |   [====== track 2 ]                |  * red  = worst
//! | * [== track 3 ]                    |
//! |  ...                               |
//! | * Best:  track 1 (9)               |
//! | * Worst: track 3 (2)               |
//! | [1][2][3][4][5][6][7][8][9][10]    |  scale legend
//! +------------------------------------+
//! ```
//!
//! The background is the artist picture (or cover), blurred and darkened,
//! or a flat slate fill when no artwork could be loaded.

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};

use super::text::{self, Weight, draw_text, fit_text, ink_for};
use crate::model::RatedTrack;
use crate::rating::{InfographicData, MAX_RATING, RATING_SCALE, rating_info};

pub const BASE_WIDTH: u32 = 360;
pub const BASE_HEIGHT: u32 = 450;

const MAX_SCALE: u32 = 8;

const BACKDROP: [u8; 3] = [0x11, 0x18, 0x27];
const TRACK_GROOVE: [u8; 3] = [0x37, 0x41, 0x51];
const DIVIDER: [u8; 3] = [0x9c, 0xa3, 0xaf];
const BEST_MARKER: [u8; 3] = [0xfa, 0xcc, 0x15];
const WORST_MARKER: [u8; 3] = [0xef, 0x44, 0x44];
const WHITE: [u8; 3] = [0xff, 0xff, 0xff];

const MARGIN: u32 = 24;
const COVER_SIZE: u32 = 96;
const HEADER_X: u32 = MARGIN + COVER_SIZE + 16;
const CONTENT_RIGHT: u32 = BASE_WIDTH - MARGIN;
const VERDICT_HEIGHT: u32 = 56;
const SCORE_SIZE: f32 = 30.0;
const LABEL_SIZE: f32 = 16.0;
const TITLE_Y: u32 = 112;
const BODY_SIZE: f32 = 12.0;
const TRACKS_TOP: u32 = 148;
const TRACKS_BOTTOM: u32 = 372;
const BEST_LINE_Y: u32 = 382;
const WORST_LINE_Y: u32 = 402;
const LINE_TEXT_X: u32 = MARGIN + 14;
const TRACK_BAR_X: u32 = 40;
const MAX_ROW_HEIGHT: u32 = 20;
const LEGEND_Y: u32 = 430;
const LEGEND_HEIGHT: u32 = 8;

/// Decoded images for the card. Either may be missing.
#[derive(Debug, Clone, Default)]
pub struct Artwork {
    pub background: Option<DynamicImage>,
    pub cover: Option<DynamicImage>,
}

impl Artwork {
    /// Decode raw image bytes, dropping anything that isn't a readable image.
    pub fn decode(background: Option<&[u8]>, cover: Option<&[u8]>) -> Self {
        Self {
            background: background.and_then(decode_quietly),
            cover: cover.and_then(decode_quietly),
        }
    }
}

fn decode_quietly(bytes: &[u8]) -> Option<DynamicImage> {
    match image::load_from_memory(bytes) {
        Ok(img) => Some(img),
        Err(e) => {
            tracing::warn!("Ignoring undecodable artwork: {}", e);
            None
        }
    }
}

/// Draw the summary card at `scale` times the base size (clamped to 1..=8).
pub fn render(data: &InfographicData, artwork: &Artwork, scale: u32) -> RgbaImage {
    let scale = scale.clamp(1, MAX_SCALE);
    let width = BASE_WIDTH * scale;
    let height = BASE_HEIGHT * scale;
    let s = |v: u32| v * scale;

    let mut canvas = match &artwork.background {
        Some(bg) => {
            // Blur at base size, then upscale: same look, a fraction of the work
            let small = bg
                .resize_to_fill(BASE_WIDTH, BASE_HEIGHT, FilterType::Triangle)
                .blur(6.0);
            let mut img = small
                .resize_exact(width, height, FilterType::Triangle)
                .to_rgba8();
            darken(&mut img, 0.45);
            img
        }
        None => RgbaImage::from_pixel(width, height, opaque(BACKDROP)),
    };

    // Cover thumbnail
    match &artwork.cover {
        Some(cover) => {
            let thumb = cover
                .resize_to_fill(s(COVER_SIZE), s(COVER_SIZE), FilterType::Lanczos3)
                .to_rgba8();
            imageops::overlay(&mut canvas, &thumb, i64::from(s(MARGIN)), i64::from(s(MARGIN)));
        }
        None => fill_rect(
            &mut canvas,
            s(MARGIN),
            s(MARGIN),
            s(COVER_SIZE),
            s(COVER_SIZE),
            TRACK_GROOVE,
            1.0,
        ),
    }

    // Verdict block: score and label, then the score meter
    let verdict = rating_info(Some(data.overall_score));
    let header_width = s(CONTENT_RIGHT - HEADER_X);
    fill_rect(
        &mut canvas,
        s(HEADER_X),
        s(MARGIN),
        header_width,
        s(VERDICT_HEIGHT),
        verdict.color,
        0.85,
    );
    let ink = ink_for(verdict.color, BACKDROP);
    let score = format!("{:.1}", data.overall_score);
    let score_size = SCORE_SIZE * scale as f32;
    let (score_x, score_y) = (s(HEADER_X + 10), s(MARGIN + 8));
    draw_text(&mut canvas, &score, score_x, score_y, score_size, Weight::Bold, ink);
    let score_width = text::text_width(&score, score_size, Weight::Bold).ceil() as u32;
    let label_x = s(HEADER_X + 20) + score_width;
    draw_text(
        &mut canvas,
        verdict.label,
        label_x,
        s(MARGIN + 20),
        LABEL_SIZE * scale as f32,
        Weight::Bold,
        ink,
    );
    fill_rect(&mut canvas, s(HEADER_X), s(96), header_width, s(12), TRACK_GROOVE, 1.0);
    fill_rect(
        &mut canvas,
        s(HEADER_X),
        s(96),
        proportion(header_width, data.overall_score),
        s(12),
        verdict.color,
        1.0,
    );

    let body_size = BODY_SIZE * scale as f32;
    let title = format!("{} - {}", data.album.artist, data.album.name);
    let title = fit_text(&title, body_size, Weight::Bold, header_width as f32);
    draw_text(&mut canvas, &title, s(HEADER_X), s(TITLE_Y), body_size, Weight::Bold, WHITE);

    fill_rect(
        &mut canvas,
        s(MARGIN),
        s(136),
        s(CONTENT_RIGHT - MARGIN),
        scale,
        DIVIDER,
        0.6,
    );

    // Per-track bars
    let tracks = &data.album.tracks;
    let best = tracks.iter().position(|t| *t == data.best_song);
    let worst = tracks.iter().position(|t| *t == data.worst_song);
    let bar_width = s(CONTENT_RIGHT - TRACK_BAR_X);

    for (index, track) in tracks.iter().enumerate() {
        let (y, row_height) = track_row(index, tracks.len(), scale);
        let bar_height = ((row_height * 13) / 20).max(1);
        let rating = track.rating.unwrap_or(0);
        let color = rating_info(Some(f64::from(rating))).color;

        fill_rect(&mut canvas, s(TRACK_BAR_X), y, bar_width, bar_height, TRACK_GROOVE, 0.8);
        fill_rect(
            &mut canvas,
            s(TRACK_BAR_X),
            y,
            proportion(bar_width, f64::from(rating)),
            bar_height,
            color,
            1.0,
        );

        let marker = if best == Some(index) {
            Some(BEST_MARKER)
        } else if worst == Some(index) {
            Some(WORST_MARKER)
        } else {
            None
        };
        if let Some(marker) = marker {
            fill_rect(&mut canvas, s(MARGIN), y, s(8), bar_height, marker, 1.0);
        }
    }

    // Best and worst, by name
    let line_width = s(CONTENT_RIGHT - LINE_TEXT_X) as f32;
    for (y, marker, caption, song) in [
        (BEST_LINE_Y, BEST_MARKER, "Best:  ", &data.best_song),
        (WORST_LINE_Y, WORST_MARKER, "Worst: ", &data.worst_song),
    ] {
        fill_rect(&mut canvas, s(MARGIN), s(y + 3), s(8), s(8), marker, 1.0);
        let line = fit_text(&song_line(caption, song), body_size, Weight::Regular, line_width);
        draw_text(&mut canvas, &line, s(LINE_TEXT_X), s(y), body_size, Weight::Regular, WHITE);
    }

    // Scale legend, 1 through 10
    let legend_width = s(CONTENT_RIGHT - MARGIN) / u32::from(MAX_RATING);
    for (slot, info) in RATING_SCALE.iter().rev().skip(1).enumerate() {
        fill_rect(
            &mut canvas,
            s(MARGIN) + legend_width * slot as u32,
            s(LEGEND_Y),
            legend_width,
            s(LEGEND_HEIGHT),
            info.color,
            1.0,
        );
    }

    canvas
}

/// Top edge and height (in output pixels) of the row for track `index` of `count`.
///
/// Rows shrink to fit long tracklists, down to a single pixel, and always
/// start inside the track area.
pub(crate) fn track_row(index: usize, count: usize, scale: u32) -> (u32, u32) {
    let top = TRACKS_TOP * scale;
    let available = (TRACKS_BOTTOM - TRACKS_TOP) * scale;
    let count = count.max(1) as u64;
    let row_height = (available / count as u32).clamp(1, MAX_ROW_HEIGHT * scale);
    let spread = if u64::from(row_height) * count <= u64::from(available) {
        u64::from(row_height) * index as u64
    } else {
        u64::from(available) * index as u64 / count
    };
    (top + spread as u32, row_height)
}

fn song_line(caption: &str, song: &RatedTrack) -> String {
    format!("{}{} ({})", caption, song.name(), song.rating.unwrap_or(0))
}

/// Width of a bar filled to `score` out of [`MAX_RATING`].
fn proportion(full: u32, score: f64) -> u32 {
    let fraction = (score / f64::from(MAX_RATING)).clamp(0.0, 1.0);
    (f64::from(full) * fraction).round() as u32
}

fn opaque(color: [u8; 3]) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], 255])
}

fn darken(img: &mut RgbaImage, amount: f32) {
    let keep = 1.0 - amount.clamp(0.0, 1.0);
    for pixel in img.pixels_mut() {
        for channel in &mut pixel.0[..3] {
            *channel = (f32::from(*channel) * keep) as u8;
        }
    }
}

/// Alpha-blend a solid rectangle onto the canvas, clipped to its bounds.
fn fill_rect(
    img: &mut RgbaImage,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    color: [u8; 3],
    alpha: f32,
) {
    let x_end = x.saturating_add(width).min(img.width());
    let y_end = y.saturating_add(height).min(img.height());

    for py in y..y_end {
        for px in x..x_end {
            text::blend_pixel(img, i64::from(px), i64::from(py), color, alpha);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::rated_album;
    use std::ops::Range;

    fn card(ratings: &[Option<u8>]) -> InfographicData {
        InfographicData::from_album(&rated_album(ratings), "https://example.com/bg.jpg").unwrap()
    }

    fn rgb(img: &RgbaImage, x: u32, y: u32) -> [u8; 3] {
        let p = img.get_pixel(x, y);
        [p[0], p[1], p[2]]
    }

    #[test]
    fn test_dimensions_follow_scale() {
        let data = card(&[Some(7), Some(9)]);

        let img = render(&data, &Artwork::default(), 3);

        assert_eq!(img.dimensions(), (1080, 1350));
    }

    #[test]
    fn test_scale_is_clamped() {
        let data = card(&[Some(7)]);

        assert_eq!(render(&data, &Artwork::default(), 0).dimensions(), (360, 450));
        assert_eq!(
            render(&data, &Artwork::default(), 100).dimensions(),
            (360 * MAX_SCALE, 450 * MAX_SCALE)
        );
    }

    #[test]
    fn test_flat_backdrop_without_artwork() {
        let data = card(&[Some(7)]);

        let img = render(&data, &Artwork::default(), 1);

        assert_eq!(rgb(&img, 0, 0), BACKDROP);
    }

    #[test]
    fn test_background_image_is_darkened() {
        let data = card(&[Some(7)]);
        let red = DynamicImage::ImageRgba8(RgbaImage::from_pixel(10, 10, Rgba([200, 0, 0, 255])));
        let artwork = Artwork {
            background: Some(red),
            cover: None,
        };

        let img = render(&data, &artwork, 1);

        let [r, g, b] = rgb(&img, 2, 2);
        assert!(r > 0 && r < 200, "red channel was {r}");
        assert_eq!((g, b), (0, 0));
    }

    #[test]
    fn test_cover_is_drawn_in_corner() {
        let data = card(&[Some(7)]);
        let green = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([0, 255, 0, 255])));
        let artwork = Artwork {
            background: None,
            cover: Some(green),
        };

        let img = render(&data, &artwork, 2);

        let [r, g, _] = rgb(&img, (MARGIN + 10) * 2, (MARGIN + 10) * 2);
        assert!(g > 240 && r < 15);
    }

    #[test]
    fn test_best_and_worst_markers() {
        let data = card(&[Some(7), Some(9), Some(9), Some(3)]);

        let img = render(&data, &Artwork::default(), 1);

        let marker_x = MARGIN + 1;
        let (best_y, _) = track_row(1, 4, 1);
        let (tied_y, _) = track_row(2, 4, 1);
        let (worst_y, _) = track_row(3, 4, 1);
        let (plain_y, _) = track_row(0, 4, 1);
        assert_eq!(rgb(&img, marker_x, best_y), BEST_MARKER);
        assert_eq!(rgb(&img, marker_x, worst_y), WORST_MARKER);
        assert_eq!(rgb(&img, marker_x, tied_y), BACKDROP);
        assert_eq!(rgb(&img, marker_x, plain_y), BACKDROP);
    }

    #[test]
    fn test_bar_uses_rating_colour() {
        let data = card(&[Some(10), Some(0)]);

        let img = render(&data, &Artwork::default(), 1);

        let (y, _) = track_row(0, 2, 1);
        assert_eq!(rgb(&img, TRACK_BAR_X + 1, y), rating_info(Some(10.0)).color);
    }

    #[test]
    fn test_rows_fit_long_tracklists() {
        let (last_y, height) = track_row(499, 500, 1);
        assert_eq!(height, 1);
        assert!(last_y < TRACKS_BOTTOM);

        let (_, capped) = track_row(0, 1, 2);
        assert_eq!(capped, MAX_ROW_HEIGHT * 2);
    }

    fn has_pixel(
        img: &RgbaImage,
        xs: Range<u32>,
        ys: Range<u32>,
        pred: impl Fn([u8; 3]) -> bool,
    ) -> bool {
        ys.flat_map(|y| xs.clone().map(move |x| (x, y)))
            .any(|(x, y)| pred(rgb(img, x, y)))
    }

    #[test]
    fn test_title_is_written() {
        let data = card(&[Some(7), Some(9)]);

        let img = render(&data, &Artwork::default(), 1);

        let title_y = TITLE_Y..TITLE_Y + 18;
        assert!(has_pixel(&img, HEADER_X..CONTENT_RIGHT, title_y, |p| p != BACKDROP));
    }

    #[test]
    fn test_score_is_written_on_verdict_block() {
        // 7.0 is "Good", a mid-green block that takes white ink
        let data = card(&[Some(7), Some(7)]);

        let img = render(&data, &Artwork::default(), 1);

        let block_y = MARGIN..MARGIN + VERDICT_HEIGHT;
        assert!(has_pixel(&img, HEADER_X..CONTENT_RIGHT, block_y, |[r, g, b]| {
            r > 200 && g > 200 && b > 200
        }));
    }

    #[test]
    fn test_best_and_worst_lines_are_written() {
        let data = card(&[Some(7), Some(9), Some(3)]);

        let img = render(&data, &Artwork::default(), 2);

        for y in [BEST_LINE_Y, WORST_LINE_Y] {
            let xs = LINE_TEXT_X * 2..CONTENT_RIGHT * 2;
            let ys = y * 2..(y + 16) * 2;
            assert!(has_pixel(&img, xs, ys, |p| p != BACKDROP), "no text at y={y}");
        }
        assert_eq!(rgb(&img, (MARGIN + 2) * 2, (BEST_LINE_Y + 5) * 2), BEST_MARKER);
        assert_eq!(rgb(&img, (MARGIN + 2) * 2, (WORST_LINE_Y + 5) * 2), WORST_MARKER);
    }

    #[test]
    fn test_song_line_shows_rating() {
        let data = card(&[Some(7), Some(9)]);

        assert_eq!(song_line("Best:  ", &data.best_song), "Best:  Track 2 (9)");
    }

    #[test]
    fn test_decode_drops_garbage() {
        let artwork = Artwork::decode(Some(b"not an image"), None);
        assert!(artwork.background.is_none());
        assert!(artwork.cover.is_none());
    }
}
