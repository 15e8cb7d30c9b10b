//! Text on the card, rasterized with `ab_glyph` from embedded DejaVu Sans.

use std::sync::LazyLock;

use ab_glyph::{Font, FontRef, GlyphId, PxScale, ScaleFont, point};
use image::RgbaImage;

const REGULAR_BYTES: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
const BOLD_BYTES: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf");

const ELLIPSIS: char = '…';

/// Weight to draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Regular,
    Bold,
}

struct Typefaces {
    regular: FontRef<'static>,
    bold: FontRef<'static>,
}

static TYPEFACES: LazyLock<Option<Typefaces>> = LazyLock::new(|| {
    match (
        FontRef::try_from_slice(REGULAR_BYTES),
        FontRef::try_from_slice(BOLD_BYTES),
    ) {
        (Ok(regular), Ok(bold)) => Some(Typefaces { regular, bold }),
        (Err(e), _) | (_, Err(e)) => {
            tracing::error!("Embedded font is unreadable, card will have no text: {}", e);
            None
        }
    }
});

fn font(weight: Weight) -> Option<&'static FontRef<'static>> {
    TYPEFACES.as_ref().map(|faces| match weight {
        Weight::Regular => &faces.regular,
        Weight::Bold => &faces.bold,
    })
}

/// Advance width of `text` at `size` pixels.
pub fn text_width(text: &str, size: f32, weight: Weight) -> f32 {
    let Some(font) = font(weight) else {
        return 0.0;
    };
    let scaled = font.as_scaled(PxScale::from(size));

    let mut width = 0.0;
    let mut previous: Option<GlyphId> = None;
    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = previous {
            width += scaled.kern(prev, id);
        }
        width += scaled.h_advance(id);
        previous = Some(id);
    }
    width
}

/// Shorten `text` with a trailing ellipsis until it fits in `max_width`.
pub fn fit_text(text: &str, size: f32, weight: Weight, max_width: f32) -> String {
    if text_width(text, size, weight) <= max_width {
        return text.to_string();
    }

    let mut chars: Vec<char> = text.chars().collect();
    while !chars.is_empty() {
        chars.pop();
        let candidate: String = chars.iter().chain(std::iter::once(&ELLIPSIS)).collect();
        if text_width(&candidate, size, weight) <= max_width {
            return candidate;
        }
    }
    String::new()
}

/// Draw `text` with its top-left corner at (`x`, `y`), clipped to the canvas.
pub fn draw_text(
    img: &mut RgbaImage,
    text: &str,
    x: u32,
    y: u32,
    size: f32,
    weight: Weight,
    color: [u8; 3],
) {
    let Some(font) = font(weight) else {
        return;
    };
    let scaled = font.as_scaled(PxScale::from(size));
    let baseline = y as f32 + scaled.ascent();

    let mut caret = x as f32;
    let mut previous: Option<GlyphId> = None;
    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scaled.scale(), point(caret, baseline));
        caret += scaled.h_advance(id);
        previous = Some(id);

        let Some(outlined) = font.outline_glyph(glyph) else {
            continue;
        };
        let bounds = outlined.px_bounds();
        outlined.draw(|gx, gy, coverage| {
            let px = bounds.min.x as i64 + i64::from(gx);
            let py = bounds.min.y as i64 + i64::from(gy);
            blend_pixel(img, px, py, color, coverage);
        });
    }
}

/// Alpha-blend one pixel, ignoring coordinates off the canvas.
pub fn blend_pixel(img: &mut RgbaImage, x: i64, y: i64, color: [u8; 3], alpha: f32) {
    if x < 0 || y < 0 || x >= i64::from(img.width()) || y >= i64::from(img.height()) {
        return;
    }
    let alpha = alpha.clamp(0.0, 1.0);
    let pixel = img.get_pixel_mut(x as u32, y as u32);
    for (channel, &src) in pixel.0[..3].iter_mut().zip(color.iter()) {
        let blended = f32::from(src) * alpha + f32::from(*channel) * (1.0 - alpha);
        *channel = blended.round() as u8;
    }
    pixel.0[3] = 255;
}

/// Dark ink on light fills, white ink on dark ones.
pub fn ink_for(background: [u8; 3], dark: [u8; 3]) -> [u8; 3] {
    let [r, g, b] = background.map(f32::from);
    let luminance = 0.299 * r + 0.587 * g + 0.114 * b;
    if luminance > 150.0 { dark } else { [0xff, 0xff, 0xff] }
}
