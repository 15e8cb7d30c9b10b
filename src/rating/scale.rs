//! The rating scale: what a score means and what colour it's drawn in.

/// Label and display colour for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingInfo {
    pub score: u8,
    pub label: &'static str,
    /// sRGB colour used for bars on the summary card
    pub color: [u8; 3],
}

const UNRATED: RatingInfo = RatingInfo {
    score: 0,
    label: "Unrated",
    color: [0x6b, 0x72, 0x80],
};

/// Highest score first.
pub const RATING_SCALE: [RatingInfo; 11] = [
    RatingInfo { score: 10, label: "Perfect", color: [0xd9, 0x46, 0xef] },
    RatingInfo { score: 9, label: "Amazing", color: [0xa8, 0x55, 0xf7] },
    RatingInfo { score: 8, label: "Great", color: [0x3b, 0x82, 0xf6] },
    RatingInfo { score: 7, label: "Good", color: [0x22, 0xc5, 0x5e] },
    RatingInfo { score: 6, label: "Decent", color: [0x84, 0xcc, 0x16] },
    RatingInfo { score: 5, label: "Mediocre", color: [0xea, 0xb3, 0x08] },
    RatingInfo { score: 4, label: "Meh", color: [0xf5, 0x9e, 0x0b] },
    RatingInfo { score: 3, label: "Bad", color: [0xf9, 0x73, 0x16] },
    RatingInfo { score: 2, label: "Terrible", color: [0xef, 0x44, 0x44] },
    RatingInfo { score: 1, label: "Dreadful", color: [0xbe, 0x12, 0x3c] },
    UNRATED,
];

/// Look up the scale entry for a (possibly fractional) score.
///
/// The score is rounded to the nearest whole number; a missing score counts
/// as 0. Anything off the scale is reported as unrated.
pub fn rating_info(score: Option<f64>) -> RatingInfo {
    let rounded = score.unwrap_or(0.0).round();
    RATING_SCALE
        .iter()
        .find(|info| f64::from(info.score) == rounded)
        .copied()
        .unwrap_or(UNRATED)
}
