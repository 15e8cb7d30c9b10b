//! Rating logic - everything between "user typed a number" and "summary stats".
//!
//! - `input` turns raw text into a clamped rating
//! - `aggregate` derives best/worst track and the overall score
//! - `scale` maps scores to labels and display colours
//!
//! All of it is pure and synchronous.

pub mod aggregate;
pub mod input;
pub mod scale;

pub use aggregate::{InfographicData, RatingSummary, is_complete, summarize};
pub use input::parse_rating_input;
pub use scale::{RATING_SCALE, RatingInfo, rating_info};

/// Highest rating a track can receive.
pub const MAX_RATING: u8 = 10;
