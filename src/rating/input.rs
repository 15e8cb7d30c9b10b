//! Parsing of free-text rating input.

use super::MAX_RATING;

/// Parse a rating typed by the user.
///
/// Reads the leading integer of the input (leading whitespace and a sign are
/// accepted, anything after the digits is ignored) and clamps it into `0..=10`.
/// Input without a leading integer clears the rating.
///
/// ```ignore
/// assert_eq!(parse_rating_input("15"), Some(10));
/// assert_eq!(parse_rating_input("-3"), Some(0));
/// assert_eq!(parse_rating_input("abc"), None);
/// ```
pub fn parse_rating_input(input: &str) -> Option<u8> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() {
        return None;
    }

    if negative {
        return Some(0);
    }

    // Anything too long to parse is certainly above the maximum
    let value = digits.parse::<u64>().unwrap_or(u64::MAX);
    Some(value.min(u64::from(MAX_RATING)) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range() {
        assert_eq!(parse_rating_input("0"), Some(0));
        assert_eq!(parse_rating_input("7"), Some(7));
        assert_eq!(parse_rating_input("10"), Some(10));
    }

    #[test]
    fn test_clamps_high_and_low() {
        assert_eq!(parse_rating_input("15"), Some(10));
        assert_eq!(parse_rating_input("-3"), Some(0));
        assert_eq!(parse_rating_input("99999999999999999999999"), Some(10));
    }

    #[test]
    fn test_non_numeric_clears() {
        assert_eq!(parse_rating_input("abc"), None);
        assert_eq!(parse_rating_input(""), None);
        assert_eq!(parse_rating_input("   "), None);
        assert_eq!(parse_rating_input("-"), None);
        assert_eq!(parse_rating_input("x7"), None);
    }

    #[test]
    fn test_leading_integer_wins() {
        assert_eq!(parse_rating_input(" 8"), Some(8));
        assert_eq!(parse_rating_input("7.9"), Some(7));
        assert_eq!(parse_rating_input("6/10"), Some(6));
        assert_eq!(parse_rating_input("+4"), Some(4));
        assert_eq!(parse_rating_input("-0"), Some(0));
    }
}
