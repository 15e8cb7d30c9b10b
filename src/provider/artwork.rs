//! Artwork helpers shared by all providers.

/// Deterministic stand-in cover, seeded by the searched artist and album.
///
/// The same inputs always produce the same URL.
pub fn placeholder_cover_url(artist: &str, album: &str) -> String {
    let seed = format!("{artist}{album}");
    format!(
        "https://picsum.photos/seed/{}/1080/1080",
        urlencoding::encode(&seed)
    )
}

/// First non-empty URL among `candidates`, which are ordered by preference.
pub(crate) fn first_usable<'a, I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|url| !url.trim().is_empty())
        .map(str::to_string)
}
