//! MusicBrainz API Data Transfer Objects
//!
//! These types match what the MusicBrainz API returns for
//! `/ws/2/artist/{mbid}?inc=url-rels&fmt=json`.
//! DO NOT use these types outside the musicbrainz module.

use serde::{Deserialize, Serialize};

/// Artist lookup with URL relationships
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub relations: Vec<Relation>,
}

/// A relationship from the artist to some other entity
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Relation {
    /// Relationship type ("image", "official homepage", "wikidata", ...)
    #[serde(rename = "type")]
    pub relation_type: String,
    pub target_type: Option<String>,
    /// Present for URL relationships
    pub url: Option<UrlTarget>,
}

/// Target of a URL relationship
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UrlTarget {
    pub id: Option<String>,
    pub resource: String,
}

/// Error response from MusicBrainz API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: String,
    pub help: Option<String>,
}

impl ArtistResponse {
    /// URL of the first "image" relationship, if any
    pub fn image_url(&self) -> Option<&str> {
        self.relations
            .iter()
            .find(|r| r.relation_type == "image")
            .and_then(|r| r.url.as_ref())
            .map(|u| u.resource.as_str())
            .filter(|url| !url.is_empty())
    }
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================
