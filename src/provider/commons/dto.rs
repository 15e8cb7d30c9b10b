//! Wikimedia Commons API Data Transfer Objects
//!
//! Shape of `api.php?action=query&prop=imageinfo&iiprop=url&format=json`.
//! DO NOT use these types outside the commons module.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Top-level query response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImageInfoResponse {
    pub query: Option<Query>,
}

/// Query results keyed by page ID (negative IDs for missing pages)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Query {
    #[serde(default)]
    pub pages: HashMap<String, Page>,
}

/// A file page
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Page {
    pub title: Option<String>,
    /// Empty for missing files
    #[serde(default)]
    pub imageinfo: Vec<ImageInfo>,
}

/// File revision info
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImageInfo {
    /// Direct URL of the uploaded file
    pub url: String,
    pub descriptionurl: Option<String>,
}

impl ImageInfoResponse {
    /// Direct URL of the (single) queried file
    pub fn file_url(&self) -> Option<&str> {
        self.query
            .as_ref()?
            .pages
            .values()
            .next()?
            .imageinfo
            .first()
            .map(|info| info.url.as_str())
    }
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================
