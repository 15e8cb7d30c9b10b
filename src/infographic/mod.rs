//! Shareable summary card for a completely rated album.
//!
//! - [`render`] - draws the card into an RGBA buffer (pure, CPU only)
//! - [`PngExporter`] - fetches artwork, renders off the async runtime and
//!   writes the PNG atomically
//! - [`InfographicExporter`] - the seam the session driver talks to, mocked in tests

mod export;
mod render;
mod text;

use std::path::PathBuf;

use async_trait::async_trait;

use crate::rating::InfographicData;

pub use export::{PngExporter, infographic_filename};
pub use render::{Artwork, render};

/// Turns card data into a file somewhere.
#[async_trait]
pub trait InfographicExporter: Send + Sync {
    /// Export the card under `file_name`, returning where it was written.
    async fn export(
        &self,
        data: &InfographicData,
        file_name: &str,
    ) -> Result<PathBuf, ExportError>;
}

/// Export errors
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to create output directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to write {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),

    #[error("Task join error: {0}")]
    TaskJoin(String),
}
