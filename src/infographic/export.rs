//! PNG export of the summary card.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use image::{ImageFormat, RgbaImage};

use super::render::{Artwork, render};
use super::{ExportError, InfographicExporter};
use crate::config::ExportConfig;
use crate::rating::InfographicData;

/// File name for an album's card: `{artist}-{album}-rating.png`.
///
/// Spaces become underscores; characters that can't appear in a file name
/// are replaced the same way.
pub fn infographic_filename(artist: &str, album: &str) -> String {
    format!("{}-{}-rating.png", sanitize(artist), sanitize(album))
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            ' ' | '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}

/// Renders the card and writes it as a PNG into a directory.
pub struct PngExporter {
    http_client: reqwest::Client,
    output_dir: PathBuf,
    pixel_ratio: u32,
}

impl PngExporter {
    pub fn new(output_dir: impl Into<PathBuf>, pixel_ratio: u32) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            output_dir: output_dir.into(),
            pixel_ratio,
        }
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(config.output_dir(), config.pixel_ratio)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Download an image, best effort. Anything but a successful http(s)
    /// response yields `None`.
    async fn download(&self, url: &str) -> Option<Vec<u8>> {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return None;
        }

        let response = match self.http_client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Artwork download failed for {}: {}", url, e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Artwork download failed for {}: HTTP {}", url, status);
            return None;
        }

        match response.bytes().await {
            Ok(bytes) => Some(bytes.to_vec()),
            Err(e) => {
                tracing::warn!("Artwork download failed for {}: {}", url, e);
                None
            }
        }
    }

    /// Fetch background and cover bytes concurrently. The background falls
    /// back to the cover, which is then only downloaded once.
    async fn fetch_artwork(&self, data: &InfographicData) -> (Option<Vec<u8>>, Option<Vec<u8>>) {
        let cover_url = data.album.cover_url.as_str();
        let background_url = if data.background_url.trim().is_empty() {
            cover_url
        } else {
            data.background_url.as_str()
        };

        if background_url == cover_url {
            let cover = self.download(cover_url).await;
            return (cover.clone(), cover);
        }

        futures::join!(self.download(background_url), self.download(cover_url))
    }
}

#[async_trait]
impl InfographicExporter for PngExporter {
    async fn export(
        &self,
        data: &InfographicData,
        file_name: &str,
    ) -> Result<PathBuf, ExportError> {
        let (background, cover) = self.fetch_artwork(data).await;
        let path = self.output_dir.join(file_name);
        let scale = self.pixel_ratio;
        let data = data.clone();

        tracing::info!("Rendering infographic to {:?} at {}x", path, scale);

        // Decoding and rasterizing are CPU-bound
        tokio::task::spawn_blocking(move || {
            let artwork = Artwork::decode(background.as_deref(), cover.as_deref());
            let image = render(&data, &artwork, scale);
            write_png(&image, &path)?;
            Ok(path)
        })
        .await
        .map_err(|e| ExportError::TaskJoin(e.to_string()))?
    }
}

/// Encode and write a PNG atomically (temp file, then rename).
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<(), ExportError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| ExportError::CreateDir(dir.to_path_buf(), e))?;
    }

    let temp_path = path.with_extension("png.tmp");
    std::fs::write(&temp_path, &bytes).map_err(|e| ExportError::Write(temp_path.clone(), e))?;
    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(ExportError::Rename(temp_path, path.to_path_buf(), e));
    }

    tracing::info!("Wrote {} bytes to {:?}", bytes.len(), path);
    Ok(())
}
