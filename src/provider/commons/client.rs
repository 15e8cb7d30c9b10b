//! Wikimedia Commons HTTP client

use super::dto;
use crate::provider::domain::ProviderError;
use crate::provider::musicbrainz::USER_AGENT;

/// Commons API client
pub struct CommonsClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CommonsClient {
    /// Create a new client
    pub fn new() -> Self {
        Self::with_base_url("https://commons.wikimedia.org")
    }

    /// Create a client against a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        // Wikimedia asks for an identifying User-Agent too
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();

        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Resolve a `File:...` title to the direct upload URL
    pub async fn file_url(&self, title: &str) -> Result<Option<String>, ProviderError> {
        let url = format!("{}/w/api.php", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("action", "query"),
                ("titles", title),
                ("prop", "imageinfo"),
                ("iiprop", "url"),
                ("format", "json"),
                ("origin", "*"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let info = response
            .json::<dto::ImageInfoResponse>()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        Ok(info.file_url().map(str::to_string))
    }
}

impl Default for CommonsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = CommonsClient::new();
        assert_eq!(client.base_url, "https://commons.wikimedia.org");
    }
}
