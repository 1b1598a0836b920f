//! REST client for the character listing endpoint.
//!
//! Issues one `GET` with no parameters and decodes the first page of
//! results using [`reqwest`].

use std::time::Duration;

use tracing::debug;
use cdex_core::CharacterCollection;
use url::Url;

use crate::error::ApiError;
use crate::response::CharacterPage;
use crate::source::CharacterSource;

/// Public Rick and Morty character listing
pub const DEFAULT_ENDPOINT: &str = "https://rickandmortyapi.com/api/character";

/// HTTP source for the character collection.
#[derive(Debug, Clone)]
pub struct HttpCharacterSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpCharacterSource {
    /// Create a source for `endpoint` with no request timeout.
    pub fn new(endpoint: &str) -> Result<Self, ApiError> {
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: parse_endpoint(endpoint)?,
        })
    }

    /// Create a source whose request gives up after `timeout`.
    pub fn with_timeout(endpoint: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: parse_endpoint(endpoint)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an [`ApiError::Status`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

impl CharacterSource for HttpCharacterSource {
    async fn fetch_characters(&self) -> Result<CharacterCollection, ApiError> {
        debug!("GET {}", self.endpoint);

        let response = self.client.get(self.endpoint.clone()).send().await?;
        let response = Self::ensure_success(response).await?;
        let body = response.bytes().await?;
        let page: CharacterPage = serde_json::from_slice(&body)?;

        if let Some(info) = &page.info {
            debug!(
                "Character page: {} results of {} total ({} pages)",
                page.results.len(),
                info.count,
                info.pages
            );
        }

        Ok(page.into_collection())
    }

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }
}

/// Validate that `endpoint` is an absolute http(s) URL
pub fn parse_endpoint(endpoint: &str) -> Result<Url, ApiError> {
    let url = Url::parse(endpoint).map_err(|e| ApiError::InvalidEndpoint {
        url: endpoint.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ApiError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}
