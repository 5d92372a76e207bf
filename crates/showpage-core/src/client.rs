//! HTTP client for the TMDB metadata API
//!
//! Wraps a `reqwest` client with the API key, language and base URL every
//! request needs, and maps failures onto [`ShowpageError`].

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Result, ShowpageError};
use crate::genres::{GenreListResponse, GenreMap};
use crate::types::{MediaKind, SeasonDetail, ShowDetail, ShowSummary};
use crate::url::{
    build_api_url, genre_list_path, search_path, season_path, show_path, SearchTarget,
    API_BASE_URL,
};

/// Configuration for the metadata client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// TMDB v3 API key (required)
    pub api_key: String,
    /// Response language (default: "es-ES")
    pub language: String,
    /// API root (default: "https://api.themoviedb.org/3")
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            language: "es-ES".to_string(),
            base_url: API_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Create a configuration with the given key and default settings
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Read configuration from the environment
    ///
    /// `TMDB_API_KEY`, `TMDB_LANGUAGE`, `TMDB_BASE_URL` and
    /// `TMDB_TIMEOUT_SECS`; unset or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: std::env::var("TMDB_API_KEY").unwrap_or(defaults.api_key),
            language: std::env::var("TMDB_LANGUAGE").unwrap_or(defaults.language),
            base_url: std::env::var("TMDB_BASE_URL").unwrap_or(defaults.base_url),
            timeout_secs: std::env::var("TMDB_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<ShowSummary>,
}

/// HTTP client for the four TMDB endpoints the generator consumes
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl TmdbClient {
    /// Create a new client from configuration
    ///
    /// # Errors
    /// - `Validation` if the API key is empty
    /// - `Http` if the HTTP client cannot be built
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(ShowpageError::Validation(
                "TMDB API key cannot be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ShowpageError::Http)?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the TV genre list as an immutable lookup
    pub async fn genres(&self) -> Result<GenreMap> {
        let body: GenreListResponse = self.get_json(&genre_list_path(), &[]).await?;
        Ok(GenreMap::from_genres(body.genres))
    }

    /// Search one endpoint, tagging each result with its media kind
    pub async fn search(&self, target: SearchTarget, query: &str) -> Result<Vec<ShowSummary>> {
        let body: SearchResponse = self
            .get_json(&search_path(target), &[("query", query)])
            .await?;

        let kind = match target {
            SearchTarget::Tv => MediaKind::Tv,
            SearchTarget::Movie => MediaKind::Movie,
        };

        Ok(body
            .results
            .into_iter()
            .map(|mut summary| {
                summary.media_kind = kind;
                summary
            })
            .collect())
    }

    /// Fetch full show metadata
    pub async fn show(&self, show_id: u64) -> Result<ShowDetail> {
        self.get_json(&show_path(show_id), &[]).await
    }

    /// Fetch one season with its episodes
    pub async fn season(&self, show_id: u64, season_number: u32) -> Result<SeasonDetail> {
        self.get_json(&season_path(show_id, season_number), &[])
            .await
    }

    /// Perform a GET and decode the JSON body
    ///
    /// # Errors
    /// - `Http` - transport failure
    /// - `Status` - non-success HTTP status
    /// - `Decode` - body does not match `T`
    async fn get_json<T: DeserializeOwned>(&self, path: &str, extra: &[(&str, &str)]) -> Result<T> {
        let url = build_api_url(
            &self.config.base_url,
            path,
            &self.config.api_key,
            &self.config.language,
            extra,
        );

        tracing::debug!(endpoint = %path, "Requesting TMDB");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ShowpageError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(endpoint = %path, status = status.as_u16(), "TMDB request failed");
            return Err(ShowpageError::Status {
                status: status.as_u16(),
                endpoint: path.to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ShowpageError::Http(e.without_url()))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| ShowpageError::Decode(format!("{}: {}", path, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.language, "es-ES");
        assert_eq!(config.base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_client_requires_api_key() {
        let result = TmdbClient::new(ClientConfig::default());
        match result {
            Err(ShowpageError::Validation(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn test_client_whitespace_api_key() {
        let result = TmdbClient::new(ClientConfig::with_api_key("   "));
        assert!(matches!(result, Err(ShowpageError::Validation(_))));
    }

    #[test]
    fn test_client_creation() {
        let client = TmdbClient::new(ClientConfig::with_api_key("test-key"));
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_custom_config() {
        let config = ClientConfig {
            api_key: "test-key".to_string(),
            language: "en-US".to_string(),
            base_url: "http://localhost:1234".to_string(),
            timeout_secs: 5,
        };
        let client = TmdbClient::new(config).unwrap();
        assert_eq!(client.config().language, "en-US");
    }
}
