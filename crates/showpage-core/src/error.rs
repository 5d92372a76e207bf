//! Error types for show page generation
//!
//! Provides the error taxonomy shared by the search, season fetching and
//! rendering steps, with localized messages for the operator and
//! Tauri-compatible serialization.

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::locale;

/// Error type for all show page operations
///
/// Implements Display for log-friendly messages and Serialize
/// for Tauri command compatibility. [`ShowpageError::user_message`]
/// gives the localized text shown to the operator.
#[derive(Error, Debug)]
pub enum ShowpageError {
    /// User input rejected before any network call
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Transport failure talking to the metadata API
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Metadata API answered with a non-success status
    #[error("Metadata API returned {status} for {endpoint}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Endpoint path that failed (never contains the API key)
        endpoint: String,
    },

    /// Response body did not match the expected shape
    #[error("Failed to decode API response: {0}")]
    Decode(String),

    /// Required data absent after a successful fetch
    #[error("Not found: {kind}")]
    NotFound {
        /// What exactly was missing
        kind: NotFoundKind,
    },

    /// Template engine failure
    #[error("Failed to render document: {0}")]
    Render(#[from] askama::Error),
}

/// Distinguishes the reasons a show produced nothing to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundKind {
    /// The show lists no regular season at all
    NoSeasons,
    /// Seasons were fetched but none carried episodes
    NoEpisodes,
    /// The requested season override produced no episodes
    SeasonEpisodes(u32),
}

impl std::fmt::Display for NotFoundKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotFoundKind::NoSeasons => write!(f, "show lists no regular seasons"),
            NotFoundKind::NoEpisodes => write!(f, "no season has episodes"),
            NotFoundKind::SeasonEpisodes(n) => write!(f, "season {} has no episodes", n),
        }
    }
}

impl ShowpageError {
    /// Shorthand for a [`ShowpageError::NotFound`] error
    pub fn not_found(kind: NotFoundKind) -> Self {
        ShowpageError::NotFound { kind }
    }

    /// Whether this error belongs to the network class
    ///
    /// Transport failures, non-success statuses and undecodable bodies all
    /// abort the current operation the same way.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            ShowpageError::Http(_) | ShowpageError::Status { .. } | ShowpageError::Decode(_)
        )
    }

    /// Localized message for the operator
    pub fn user_message(&self) -> String {
        match self {
            ShowpageError::Validation(msg) => msg.clone(),
            ShowpageError::Http(_) | ShowpageError::Status { .. } | ShowpageError::Decode(_) => {
                locale::NETWORK_ERROR.to_string()
            }
            ShowpageError::NotFound { kind } => match kind {
                NotFoundKind::NoSeasons => locale::NO_SEASON_DATA.to_string(),
                NotFoundKind::NoEpisodes => locale::NO_EPISODES.to_string(),
                NotFoundKind::SeasonEpisodes(n) => locale::no_episodes_for_season(*n),
            },
            ShowpageError::Render(_) => locale::RENDER_ERROR.to_string(),
        }
    }
}

impl Serialize for ShowpageError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.user_message())
    }
}

/// Result type alias for show page operations
pub type Result<T> = std::result::Result<T, ShowpageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_validation() {
        let error = ShowpageError::Validation("empty query".to_string());
        assert_eq!(error.to_string(), "Invalid input: empty query");
    }

    #[test]
    fn test_error_display_status() {
        let error = ShowpageError::Status {
            status: 401,
            endpoint: "search/tv".to_string(),
        };
        assert_eq!(error.to_string(), "Metadata API returned 401 for search/tv");
    }

    #[test]
    fn test_error_display_not_found_season() {
        let error = ShowpageError::not_found(NotFoundKind::SeasonEpisodes(3));
        assert_eq!(error.to_string(), "Not found: season 3 has no episodes");
    }

    #[test]
    fn test_network_classification() {
        assert!(ShowpageError::Decode("bad json".to_string()).is_network());
        assert!(ShowpageError::Status { status: 500, endpoint: "tv/1".to_string() }.is_network());
        assert!(!ShowpageError::Validation("x".to_string()).is_network());
        assert!(!ShowpageError::not_found(NotFoundKind::NoEpisodes).is_network());
    }

    #[test]
    fn test_user_message_distinguishes_season_override() {
        let general = ShowpageError::not_found(NotFoundKind::NoEpisodes).user_message();
        let specific = ShowpageError::not_found(NotFoundKind::SeasonEpisodes(3)).user_message();
        assert_ne!(general, specific);
        assert!(specific.contains("Temporada 3"));
    }

    #[test]
    fn test_user_message_network() {
        let error = ShowpageError::Status {
            status: 503,
            endpoint: "search/movie".to_string(),
        };
        assert_eq!(error.user_message(), locale::NETWORK_ERROR);
    }

    #[test]
    fn test_error_serialize_uses_user_message() {
        let error = ShowpageError::not_found(NotFoundKind::SeasonEpisodes(2));
        let json = serde_json::to_string(&error).expect("Serialization should succeed");
        assert_eq!(json, "\"No se encontraron episodios para la Temporada 2.\"");
    }
}
