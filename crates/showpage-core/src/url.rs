//! URL helper functions for the TMDB API and image CDN
//!
//! Provides functions for building endpoint paths, request URLs and
//! image URLs from the relative paths the API returns.

use serde::{Deserialize, Serialize};

/// Default metadata API root
pub const API_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Shown when a search result has no poster
pub const RESULT_POSTER_PLACEHOLDER: &str = "https://via.placeholder.com/92x138?text=No+Poster";

/// Shown when neither a poster, a still nor a backdrop is available
pub const IMAGE_PLACEHOLDER: &str = "https://via.placeholder.com/300x450?text=No+Poster";

/// Which search endpoint to hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTarget {
    Tv,
    Movie,
}

/// Endpoint path for the TV genre list
pub fn genre_list_path() -> String {
    "genre/tv/list".to_string()
}

/// Endpoint path for a search
///
/// # Example
/// ```
/// use showpage_core::url::{search_path, SearchTarget};
/// assert_eq!(search_path(SearchTarget::Movie), "search/movie");
/// ```
pub fn search_path(target: SearchTarget) -> String {
    match target {
        SearchTarget::Tv => "search/tv".to_string(),
        SearchTarget::Movie => "search/movie".to_string(),
    }
}

/// Endpoint path for show details
pub fn show_path(show_id: u64) -> String {
    format!("tv/{}", show_id)
}

/// Endpoint path for one season of a show
///
/// # Example
/// ```
/// use showpage_core::url::season_path;
/// assert_eq!(season_path(1396, 3), "tv/1396/season/3");
/// ```
pub fn season_path(show_id: u64, season_number: u32) -> String {
    format!("tv/{}/season/{}", show_id, season_number)
}

/// Builds the full request URL for an endpoint
///
/// Every request carries the API key and language; extra parameters are
/// appended in order. Values are percent-encoded.
///
/// # Example
/// ```
/// use showpage_core::url::build_api_url;
/// let url = build_api_url("https://api.themoviedb.org/3", "search/tv", "KEY", "es-ES",
///     &[("query", "breaking bad")]);
/// assert_eq!(
///     url,
///     "https://api.themoviedb.org/3/search/tv?api_key=KEY&language=es-ES&query=breaking%20bad"
/// );
/// ```
pub fn build_api_url(
    base_url: &str,
    path: &str,
    api_key: &str,
    language: &str,
    extra: &[(&str, &str)],
) -> String {
    let mut url = format!(
        "{}/{}?api_key={}&language={}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/'),
        urlencoding::encode(api_key),
        urlencoding::encode(language)
    );
    for (key, value) in extra {
        url.push('&');
        url.push_str(key);
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}

/// Image CDN bases for the three image roles
///
/// Each base ends in a size segment (`w185/`, `w300/`, `w1280/`) followed by
/// a slash; API image paths start with a slash, so joining goes through
/// [`join_image`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageBases {
    /// Poster base used for search results
    pub poster: String,
    /// Episode still base
    pub still: String,
    /// Wide backdrop base
    pub backdrop: String,
}

impl Default for ImageBases {
    fn default() -> Self {
        Self {
            poster: "https://image.tmdb.org/t/p/w185/".to_string(),
            still: "https://image.tmdb.org/t/p/w300/".to_string(),
            backdrop: "https://image.tmdb.org/t/p/w1280/".to_string(),
        }
    }
}

/// Swaps the size segment of an image base
///
/// # Example
/// ```
/// use showpage_core::url::resize_base;
/// assert_eq!(
///     resize_base("https://image.tmdb.org/t/p/w185/", "w300"),
///     "https://image.tmdb.org/t/p/w300/"
/// );
/// ```
pub fn resize_base(base: &str, size: &str) -> String {
    let trimmed = base.trim_end_matches('/');
    match trimmed.rsplit_once('/') {
        Some((prefix, _)) => format!("{}/{}/", prefix, size),
        None => base.to_string(),
    }
}

/// Joins an image base and an API image path without doubling the slash
///
/// # Example
/// ```
/// use showpage_core::url::join_image;
/// assert_eq!(
///     join_image("https://image.tmdb.org/t/p/w300/", "/abc.jpg"),
///     "https://image.tmdb.org/t/p/w300/abc.jpg"
/// );
/// ```
pub fn join_image(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Joins an optional image path, treating empty strings as absent
pub fn image_url(base: &str, path: Option<&str>) -> Option<String> {
    path.filter(|p| !p.trim().is_empty())
        .map(|p| join_image(base, p))
}
