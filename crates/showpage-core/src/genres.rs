//! Genre lookup
//!
//! The genre list is fetched once and frozen into a [`GenreMap`]. Holders
//! see an explicit [`Genres::NotLoaded`] until that happens instead of an
//! empty map that may or may not be populated yet.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;

use crate::types::Genre;

/// Immutable id → display name snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreMap {
    names: HashMap<u32, String>,
}

impl GenreMap {
    pub fn from_genres(genres: impl IntoIterator<Item = Genre>) -> Self {
        Self {
            names: genres.into_iter().map(|g| (g.id, g.name)).collect(),
        }
    }

    pub fn get(&self, id: u32) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Body of `genre/tv/list`
#[derive(Debug, Deserialize)]
pub(crate) struct GenreListResponse {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// Loading state of the process-wide genre lookup
#[derive(Debug, Clone, Default)]
pub enum Genres {
    #[default]
    NotLoaded,
    Loaded(Arc<GenreMap>),
}

impl Genres {
    pub fn loaded(map: GenreMap) -> Self {
        Genres::Loaded(Arc::new(map))
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Genres::Loaded(_))
    }

    /// Display name for a genre
    ///
    /// Prefers the lookup; falls back to the name the show detail embedded.
    pub fn display_name<'a>(&'a self, genre: &'a Genre) -> &'a str {
        match self {
            Genres::Loaded(map) => map.get(genre.id).unwrap_or(&genre.name),
            Genres::NotLoaded => &genre.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genre(id: u32, name: &str) -> Genre {
        Genre {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_genre_map_lookup() {
        let map = GenreMap::from_genres(vec![genre(18, "Drama"), genre(80, "Crimen")]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(80), Some("Crimen"));
        assert_eq!(map.get(99), None);
    }

    #[test]
    fn test_display_name_prefers_lookup() {
        let genres = Genres::loaded(GenreMap::from_genres(vec![genre(18, "Drama (es)")]));
        assert_eq!(genres.display_name(&genre(18, "Drama")), "Drama (es)");
        assert_eq!(genres.display_name(&genre(35, "Comedy")), "Comedy");
    }

    #[test]
    fn test_not_loaded_falls_back_to_embedded_name() {
        let genres = Genres::default();
        assert!(!genres.is_loaded());
        assert_eq!(genres.display_name(&genre(18, "Drama")), "Drama");
    }

    #[test]
    fn test_genre_list_response_decodes() {
        let json = r#"{"genres": [{"id": 10759, "name": "Action & Adventure"}]}"#;
        let body: GenreListResponse = serde_json::from_str(json).expect("valid body");
        let map = GenreMap::from_genres(body.genres);
        assert_eq!(map.get(10759), Some("Action & Adventure"));
    }
}
