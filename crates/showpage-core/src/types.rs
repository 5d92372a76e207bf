//! Core data types for show page generation
//!
//! Transient view models decoded from the metadata API and the operator's
//! template choice. Nothing here is persisted.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShowpageError};

/// Which search endpoint a summary came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Tv,
    Movie,
}

/// A show returned by a search endpoint
///
/// Movie results carry `title`/`release_date`; both are accepted so TV and
/// movie entries render alike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowSummary {
    /// TMDB identifier
    pub id: u64,

    /// Display name (`name` for TV, `title` for movies)
    #[serde(alias = "title", default)]
    pub name: String,

    /// Relative poster path (e.g., "/ggFHVNu6YYI5L9pCfOacjizRGt.jpg")
    #[serde(default)]
    pub poster_path: Option<String>,

    /// First air date for TV or release date for movies, "YYYY-MM-DD"
    #[serde(alias = "release_date", default)]
    pub first_air_date: Option<String>,

    #[serde(default)]
    pub overview: Option<String>,

    /// Ranking score; missing counts as zero
    #[serde(default)]
    pub popularity: Option<f64>,

    /// Filled in by the client, not part of the API payload
    #[serde(skip_deserializing, default)]
    pub media_kind: MediaKind,
}

impl ShowSummary {
    pub fn popularity_score(&self) -> f64 {
        self.popularity.unwrap_or(0.0)
    }
}

/// Genre entry as embedded in show details and the genre list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    #[serde(default)]
    pub name: String,
}

/// Season stub listed in show details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub season_number: u32,
    #[serde(default)]
    pub episode_count: Option<u32>,
}

/// Full show metadata, fetched once per selection
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShowDetail {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub number_of_seasons: Option<u32>,
    #[serde(default)]
    pub seasons: Vec<SeasonSummary>,
}

impl ShowDetail {
    /// Season numbers above zero, in listing order
    pub fn regular_season_numbers(&self) -> Vec<u32> {
        self.seasons
            .iter()
            .map(|s| s.season_number)
            .filter(|&n| n > 0)
            .collect()
    }
}

/// One season with its episodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonDetail {
    pub season_number: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

impl SeasonDetail {
    /// Season 0 holds specials and is never rendered
    pub fn is_renderable(&self) -> bool {
        self.season_number > 0 && !self.episodes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub episode_number: u32,
    #[serde(default)]
    pub season_number: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub still_path: Option<String>,
    /// Minutes; rarely present on the season endpoint
    #[serde(default)]
    pub runtime: Option<u32>,
}

/// Available document templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Basic,
    Cinemax,
}

impl TemplateKind {
    /// Label used in operator messages
    pub fn style_label(&self) -> &'static str {
        match self {
            TemplateKind::Basic => "Basic",
            TemplateKind::Cinemax => "CINEMAX",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateKind::Basic => write!(f, "basic"),
            TemplateKind::Cinemax => write!(f, "cinemax"),
        }
    }
}

impl FromStr for TemplateKind {
    type Err = ShowpageError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(TemplateKind::Basic),
            "cinemax" => Ok(TemplateKind::Cinemax),
            other => Err(ShowpageError::Validation(format!(
                "Plantilla desconocida: {}",
                other
            ))),
        }
    }
}

static LEADING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?(\d+)").expect("valid regex"));

/// Template choice plus the optional single-season override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSelection {
    pub kind: TemplateKind,
    #[serde(default)]
    pub season_override: Option<u32>,
}

impl TemplateSelection {
    pub fn basic() -> Self {
        Self {
            kind: TemplateKind::Basic,
            season_override: None,
        }
    }

    pub fn cinemax(season_override: Option<u32>) -> Self {
        Self {
            kind: TemplateKind::Cinemax,
            season_override,
        }
    }

    /// Build a selection from raw form values
    ///
    /// The season field is read leniently: leading digits count, anything
    /// else means no override.
    ///
    /// # Errors
    /// - `Validation` if the template name is unknown
    pub fn parse(template: &str, season_input: &str) -> Result<Self> {
        let kind = template.parse::<TemplateKind>()?;
        let season_override = LEADING_DIGITS
            .captures(season_input.trim())
            .and_then(|caps| caps[1].parse::<u32>().ok());
        Ok(Self {
            kind,
            season_override,
        })
    }

    /// The override that actually restricts fetching
    ///
    /// Only cinemax honours it, and only for seasons 2 and above.
    pub fn effective_override(&self) -> Option<u32> {
        match (self.kind, self.season_override) {
            (TemplateKind::Cinemax, Some(n)) if n >= 2 => Some(n),
            _ => None,
        }
    }
}
