//! Document generators
//!
//! Both templates render from the same derived [`ShowFacts`]: display
//! fallbacks, the navigable season list, the active season and per-episode
//! image resolution are computed once here, and each template only decides
//! markup.

mod basic;
mod cinemax;

pub use basic::BasicTemplate;
pub use cinemax::CinemaxTemplate;

use chrono::{Datelike, NaiveDate};

use crate::error::Result;
use crate::genres::Genres;
use crate::locale;
use crate::types::{Episode, SeasonDetail, ShowDetail, TemplateKind};
use crate::url::{image_url, resize_base, ImageBases, IMAGE_PLACEHOLDER};

/// DOM id of the block shown when there is no season to navigate
pub const NO_SEASONS_ID: &str = "no-seasons";

/// Everything a generator needs
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub show: &'a ShowDetail,
    pub seasons: &'a [SeasonDetail],
    pub genres: &'a Genres,
    pub images: &'a ImageBases,
}

/// A document template
///
/// Implementations are stateless and may be called repeatedly for
/// different shows.
pub trait PageTemplate: Send + Sync {
    fn kind(&self) -> TemplateKind;

    /// Render a complete self-contained HTML document
    fn render(&self, input: &RenderInput<'_>) -> Result<String>;
}

/// The generator for a template kind
pub fn template_for(kind: TemplateKind) -> &'static dyn PageTemplate {
    match kind {
        TemplateKind::Basic => &BasicTemplate,
        TemplateKind::Cinemax => &CinemaxTemplate,
    }
}

/// Render a document with the generator for `kind`
pub fn render_page(kind: TemplateKind, input: &RenderInput<'_>) -> Result<String> {
    template_for(kind).render(input)
}

/// Per-template knobs for the shared derivation
#[derive(Debug, Clone, Copy)]
pub(crate) struct Flavor {
    /// Season DOM ids are this prefix followed by the season number
    pub season_id_prefix: &'static str,
    /// Shown when the air date is missing or unparsable
    pub unknown_year: &'static str,
    /// Size segment swapped into the still base when an episode falls back
    /// to the show backdrop; `None` keeps the still size
    pub backdrop_fallback_size: Option<&'static str>,
}

/// Display-ready fields derived from a show and its seasons
#[derive(Debug, Clone, PartialEq)]
pub struct ShowFacts {
    pub show_id: u64,
    pub title: String,
    pub year: String,
    pub score: String,
    pub synopsis: String,
    pub genres: String,
    /// Full-size backdrop for page backgrounds
    pub backdrop_url: Option<String>,
    /// Header poster (w300) or placeholder
    pub poster_url: String,
    /// Navigable seasons, ascending; empty means placeholder mode
    pub seasons: Vec<SeasonView>,
}

impl ShowFacts {
    pub(crate) fn derive(input: &RenderInput<'_>, flavor: &Flavor) -> Self {
        let show = input.show;
        let images = input.images;

        let backdrop_url = image_url(&images.backdrop, show.backdrop_path.as_deref());
        let poster_url = image_url(&resize_base(&images.poster, "w300"), show.poster_path.as_deref())
            .unwrap_or_else(|| IMAGE_PLACEHOLDER.to_string());

        let still_base = images.still.as_str();
        let fallback_base = match flavor.backdrop_fallback_size {
            Some(size) => resize_base(still_base, size),
            None => still_base.to_string(),
        };
        let episode_backdrop = image_url(&fallback_base, show.backdrop_path.as_deref());

        let seasons = navigable_seasons(input.seasons)
            .into_iter()
            .enumerate()
            .map(|(index, season)| {
                SeasonView::build(season, index == 0, flavor, still_base, episode_backdrop.as_deref())
            })
            .collect();

        Self {
            show_id: show.id,
            title: non_blank(show.name.as_deref()).unwrap_or(locale::UNKNOWN_TITLE).to_string(),
            year: air_year(show.first_air_date.as_deref())
                .map(|y| y.to_string())
                .unwrap_or_else(|| flavor.unknown_year.to_string()),
            score: format_score(show.vote_average),
            synopsis: non_blank(show.overview.as_deref())
                .unwrap_or(locale::NO_OVERVIEW)
                .to_string(),
            genres: genre_line(show, input.genres),
            backdrop_url,
            poster_url,
            seasons,
        }
    }

    pub fn has_seasons(&self) -> bool {
        !self.seasons.is_empty()
    }

    /// DOM id of the initially visible block
    pub fn initial_block_id(&self) -> String {
        self.seasons
            .iter()
            .find(|s| s.active)
            .map(|s| s.id.clone())
            .unwrap_or_else(|| NO_SEASONS_ID.to_string())
    }
}

/// One entry in the season navigation
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonView {
    pub number: u32,
    pub id: String,
    pub label: String,
    pub active: bool,
    pub episodes: Vec<EpisodeView>,
}

impl SeasonView {
    fn build(
        season: &SeasonDetail,
        active: bool,
        flavor: &Flavor,
        still_base: &str,
        episode_backdrop: Option<&str>,
    ) -> Self {
        Self {
            number: season.season_number,
            id: format!("{}{}", flavor.season_id_prefix, season.season_number),
            label: season_label(season),
            active,
            episodes: season
                .episodes
                .iter()
                .map(|episode| EpisodeView::build(episode, season.season_number, still_base, episode_backdrop))
                .collect(),
        }
    }
}

/// One episode card
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeView {
    pub number: u32,
    pub season_number: u32,
    pub title: String,
    pub image_url: String,
    /// "45m" or "N/A"
    pub duration: String,
}

impl EpisodeView {
    fn build(episode: &Episode, season_number: u32, still_base: &str, episode_backdrop: Option<&str>) -> Self {
        Self {
            number: episode.episode_number,
            season_number: episode.season_number.unwrap_or(season_number),
            title: non_blank(episode.name.as_deref())
                .unwrap_or(locale::UNTITLED_EPISODE)
                .to_string(),
            image_url: episode_image(episode, still_base, episode_backdrop),
            duration: episode
                .runtime
                .filter(|&m| m > 0)
                .map(|m| format!("{}m", m))
                .unwrap_or_else(|| locale::NO_SCORE.to_string()),
        }
    }

    /// "Capítulo 3: Title"
    pub fn heading(&self) -> String {
        format!("{}: {}", locale::episode_label(self.number), self.title)
    }
}

/// Seasons worth navigating: number above zero with episodes, ascending
pub fn navigable_seasons(seasons: &[SeasonDetail]) -> Vec<&SeasonDetail> {
    let mut kept: Vec<&SeasonDetail> = seasons.iter().filter(|s| s.is_renderable()).collect();
    kept.sort_by_key(|s| s.season_number);
    kept
}

/// Episode image: still, then show backdrop, then the generic placeholder
pub fn episode_image(episode: &Episode, still_base: &str, episode_backdrop: Option<&str>) -> String {
    image_url(still_base, episode.still_path.as_deref())
        .or_else(|| episode_backdrop.map(str::to_string))
        .unwrap_or_else(|| IMAGE_PLACEHOLDER.to_string())
}

/// The API name, unless it is the generic "Season N"
fn season_label(season: &SeasonDetail) -> String {
    let generic = format!("Season {}", season.season_number);
    match non_blank(season.name.as_deref()) {
        Some(name) if name != generic => name.to_string(),
        _ => locale::season_name(season.season_number),
    }
}

/// Inline `background` declaration layering a gradient over the backdrop
///
/// Empty when the show has no backdrop; the stylesheet gradient applies then.
pub(crate) fn background_style(gradient: &str, backdrop_url: Option<&str>) -> String {
    match backdrop_url {
        Some(url) => format!("background: {}, url('{}') no-repeat center/cover;", gradient, url),
        None => String::new(),
    }
}

pub(crate) fn air_year(date: Option<&str>) -> Option<i32> {
    let date = non_blank(date)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.year())
        .ok()
}

/// One decimal place; zero or missing scores read "N/A"
fn format_score(vote_average: Option<f64>) -> String {
    match vote_average {
        Some(v) if v.is_finite() && v != 0.0 => format!("{:.1}", v),
        _ => locale::NO_SCORE.to_string(),
    }
}

fn genre_line(show: &ShowDetail, genres: &Genres) -> String {
    let names: Vec<&str> = show
        .genres
        .iter()
        .map(|g| genres.display_name(g))
        .filter(|name| !name.trim().is_empty())
        .collect();
    if names.is_empty() {
        locale::UNKNOWN_GENRE.to_string()
    } else {
        names.join(", ")
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
