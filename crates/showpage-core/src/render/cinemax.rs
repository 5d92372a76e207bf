//! "Cinemax" template: embedded player, season tabs, language selector

use askama::Template;

use super::{background_style, Flavor, PageTemplate, RenderInput, ShowFacts};
use crate::error::Result;
use crate::locale;
use crate::types::TemplateKind;

const BACKGROUND_GRADIENT: &str =
    "linear-gradient(to bottom, rgba(0,0,0,0.9) 10%, rgba(0,0,0,0.6) 50%, rgba(0,0,0,0.9) 100%)";

const FLAVOR: Flavor = Flavor {
    season_id_prefix: "temporada",
    unknown_year: locale::UNKNOWN_DATE,
    backdrop_fallback_size: None,
};

#[derive(Template)]
#[template(path = "cinemax.html")]
struct CinemaxPage<'a> {
    facts: &'a ShowFacts,
    background_style: String,
    season_count: String,
    no_seasons_message: &'a str,
}

/// Player-driven template with per-episode Español / Sub Español sources
#[derive(Debug, Clone, Copy, Default)]
pub struct CinemaxTemplate;

impl PageTemplate for CinemaxTemplate {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Cinemax
    }

    fn render(&self, input: &RenderInput<'_>) -> Result<String> {
        let facts = ShowFacts::derive(input, &FLAVOR);
        let page = CinemaxPage {
            background_style: background_style(BACKGROUND_GRADIENT, facts.backdrop_url.as_deref()),
            season_count: locale::season_count(input.show.number_of_seasons.unwrap_or(0)),
            no_seasons_message: locale::NO_EPISODES,
            facts: &facts,
        };
        Ok(page.render()?)
    }
}
