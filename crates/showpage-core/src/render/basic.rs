//! "Basic" template: header card, season dropdown, episode strip

use askama::Template;

use super::{background_style, Flavor, PageTemplate, RenderInput, ShowFacts};
use crate::error::Result;
use crate::locale;
use crate::types::TemplateKind;

const HEADER_GRADIENT: &str =
    "linear-gradient(to bottom, rgba(0, 0, 0, 0.9) 10%, rgba(0, 0, 0, 0.7) 50%, rgba(0, 0, 0, 0.9) 100%)";

const FLAVOR: Flavor = Flavor {
    season_id_prefix: "capitulos-temporada",
    unknown_year: locale::UNKNOWN_YEAR,
    backdrop_fallback_size: Some("w185"),
};

#[derive(Template)]
#[template(path = "basic.html")]
struct BasicPage<'a> {
    facts: &'a ShowFacts,
    header_style: String,
    season_count: String,
    initial_block_id: String,
    no_seasons_message: &'a str,
}

/// Dropdown-driven template with a click placeholder per episode
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicTemplate;

impl BasicTemplate {
    /// Season count for the header
    ///
    /// Falls back to the number of rendered seasons when the show reports 0.
    fn season_count(input: &RenderInput<'_>, facts: &ShowFacts) -> u32 {
        match input.show.number_of_seasons {
            Some(n) if n > 0 => n,
            _ => facts.seasons.len() as u32,
        }
    }
}

impl PageTemplate for BasicTemplate {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Basic
    }

    fn render(&self, input: &RenderInput<'_>) -> Result<String> {
        let facts = ShowFacts::derive(input, &FLAVOR);
        let page = BasicPage {
            header_style: background_style(HEADER_GRADIENT, facts.backdrop_url.as_deref()),
            season_count: locale::season_count(Self::season_count(input, &facts)),
            initial_block_id: facts.initial_block_id(),
            no_seasons_message: locale::NO_EPISODES,
            facts: &facts,
        };
        Ok(page.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genres::Genres;
    use crate::types::{Episode, SeasonDetail, ShowDetail};
    use crate::url::ImageBases;
    use scraper::{Html, Selector};

    fn season(number: u32, episodes: u32) -> SeasonDetail {
        SeasonDetail {
            season_number: number,
            name: None,
            episodes: (1..=episodes)
                .map(|e| Episode {
                    episode_number: e,
                    season_number: Some(number),
                    name: Some(format!("Pilot \"{}\"", e)),
                    still_path: None,
                    runtime: None,
                })
                .collect(),
        }
    }

    fn render(show: &ShowDetail, seasons: &[SeasonDetail]) -> Html {
        let genres = Genres::NotLoaded;
        let images = ImageBases::default();
        let html = BasicTemplate
            .render(&RenderInput {
                show,
                seasons,
                genres: &genres,
                images: &images,
            })
            .expect("render should succeed");
        Html::parse_document(&html)
    }

    fn select<'a>(doc: &'a Html, css: &str) -> Vec<scraper::ElementRef<'a>> {
        let selector = Selector::parse(css).expect("valid selector");
        doc.select(&selector).collect()
    }

    #[test]
    fn test_one_option_per_season_first_selected() {
        let show = ShowDetail {
            id: 1396,
            name: Some("Breaking Bad".to_string()),
            ..Default::default()
        };
        let doc = render(&show, &[season(2, 3), season(1, 2), season(0, 5)]);

        let options = select(&doc, "#seleccionar-temporada option");
        let values: Vec<&str> = options.iter().filter_map(|o| o.value().attr("value")).collect();
        assert_eq!(values, vec!["capitulos-temporada1", "capitulos-temporada2"]);
        assert!(options[0].value().attr("selected").is_some());
        assert!(options[1].value().attr("selected").is_none());

        assert_eq!(select(&doc, ".capitulo").len(), 5);
        assert!(select(&doc, "#capitulos-temporada0").is_empty());
    }

    #[test]
    fn test_episode_names_are_escaped_into_attributes() {
        let doc = render(&ShowDetail { id: 1, ..Default::default() }, &[season(1, 1)]);
        let link = select(&doc, "a.capitulo")[0];
        assert_eq!(link.value().attr("data-episode-name"), Some("Pilot \"1\""));
        assert_eq!(link.value().attr("data-season-number"), Some("1"));
    }

    #[test]
    fn test_no_seasons_placeholder() {
        let doc = render(&ShowDetail { id: 1, number_of_seasons: Some(0), ..Default::default() }, &[]);
        assert_eq!(select(&doc, "#no-seasons").len(), 1);
        assert!(select(&doc, "select").is_empty());
        assert!(select(&doc, ".capitulo").is_empty());

        let counts: Vec<String> = select(&doc, ".post-header__info li span:last-child")
            .iter()
            .map(|e| e.text().collect::<String>())
            .collect();
        assert!(counts.contains(&"0 Temporadas".to_string()));
    }

    #[test]
    fn test_season_count_falls_back_to_rendered() {
        let show = ShowDetail { id: 1, number_of_seasons: None, ..Default::default() };
        let facts = ShowFacts::derive(
            &RenderInput { show: &show, seasons: &[season(1, 1)], genres: &Genres::NotLoaded, images: &ImageBases::default() },
            &FLAVOR,
        );
        let input = RenderInput { show: &show, seasons: &[], genres: &Genres::NotLoaded, images: &ImageBases::default() };
        assert_eq!(BasicTemplate::season_count(&input, &facts), 1);
    }

    #[test]
    fn test_title_and_favourite_button() {
        let show = ShowDetail {
            id: 1396,
            name: Some("Breaking Bad".to_string()),
            ..Default::default()
        };
        let doc = render(&show, &[season(1, 1)]);
        let h1 = select(&doc, "h1")[0].text().collect::<String>();
        assert_eq!(h1, "Breaking Bad");
        let button = select(&doc, "#favoritoBtn")[0];
        assert_eq!(button.value().attr("data-identificador"), Some("1396"));
    }
}
