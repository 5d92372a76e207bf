//! Result list view models
//!
//! Turns ranked search results into plain display records and status
//! notices. A frontend adapter owns the DOM; it replaces whatever it showed
//! before with the view it is handed.

use serde::Serialize;

use crate::error::ShowpageError;
use crate::locale;
use crate::render::{air_year, non_blank};
use crate::types::{MediaKind, ShowSummary, TemplateKind, TemplateSelection};
use crate::url::{image_url, RESULT_POSTER_PLACEHOLDER};

/// Overview length shown on a card before truncation
pub const OVERVIEW_PREVIEW_CHARS: usize = 150;

/// One clickable search result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultCard {
    /// Identifier passed back when the card is selected
    pub show_id: u64,
    pub media_kind: MediaKind,
    pub title: String,
    pub poster_url: String,
    pub year: String,
    pub overview: String,
}

impl ResultCard {
    /// Build a card, filling every missing field with its placeholder
    pub fn from_summary(summary: &ShowSummary, poster_base: &str) -> Self {
        Self {
            show_id: summary.id,
            media_kind: summary.media_kind,
            title: non_blank(Some(summary.name.as_str()))
                .unwrap_or(locale::UNKNOWN_TITLE)
                .to_string(),
            poster_url: image_url(poster_base, summary.poster_path.as_deref())
                .unwrap_or_else(|| RESULT_POSTER_PLACEHOLDER.to_string()),
            year: air_year(summary.first_air_date.as_deref())
                .map(|y| y.to_string())
                .unwrap_or_else(|| locale::UNKNOWN_DATE.to_string()),
            overview: overview_preview(summary.overview.as_deref()),
        }
    }
}

/// Everything the results area shows after a search
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultsView {
    /// No match; a single notice replaces the list
    Empty { notice: String },
    Cards { cards: Vec<ResultCard> },
}

impl ResultsView {
    pub fn cards(&self) -> &[ResultCard] {
        match self {
            ResultsView::Empty { .. } => &[],
            ResultsView::Cards { cards } => cards,
        }
    }
}

/// Render ranked summaries into a results view
///
/// Order is preserved. An empty input yields [`ResultsView::Empty`].
pub fn render_results(summaries: &[ShowSummary], poster_base: &str) -> ResultsView {
    if summaries.is_empty() {
        return ResultsView::Empty {
            notice: locale::NO_RESULTS.to_string(),
        };
    }

    ResultsView::Cards {
        cards: summaries
            .iter()
            .map(|summary| ResultCard::from_summary(summary, poster_base))
            .collect(),
    }
}

/// First 150 characters followed by "..." when longer
fn overview_preview(overview: Option<&str>) -> String {
    let Some(text) = non_blank(overview) else {
        return locale::NO_OVERVIEW.to_string();
    };

    let mut chars = text.chars();
    let head: String = chars.by_ref().take(OVERVIEW_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// Colour class of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Info,
    Success,
    Error,
}

/// A status line shown above the results or the output box
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub tone: Tone,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self { tone: Tone::Info, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { tone: Tone::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { tone: Tone::Error, text: text.into() }
    }

    /// Notice shown while a search is in flight
    pub fn searching() -> Self {
        Self::info(locale::SEARCHING)
    }

    /// Notice shown while a show is being fetched
    pub fn loading(selection: &TemplateSelection) -> Self {
        let text = match (selection.kind, selection.effective_override()) {
            (TemplateKind::Cinemax, Some(season)) => {
                format!("Cargando detalles de la Temporada {} (CINEMAX)...", season)
            }
            (TemplateKind::Basic, _) => "Cargando detalles de la serie (BASIC)...".to_string(),
            (TemplateKind::Cinemax, None) => "Cargando detalles de la serie...".to_string(),
        };
        Self::info(text)
    }
}

impl From<&ShowpageError> for Notice {
    fn from(err: &ShowpageError) -> Self {
        Notice::error(err.user_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSTER_BASE: &str = "https://image.tmdb.org/t/p/w185/";

    fn summary(id: u64, name: &str) -> ShowSummary {
        ShowSummary {
            id,
            name: name.to_string(),
            poster_path: None,
            first_air_date: None,
            overview: None,
            popularity: None,
            media_kind: MediaKind::Tv,
        }
    }

    #[test]
    fn test_empty_results_show_notice() {
        let view = render_results(&[], POSTER_BASE);
        assert_eq!(
            view,
            ResultsView::Empty {
                notice: "No se encontraron series.".to_string()
            }
        );
        assert!(view.cards().is_empty());
    }

    #[test]
    fn test_card_placeholders() {
        let card = ResultCard::from_summary(&summary(5, ""), POSTER_BASE);
        assert_eq!(card.show_id, 5);
        assert_eq!(card.title, locale::UNKNOWN_TITLE);
        assert_eq!(card.poster_url, RESULT_POSTER_PLACEHOLDER);
        assert_eq!(card.year, "Fecha desconocida");
        assert_eq!(card.overview, "Sin resumen disponible.");
    }

    #[test]
    fn test_card_fields() {
        let mut show = summary(1396, "Breaking Bad");
        show.poster_path = Some("/bb.jpg".to_string());
        show.first_air_date = Some("2008-01-20".to_string());
        show.overview = Some("A chemistry teacher.".to_string());

        let card = ResultCard::from_summary(&show, POSTER_BASE);
        assert_eq!(card.poster_url, "https://image.tmdb.org/t/p/w185/bb.jpg");
        assert_eq!(card.year, "2008");
        assert_eq!(card.overview, "A chemistry teacher.");
    }

    #[test]
    fn test_overview_truncation() {
        let exact = "a".repeat(150);
        assert_eq!(overview_preview(Some(&exact)), exact);

        let long = "ñ".repeat(151);
        let preview = overview_preview(Some(&long));
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 153);
    }

    #[test]
    fn test_order_preserved() {
        let view = render_results(&[summary(2, "B"), summary(1, "A")], POSTER_BASE);
        let ids: Vec<u64> = view.cards().iter().map(|c| c.show_id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_loading_notice_variants() {
        assert_eq!(
            Notice::loading(&TemplateSelection::cinemax(Some(3))).text,
            "Cargando detalles de la Temporada 3 (CINEMAX)..."
        );
        assert_eq!(
            Notice::loading(&TemplateSelection::basic()).text,
            "Cargando detalles de la serie (BASIC)..."
        );
        assert_eq!(
            Notice::loading(&TemplateSelection::cinemax(Some(1))).text,
            "Cargando detalles de la serie..."
        );
    }

    #[test]
    fn test_error_notice_uses_user_message() {
        let err = ShowpageError::Validation(locale::EMPTY_QUERY.to_string());
        let notice = Notice::from(&err);
        assert_eq!(notice.tone, Tone::Error);
        assert_eq!(notice.text, err.user_message());
    }

    #[test]
    fn test_results_view_serializes_with_kind_tag() {
        let json = serde_json::to_value(render_results(&[], POSTER_BASE)).expect("serializable");
        assert_eq!(json["kind"], "empty");
        assert_eq!(json["notice"], "No se encontraron series.");
    }
}
