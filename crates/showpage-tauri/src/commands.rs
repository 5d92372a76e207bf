//! Tauri commands for show page generation
//!
//! Every command converts core errors into the localized message the
//! frontend displays. A `null` result means a newer search or generation
//! started before this one finished; the frontend keeps what it shows.

use serde::Serialize;
use showpage_core::{
    locale, GeneratedPage, Notice, ResultsView, ShowPageService, TemplateSelection,
};
use tauri::State;

use crate::ShowpageState;

/// Generated document plus the status line to show beside it
#[derive(Debug, Clone, Serialize)]
pub struct PageOutput {
    pub html: String,
    pub notice: Notice,
}

impl From<GeneratedPage> for PageOutput {
    fn from(page: GeneratedPage) -> Self {
        Self {
            notice: Notice::success(page.summary()),
            html: page.html,
        }
    }
}

/// Search TV shows and movies
///
/// # Arguments
/// * `state` - Managed ShowpageState from Tauri
/// * `query` - Free-text query
///
/// # Returns
/// The results view, or null if superseded
///
/// # Errors
/// Returns the localized error message on failure
#[tauri::command]
pub async fn search_shows(
    state: State<'_, ShowpageState>,
    query: String,
) -> Result<Option<ResultsView>, String> {
    search(&state.service, &query).await
}

/// Generate the page for a selected show
///
/// # Arguments
/// * `state` - Managed ShowpageState from Tauri
/// * `show_id` - Identifier from the selected result card
/// * `template` - "basic" or "cinemax"
/// * `season` - Raw season field; only cinemax honours values of 2 and up
///
/// # Returns
/// The document and its success notice, or null if superseded
///
/// # Errors
/// Returns the localized error message on failure
#[tauri::command]
pub async fn generate_show_page(
    state: State<'_, ShowpageState>,
    show_id: u64,
    template: String,
    season: Option<String>,
) -> Result<Option<PageOutput>, String> {
    generate(&state.service, show_id, &template, season.as_deref()).await
}

/// Status line to show while a generation runs
#[tauri::command]
pub fn loading_notice(template: String, season: Option<String>) -> Result<Notice, String> {
    let selection = parse_selection(&template, season.as_deref())?;
    Ok(Notice::loading(&selection))
}

/// Reload the genre lookup
///
/// # Returns
/// Number of genres loaded
#[tauri::command]
pub async fn load_genres(state: State<'_, ShowpageState>) -> Result<usize, String> {
    state
        .service
        .load_genres()
        .await
        .map_err(|_| locale::GENRES_ERROR.to_string())
}

pub(crate) async fn search(
    service: &ShowPageService,
    query: &str,
) -> Result<Option<ResultsView>, String> {
    service
        .search_latest(query)
        .await
        .transpose()
        .map_err(|e| e.user_message())
}

pub(crate) async fn generate(
    service: &ShowPageService,
    show_id: u64,
    template: &str,
    season: Option<&str>,
) -> Result<Option<PageOutput>, String> {
    let selection = parse_selection(template, season)?;
    service
        .generate_latest(show_id, &selection)
        .await
        .transpose()
        .map(|page| page.map(PageOutput::from))
        .map_err(|e| e.user_message())
}

fn parse_selection(template: &str, season: Option<&str>) -> Result<TemplateSelection, String> {
    TemplateSelection::parse(template, season.unwrap_or("")).map_err(|e| e.user_message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use showpage_core::{ClientConfig, TemplateKind, Tone};

    fn offline_service() -> ShowPageService {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
            ..ClientConfig::with_api_key("test-key")
        };
        ShowPageService::new(config).expect("valid config")
    }

    #[test]
    fn test_loading_notice_for_cinemax_season() {
        let notice = loading_notice("cinemax".to_string(), Some("4".to_string())).unwrap();
        assert_eq!(notice.text, "Cargando detalles de la Temporada 4 (CINEMAX)...");
    }

    #[test]
    fn test_unknown_template_rejected() {
        let result = loading_notice("fancy".to_string(), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_page_output_carries_summary() {
        let output = PageOutput::from(GeneratedPage {
            show_id: 1,
            show_name: "Dark".to_string(),
            template: TemplateKind::Basic,
            season_override: None,
            html: "<html></html>".to_string(),
        });
        assert_eq!(output.notice.tone, Tone::Success);
        assert!(output.notice.text.starts_with("Código fuente generado para \"Dark\""));
        assert_eq!(output.html, "<html></html>");
    }

    #[tokio::test]
    async fn test_empty_query_returns_localized_message() {
        let service = offline_service();
        let err = search(&service, "").await.unwrap_err();
        assert_eq!(err, locale::EMPTY_QUERY);
    }

    #[tokio::test]
    async fn test_unreachable_api_returns_network_message() {
        let service = offline_service();
        let err = generate(&service, 1396, "basic", None).await.unwrap_err();
        assert_eq!(err, locale::NETWORK_ERROR);
    }
}
