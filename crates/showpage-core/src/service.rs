//! High-level show page API
//!
//! Combines the metadata client, the genre lookup, season gathering and the
//! template generators into the operations a frontend calls.

use futures::future::join_all;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::client::{ClientConfig, TmdbClient};
use crate::error::Result;
use crate::genres::Genres;
use crate::locale;
use crate::render::{render_page, RenderInput};
use crate::results::{render_results, ResultsView};
use crate::search::{rank_by_popularity, validate_query};
use crate::seasons::{gather_seasons, SeasonPlan};
use crate::tracker::GenerationTracker;
use crate::types::{SeasonDetail, ShowDetail, ShowSummary, TemplateKind, TemplateSelection};
use crate::url::{ImageBases, SearchTarget};

/// A show with the seasons a template will render
#[derive(Debug, Clone)]
pub struct FetchedShow {
    pub detail: ShowDetail,
    /// Seasons with episodes, ascending by number
    pub seasons: Vec<SeasonDetail>,
}

/// A generated document ready to be copied
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedPage {
    pub show_id: u64,
    pub show_name: String,
    pub template: TemplateKind,
    /// The override that restricted fetching, if any
    pub season_override: Option<u32>,
    pub html: String,
}

impl GeneratedPage {
    /// Success line shown next to the output box
    ///
    /// # Example
    /// ```
    /// use showpage_core::{GeneratedPage, TemplateKind};
    /// let page = GeneratedPage {
    ///     show_id: 1396,
    ///     show_name: "Breaking Bad".to_string(),
    ///     template: TemplateKind::Cinemax,
    ///     season_override: Some(3),
    ///     html: String::new(),
    /// };
    /// assert_eq!(
    ///     page.summary(),
    ///     "Código fuente generado para \"Breaking Bad\" (CINEMAX Style). (Solo Temporada 3) Puedes copiarlo del cuadro de texto."
    /// );
    /// ```
    pub fn summary(&self) -> String {
        let mut message = format!(
            "Código fuente generado para \"{}\" ({} Style).",
            self.show_name,
            self.template.style_label()
        );
        if let Some(season) = self.season_override {
            message.push_str(&format!(" (Solo Temporada {})", season));
        }
        message.push(' ');
        message.push_str(locale::COPY_HINT);
        message
    }
}

/// Main API for searching shows and generating their pages
///
/// Holds the genre lookup once loaded and one [`GenerationTracker`] shared by
/// searches and page generation, since both write the same output surface.
pub struct ShowPageService {
    client: TmdbClient,
    images: ImageBases,
    genres: RwLock<Genres>,
    tracker: GenerationTracker,
}

impl ShowPageService {
    /// Create a service with the default image bases
    ///
    /// # Errors
    /// - `Validation` if the API key is empty
    /// - `Http` if the HTTP client cannot be built
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_images(config, ImageBases::default())
    }

    /// Create a service with custom image bases
    pub fn with_images(config: ClientConfig, images: ImageBases) -> Result<Self> {
        let client = TmdbClient::new(config)?;
        Ok(Self {
            client,
            images,
            genres: RwLock::new(Genres::NotLoaded),
            tracker: GenerationTracker::new(),
        })
    }

    pub fn client(&self) -> &TmdbClient {
        &self.client
    }

    pub fn images(&self) -> &ImageBases {
        &self.images
    }

    pub fn tracker(&self) -> &GenerationTracker {
        &self.tracker
    }

    /// Fetch the genre list and swap it in
    ///
    /// On failure the previous state is kept; pages still render with the
    /// genre names embedded in each show.
    ///
    /// # Returns
    /// Number of genres loaded
    pub async fn load_genres(&self) -> Result<usize> {
        let map = match self.client.genres().await {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load TV genres");
                return Err(e);
            }
        };

        let count = map.len();
        *self.genres.write().await = Genres::loaded(map);
        tracing::info!(count, "TV genres loaded");
        Ok(count)
    }

    /// Current genre lookup snapshot
    pub async fn genres(&self) -> Genres {
        self.genres.read().await.clone()
    }

    /// Search TV shows and movies, ranked by popularity
    ///
    /// Both endpoints are queried concurrently; either failing fails the
    /// whole search.
    ///
    /// # Errors
    /// - `Validation` if the query is empty or whitespace only
    /// - `Http`, `Status` or `Decode` if either request fails
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> showpage_core::Result<()> {
    /// use showpage_core::{ClientConfig, ShowPageService};
    /// let service = ShowPageService::new(ClientConfig::from_env())?;
    /// for show in service.search("breaking bad").await? {
    ///     println!("{} ({})", show.name, show.id);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, query: &str) -> Result<Vec<ShowSummary>> {
        let query = validate_query(query)?;

        let (tv, movies) = tokio::try_join!(
            self.client.search(SearchTarget::Tv, query),
            self.client.search(SearchTarget::Movie, query),
        )?;

        tracing::debug!(query, tv = tv.len(), movies = movies.len(), "Search completed");
        Ok(rank_by_popularity(tv, movies))
    }

    /// Search and render the results list
    pub async fn search_results(&self, query: &str) -> Result<ResultsView> {
        let shows = self.search(query).await?;
        Ok(render_results(&shows, &self.images.poster))
    }

    /// Fetch a show and the seasons `selection` needs
    ///
    /// Season requests run concurrently. A failed season is logged and
    /// dropped; only an empty result fails the operation.
    ///
    /// # Errors
    /// - `Http`, `Status` or `Decode` if the show detail request fails
    /// - `NotFound` if the show lists no regular season, or no requested
    ///   season has episodes
    pub async fn fetch_show(&self, show_id: u64, selection: &TemplateSelection) -> Result<FetchedShow> {
        let detail = self.client.show(show_id).await?;
        let plan = SeasonPlan::for_show(&detail, selection)?;

        let requests = plan.season_numbers().into_iter().map(|number| async move {
            match self.client.season(show_id, number).await {
                Ok(season) => Some(season),
                Err(e) => {
                    tracing::warn!(show_id, season = number, error = %e, "Dropping season");
                    None
                }
            }
        });
        let fetched = join_all(requests).await;

        let seasons = gather_seasons(&plan, fetched)?;
        Ok(FetchedShow { detail, seasons })
    }

    /// Fetch a show and render it with the selected template
    ///
    /// # Errors
    /// Everything [`ShowPageService::fetch_show`] returns, plus `Render`
    pub async fn generate(&self, show_id: u64, selection: &TemplateSelection) -> Result<GeneratedPage> {
        let FetchedShow { detail, seasons } = self.fetch_show(show_id, selection).await?;
        let genres = self.genres().await;

        let html = render_page(
            selection.kind,
            &RenderInput {
                show: &detail,
                seasons: &seasons,
                genres: &genres,
                images: &self.images,
            },
        )?;

        let page = GeneratedPage {
            show_id,
            show_name: detail
                .name
                .clone()
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| locale::UNKNOWN_TITLE.to_string()),
            template: selection.kind,
            season_override: selection.effective_override(),
            html,
        };

        tracing::info!(
            show_id,
            template = %selection.kind,
            seasons = seasons.len(),
            bytes = page.html.len(),
            "Generated show page"
        );
        Ok(page)
    }

    /// [`ShowPageService::search_results`] as a superseding operation
    ///
    /// `None` means a newer search or generation started before this one
    /// finished and its result must not be shown.
    pub async fn search_latest(&self, query: &str) -> Option<Result<ResultsView>> {
        self.tracker.guard(self.search_results(query)).await
    }

    /// [`ShowPageService::generate`] as a superseding operation
    pub async fn generate_latest(
        &self,
        show_id: u64,
        selection: &TemplateSelection,
    ) -> Option<Result<GeneratedPage>> {
        self.tracker.guard(self.generate(show_id, selection)).await
    }
}
