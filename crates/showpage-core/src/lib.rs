//! Show Page Generator Core Library
//!
//! Searches the TMDB metadata API for TV shows and movies and generates a
//! self-contained HTML page listing a show's seasons and episodes.
//!
//! # Overview
//!
//! This crate provides:
//! - An async TMDB client for genres, search, show and season details
//! - Popularity ranking of merged TV and movie results
//! - Season planning with tolerance for individual season failures
//! - Two page templates ("basic" and "cinemax") over one rendering contract
//! - A generation tracker so a superseded operation never overwrites newer output
//!
//! # Example
//!
//! ```no_run
//! use showpage_core::{ClientConfig, Result, ShowPageService, TemplateSelection};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let service = ShowPageService::new(ClientConfig::from_env())?;
//!     service.load_genres().await?;
//!
//!     let shows = service.search("breaking bad").await?;
//!     if let Some(show) = shows.first() {
//!         let page = service
//!             .generate(show.id, &TemplateSelection::cinemax(Some(3)))
//!             .await?;
//!         println!("{}", page.summary());
//!         std::fs::write("page.html", &page.html).ok();
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod genres;
pub mod locale;
pub mod render;
mod results;
mod search;
mod seasons;
mod service;
mod tracker;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, TmdbClient};

// Re-export error types
pub use error::{NotFoundKind, Result, ShowpageError};

// Re-export genre lookup
pub use genres::{GenreMap, Genres};

// Re-export data shaping
pub use results::{render_results, Notice, ResultCard, ResultsView, Tone};
pub use search::{rank_by_popularity, validate_query};
pub use seasons::{gather_seasons, SeasonPlan};

// Re-export main service API
pub use service::{FetchedShow, GeneratedPage, ShowPageService};
pub use tracker::{GenerationTracker, Ticket};

// Re-export data types
pub use types::{
    Episode, Genre, MediaKind, SeasonDetail, SeasonSummary, ShowDetail, ShowSummary,
    TemplateKind, TemplateSelection,
};

// Re-export rendering entry points for convenience
pub use render::{render_page, PageTemplate, RenderInput};
pub use url::ImageBases;
