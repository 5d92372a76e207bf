//! Show Page Generator Tauri Integration
//!
//! Provides a Tauri plugin that exposes TMDB search and page generation to a
//! frontend. The frontend owns the DOM: it renders the result cards and
//! notices it receives and fills the output box with the generated HTML.
//!
//! # Usage
//!
//! Register the plugin in your Tauri application:
//!
//! ```ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(showpage_tauri::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Then invoke commands from the frontend:
//!
//! ```javascript
//! import { invoke } from '@tauri-apps/api/core';
//!
//! const view = await invoke('plugin:showpage|search_shows', { query: 'breaking bad' });
//!
//! const output = await invoke('plugin:showpage|generate_show_page', {
//!   showId: 1396,
//!   template: 'cinemax',
//!   season: '3'
//! });
//! if (output !== null) {
//!   textarea.value = output.html;
//! }
//! ```

use std::sync::Arc;

use showpage_core::{ClientConfig, ShowPageService};
use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

mod commands;

pub use commands::PageOutput;

/// Shared service handle for the plugin's commands
///
/// No lock around the service: a new command must be able to start while an
/// older one is still awaiting the network, so the newer one supersedes it.
pub struct ShowpageState {
    pub(crate) service: Arc<ShowPageService>,
}

impl ShowpageState {
    /// Create state from an explicit configuration
    ///
    /// # Errors
    /// Returns the error message if the API key is empty or the HTTP client
    /// cannot be built
    pub fn new(config: ClientConfig) -> Result<Self, String> {
        let service = ShowPageService::new(config).map_err(|e| e.to_string())?;
        Ok(Self {
            service: Arc::new(service),
        })
    }

    /// Create state from `TMDB_*` environment variables
    pub fn from_env() -> Result<Self, String> {
        Self::new(ClientConfig::from_env())
    }
}

/// Initialize the showpage plugin
///
/// Reads the configuration from the environment and starts loading the
/// genre list in the background; pages generated before it arrives use the
/// genre names embedded in each show.
///
/// # Returns
/// A configured TauriPlugin ready to be registered with the Tauri application
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("showpage")
        .invoke_handler(tauri::generate_handler![
            commands::search_shows,
            commands::generate_show_page,
            commands::loading_notice,
            commands::load_genres
        ])
        .setup(|app, _api| {
            let state = ShowpageState::from_env().map_err(Box::<dyn std::error::Error>::from)?;

            let service = Arc::clone(&state.service);
            tauri::async_runtime::spawn(async move {
                if let Err(e) = service.load_genres().await {
                    tracing::warn!(error = %e, "Genre list unavailable, using embedded names");
                }
            });

            app.manage(state);
            Ok(())
        })
        .build()
}

// Re-export types for convenience
pub use showpage_core::{Notice, ResultCard, ResultsView};
