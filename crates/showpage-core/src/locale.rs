//! Operator-facing Spanish text
//!
//! Every placeholder and message the generated documents and the
//! frontends show lives here so both templates agree on wording.

pub const EMPTY_QUERY: &str = "Por favor, introduce un término de búsqueda.";
pub const NETWORK_ERROR: &str = "Ocurrió un error al buscar el contenido. Inténtalo de nuevo.";
pub const GENRES_ERROR: &str = "Error al cargar géneros de TV.";
pub const NO_SEASON_DATA: &str = "No se encontraron datos de temporadas para esta serie.";
pub const NO_EPISODES: &str = "No se encontraron temporadas con episodios para generar.";
pub const RENDER_ERROR: &str = "No se pudo generar el código fuente.";
pub const NO_RESULTS: &str = "No se encontraron series.";
pub const SEARCHING: &str = "Buscando contenido...";
pub const COPY_HINT: &str = "Puedes copiarlo del cuadro de texto.";

pub const UNKNOWN_TITLE: &str = "Título desconocido";
pub const UNKNOWN_YEAR: &str = "Año desconocido";
pub const UNKNOWN_DATE: &str = "Fecha desconocida";
pub const NO_OVERVIEW: &str = "Sin resumen disponible.";
pub const UNKNOWN_GENRE: &str = "Género desconocido";
pub const UNTITLED_EPISODE: &str = "Sin Título";
pub const NO_SCORE: &str = "N/A";

pub fn no_episodes_for_season(season: u32) -> String {
    format!("No se encontraron episodios para la Temporada {}.", season)
}

pub fn season_name(season: u32) -> String {
    format!("Temporada {}", season)
}

/// "1 Temporada", otherwise plural ("0 Temporadas", "5 Temporadas")
pub fn season_count(count: u32) -> String {
    if count == 1 {
        "1 Temporada".to_string()
    } else {
        format!("{} Temporadas", count)
    }
}

pub fn episode_label(number: u32) -> String {
    format!("Capítulo {}", number)
}
