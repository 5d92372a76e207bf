//! Season selection and gathering
//!
//! Decides which seasons a template needs and turns the individually
//! fetched seasons into the ordered list a generator renders.

use crate::error::{NotFoundKind, Result, ShowpageError};
use crate::types::{SeasonDetail, ShowDetail, TemplateSelection};

/// Which seasons to request for a show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeasonPlan {
    /// Every regular season the show lists
    All(Vec<u32>),
    /// Only the season the operator asked for
    Single(u32),
}

impl SeasonPlan {
    /// Plan the fetch for a show and template selection
    ///
    /// # Errors
    /// - `NotFound(NoSeasons)` when all seasons are wanted but the show
    ///   lists none above zero
    pub fn for_show(detail: &ShowDetail, selection: &TemplateSelection) -> Result<Self> {
        if let Some(season) = selection.effective_override() {
            return Ok(SeasonPlan::Single(season));
        }

        let numbers = detail.regular_season_numbers();
        if numbers.is_empty() {
            return Err(ShowpageError::not_found(NotFoundKind::NoSeasons));
        }
        Ok(SeasonPlan::All(numbers))
    }

    pub fn season_numbers(&self) -> Vec<u32> {
        match self {
            SeasonPlan::All(numbers) => numbers.clone(),
            SeasonPlan::Single(n) => vec![*n],
        }
    }

    /// The error reported when nothing survives gathering
    pub fn empty_error(&self) -> ShowpageError {
        match self {
            SeasonPlan::All(_) => ShowpageError::not_found(NotFoundKind::NoEpisodes),
            SeasonPlan::Single(n) => ShowpageError::not_found(NotFoundKind::SeasonEpisodes(*n)),
        }
    }
}

/// Keeps seasons that fetched successfully and have episodes
///
/// Failed fetches arrive as `None` and are dropped. The survivors are sorted
/// ascending by season number.
///
/// # Errors
/// - `NotFound` when nothing survives; the kind depends on the plan
pub fn gather_seasons(
    plan: &SeasonPlan,
    fetched: impl IntoIterator<Item = Option<SeasonDetail>>,
) -> Result<Vec<SeasonDetail>> {
    let mut seasons: Vec<SeasonDetail> = fetched
        .into_iter()
        .flatten()
        .filter(|season| !season.episodes.is_empty())
        .collect();

    if seasons.is_empty() {
        return Err(plan.empty_error());
    }

    seasons.sort_by_key(|season| season.season_number);
    Ok(seasons)
}
