//! Search result ranking
//!
//! TV and movie results are merged and ordered by popularity.

use std::cmp::Ordering;

use crate::error::{Result, ShowpageError};
use crate::locale;
use crate::types::ShowSummary;

/// Trims a search query, rejecting empty input
pub fn validate_query(query: &str) -> Result<&str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(ShowpageError::Validation(locale::EMPTY_QUERY.to_string()));
    }
    Ok(trimmed)
}

/// Concatenates TV then movie results and sorts by popularity, descending
///
/// Missing popularity counts as zero. The sort is stable, so equal scores
/// keep concatenation order (TV before movies).
pub fn rank_by_popularity(tv: Vec<ShowSummary>, movies: Vec<ShowSummary>) -> Vec<ShowSummary> {
    let mut merged = tv;
    merged.extend(movies);
    merged.sort_by(|a, b| {
        b.popularity_score()
            .partial_cmp(&a.popularity_score())
            .unwrap_or(Ordering::Equal)
    });
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MediaKind;
    use proptest::prelude::*;

    fn summary(id: u64, popularity: Option<f64>, media_kind: MediaKind) -> ShowSummary {
        ShowSummary {
            id,
            name: format!("Show {}", id),
            poster_path: None,
            first_air_date: None,
            overview: None,
            popularity,
            media_kind,
        }
    }

    #[test]
    fn test_validate_query_trims() {
        assert_eq!(validate_query("  breaking bad ").unwrap(), "breaking bad");
    }

    #[test]
    fn test_validate_query_empty() {
        match validate_query("   ") {
            Err(ShowpageError::Validation(msg)) => assert_eq!(msg, locale::EMPTY_QUERY),
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn test_rank_puts_more_popular_first() {
        let ranked = rank_by_popularity(
            vec![summary(1396, Some(400.0), MediaKind::Tv)],
            vec![summary(559969, Some(120.0), MediaKind::Movie)],
        );
        assert_eq!(ranked[0].id, 1396);
        assert_eq!(ranked[1].id, 559969);
    }

    #[test]
    fn test_rank_missing_popularity_sinks() {
        let ranked = rank_by_popularity(
            vec![summary(1, None, MediaKind::Tv)],
            vec![summary(2, Some(0.5), MediaKind::Movie)],
        );
        assert_eq!(ranked[0].id, 2);
    }

    #[test]
    fn test_rank_ties_keep_tv_first() {
        let ranked = rank_by_popularity(
            vec![summary(1, Some(10.0), MediaKind::Tv)],
            vec![summary(2, Some(10.0), MediaKind::Movie)],
        );
        assert_eq!(ranked[0].media_kind, MediaKind::Tv);
    }

    #[test]
    fn test_rank_empty_inputs() {
        assert!(rank_by_popularity(vec![], vec![]).is_empty());
    }

    proptest! {
        #[test]
        fn prop_ranked_descending_and_stable(
            tv in prop::collection::vec(prop::option::of(0u8..20), 0..12),
            movies in prop::collection::vec(prop::option::of(0u8..20), 0..12),
        ) {
            let tv: Vec<ShowSummary> = tv
                .iter()
                .enumerate()
                .map(|(i, p)| summary(i as u64, p.map(f64::from), MediaKind::Tv))
                .collect();
            let movies: Vec<ShowSummary> = movies
                .iter()
                .enumerate()
                .map(|(i, p)| summary(1000 + i as u64, p.map(f64::from), MediaKind::Movie))
                .collect();
            let total = tv.len() + movies.len();

            // Position in the concatenation: TV ids are < 1000, movie ids follow.
            let position = |s: &ShowSummary| {
                if s.media_kind == MediaKind::Tv { s.id as usize } else { tv.len() + (s.id as usize - 1000) }
            };

            let ranked = rank_by_popularity(tv.clone(), movies);
            prop_assert_eq!(ranked.len(), total);

            for pair in ranked.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                prop_assert!(a.popularity_score() >= b.popularity_score());
                if a.popularity_score() == b.popularity_score() {
                    prop_assert!(position(a) < position(b));
                }
            }
        }
    }
}
