//! KPI summarization over a filtered view.

use crate::filter::FilteredView;
use dossier_types::KpiSummary;

/// Compute the five summary scalars for a view.
///
/// Empty views produce [`KpiSummary::empty`] — zeros plus `top_film: None`
/// — so downstream rendering degrades without special cases. The top film
/// tie-break is strictly-greater comparison during a forward scan, which
/// gives the earliest dataset row for equal ratings.
pub fn summarize(view: &FilteredView<'_>) -> KpiSummary {
    if view.is_empty() {
        return KpiSummary::empty();
    }

    let total_films = view.len();
    let mut rating_sum = 0.0;
    let mut runtime_sum = 0u64;
    let mut total_votes = 0u64;
    let mut top: Option<(&str, f64)> = None;

    for film in view.iter() {
        rating_sum += film.rating;
        runtime_sum += u64::from(film.runtime_minutes);
        total_votes += film.vote_count;
        match top {
            Some((_, best)) if film.rating <= best => {}
            _ => top = Some((film.title.as_str(), film.rating)),
        }
    }

    KpiSummary {
        total_films,
        avg_rating: rating_sum / total_films as f64,
        avg_runtime: runtime_sum as f64 / total_films as f64,
        total_votes,
        top_film: top.map(|(title, _)| title.to_string()),
    }
}
