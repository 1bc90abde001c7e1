//! The three-tier filter engine: data-focus mode, actor selection, year range.
//!
//! Actor eligibility for GeneralSearch mode is a pure function of the
//! *full* dataset, never of the narrowed view — changing the year slider or
//! unticking an actor must not shift which actors are offered at all.

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

use hashbrown::HashMap;
use tracing::debug;

use crate::catalog::{
    GENERAL_SEARCH_MIN_FILMS, GENERAL_SEARCH_MIN_VOTES, is_canonical_title, is_eon_actor,
};
use crate::dataset::{Dataset, FilmRecord};
use dossier_types::{FilterMode, FilterSelection};

/// Borrowed subset of the dataset satisfying a `FilterSelection`.
/// Recomputed on every interaction, never mutated in place; row order is
/// the dataset's original order (stable filter, no resort).
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    films: Vec<&'a FilmRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn films(&self) -> &[&'a FilmRecord] {
        &self.films
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a FilmRecord> + '_ {
        self.films.iter().copied()
    }

    /// Distinct lead actors in view order.
    pub fn actors(&self) -> Vec<&'a str> {
        let mut seen = BTreeSet::new();
        let mut actors = Vec::new();
        for film in &self.films {
            if seen.insert(film.lead_actor.as_str()) {
                actors.push(film.lead_actor.as_str());
            }
        }
        actors
    }
}

/// A core franchise film: canonical title led by an EON-era actor.
pub fn is_core_film(film: &FilmRecord) -> bool {
    is_eon_actor(&film.lead_actor) && is_canonical_title(&film.title)
}

/// Actors the user may select under the given mode.
///
/// - CoreFranchise: EON actors that actually lead a core film in the dataset.
/// - GeneralSearch: actors with at least [`GENERAL_SEARCH_MIN_FILMS`] rows
///   and [`GENERAL_SEARCH_MIN_VOTES`] summed votes, both measured over the
///   unfiltered dataset.
pub fn eligible_actors(dataset: &Dataset, mode: FilterMode) -> BTreeSet<String> {
    match mode {
        FilterMode::CoreFranchise => dataset
            .films()
            .iter()
            .filter(|f| is_core_film(f))
            .map(|f| f.lead_actor.clone())
            .collect(),
        FilterMode::GeneralSearch => {
            let mut tallies: HashMap<&str, (usize, u64)> = HashMap::new();
            for film in dataset.films() {
                let entry = tallies.entry(film.lead_actor.as_str()).or_default();
                entry.0 += 1;
                entry.1 += film.vote_count;
            }
            tallies
                .into_iter()
                .filter(|(_, (films, votes))| {
                    *films >= GENERAL_SEARCH_MIN_FILMS && *votes >= GENERAL_SEARCH_MIN_VOTES
                })
                .map(|(actor, _)| actor.to_string())
                .collect()
        }
    }
}

/// Apply the full three-tier filter.
///
/// Predicate order: mode restriction, then actor membership, then year
/// range. An empty `selected_actors` set yields an empty view — the shell
/// treats "nothing ticked" as "show nothing", not "show everything".
/// Selected actors outside the mode's eligible set are ignored, so a stale
/// selection carried across a mode switch cannot leak ineligible rows.
pub fn apply_filter<'a>(dataset: &'a Dataset, selection: &FilterSelection) -> FilteredView<'a> {
    let (min_year, max_year) = selection.year_range;

    if selection.selected_actors.is_empty() {
        debug!("no actors selected, returning empty view");
        return FilteredView { films: Vec::new() };
    }

    let eligible = eligible_actors(dataset, selection.mode);

    let films: Vec<&FilmRecord> = dataset
        .films()
        .iter()
        .filter(|film| match selection.mode {
            FilterMode::CoreFranchise => is_core_film(film),
            FilterMode::GeneralSearch => eligible.contains(&film.lead_actor),
        })
        .filter(|film| {
            selection.selected_actors.contains(&film.lead_actor)
                && eligible.contains(&film.lead_actor)
        })
        .filter(|film| (min_year..=max_year).contains(&film.release_year))
        .collect();

    debug!(
        mode = selection.mode.label(),
        rows = films.len(),
        "recomputed filtered view"
    );
    FilteredView { films }
}
