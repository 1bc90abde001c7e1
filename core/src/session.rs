//! Per-user dashboard session.
//!
//! Owns the current `FilterSelection` over a cached dataset and runs the
//! synchronous recompute pass (filter -> summarize -> build charts) on
//! demand. One session per user; the shell is responsible for isolation if
//! it ever hosts more than one.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::is_eon_actor;
use crate::charts::build_all_charts;
use crate::dataset::Dataset;
use crate::filter::{apply_filter, eligible_actors, is_core_film};
use crate::metrics::summarize;
use dossier_types::{ChartSpec, FilterMode, FilterSelection, KpiSummary};

/// Output of one recompute pass: everything the shell needs to render.
#[derive(Debug, Clone)]
pub struct DashboardFrame {
    pub kpis: KpiSummary,
    pub charts: Vec<ChartSpec>,
    /// Rows in the filtered view (the charts carry their own data; this is
    /// for the shell's "N films in selection" line).
    pub view_rows: usize,
}

pub struct DashboardSession {
    dataset: Arc<Dataset>,
    selection: FilterSelection,
}

impl DashboardSession {
    /// Start a session in CoreFranchise mode with the default selection:
    /// every eligible EON actor ticked, year range spanning the mode's rows.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let mut session = Self {
            dataset,
            selection: FilterSelection::new(FilterMode::CoreFranchise, (0, 0)),
        };
        session.reset_to_defaults(FilterMode::CoreFranchise);
        session
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Swap in a reloaded dataset, keeping the user's selection. Returns
    /// whether anything changed. Selection entries that are no longer
    /// eligible are harmless; the filter engine ignores them.
    pub fn sync_dataset(&mut self, dataset: Arc<Dataset>) -> bool {
        if Arc::ptr_eq(&self.dataset, &dataset) {
            return false;
        }
        debug!(films = dataset.len(), "adopting reloaded dataset");
        self.dataset = dataset;
        true
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Actors selectable under the current mode.
    pub fn actor_options(&self) -> BTreeSet<String> {
        eligible_actors(&self.dataset, self.selection.mode)
    }

    /// Year bounds of the mode-restricted dataset (before actor/year
    /// narrowing), used for the shell's slider limits.
    pub fn mode_year_bounds(&self) -> Option<(i32, i32)> {
        let eligible = eligible_actors(&self.dataset, self.selection.mode);
        let mut years = self
            .dataset
            .films()
            .iter()
            .filter(|f| match self.selection.mode {
                FilterMode::CoreFranchise => is_core_film(f),
                FilterMode::GeneralSearch => eligible.contains(&f.lead_actor),
            })
            .map(|f| f.release_year);
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }

    /// Switch data-focus mode, resetting actors and years to the mode's
    /// defaults (stale selections never survive a mode switch).
    pub fn set_mode(&mut self, mode: FilterMode) {
        if self.selection.mode != mode {
            self.reset_to_defaults(mode);
        }
    }

    fn reset_to_defaults(&mut self, mode: FilterMode) {
        self.selection = FilterSelection::new(mode, (0, 0));
        let defaults: BTreeSet<String> = self
            .actor_options()
            .into_iter()
            .filter(|a| is_eon_actor(a))
            .collect();
        self.selection.selected_actors = defaults;
        let bounds = self.mode_year_bounds().unwrap_or((1960, 2025));
        self.selection.set_year_range(bounds);
        debug!(mode = mode.label(), "reset session to mode defaults");
    }

    /// Tick one actor. Rejects names outside the mode's eligible set so the
    /// selection invariant (selected ⊆ eligible) holds by construction.
    pub fn select_actor(&mut self, actor: &str) -> Result<(), String> {
        if !self.actor_options().contains(actor) {
            return Err(format!(
                "'{actor}' is not selectable in {} mode",
                self.selection.mode.label()
            ));
        }
        self.selection.select_actor(actor);
        Ok(())
    }

    pub fn deselect_actor(&mut self, actor: &str) {
        self.selection.deselect_actor(actor);
    }

    pub fn clear_actors(&mut self) {
        self.selection.clear_actors();
    }

    pub fn select_all_actors(&mut self) {
        self.selection.selected_actors = self.actor_options();
    }

    pub fn set_year_range(&mut self, range: (i32, i32)) {
        self.selection.set_year_range(range);
    }

    /// One synchronous recompute pass over the current selection.
    pub fn recompute(&self) -> DashboardFrame {
        let view = apply_filter(&self.dataset, &self.selection);
        let kpis = summarize(&view);
        let charts = build_all_charts(&view);
        DashboardFrame {
            view_rows: view.len(),
            kpis,
            charts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::test_fixtures::franchise_dataset;

    fn session() -> DashboardSession {
        DashboardSession::new(Arc::new(franchise_dataset()))
    }

    #[test]
    fn new_session_defaults_to_core_mode_with_eon_actors() {
        let session = session();
        let sel = session.selection();
        assert_eq!(sel.mode, FilterMode::CoreFranchise);
        let actors: Vec<&str> = sel.selected_actors.iter().map(String::as_str).collect();
        assert_eq!(actors, vec!["Daniel Craig", "Roger Moore", "Sean Connery"]);
        assert_eq!(sel.year_range, (1962, 2012));
    }

    #[test]
    fn recompute_produces_kpis_and_ten_charts() {
        let frame = session().recompute();
        assert_eq!(frame.view_rows, 5);
        assert_eq!(frame.kpis.total_films, 5);
        assert_eq!(frame.kpis.top_film.as_deref(), Some("Skyfall"));
        assert_eq!(frame.charts.len(), 10);
    }

    #[test]
    fn selecting_unknown_actor_is_rejected() {
        let mut session = session();
        assert!(session.select_actor("David Niven").is_err());
        assert!(session.select_actor("Roger Moore").is_ok());
    }

    #[test]
    fn mode_switch_resets_selection() {
        let mut session = session();
        session.clear_actors();
        session.set_year_range((1970, 1975));
        session.set_mode(FilterMode::GeneralSearch);
        // The tiny franchise dataset has nobody with >= 5 films, so general
        // search offers no actors and the defaults are empty.
        assert!(session.actor_options().is_empty());
        assert!(session.selection().selected_actors.is_empty());

        let frame = session.recompute();
        assert_eq!(frame.kpis, KpiSummary::empty());
        assert!(frame.charts.iter().all(|c| c.is_empty()));
    }

    #[test]
    fn sync_dataset_adopts_new_data_and_keeps_selection() {
        let mut session = session();
        let original = session.recompute();
        assert_eq!(original.view_rows, 5);

        // Same Arc: nothing to do.
        let unchanged = Arc::new(franchise_dataset());
        let current = Arc::clone(&unchanged);
        let mut other = DashboardSession::new(current);
        assert!(!other.sync_dataset(unchanged));

        // A reloaded dataset with one more Connery film in range.
        let mut films = franchise_dataset().films().to_vec();
        films.push(crate::charts::test_fixtures::film(
            "From Russia with Love",
            "Sean Connery",
            1963,
            7.3,
            115,
            190_000,
            &["Action"],
        ));
        assert!(session.sync_dataset(Arc::new(Dataset::new(films))));

        let frame = session.recompute();
        assert_eq!(frame.view_rows, 6);
        // Selection survived the swap.
        assert_eq!(session.selection().selected_actors.len(), 3);
    }

    #[test]
    fn clearing_actors_empties_the_frame() {
        let mut session = session();
        session.clear_actors();
        let frame = session.recompute();
        assert_eq!(frame.view_rows, 0);
        assert_eq!(frame.kpis, KpiSummary::empty());
    }
}
