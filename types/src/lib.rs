//! Shared types for the dossier dashboard
//!
//! This crate contains serializable types that are shared between the
//! analytics core (dossier-core) and whatever presentation shell hosts it:
//! filter selections coming in, KPI summaries and chart specs going out.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

mod chart;
mod theme;

pub use chart::{
    Aggregate, Channel, ChartId, ChartSpec, Encoding, FieldType, Interactivity, LayerSpec, Mark,
    MarkStyle, Row, Scale, SortOrder,
};
pub use theme::ThemeConfig;

// ─────────────────────────────────────────────────────────────────────────────
// Filter Selection (shell -> core)
// ─────────────────────────────────────────────────────────────────────────────

/// Which slice of the dataset the user is exploring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterMode {
    /// Canonical franchise films only: EON lead actor AND canonical 007 title.
    #[default]
    CoreFranchise,
    /// Full dataset, restricted to actors with a meaningful body of work
    /// (minimum film count and total votes, measured over the whole dataset).
    GeneralSearch,
}

impl FilterMode {
    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::CoreFranchise => "Core franchise films",
            FilterMode::GeneralSearch => "General actor search",
        }
    }
}

/// The three-tier filter driven by the shell's controls: mode radio,
/// actor checkboxes, year range slider.
///
/// Invariant: `year_range.0 <= year_range.1`. `set_year_range` enforces it;
/// constructing the struct literally is on the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub mode: FilterMode,
    /// Actors the user ticked. An empty set means "nothing selected" and
    /// yields an empty view, not "all actors".
    pub selected_actors: BTreeSet<String>,
    /// Inclusive on both ends.
    pub year_range: (i32, i32),
}

impl FilterSelection {
    pub fn new(mode: FilterMode, year_range: (i32, i32)) -> Self {
        let (lo, hi) = order_range(year_range);
        Self {
            mode,
            selected_actors: BTreeSet::new(),
            year_range: (lo, hi),
        }
    }

    /// Replace the year range, swapping the endpoints if they arrive reversed.
    pub fn set_year_range(&mut self, range: (i32, i32)) {
        self.year_range = order_range(range);
    }

    pub fn select_actor(&mut self, actor: impl Into<String>) {
        self.selected_actors.insert(actor.into());
    }

    pub fn deselect_actor(&mut self, actor: &str) {
        self.selected_actors.remove(actor);
    }

    pub fn clear_actors(&mut self) {
        self.selected_actors.clear();
    }
}

fn order_range((lo, hi): (i32, i32)) -> (i32, i32) {
    if lo <= hi { (lo, hi) } else { (hi, lo) }
}

// ─────────────────────────────────────────────────────────────────────────────
// KPI Summary (core -> shell)
// ─────────────────────────────────────────────────────────────────────────────

/// The five summary scalars shown above the charts.
///
/// Empty-view sentinel: every numeric field is zero and `top_film` is `None`.
/// The shell renders `None` as "N/A". This is the one convention applied to
/// all five KPIs; no field ever carries NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total_films: usize,
    pub avg_rating: f64,
    pub avg_runtime: f64,
    pub total_votes: u64,
    /// Title of the highest-rated film; ties go to the earliest dataset row.
    pub top_film: Option<String>,
}

impl KpiSummary {
    pub const fn empty() -> Self {
        Self {
            total_films: 0,
            avg_rating: 0.0,
            avg_runtime: 0.0,
            total_votes: 0,
            top_film: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_films == 0
    }
}

impl Default for KpiSummary {
    fn default() -> Self {
        Self::empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// App Config (persisted by the shell via confy)
// ─────────────────────────────────────────────────────────────────────────────

/// Persisted application configuration. Loading/saving lives in
/// dossier-core's context module; this is just the serializable shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the film dataset CSV.
    pub dataset_path: String,
    /// Presentation theme, consumed only by the shell's chart export.
    pub theme: ThemeConfig,
}

impl AppConfig {
    pub fn with_dataset_path(path: String) -> Self {
        Self {
            dataset_path: path,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_range_is_reordered() {
        let mut sel = FilterSelection::new(FilterMode::CoreFranchise, (1990, 1960));
        assert_eq!(sel.year_range, (1960, 1990));
        sel.set_year_range((2005, 1999));
        assert_eq!(sel.year_range, (1999, 2005));
    }

    #[test]
    fn empty_summary_sentinel() {
        let kpi = KpiSummary::empty();
        assert_eq!(kpi.total_films, 0);
        assert_eq!(kpi.avg_rating, 0.0);
        assert_eq!(kpi.avg_runtime, 0.0);
        assert_eq!(kpi.total_votes, 0);
        assert!(kpi.top_film.is_none());
        assert!(kpi.is_empty());
    }
}
