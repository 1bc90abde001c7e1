pub mod catalog;
pub mod charts;
pub mod context;
pub mod dataset;
pub mod filter;
pub mod metrics;
pub mod session;

// Re-exports for convenience
pub use charts::build_all_charts;
pub use dataset::{Dataset, DatasetCache, FilmRecord, load_dataset};
pub use dossier_types::{
    AppConfig, ChartId, ChartSpec, FilterMode, FilterSelection, KpiSummary, ThemeConfig,
};
pub use filter::{FilteredView, apply_filter, eligible_actors, is_core_film};
pub use metrics::summarize;
pub use session::{DashboardFrame, DashboardSession};
