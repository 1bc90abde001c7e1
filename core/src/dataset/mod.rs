//! The in-memory film dataset.
//!
//! Loaded once from CSV at startup, immutable thereafter. Every downstream
//! component (filter engine, summarizer, chart builders) works on borrowed
//! slices of this structure; there is no write path.

mod cache;
mod error;
mod loader;
pub mod watcher;

pub use cache::DatasetCache;
pub use error::DataLoadError;
pub use loader::load_dataset;

/// One row of the dataset after type normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct FilmRecord {
    pub title: String,
    pub lead_actor: String,
    pub release_year: i32,
    /// 0-10 scale.
    pub rating: f64,
    pub runtime_minutes: u32,
    pub vote_count: u64,
    /// Genre tags, split from the CSV's comma-separated column.
    pub genres: Vec<String>,
    /// Release year floored to the nearest multiple of 10, derived at load.
    pub decade: i32,
}

impl FilmRecord {
    /// Decade derivation used by the loader; kept here so tests and
    /// builders agree on the rounding rule.
    pub fn decade_of(year: i32) -> i32 {
        year.div_euclid(10) * 10
    }
}

/// Ordered, immutable collection of film records.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    films: Vec<FilmRecord>,
}

impl Dataset {
    pub fn new(films: Vec<FilmRecord>) -> Self {
        Self { films }
    }

    pub fn films(&self) -> &[FilmRecord] {
        &self.films
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }
}
