//! Chart builders.
//!
//! Ten independent pure functions from a [`FilteredView`] to a declarative
//! [`ChartSpec`]. No builder touches the view's ordering, another chart's
//! state, or anything beyond the view and the static catalog — which is
//! what makes the whole dashboard safe to recompute per interaction and
//! testable by asserting on the emitted specs.

mod distribution;
mod genre;
mod heatmap;
mod ranking;
mod scatter;
mod trend;

pub use distribution::{rating_distribution, vote_boxplot};
pub use genre::genre_by_decade;
pub use heatmap::performance_heatmap;
pub use ranking::{actor_ranking, top_films};
pub use scatter::{film_timeline, runtime_rating};
pub use trend::{production_volume, rating_trend};

use crate::dataset::FilmRecord;
use crate::filter::FilteredView;
use dossier_types::{ChartId, ChartSpec, Row};
use serde_json::{Number, Value, json};

/// Build all ten charts for the current view, in dashboard order.
pub fn build_all_charts(view: &FilteredView<'_>) -> Vec<ChartSpec> {
    vec![
        actor_ranking(view),
        rating_trend(view),
        runtime_rating(view),
        genre_by_decade(view),
        rating_distribution(view),
        production_volume(view),
        performance_heatmap(view),
        vote_boxplot(view),
        film_timeline(view),
        top_films(view),
    ]
}

/// Build the chart with the given id.
pub fn build_chart(id: ChartId, view: &FilteredView<'_>) -> ChartSpec {
    match id {
        ChartId::ActorRanking => actor_ranking(view),
        ChartId::RatingTrend => rating_trend(view),
        ChartId::RuntimeRating => runtime_rating(view),
        ChartId::GenreByDecade => genre_by_decade(view),
        ChartId::RatingDistribution => rating_distribution(view),
        ChartId::ProductionVolume => production_volume(view),
        ChartId::PerformanceHeatmap => performance_heatmap(view),
        ChartId::VoteBoxplot => vote_boxplot(view),
        ChartId::FilmTimeline => film_timeline(view),
        ChartId::TopFilms => top_films(view),
    }
}

/// JSON number from an f64, mapping non-finite values to null rather than
/// letting serialization fail downstream.
pub(crate) fn num(value: f64) -> Value {
    Number::from_f64(value).map_or(Value::Null, Value::Number)
}

/// Inline row for one film, carrying every field the per-film charts bind.
pub(crate) fn film_row(film: &FilmRecord) -> Row {
    let Value::Object(row) = json!({
        "title": film.title,
        "lead_actor": film.lead_actor,
        "release_year": film.release_year,
        "rating": num(film.rating),
        "runtime_minutes": film.runtime_minutes,
        "vote_count": film.vote_count,
    }) else {
        unreachable!("json! object literal")
    };
    row
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use crate::dataset::{Dataset, FilmRecord};
    use crate::filter::{FilteredView, apply_filter};
    use dossier_types::{FilterMode, FilterSelection};

    pub fn film(
        title: &str,
        actor: &str,
        year: i32,
        rating: f64,
        runtime: u32,
        votes: u64,
        genres: &[&str],
    ) -> FilmRecord {
        FilmRecord {
            title: title.to_string(),
            lead_actor: actor.to_string(),
            release_year: year,
            rating,
            runtime_minutes: runtime,
            vote_count: votes,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            decade: FilmRecord::decade_of(year),
        }
    }

    /// Small core-franchise dataset: two Connery films, two Moore films,
    /// one Craig film, spread over three decades.
    pub fn franchise_dataset() -> Dataset {
        Dataset::new(vec![
            film("Dr. No", "Sean Connery", 1962, 7.2, 110, 180_000, &["Action", "Adventure"]),
            film("Goldfinger", "Sean Connery", 1964, 7.7, 110, 200_000, &["Action", "Adventure"]),
            film("Live and Let Die", "Roger Moore", 1973, 6.7, 121, 110_000, &["Action"]),
            film("Moonraker", "Roger Moore", 1979, 6.2, 126, 105_000, &["Action", "Sci-Fi"]),
            film("Skyfall", "Daniel Craig", 2012, 7.8, 143, 700_000, &["Action", "Thriller"]),
        ])
    }

    pub fn franchise_view(dataset: &Dataset) -> FilteredView<'_> {
        let mut sel = FilterSelection::new(FilterMode::CoreFranchise, (1900, 2100));
        for actor in ["Sean Connery", "Roger Moore", "Daniel Craig"] {
            sel.select_actor(actor);
        }
        apply_filter(dataset, &sel)
    }

    pub fn empty_view(dataset: &Dataset) -> FilteredView<'_> {
        let sel = FilterSelection::new(FilterMode::CoreFranchise, (1900, 2100));
        apply_filter(dataset, &sel)
    }
}
