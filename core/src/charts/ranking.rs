//! Ranking charts: per-actor performance bars and the top-10 film list.

use hashbrown::HashMap;
use serde_json::json;

use super::{film_row, num};
use crate::filter::FilteredView;
use dossier_types::{
    Aggregate, Channel, ChartId, ChartSpec, Encoding, FieldType, LayerSpec, Mark, Row, Scale,
    SortOrder,
};

/// Chart 1: horizontal bars of mean rating per actor, best first, bar color
/// a gradient over the same mean. Tooltip carries the film count behind
/// each mean so a one-film average is visibly thin evidence.
pub fn actor_ranking(view: &FilteredView<'_>) -> ChartSpec {
    let mut tallies: HashMap<&str, (f64, usize)> = HashMap::new();
    for film in view.iter() {
        let entry = tallies.entry(film.lead_actor.as_str()).or_default();
        entry.0 += film.rating;
        entry.1 += 1;
    }

    let mut actors: Vec<(&str, f64, usize)> = tallies
        .into_iter()
        .map(|(actor, (sum, count))| (actor, sum / count as f64, count))
        .collect();
    actors.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let data: Vec<Row> = actors
        .into_iter()
        .map(|(actor, mean, count)| {
            let serde_json::Value::Object(row) = json!({
                "lead_actor": actor,
                "avg_rating": num(mean),
                "film_count": count,
            }) else {
                unreachable!()
            };
            row
        })
        .collect();

    ChartSpec::new(ChartId::ActorRanking).layer(
        LayerSpec::new(Mark::Bar, data)
            .encode(
                Encoding::new(Channel::X, "avg_rating", FieldType::Quantitative)
                    .aggregate(Aggregate::Mean)
                    .titled("Average Rating")
                    .with_scale(Scale::domain(0.0, 10.0)),
            )
            .encode(
                Encoding::new(Channel::Y, "lead_actor", FieldType::Nominal)
                    .titled("Lead Actor")
                    .sorted(SortOrder::Descending),
            )
            .encode(
                Encoding::new(Channel::Color, "avg_rating", FieldType::Quantitative)
                    .with_scale(Scale::scheme("gradient"))
                    .no_legend(),
            )
            .encode(Encoding::new(Channel::Tooltip, "lead_actor", FieldType::Nominal).titled("Actor"))
            .encode(
                Encoding::new(Channel::Tooltip, "avg_rating", FieldType::Quantitative)
                    .titled("Avg. Rating"),
            )
            .encode(
                Encoding::new(Channel::Tooltip, "film_count", FieldType::Quantitative)
                    .titled("Film Count"),
            ),
    )
}

/// Chart 10: the ten highest-rated films in view. Ties break by vote count
/// descending, then title ascending, so the list is fully deterministic.
pub fn top_films(view: &FilteredView<'_>) -> ChartSpec {
    let mut films: Vec<_> = view.films().to_vec();
    films.sort_by(|a, b| {
        b.rating
            .total_cmp(&a.rating)
            .then_with(|| b.vote_count.cmp(&a.vote_count))
            .then_with(|| a.title.cmp(&b.title))
    });
    films.truncate(10);

    let data: Vec<Row> = films.into_iter().map(film_row).collect();

    ChartSpec::new(ChartId::TopFilms).layer(
        LayerSpec::new(Mark::Bar, data)
            .encode(
                Encoding::new(Channel::X, "rating", FieldType::Quantitative)
                    .titled("Rating")
                    .with_scale(Scale::domain(0.0, 10.0)),
            )
            .encode(
                Encoding::new(Channel::Y, "title", FieldType::Nominal)
                    .titled("Film")
                    .sorted(SortOrder::Descending),
            )
            .encode(Encoding::new(Channel::Tooltip, "title", FieldType::Nominal))
            .encode(Encoding::new(Channel::Tooltip, "lead_actor", FieldType::Nominal))
            .encode(Encoding::new(Channel::Tooltip, "release_year", FieldType::Ordinal))
            .encode(Encoding::new(Channel::Tooltip, "rating", FieldType::Quantitative))
            .encode(Encoding::new(Channel::Tooltip, "vote_count", FieldType::Quantitative)),
    )
}
