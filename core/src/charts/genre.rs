//! Genre intensity per decade.

use hashbrown::HashMap;
use serde_json::json;

use crate::filter::FilteredView;
use dossier_types::{Channel, ChartId, ChartSpec, Encoding, FieldType, LayerSpec, Mark, Row};

/// Chart 4: stacked bars of genre-tag counts per decade. A film with
/// multiple tags contributes one count per tag; zero-count pairs are not
/// emitted at all.
pub fn genre_by_decade(view: &FilteredView<'_>) -> ChartSpec {
    let mut counts: HashMap<(i32, &str), usize> = HashMap::new();
    for film in view.iter() {
        for genre in &film.genres {
            *counts.entry((film.decade, genre.as_str())).or_default() += 1;
        }
    }

    let mut pairs: Vec<((i32, &str), usize)> = counts.into_iter().collect();
    pairs.sort_by(|((da, ga), _), ((db, gb), _)| da.cmp(db).then_with(|| ga.cmp(gb)));

    let data: Vec<Row> = pairs
        .into_iter()
        .map(|((decade, genre), count)| {
            let serde_json::Value::Object(row) = json!({
                "decade": decade,
                "genre": genre,
                "count": count,
            }) else {
                unreachable!()
            };
            row
        })
        .collect();

    ChartSpec::new(ChartId::GenreByDecade).layer(
        LayerSpec::new(Mark::Bar, data)
            .encode(Encoding::new(Channel::X, "decade", FieldType::Ordinal).titled("Decade"))
            .encode(
                Encoding::new(Channel::Y, "count", FieldType::Quantitative).titled("Genre Count"),
            )
            .encode(Encoding::new(Channel::Color, "genre", FieldType::Nominal).titled("Genre"))
            .encode(Encoding::new(Channel::Tooltip, "decade", FieldType::Ordinal))
            .encode(Encoding::new(Channel::Tooltip, "genre", FieldType::Nominal))
            .encode(Encoding::new(Channel::Tooltip, "count", FieldType::Quantitative)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::test_fixtures::{franchise_dataset, franchise_view};

    #[test]
    fn counts_one_per_tag_and_skips_zero_pairs() {
        let dataset = franchise_dataset();
        let spec = genre_by_decade(&franchise_view(&dataset));
        let rows = &spec.primary().data;

        let count_of = |decade: i64, genre: &str| -> Option<i64> {
            rows.iter()
                .find(|r| r["decade"] == decade && r["genre"] == genre)
                .map(|r| r["count"].as_i64().unwrap())
        };
        // Two 1960s Connery films, both tagged Action and Adventure.
        assert_eq!(count_of(1960, "Action"), Some(2));
        assert_eq!(count_of(1960, "Adventure"), Some(2));
        // Sci-Fi only appears in the 1970s (Moonraker).
        assert_eq!(count_of(1970, "Sci-Fi"), Some(1));
        assert_eq!(count_of(1960, "Sci-Fi"), None);
        // Stacking is declared through the color channel.
        assert_eq!(
            spec.primary().encoding(Channel::Color).unwrap().field,
            "genre"
        );
    }
}
