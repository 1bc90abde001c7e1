//! Actor-by-decade performance heatmap.

use std::collections::BTreeSet;

use hashbrown::HashMap;
use serde_json::{Value, json};

use super::num;
use crate::filter::FilteredView;
use dossier_types::{
    Channel, ChartId, ChartSpec, Encoding, FieldType, LayerSpec, Mark, Row, Scale,
};

/// Chart 7: mean rating per (actor, decade) cell. The full grid of actors
/// in view x decades in view is emitted; a cell with no films carries a
/// null rating and `film_count` 0 so renderers can paint a distinct
/// "no data" color instead of a misleading zero.
pub fn performance_heatmap(view: &FilteredView<'_>) -> ChartSpec {
    let mut cells: HashMap<(&str, i32), (f64, usize)> = HashMap::new();
    let mut decades: BTreeSet<i32> = BTreeSet::new();
    for film in view.iter() {
        let entry = cells
            .entry((film.lead_actor.as_str(), film.decade))
            .or_default();
        entry.0 += film.rating;
        entry.1 += 1;
        decades.insert(film.decade);
    }

    let mut data: Vec<Row> = Vec::new();
    for actor in view.actors() {
        for decade in &decades {
            let (rating, count) = match cells.get(&(actor, *decade)) {
                Some((sum, count)) => (num(sum / *count as f64), *count),
                None => (Value::Null, 0),
            };
            let Value::Object(row) = json!({
                "lead_actor": actor,
                "decade": decade,
                "avg_rating": rating,
                "film_count": count,
            }) else {
                unreachable!()
            };
            data.push(row);
        }
    }

    ChartSpec::new(ChartId::PerformanceHeatmap).layer(
        LayerSpec::new(Mark::Rect, data)
            .encode(Encoding::new(Channel::X, "decade", FieldType::Ordinal).titled("Decade"))
            .encode(Encoding::new(Channel::Y, "lead_actor", FieldType::Nominal).titled("Actor"))
            .encode(
                Encoding::new(Channel::Color, "avg_rating", FieldType::Quantitative)
                    .titled("Avg Rating")
                    .with_scale(Scale {
                        domain: Some([5.0, 9.0]),
                        scheme: Some("blues".to_string()),
                        ..Scale::default()
                    }),
            )
            .encode(Encoding::new(Channel::Tooltip, "lead_actor", FieldType::Nominal).titled("Actor"))
            .encode(Encoding::new(Channel::Tooltip, "decade", FieldType::Ordinal).titled("Decade"))
            .encode(
                Encoding::new(Channel::Tooltip, "avg_rating", FieldType::Quantitative)
                    .titled("Avg Rating"),
            )
            .encode(
                Encoding::new(Channel::Tooltip, "film_count", FieldType::Quantitative)
                    .titled("Films"),
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::test_fixtures::{franchise_dataset, franchise_view};

    #[test]
    fn emits_full_grid_with_null_no_data_cells() {
        let dataset = franchise_dataset();
        let spec = performance_heatmap(&franchise_view(&dataset));
        let rows = &spec.primary().data;
        // 3 actors x 3 decades in view.
        assert_eq!(rows.len(), 9);

        let cell = |actor: &str, decade: i64| -> &Row {
            rows.iter()
                .find(|r| r["lead_actor"] == actor && r["decade"] == decade)
                .unwrap()
        };

        let connery_60s = cell("Sean Connery", 1960);
        assert!((connery_60s["avg_rating"].as_f64().unwrap() - 7.45).abs() < 1e-9);
        assert_eq!(connery_60s["film_count"], 2);

        // Craig made no 1960s films: null rating, zero count, row present.
        let craig_60s = cell("Daniel Craig", 1960);
        assert!(craig_60s["avg_rating"].is_null());
        assert_eq!(craig_60s["film_count"], 0);
    }

    #[test]
    fn color_scale_is_blues_over_fixed_domain() {
        let dataset = franchise_dataset();
        let spec = performance_heatmap(&franchise_view(&dataset));
        let color = spec.primary().encoding(Channel::Color).unwrap();
        let scale = color.scale.as_ref().unwrap();
        assert_eq!(scale.scheme.as_deref(), Some("blues"));
        assert_eq!(scale.domain, Some([5.0, 9.0]));
    }
}
