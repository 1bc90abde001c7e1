//! Per-film scatter charts: runtime vs rating, and the timeline bubbles.

use serde_json::Value;

use super::film_row;
use crate::catalog::{RATING_BAND_LABELS, rating_band};
use crate::filter::FilteredView;
use dossier_types::{
    Channel, ChartId, ChartSpec, Encoding, FieldType, LayerSpec, Mark, MarkStyle, Row, Scale,
};

/// Chart 3: runtime on x, rating on y, bubble size from votes, color from
/// actor — four variables per point, with pan/zoom for the dense middle.
pub fn runtime_rating(view: &FilteredView<'_>) -> ChartSpec {
    let data: Vec<Row> = view.iter().map(film_row).collect();

    ChartSpec::new(ChartId::RuntimeRating)
        .layer(
            LayerSpec::new(Mark::Circle, data)
                .encode(
                    Encoding::new(Channel::X, "runtime_minutes", FieldType::Quantitative)
                        .titled("Runtime (Minutes)"),
                )
                .encode(
                    Encoding::new(Channel::Y, "rating", FieldType::Quantitative)
                        .titled("Rating")
                        .with_scale(Scale::domain(5.0, 10.0)),
                )
                .encode(
                    Encoding::new(Channel::Size, "vote_count", FieldType::Quantitative)
                        .titled("Popularity")
                        .with_scale(Scale::size_range(50.0, 800.0)),
                )
                .encode(
                    Encoding::new(Channel::Color, "lead_actor", FieldType::Nominal).titled("Actor"),
                )
                .encode(Encoding::new(Channel::Tooltip, "title", FieldType::Nominal))
                .encode(Encoding::new(Channel::Tooltip, "lead_actor", FieldType::Nominal))
                .encode(
                    Encoding::new(Channel::Tooltip, "runtime_minutes", FieldType::Quantitative)
                        .titled("Runtime (mins)"),
                )
                .encode(
                    Encoding::new(Channel::Tooltip, "rating", FieldType::Quantitative)
                        .titled("Rating"),
                )
                .encode(
                    Encoding::new(Channel::Tooltip, "vote_count", FieldType::Quantitative)
                        .titled("Votes"),
                ),
        )
        .zoom_pan()
}

/// Chart 9: one bubble per film on a year/actor grid, sized by votes and
/// colored by fixed rating band.
pub fn film_timeline(view: &FilteredView<'_>) -> ChartSpec {
    let data: Vec<Row> = view
        .iter()
        .map(|film| {
            let mut row = film_row(film);
            row.insert(
                "rating_band".to_string(),
                Value::String(rating_band(film.rating).to_string()),
            );
            row
        })
        .collect();

    let band_domain: Vec<String> = RATING_BAND_LABELS.iter().map(|l| l.to_string()).collect();

    ChartSpec::new(ChartId::FilmTimeline).layer(
        LayerSpec::new(Mark::Circle, data)
            .styled(MarkStyle {
                size: Some(100.0),
                ..MarkStyle::default()
            })
            .encode(
                Encoding::new(Channel::X, "release_year", FieldType::Ordinal)
                    .titled("Release Year"),
            )
            .encode(Encoding::new(Channel::Y, "lead_actor", FieldType::Nominal).titled("Actor"))
            .encode(
                Encoding::new(Channel::Color, "rating_band", FieldType::Nominal)
                    .titled("Rating Band")
                    .with_scale(Scale {
                        domain_values: Some(band_domain),
                        ..Scale::default()
                    }),
            )
            .encode(
                Encoding::new(Channel::Size, "vote_count", FieldType::Quantitative)
                    .titled("Popularity")
                    .with_scale(Scale::size_range(50.0, 500.0)),
            )
            .encode(Encoding::new(Channel::Tooltip, "title", FieldType::Nominal))
            .encode(Encoding::new(Channel::Tooltip, "lead_actor", FieldType::Nominal))
            .encode(Encoding::new(Channel::Tooltip, "release_year", FieldType::Ordinal))
            .encode(Encoding::new(Channel::Tooltip, "rating", FieldType::Quantitative))
            .encode(Encoding::new(Channel::Tooltip, "vote_count", FieldType::Quantitative)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::test_fixtures::{franchise_dataset, franchise_view};

    #[test]
    fn runtime_scatter_encodes_four_variables() {
        let dataset = franchise_dataset();
        let spec = runtime_rating(&franchise_view(&dataset));
        let layer = spec.primary();
        assert_eq!(layer.encoding(Channel::X).unwrap().field, "runtime_minutes");
        assert_eq!(layer.encoding(Channel::Y).unwrap().field, "rating");
        assert_eq!(layer.encoding(Channel::Size).unwrap().field, "vote_count");
        assert_eq!(layer.encoding(Channel::Color).unwrap().field, "lead_actor");
        assert!(spec.interactivity.zoom_pan);
    }

    #[test]
    fn timeline_assigns_fixed_rating_bands() {
        let dataset = franchise_dataset();
        let spec = film_timeline(&franchise_view(&dataset));
        let layer = spec.primary();
        let band_of = |title: &str| -> String {
            layer
                .data
                .iter()
                .find(|r| r["title"] == title)
                .unwrap()["rating_band"]
                .as_str()
                .unwrap()
                .to_string()
        };
        assert_eq!(band_of("Moonraker"), "6-7"); // 6.2
        assert_eq!(band_of("Dr. No"), "7-8"); // 7.2
        assert_eq!(band_of("Skyfall"), "7-8"); // 7.8

        let color = layer.encoding(Channel::Color).unwrap();
        let domain = color.scale.as_ref().unwrap().domain_values.as_ref().unwrap();
        assert_eq!(domain, &["Below 6", "6-7", "7-8", "8+"]);
    }
}
