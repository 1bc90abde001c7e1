//! Time-trend charts: rating over release year with an OLS overlay, and
//! production volume per decade.

use hashbrown::HashMap;
use serde_json::json;

use super::{film_row, num};
use crate::filter::FilteredView;
use dossier_types::{
    Channel, ChartId, ChartSpec, Encoding, FieldType, LayerSpec, Mark, MarkStyle, Row, Scale,
};

/// Regression layers need at least this many points to say anything.
const REGRESSION_MIN_ROWS: usize = 3;

/// Chart 2: rating vs release year scatter, colored by actor with
/// legend-click filtering, plus an ordinary-least-squares trend line over
/// the same view when there are enough points.
pub fn rating_trend(view: &FilteredView<'_>) -> ChartSpec {
    let data: Vec<Row> = view.iter().map(film_row).collect();

    let scatter = LayerSpec::new(Mark::Point, data)
        .styled(MarkStyle {
            size: Some(60.0),
            filled: true,
            ..MarkStyle::default()
        })
        .encode(Encoding::new(Channel::X, "release_year", FieldType::Ordinal).titled("Release Year"))
        .encode(
            Encoding::new(Channel::Y, "rating", FieldType::Quantitative)
                .titled("Rating")
                .with_scale(Scale::domain(5.0, 10.0)),
        )
        .encode(Encoding::new(Channel::Color, "lead_actor", FieldType::Nominal).titled("Actor"))
        .encode(Encoding::new(Channel::Tooltip, "title", FieldType::Nominal))
        .encode(Encoding::new(Channel::Tooltip, "release_year", FieldType::Ordinal))
        .encode(Encoding::new(Channel::Tooltip, "rating", FieldType::Quantitative))
        .encode(Encoding::new(Channel::Tooltip, "lead_actor", FieldType::Nominal));

    let mut spec = ChartSpec::new(ChartId::RatingTrend)
        .layer(scatter)
        .legend_filter("lead_actor");

    if view.len() >= REGRESSION_MIN_ROWS {
        let points: Vec<(f64, f64)> = view
            .iter()
            .map(|f| (f64::from(f.release_year), f.rating))
            .collect();
        if let Some(line) = regression_layer(&points) {
            spec = spec.layer(line);
        }
    }

    spec
}

/// Two-point line layer for the fitted OLS trend, spanning the observed
/// x range.
fn regression_layer(points: &[(f64, f64)]) -> Option<LayerSpec> {
    let (slope, intercept) = ols_fit(points)?;
    let (mut x_min, mut x_max) = (points[0].0, points[0].0);
    for (x, _) in points {
        x_min = x_min.min(*x);
        x_max = x_max.max(*x);
    }

    let data: Vec<Row> = [x_min, x_max]
        .iter()
        .map(|x| {
            let serde_json::Value::Object(row) = json!({
                "release_year": x,
                "trend_rating": num(slope * x + intercept),
            }) else {
                unreachable!()
            };
            row
        })
        .collect();

    Some(
        LayerSpec::new(Mark::Line, data)
            .styled(MarkStyle {
                size: Some(2.0),
                ..MarkStyle::default()
            })
            .encode(Encoding::new(Channel::X, "release_year", FieldType::Ordinal))
            .encode(Encoding::new(Channel::Y, "trend_rating", FieldType::Quantitative).no_legend()),
    )
}

/// Ordinary least squares over (x, y) pairs. Returns `None` for degenerate
/// inputs (fewer than two points, or zero x variance).
pub fn ols_fit(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (x, y) in points {
        sxx += (x - mean_x) * (x - mean_x);
        sxy += (x - mean_x) * (y - mean_y);
    }
    if sxx == 0.0 {
        return None;
    }
    let slope = sxy / sxx;
    Some((slope, mean_y - slope * mean_x))
}

/// Chart 6: films per decade, bar color a gradient over the same count.
pub fn production_volume(view: &FilteredView<'_>) -> ChartSpec {
    let mut counts: HashMap<i32, usize> = HashMap::new();
    for film in view.iter() {
        *counts.entry(film.decade).or_default() += 1;
    }
    let mut decades: Vec<(i32, usize)> = counts.into_iter().collect();
    decades.sort_by_key(|(decade, _)| *decade);

    let data: Vec<Row> = decades
        .into_iter()
        .map(|(decade, count)| {
            let serde_json::Value::Object(row) = json!({
                "decade": decade,
                "count": count,
            }) else {
                unreachable!()
            };
            row
        })
        .collect();

    ChartSpec::new(ChartId::ProductionVolume).layer(
        LayerSpec::new(Mark::Bar, data)
            .encode(Encoding::new(Channel::X, "decade", FieldType::Ordinal).titled("Decade"))
            .encode(
                Encoding::new(Channel::Y, "count", FieldType::Quantitative)
                    .titled("Number of Films"),
            )
            .encode(
                Encoding::new(Channel::Color, "count", FieldType::Quantitative)
                    .with_scale(Scale::scheme("gradient"))
                    .no_legend(),
            )
            .encode(Encoding::new(Channel::Tooltip, "decade", FieldType::Ordinal).titled("Decade"))
            .encode(Encoding::new(Channel::Tooltip, "count", FieldType::Quantitative).titled("Films")),
    )
}
