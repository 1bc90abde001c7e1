//! Distribution charts: per-actor rating strip and the vote box plot.

use super::film_row;
use crate::filter::FilteredView;
use dossier_types::{
    Aggregate, Channel, ChartId, ChartSpec, Encoding, FieldType, LayerSpec, Mark, MarkStyle, Row,
    Scale,
};

/// Chart 5: jittered strip of individual film ratings per actor, with a
/// per-actor mean-rating rule layered on top of the same rows.
pub fn rating_distribution(view: &FilteredView<'_>) -> ChartSpec {
    let data: Vec<Row> = view.iter().map(film_row).collect();

    let strip = LayerSpec::new(Mark::Circle, data.clone())
        .styled(MarkStyle {
            size: Some(70.0),
            opacity: Some(0.7),
            jitter: true,
            ..MarkStyle::default()
        })
        .encode(
            Encoding::new(Channel::X, "rating", FieldType::Quantitative)
                .titled("Rating")
                .with_scale(Scale::domain(5.0, 10.0)),
        )
        .encode(Encoding::new(Channel::Y, "lead_actor", FieldType::Nominal).titled("Lead Actor"))
        .encode(Encoding::new(Channel::Color, "lead_actor", FieldType::Nominal).no_legend())
        .encode(Encoding::new(Channel::Tooltip, "title", FieldType::Nominal))
        .encode(Encoding::new(Channel::Tooltip, "lead_actor", FieldType::Nominal))
        .encode(Encoding::new(Channel::Tooltip, "rating", FieldType::Quantitative).titled("Rating"));

    let mean_rule = LayerSpec::new(Mark::Rule, data)
        .styled(MarkStyle {
            size: Some(2.0),
            ..MarkStyle::default()
        })
        .encode(
            Encoding::new(Channel::X, "rating", FieldType::Quantitative).aggregate(Aggregate::Mean),
        )
        .encode(Encoding::new(Channel::Y, "lead_actor", FieldType::Nominal));

    ChartSpec::new(ChartId::RatingDistribution)
        .layer(strip)
        .layer(mean_rule)
}

/// Chart 8: box plot of vote counts per actor on a log y-axis. Vote counts
/// span orders of magnitude, so a linear axis would flatten everyone but
/// the outliers.
pub fn vote_boxplot(view: &FilteredView<'_>) -> ChartSpec {
    let data: Vec<Row> = view.iter().map(film_row).collect();

    ChartSpec::new(ChartId::VoteBoxplot).layer(
        LayerSpec::new(Mark::Boxplot, data)
            .styled(MarkStyle {
                size: Some(50.0),
                opacity: Some(0.7),
                ..MarkStyle::default()
            })
            .encode(Encoding::new(Channel::X, "lead_actor", FieldType::Nominal).titled("Actor"))
            .encode(
                Encoding::new(Channel::Y, "vote_count", FieldType::Quantitative)
                    .titled("Number of Votes (Log Scale)")
                    .with_scale(Scale::log()),
            )
            .encode(Encoding::new(Channel::Tooltip, "lead_actor", FieldType::Nominal))
            .encode(Encoding::new(Channel::Tooltip, "vote_count", FieldType::Quantitative)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::test_fixtures::{franchise_dataset, franchise_view};

    #[test]
    fn distribution_layers_strip_and_mean_rule() {
        let dataset = franchise_dataset();
        let spec = rating_distribution(&franchise_view(&dataset));
        assert_eq!(spec.layers.len(), 2);

        let strip = &spec.layers[0];
        assert!(strip.style.jitter);
        assert!(strip.encoding(Channel::Color).unwrap().hide_legend);

        let rule = &spec.layers[1];
        assert_eq!(rule.mark, Mark::Rule);
        assert_eq!(
            rule.encoding(Channel::X).unwrap().aggregate,
            Some(Aggregate::Mean)
        );
        // Rule is per-actor: y stays bound to the actor field.
        assert_eq!(rule.encoding(Channel::Y).unwrap().field, "lead_actor");
    }

    #[test]
    fn boxplot_uses_log_votes_axis() {
        let dataset = franchise_dataset();
        let spec = vote_boxplot(&franchise_view(&dataset));
        let y = spec.primary().encoding(Channel::Y).unwrap();
        assert_eq!(y.field, "vote_count");
        assert!(y.scale.as_ref().unwrap().log);
        assert_eq!(spec.primary().mark, Mark::Boxplot);
    }
}
