//! Declarative chart-spec grammar.
//!
//! Chart builders in dossier-core emit these values; renderers (the CLI's
//! Vega-Lite export, a future web shell) consume them. Nothing here knows
//! how to draw — a spec is plain data: mark, encoding channels, inline rows,
//! interactivity flags. That keeps every builder testable by asserting on
//! fields instead of pixels.

use serde::{Deserialize, Serialize};

/// One inline data row. Keys are field names referenced by encodings.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Stable identifier for each of the ten dashboard charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartId {
    ActorRanking,
    RatingTrend,
    RuntimeRating,
    GenreByDecade,
    RatingDistribution,
    ProductionVolume,
    PerformanceHeatmap,
    VoteBoxplot,
    FilmTimeline,
    TopFilms,
}

impl ChartId {
    pub const ALL: [ChartId; 10] = [
        ChartId::ActorRanking,
        ChartId::RatingTrend,
        ChartId::RuntimeRating,
        ChartId::GenreByDecade,
        ChartId::RatingDistribution,
        ChartId::ProductionVolume,
        ChartId::PerformanceHeatmap,
        ChartId::VoteBoxplot,
        ChartId::FilmTimeline,
        ChartId::TopFilms,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ChartId::ActorRanking => "Actor Performance Ranking",
            ChartId::RatingTrend => "Rating Trend Over Time",
            ChartId::RuntimeRating => "Runtime vs Rating",
            ChartId::GenreByDecade => "Genre Evolution by Decade",
            ChartId::RatingDistribution => "Rating Distribution by Actor",
            ChartId::ProductionVolume => "Production Volume by Decade",
            ChartId::PerformanceHeatmap => "Performance Heatmap",
            ChartId::VoteBoxplot => "Audience Engagement Distribution",
            ChartId::FilmTimeline => "Complete Film Timeline",
            ChartId::TopFilms => "Top 10 Films",
        }
    }

    /// Short name accepted by the CLI's `chart` command.
    pub fn slug(&self) -> &'static str {
        match self {
            ChartId::ActorRanking => "ranking",
            ChartId::RatingTrend => "trend",
            ChartId::RuntimeRating => "runtime",
            ChartId::GenreByDecade => "genres",
            ChartId::RatingDistribution => "distribution",
            ChartId::ProductionVolume => "volume",
            ChartId::PerformanceHeatmap => "heatmap",
            ChartId::VoteBoxplot => "votes",
            ChartId::FilmTimeline => "timeline",
            ChartId::TopFilms => "top10",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.slug() == slug)
    }
}

/// Mark type, mirroring the Vega-Lite vocabulary the renderers target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Bar,
    Point,
    Circle,
    Line,
    Rect,
    Rule,
    Boxplot,
}

/// Visual tweaks attached to a mark, not to an encoding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MarkStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    pub filled: bool,
    /// Strip plots jitter points along the categorical axis so that films
    /// with identical ratings stay distinguishable.
    pub jitter: bool,
}

/// Vega-Lite-style semantic field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Quantitative,
    Nominal,
    Ordinal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregate {
    Mean,
    Sum,
    Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Scale hints a renderer needs beyond the raw values. Color *values* are
/// deliberately absent: renderers map `scheme`/gradient hints onto the
/// active theme.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scale {
    /// Fixed quantitative domain, e.g. [5, 10] for rating axes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<[f64; 2]>,
    /// Fixed categorical domain, e.g. the rating band labels in order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_values: Option<Vec<String>>,
    /// Output range for size scales, e.g. [50, 800] point areas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    /// Named color scheme ("blues") or the theme-gradient hint ("gradient").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    /// Log-scaled axis (vote counts).
    pub log: bool,
}

impl Scale {
    pub fn domain(lo: f64, hi: f64) -> Self {
        Self {
            domain: Some([lo, hi]),
            ..Self::default()
        }
    }

    pub fn size_range(lo: f64, hi: f64) -> Self {
        Self {
            range: Some([lo, hi]),
            ..Self::default()
        }
    }

    pub fn scheme(name: &str) -> Self {
        Self {
            scheme: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn log() -> Self {
        Self {
            log: true,
            ..Self::default()
        }
    }
}

/// Encoding channel a field is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    X,
    Y,
    Color,
    Size,
    Tooltip,
}

/// Binding of one data field to one visual channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encoding {
    pub channel: Channel,
    pub field: String,
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<Aggregate>,
    /// Axis/legend title; falls back to the field name when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
    /// Suppress the legend for this channel (self-explanatory colorings).
    pub hide_legend: bool,
}

impl Encoding {
    pub fn new(channel: Channel, field: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            channel,
            field: field.into(),
            field_type,
            aggregate: None,
            title: None,
            sort: None,
            scale: None,
            hide_legend: false,
        }
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn aggregate(mut self, agg: Aggregate) -> Self {
        self.aggregate = Some(agg);
        self
    }

    pub fn sorted(mut self, order: SortOrder) -> Self {
        self.sort = Some(order);
        self
    }

    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn no_legend(mut self) -> Self {
        self.hide_legend = true;
        self
    }
}

/// Interactivity a renderer should wire up for a chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Interactivity {
    /// Pan/zoom on the plot area.
    pub zoom_pan: bool,
    /// Legend-click filtering bound to the named field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_filter: Option<String>,
}

/// One drawable layer: a mark plus its encodings over a set of rows.
/// Multi-layer charts (scatter + regression line, strip + mean rule)
/// carry one entry per overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub mark: Mark,
    #[serde(default)]
    pub style: MarkStyle,
    pub data: Vec<Row>,
    pub encodings: Vec<Encoding>,
}

impl LayerSpec {
    pub fn new(mark: Mark, data: Vec<Row>) -> Self {
        Self {
            mark,
            style: MarkStyle::default(),
            data,
            encodings: Vec::new(),
        }
    }

    pub fn styled(mut self, style: MarkStyle) -> Self {
        self.style = style;
        self
    }

    pub fn encode(mut self, encoding: Encoding) -> Self {
        self.encodings.push(encoding);
        self
    }

    /// First encoding bound to the given channel, if any.
    pub fn encoding(&self, channel: Channel) -> Option<&Encoding> {
        self.encodings.iter().find(|e| e.channel == channel)
    }

    pub fn tooltip_fields(&self) -> impl Iterator<Item = &Encoding> {
        self.encodings
            .iter()
            .filter(|e| e.channel == Channel::Tooltip)
    }
}

/// A complete chart: identity, layers, and interactivity flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub id: ChartId,
    pub title: String,
    pub layers: Vec<LayerSpec>,
    #[serde(default)]
    pub interactivity: Interactivity,
}

impl ChartSpec {
    pub fn new(id: ChartId) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            layers: Vec::new(),
            interactivity: Interactivity::default(),
        }
    }

    pub fn layer(mut self, layer: LayerSpec) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn zoom_pan(mut self) -> Self {
        self.interactivity.zoom_pan = true;
        self
    }

    pub fn legend_filter(mut self, field: impl Into<String>) -> Self {
        self.interactivity.legend_filter = Some(field.into());
        self
    }

    /// The primary (first) layer. Builders always push at least one.
    pub fn primary(&self) -> &LayerSpec {
        &self.layers[0]
    }

    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|l| l.data.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_id_slug_round_trip() {
        for id in ChartId::ALL {
            assert_eq!(ChartId::from_slug(id.slug()), Some(id));
        }
        assert_eq!(ChartId::from_slug("nope"), None);
    }

    #[test]
    fn encoding_builder_sets_fields() {
        let enc = Encoding::new(Channel::X, "rating", FieldType::Quantitative)
            .aggregate(Aggregate::Mean)
            .titled("Average Rating")
            .with_scale(Scale::domain(0.0, 10.0))
            .no_legend();
        assert_eq!(enc.aggregate, Some(Aggregate::Mean));
        assert_eq!(enc.title.as_deref(), Some("Average Rating"));
        assert_eq!(enc.scale.as_ref().unwrap().domain, Some([0.0, 10.0]));
        assert!(enc.hide_legend);
    }

    #[test]
    fn layer_lookup_by_channel() {
        let layer = LayerSpec::new(Mark::Bar, Vec::new())
            .encode(Encoding::new(Channel::X, "decade", FieldType::Ordinal))
            .encode(Encoding::new(Channel::Y, "count", FieldType::Quantitative))
            .encode(Encoding::new(Channel::Tooltip, "decade", FieldType::Ordinal))
            .encode(Encoding::new(Channel::Tooltip, "count", FieldType::Quantitative));
        assert_eq!(layer.encoding(Channel::X).unwrap().field, "decade");
        assert!(layer.encoding(Channel::Size).is_none());
        assert_eq!(layer.tooltip_fields().count(), 2);
    }
}
