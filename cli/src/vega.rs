//! Vega-Lite export for chart specs.
//!
//! The core emits renderer-neutral `ChartSpec` values; this module maps
//! them onto Vega-Lite JSON documents and injects the presentation theme.
//! Theme colors stay out of the core entirely - the "gradient" scheme hint
//! is resolved against the theme here, at the presentation boundary.

use dossier_types::{
    Channel, ChartSpec, Encoding, Interactivity, LayerSpec, Mark, MarkStyle, Scale, SortOrder,
    ThemeConfig,
};
use serde_json::{Map, Value, json};

const SCHEMA_URL: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// Convert one chart spec into a standalone Vega-Lite document.
pub fn to_vega_lite(spec: &ChartSpec, theme: &ThemeConfig) -> Value {
    let mut doc = Map::new();
    doc.insert("$schema".to_string(), json!(SCHEMA_URL));
    doc.insert("title".to_string(), json!(spec.title));
    doc.insert("config".to_string(), theme_config(theme));

    if let [layer] = spec.layers.as_slice() {
        merge_layer(&mut doc, layer, theme);
    } else {
        let layers: Vec<Value> = spec
            .layers
            .iter()
            .map(|layer| {
                let mut obj = Map::new();
                merge_layer(&mut obj, layer, theme);
                Value::Object(obj)
            })
            .collect();
        doc.insert("layer".to_string(), Value::Array(layers));
    }

    if let Some(params) = interactivity_params(&spec.interactivity) {
        doc.insert("params".to_string(), params);
    }

    Value::Object(doc)
}

fn merge_layer(target: &mut Map<String, Value>, layer: &LayerSpec, theme: &ThemeConfig) {
    target.insert("mark".to_string(), mark_value(layer.mark, &layer.style));
    target.insert("data".to_string(), json!({ "values": layer.data }));

    let mut encoding = Map::new();
    // Strip-plot jitter: a computed random field driving yOffset, since the
    // strip's categorical axis is vertical.
    if layer.style.jitter {
        target.insert(
            "transform".to_string(),
            json!([{ "calculate": "random()", "as": "jitter" }]),
        );
        encoding.insert(
            "yOffset".to_string(),
            json!({ "field": "jitter", "type": "quantitative" }),
        );
    }
    let mut tooltips = Vec::new();
    for enc in &layer.encodings {
        let def = channel_def(enc, theme);
        match enc.channel {
            Channel::X => {
                encoding.insert("x".to_string(), def);
            }
            Channel::Y => {
                encoding.insert("y".to_string(), def);
            }
            Channel::Color => {
                encoding.insert("color".to_string(), def);
            }
            Channel::Size => {
                encoding.insert("size".to_string(), def);
            }
            Channel::Tooltip => tooltips.push(def),
        }
    }
    if !tooltips.is_empty() {
        encoding.insert("tooltip".to_string(), Value::Array(tooltips));
    }
    target.insert("encoding".to_string(), Value::Object(encoding));
}

fn mark_value(mark: Mark, style: &MarkStyle) -> Value {
    let mut obj = Map::new();
    obj.insert("type".to_string(), serde_json::to_value(mark).unwrap_or(Value::Null));
    if let Some(size) = style.size {
        obj.insert("size".to_string(), json!(size));
    }
    if let Some(opacity) = style.opacity {
        obj.insert("opacity".to_string(), json!(opacity));
    }
    if style.filled {
        obj.insert("filled".to_string(), json!(true));
    }
    Value::Object(obj)
}

fn channel_def(enc: &Encoding, theme: &ThemeConfig) -> Value {
    let mut def = Map::new();
    def.insert("field".to_string(), json!(enc.field));
    def.insert(
        "type".to_string(),
        serde_json::to_value(enc.field_type).unwrap_or(Value::Null),
    );
    if let Some(agg) = enc.aggregate {
        def.insert(
            "aggregate".to_string(),
            serde_json::to_value(agg).unwrap_or(Value::Null),
        );
    }
    if let Some(title) = &enc.title {
        def.insert("title".to_string(), json!(title));
    }
    if let Some(sort) = enc.sort {
        def.insert("sort".to_string(), json!(sort_value(enc.channel, sort)));
    }
    if let Some(scale) = &enc.scale {
        def.insert("scale".to_string(), scale_value(scale, theme));
    }
    if enc.hide_legend {
        def.insert("legend".to_string(), Value::Null);
    }
    Value::Object(def)
}

/// Vega-Lite expresses "sort this axis by the other encoding" as "x"/"-x"
/// or "y"/"-y" strings.
fn sort_value(channel: Channel, sort: SortOrder) -> &'static str {
    let other = match channel {
        Channel::Y => "x",
        _ => "y",
    };
    match (other, sort) {
        ("x", SortOrder::Ascending) => "x",
        ("x", SortOrder::Descending) => "-x",
        (_, SortOrder::Ascending) => "y",
        (_, SortOrder::Descending) => "-y",
    }
}

fn scale_value(scale: &Scale, theme: &ThemeConfig) -> Value {
    let mut obj = Map::new();
    if let Some(domain) = scale.domain {
        obj.insert("domain".to_string(), json!(domain));
    }
    if let Some(values) = &scale.domain_values {
        obj.insert("domain".to_string(), json!(values));
    }
    if let Some(range) = scale.range {
        obj.insert("range".to_string(), json!(range));
    }
    match scale.scheme.as_deref() {
        // The gradient hint resolves to the theme's two-color ramp.
        Some("gradient") => {
            obj.insert("range".to_string(), json!(theme.gradient_range()));
        }
        Some(scheme) => {
            obj.insert("scheme".to_string(), json!(scheme));
        }
        None => {}
    }
    if scale.log {
        obj.insert("type".to_string(), json!("log"));
    }
    Value::Object(obj)
}

fn interactivity_params(interactivity: &Interactivity) -> Option<Value> {
    let mut params = Vec::new();
    if interactivity.zoom_pan {
        params.push(json!({
            "name": "grid",
            "select": "interval",
            "bind": "scales",
        }));
    }
    if let Some(field) = &interactivity.legend_filter {
        params.push(json!({
            "name": "legend_selection",
            "select": { "type": "point", "fields": [field] },
            "bind": "legend",
        }));
    }
    (!params.is_empty()).then(|| Value::Array(params))
}

/// Chart config block carrying the dark theme, mirroring the dashboard's
/// registered theme object.
fn theme_config(theme: &ThemeConfig) -> Value {
    json!({
        "background": theme.background,
        "title": {
            "color": theme.accent_gold,
            "fontSize": 18,
            "fontWeight": "bold",
            "anchor": "middle",
        },
        "view": { "stroke": "transparent", "fill": theme.background },
        "axis": {
            "domainColor": "#444444",
            "gridColor": theme.grid,
            "labelColor": theme.text,
            "titleColor": theme.text,
            "titleFontWeight": "bold",
        },
        "legend": { "titleColor": theme.text, "labelColor": theme.text },
        "range": { "category": theme.category_range },
        "mark": { "tooltip": true },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_types::{ChartId, FieldType};

    fn sample_spec() -> ChartSpec {
        ChartSpec::new(ChartId::ActorRanking)
            .layer(
                LayerSpec::new(Mark::Bar, Vec::new())
                    .encode(
                        Encoding::new(Channel::X, "avg_rating", FieldType::Quantitative)
                            .with_scale(Scale::domain(0.0, 10.0)),
                    )
                    .encode(
                        Encoding::new(Channel::Y, "lead_actor", FieldType::Nominal)
                            .sorted(SortOrder::Descending),
                    )
                    .encode(
                        Encoding::new(Channel::Color, "avg_rating", FieldType::Quantitative)
                            .with_scale(Scale::scheme("gradient"))
                            .no_legend(),
                    )
                    .encode(Encoding::new(Channel::Tooltip, "lead_actor", FieldType::Nominal))
                    .encode(Encoding::new(Channel::Tooltip, "avg_rating", FieldType::Quantitative)),
            )
    }

    #[test]
    fn single_layer_chart_inlines_mark_and_encoding() {
        let doc = to_vega_lite(&sample_spec(), &ThemeConfig::default());
        assert_eq!(doc["mark"]["type"], "bar");
        assert_eq!(doc["encoding"]["x"]["field"], "avg_rating");
        assert_eq!(doc["encoding"]["y"]["sort"], "-x");
        assert_eq!(doc["encoding"]["tooltip"].as_array().unwrap().len(), 2);
        assert!(doc["encoding"]["color"]["legend"].is_null());
    }

    #[test]
    fn gradient_scheme_resolves_to_theme_ramp() {
        let theme = ThemeConfig::default();
        let doc = to_vega_lite(&sample_spec(), &theme);
        let range = doc["encoding"]["color"]["scale"]["range"].as_array().unwrap();
        assert_eq!(range[0], theme.accent_orange.as_str());
        assert_eq!(range[1], theme.accent_blue.as_str());
    }

    #[test]
    fn theme_lands_in_config_block() {
        let doc = to_vega_lite(&sample_spec(), &ThemeConfig::default());
        assert_eq!(doc["config"]["background"], "#0e1117");
        assert_eq!(doc["config"]["range"]["category"][0], "#FFD700");
    }

    #[test]
    fn jitter_strip_gets_offset_transform() {
        let layer = LayerSpec::new(Mark::Circle, Vec::new()).styled(MarkStyle {
            jitter: true,
            opacity: Some(0.7),
            ..Default::default()
        });
        let spec = ChartSpec::new(ChartId::RatingDistribution).layer(layer);
        let doc = to_vega_lite(&spec, &ThemeConfig::default());
        assert_eq!(doc["transform"][0]["calculate"], "random()");
        assert_eq!(doc["encoding"]["yOffset"]["field"], "jitter");
        assert_eq!(doc["mark"]["opacity"], 0.7);
    }

    #[test]
    fn zoom_pan_emits_interval_param() {
        let spec = sample_spec().zoom_pan();
        let doc = to_vega_lite(&spec, &ThemeConfig::default());
        assert_eq!(doc["params"][0]["bind"], "scales");
    }
}
