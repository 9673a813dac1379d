//! Vega-Lite JSON writer implementation
//!
//! Converts simpler-eda charts into Vega-Lite JSON format for web-based
//! interactive visualizations.
//!
//! # Mapping Strategy
//!
//! - Chart mark -> Vega-Lite `mark` object
//! - Chart encoding channels -> Vega-Lite `encoding`
//! - Chart transforms -> Vega-Lite `transform` array
//! - Polars DataFrame -> Vega-Lite inline data (`data.values`)
//! - Facet -> top-level `facet`/`columns` with the unit chart moved into `spec`
//!
//! # Example
//!
//! ```rust,ignore
//! use simpler_eda::writer::{Writer, VegaLiteWriter};
//!
//! let writer = VegaLiteWriter::new();
//! let vega_json = writer.write(&chart)?;
//! // Can be rendered in browser with vega-embed
//! ```

mod data;
mod encoding;

use crate::chart::{Chart, FieldType, Transform};
use crate::writer::Writer;
use crate::{EdaError, Result};
use serde_json::{json, Map, Value};
use std::collections::HashSet;

use data::dataframe_to_values;
use encoding::{build_encoding, escape_field, mark_to_json};

/// Name of the interval selection bound to the scales of interactive charts
const PAN_ZOOM_PARAM: &str = "pan_zoom";

/// Vega-Lite JSON writer
///
/// Generates Vega-Lite v5 specifications from charts.
pub struct VegaLiteWriter {
    /// Vega-Lite schema version
    schema: String,
}

impl VegaLiteWriter {
    /// Create a new Vega-Lite writer with default settings
    pub fn new() -> Self {
        Self {
            schema: "https://vega.github.io/schema/vega-lite/v5.json".to_string(),
        }
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Build the Vega-Lite spec as a JSON value
    pub fn to_value(&self, chart: &Chart) -> Result<Value> {
        self.validate(chart)?;

        let mut vl_spec = json!({
            "$schema": self.schema
        });

        if let Some(title) = chart.title() {
            vl_spec["title"] = json!(title);
        }

        vl_spec["data"] = json!({ "values": dataframe_to_values(chart.data())? });

        // The unit view; becomes the inner `spec` of a facet chart
        let mut view = Map::new();
        view.insert("mark".to_string(), mark_to_json(chart.mark()));
        view.insert("encoding".to_string(), build_encoding(chart.encoding()));

        if !chart.transforms().is_empty() {
            let transforms: Vec<Value> = chart.transforms().iter().map(transform_to_json).collect();
            view.insert("transform".to_string(), json!(transforms));
        }
        if let Some(width) = chart.width() {
            view.insert("width".to_string(), json!(width));
        }
        if let Some(height) = chart.height() {
            view.insert("height".to_string(), json!(height));
        }
        if chart.is_interactive() {
            view.insert(
                "params".to_string(),
                json!([{
                    "name": PAN_ZOOM_PARAM,
                    "select": {"type": "interval", "encodings": ["x", "y"]},
                    "bind": "scales"
                }]),
            );
        }

        match chart.facet() {
            Some(facet) => {
                // panels are discrete, so numeric facet fields are ordinal
                let field_type = match FieldType::infer(chart.data(), &facet.field) {
                    FieldType::Quantitative => FieldType::Ordinal,
                    other => other,
                };
                vl_spec["facet"] = json!({
                    "field": escape_field(&facet.field),
                    "type": field_type.as_str(),
                });
                vl_spec["columns"] = json!(facet.columns);
                vl_spec["spec"] = Value::Object(view);
            }
            None => {
                if let Some(obj) = vl_spec.as_object_mut() {
                    obj.extend(view);
                }
            }
        }

        if !chart.config().is_empty() {
            vl_spec["config"] = config_to_json(chart);
        }

        Ok(vl_spec)
    }
}

impl Default for VegaLiteWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for VegaLiteWriter {
    type Output = String;

    fn write(&self, chart: &Chart) -> Result<String> {
        let vl_spec = self.to_value(chart)?;
        serde_json::to_string_pretty(&vl_spec).map_err(|e| {
            EdaError::WriterError(format!("Failed to serialize Vega-Lite JSON: {}", e))
        })
    }

    fn validate(&self, chart: &Chart) -> Result<()> {
        let mut available: HashSet<String> = chart
            .data()
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        for transform in chart.transforms() {
            match transform {
                Transform::Density { field, groupby, .. } => {
                    if let Some(missing) = std::iter::once(field)
                        .chain(groupby)
                        .find(|column| !available.contains(*column))
                    {
                        return Err(EdaError::WriterError(format!(
                            "Column '{}' used by the density transform does not exist in the chart data",
                            missing
                        )));
                    }
                    // only grouped columns and the outputs survive a density transform
                    available = groupby
                        .iter()
                        .cloned()
                        .chain(transform.output_columns().into_iter().map(str::to_string))
                        .collect();
                }
            }
        }

        for (channel, def) in chart.encoding() {
            for field_def in def.field_defs() {
                if let Some(field) = &field_def.field {
                    if !available.contains(field) {
                        return Err(EdaError::WriterError(format!(
                            "Column '{}' referenced by the {} channel does not exist in the chart data",
                            field,
                            channel.as_str()
                        )));
                    }
                }
            }
        }

        if let Some(facet) = chart.facet() {
            if let Some(missing) = facet
                .get_variables()
                .into_iter()
                .find(|field| !available.contains(field))
            {
                return Err(EdaError::WriterError(format!(
                    "Facet column '{}' does not exist in the chart data",
                    missing
                )));
            }
        }

        Ok(())
    }
}

fn transform_to_json(transform: &Transform) -> Value {
    match transform {
        Transform::Density {
            field,
            groupby,
            output,
        } => {
            let groupby: Vec<String> = groupby.iter().map(|g| escape_field(g)).collect();
            json!({
                "density": escape_field(field),
                "groupby": groupby,
                "as": [output.0, output.1],
            })
        }
    }
}

fn config_to_json(chart: &Chart) -> Value {
    let config = chart.config();
    let mut out = Map::new();

    if let Some(size) = config.title_font_size {
        out.insert("title".to_string(), json!({ "fontSize": size }));
    }

    let mut axis = Map::new();
    if let Some(size) = config.axis_label_font_size {
        axis.insert("labelFontSize".to_string(), json!(size));
    }
    if let Some(size) = config.axis_title_font_size {
        axis.insert("titleFontSize".to_string(), json!(size));
    }
    if !axis.is_empty() {
        out.insert("axis".to_string(), Value::Object(axis));
    }

    if let Some(legend) = &config.legend {
        out.insert(
            "legend".to_string(),
            json!({
                "titleFontSize": legend.title_font_size,
                "titleAlign": legend.title_align,
                "labelFontSize": legend.label_font_size,
            }),
        );
    }

    Value::Object(out)
}
