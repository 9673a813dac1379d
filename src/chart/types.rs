//! Mark, encoding and scale types
//!
//! These mirror the subset of the Vega-Lite grammar the plot helpers need.
//! The writer is responsible for turning them into JSON.

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Marks
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkType {
    Bar,
    Area,
    Circle,
    Line,
    Rect,
}

impl MarkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkType::Bar => "bar",
            MarkType::Area => "area",
            MarkType::Circle => "circle",
            MarkType::Line => "line",
            MarkType::Rect => "rect",
        }
    }
}

impl std::fmt::Display for MarkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mark definition with its fixed (non data-driven) properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub mark_type: MarkType,
    pub opacity: Option<f64>,
    /// Fixed color for every mark, used when color is not mapped to a column
    pub color: Option<String>,
}

impl Mark {
    pub fn new(mark_type: MarkType) -> Self {
        Self {
            mark_type,
            opacity: None,
            color: None,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

// ============================================================================
// Encodings
// ============================================================================

/// Encoding channels used by the plot helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    X,
    Y,
    Color,
    Size,
    Tooltip,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::X => "x",
            Channel::Y => "y",
            Channel::Color => "color",
            Channel::Size => "size",
            Channel::Tooltip => "tooltip",
        }
    }
}

/// Vega-Lite measurement type of an encoded field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Quantitative,
    Nominal,
    Ordinal,
    Temporal,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Quantitative => "quantitative",
            FieldType::Nominal => "nominal",
            FieldType::Ordinal => "ordinal",
            FieldType::Temporal => "temporal",
        }
    }

    /// Infer the field type of a DataFrame column from its dtype
    ///
    /// String columns are nominal even when their values look numeric (codes
    /// such as `"02134"`). Unknown columns fall back to nominal.
    pub fn infer(df: &DataFrame, field: &str) -> Self {
        let Ok(column) = df.column(field) else {
            return FieldType::Nominal;
        };
        match column.dtype() {
            dtype if is_numeric_dtype(dtype) => FieldType::Quantitative,
            DataType::Date | DataType::Datetime(_, _) => FieldType::Temporal,
            _ => FieldType::Nominal,
        }
    }
}

/// Whether a dtype is a primitive integer or float type
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    use DataType::*;
    matches!(
        dtype,
        Int8 | Int16 | Int32 | Int64 | UInt8 | UInt16 | UInt32 | UInt64 | Float32 | Float64
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregate {
    Count,
}

impl Aggregate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregate::Count => "count",
        }
    }
}

/// Scale properties attached to an encoded field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    /// Named Vega color scheme
    pub scheme: Option<String>,
    pub domain: Option<(f64, f64)>,
    pub reverse: bool,
}

impl Scale {
    pub fn scheme(name: impl Into<String>) -> Self {
        Self {
            scheme: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_domain(mut self, min: f64, max: f64) -> Self {
        self.domain = Some((min, max));
        self
    }

    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }
}

/// A data-driven encoding: a field (or an aggregate) with its type and scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Column name; `None` for aggregates that need no input field (count)
    pub field: Option<String>,
    pub field_type: FieldType,
    pub aggregate: Option<Aggregate>,
    /// Axis or legend title; `Some("")` hides it
    pub title: Option<String>,
    pub scale: Option<Scale>,
}

impl FieldDef {
    pub fn new(field: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            field: Some(field.into()),
            field_type,
            aggregate: None,
            title: None,
            scale: None,
        }
    }

    /// Row count aggregate (`count()`)
    pub fn count() -> Self {
        Self {
            field: None,
            field_type: FieldType::Quantitative,
            aggregate: Some(Aggregate::Count),
            title: None,
            scale: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }
}

/// What a channel encodes: one field, or a list of fields (tooltips)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChannelDef {
    Field(FieldDef),
    Fields(Vec<FieldDef>),
}

impl ChannelDef {
    /// Every field definition held by this channel
    pub fn field_defs(&self) -> Vec<&FieldDef> {
        match self {
            ChannelDef::Field(def) => vec![def],
            ChannelDef::Fields(defs) => defs.iter().collect(),
        }
    }
}

pub type Encoding = BTreeMap<Channel, ChannelDef>;

// ============================================================================
// Transforms
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Transform {
    /// Kernel density estimate of `field`, one curve per `groupby` combination.
    /// Produces the columns `output.0` (sample value) and `output.1` (density).
    Density {
        field: String,
        groupby: Vec<String>,
        output: (String, String),
    },
}

impl Transform {
    pub fn density(
        field: impl Into<String>,
        groupby: Vec<String>,
        value_as: impl Into<String>,
        density_as: impl Into<String>,
    ) -> Self {
        Transform::Density {
            field: field.into(),
            groupby,
            output: (value_as.into(), density_as.into()),
        }
    }

    /// Columns this transform adds to the data
    pub fn output_columns(&self) -> Vec<&str> {
        match self {
            Transform::Density { output, .. } => vec![output.0.as_str(), output.1.as_str()],
        }
    }
}

// ============================================================================
// Config
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendConfig {
    pub title_font_size: u32,
    pub title_align: String,
    pub label_font_size: u32,
}

/// Chart-wide styling (Vega-Lite `config`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub title_font_size: Option<u32>,
    pub axis_label_font_size: Option<u32>,
    pub axis_title_font_size: Option<u32>,
    pub legend: Option<LegendConfig>,
}

impl ChartConfig {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_type_inference() {
        let df = df! {
            "ints" => &[1i64, 2, 3],
            "floats" => &[1.5, 2.5, 3.5],
        }
        .unwrap();

        assert_eq!(FieldType::infer(&df, "ints"), FieldType::Quantitative);
        assert_eq!(FieldType::infer(&df, "floats"), FieldType::Quantitative);
    }

    #[test]
    fn test_string_type_inference() {
        let df = df! {
            "category" => &["A", "B", "C"],
            "zip" => &["02134", "10001", "A1"],
        }
        .unwrap();

        assert_eq!(FieldType::infer(&df, "category"), FieldType::Nominal);
        assert_eq!(FieldType::infer(&df, "zip"), FieldType::Nominal);
    }

    #[test]
    fn test_missing_column_is_nominal() {
        let df = df! { "x" => &[1, 2] }.unwrap();
        assert_eq!(FieldType::infer(&df, "nope"), FieldType::Nominal);
    }

    #[test]
    fn test_boolean_is_not_numeric() {
        assert!(!is_numeric_dtype(&DataType::Boolean));
        assert!(!is_numeric_dtype(&DataType::String));
        assert!(is_numeric_dtype(&DataType::UInt8));
    }

    #[test]
    fn test_density_output_columns() {
        let t = Transform::density("Horsepower", vec!["Origin".into()], "Horsepower", "density");
        assert_eq!(t.output_columns(), vec!["Horsepower", "density"]);
    }

    #[test]
    fn test_count_field_def() {
        let def = FieldDef::count();
        assert_eq!(def.field, None);
        assert_eq!(def.aggregate, Some(Aggregate::Count));
        assert_eq!(def.field_type, FieldType::Quantitative);
    }
}
