//! The Chart specification
//!
//! A [`Chart`] is produced by [`ChartBuilder`](super::ChartBuilder) and is
//! read-only afterwards. It owns the data it describes, so a chart can be
//! serialized without access to the caller's table.

use super::facet::Facet;
use super::types::{Channel, ChannelDef, ChartConfig, Encoding, FieldDef, Mark, Transform};
use crate::writer::{VegaLiteWriter, Writer};
use crate::{DataFrame, Result};

/// Non-fatal diagnostic recorded while building a chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartWarning {
    /// A log transform was applied to a column holding negative values
    NegativeLogInput { column: String, count: usize },
    /// The color scheme is not one of the named Vega schemes
    UnknownColorScheme { scheme: String },
    /// A fixed mark color is neither a column nor a CSS color
    InvalidColor { color: String },
}

impl std::fmt::Display for ChartWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartWarning::NegativeLogInput { column, count } => write!(
                f,
                "Column '{}' contains {} negative value(s); their log transform is undefined",
                column, count
            ),
            ChartWarning::UnknownColorScheme { scheme } => {
                write!(f, "'{}' is not a known Vega color scheme", scheme)
            }
            ChartWarning::InvalidColor { color } => {
                write!(f, "'{}' is neither a column nor a valid CSS color", color)
            }
        }
    }
}

/// Immutable chart specification
#[derive(Debug, Clone)]
pub struct Chart {
    pub(super) data: DataFrame,
    pub(super) mark: Mark,
    pub(super) encoding: Encoding,
    pub(super) transforms: Vec<Transform>,
    pub(super) title: Option<String>,
    pub(super) width: Option<u32>,
    pub(super) height: Option<u32>,
    pub(super) facet: Option<Facet>,
    pub(super) config: ChartConfig,
    pub(super) interactive: bool,
    pub(super) warnings: Vec<ChartWarning>,
}

impl Chart {
    /// Data the chart is drawn from (after any local transformation)
    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn mark(&self) -> &Mark {
        &self.mark
    }

    pub fn encoding(&self) -> &Encoding {
        &self.encoding
    }

    pub fn channel(&self, channel: Channel) -> Option<&ChannelDef> {
        self.encoding.get(&channel)
    }

    /// Single field definition of a channel, if the channel encodes exactly one
    pub fn field(&self, channel: Channel) -> Option<&FieldDef> {
        match self.encoding.get(&channel)? {
            ChannelDef::Field(def) => Some(def),
            ChannelDef::Fields(_) => None,
        }
    }

    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn height(&self) -> Option<u32> {
        self.height
    }

    pub fn facet(&self) -> Option<&Facet> {
        self.facet.as_ref()
    }

    pub fn is_faceted(&self) -> bool {
        self.facet.is_some()
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn warnings(&self) -> &[ChartWarning] {
        &self.warnings
    }

    /// Render as a pretty-printed Vega-Lite JSON string
    pub fn to_vegalite(&self) -> Result<String> {
        VegaLiteWriter::new().write(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartBuilder, FieldType, MarkType};
    use polars::prelude::*;

    #[test]
    fn test_field_accessor() {
        let df = df! { "a" => &[1, 2], "b" => &[3, 4] }.unwrap();
        let chart = ChartBuilder::new(df, Mark::new(MarkType::Circle))
            .x(FieldDef::new("a", FieldType::Quantitative))
            .tooltip(vec![FieldDef::new("b", FieldType::Quantitative)])
            .build();

        assert_eq!(
            chart.field(Channel::X).and_then(|d| d.field.as_deref()),
            Some("a")
        );
        assert!(chart.field(Channel::Tooltip).is_none());
        assert!(chart.channel(Channel::Tooltip).is_some());
        assert!(chart.field(Channel::Y).is_none());
    }

    #[test]
    fn test_warning_messages() {
        let warning = ChartWarning::NegativeLogInput {
            column: "x".to_string(),
            count: 2,
        };
        assert!(warning.to_string().contains("2 negative value(s)"));

        let warning = ChartWarning::UnknownColorScheme {
            scheme: "rainbowz".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "'rainbowz' is not a known Vega color scheme"
        );
    }
}
