//! Fluent chart construction
//!
//! ```rust,ignore
//! let chart = ChartBuilder::new(df, Mark::new(MarkType::Bar))
//!     .x(FieldDef::new("Origin", FieldType::Nominal))
//!     .y(FieldDef::count())
//!     .properties(200, 150)
//!     .configure_title(10)
//!     .build();
//! ```

use super::facet::Facet;
use super::main::{Chart, ChartWarning};
use super::types::{
    Channel, ChannelDef, ChartConfig, Encoding, FieldDef, LegendConfig, Mark, Transform,
};
use crate::DataFrame;

/// Accumulates a chart specification; [`build`](ChartBuilder::build) freezes it
#[derive(Debug, Clone)]
pub struct ChartBuilder {
    data: DataFrame,
    mark: Mark,
    encoding: Encoding,
    transforms: Vec<Transform>,
    title: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    facet: Option<Facet>,
    config: ChartConfig,
    interactive: bool,
    warnings: Vec<ChartWarning>,
}

impl ChartBuilder {
    pub fn new(data: DataFrame, mark: Mark) -> Self {
        Self {
            data,
            mark,
            encoding: Encoding::new(),
            transforms: Vec::new(),
            title: None,
            width: None,
            height: None,
            facet: None,
            config: ChartConfig::default(),
            interactive: false,
            warnings: Vec::new(),
        }
    }

    /// Set a channel, replacing any previous definition
    pub fn encode(mut self, channel: Channel, def: ChannelDef) -> Self {
        self.encoding.insert(channel, def);
        self
    }

    pub fn x(self, def: FieldDef) -> Self {
        self.encode(Channel::X, ChannelDef::Field(def))
    }

    pub fn y(self, def: FieldDef) -> Self {
        self.encode(Channel::Y, ChannelDef::Field(def))
    }

    pub fn color(self, def: FieldDef) -> Self {
        self.encode(Channel::Color, ChannelDef::Field(def))
    }

    pub fn size(self, def: FieldDef) -> Self {
        self.encode(Channel::Size, ChannelDef::Field(def))
    }

    pub fn tooltip(self, defs: Vec<FieldDef>) -> Self {
        self.encode(Channel::Tooltip, ChannelDef::Fields(defs))
    }

    pub fn transform(mut self, transform: Transform) -> Self {
        self.transforms.push(transform);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn properties(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Replicate the chart across panels of `facet.field`
    pub fn facet(mut self, facet: Facet) -> Self {
        self.facet = Some(facet);
        self
    }

    pub fn configure_title(mut self, font_size: u32) -> Self {
        self.config.title_font_size = Some(font_size);
        self
    }

    pub fn configure_axis(mut self, label_font_size: u32, title_font_size: Option<u32>) -> Self {
        self.config.axis_label_font_size = Some(label_font_size);
        self.config.axis_title_font_size = title_font_size;
        self
    }

    pub fn configure_legend(mut self, legend: LegendConfig) -> Self {
        self.config.legend = Some(legend);
        self
    }

    /// Bind pan and zoom to the x/y scales
    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    pub fn warnings(mut self, warnings: impl IntoIterator<Item = ChartWarning>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    pub fn build(self) -> Chart {
        Chart {
            data: self.data,
            mark: self.mark,
            encoding: self.encoding,
            transforms: self.transforms,
            title: self.title,
            width: self.width,
            height: self.height,
            facet: self.facet,
            config: self.config,
            interactive: self.interactive,
            warnings: self.warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{FieldType, MarkType, Scale};
    use polars::prelude::*;

    fn sample() -> DataFrame {
        df! {
            "Origin" => &["USA", "Europe", "Japan"],
            "Horsepower" => &[130.0, 90.0, 88.0],
        }
        .unwrap()
    }

    #[test]
    fn test_builder_accumulates_spec() {
        let chart = ChartBuilder::new(sample(), Mark::new(MarkType::Bar))
            .x(FieldDef::new("Origin", FieldType::Nominal))
            .y(FieldDef::count())
            .color(
                FieldDef::new("Origin", FieldType::Nominal).with_scale(Scale::scheme("tableau20")),
            )
            .title("Histogram")
            .properties(400, 200)
            .configure_title(10)
            .configure_axis(10, Some(10))
            .build();

        assert_eq!(chart.mark().mark_type, MarkType::Bar);
        assert_eq!(chart.encoding().len(), 3);
        assert_eq!(chart.title(), Some("Histogram"));
        assert_eq!(chart.width(), Some(400));
        assert_eq!(chart.height(), Some(200));
        assert_eq!(chart.config().title_font_size, Some(10));
        assert_eq!(chart.config().axis_title_font_size, Some(10));
        assert!(!chart.is_faceted());
        assert!(!chart.is_interactive());
        assert!(chart.warnings().is_empty());
    }

    #[test]
    fn test_encode_replaces_channel() {
        let chart = ChartBuilder::new(sample(), Mark::new(MarkType::Circle))
            .x(FieldDef::new("Origin", FieldType::Nominal))
            .x(FieldDef::new("Horsepower", FieldType::Quantitative))
            .build();

        let x = chart.field(Channel::X).unwrap();
        assert_eq!(x.field.as_deref(), Some("Horsepower"));
        assert_eq!(chart.encoding().len(), 1);
    }

    #[test]
    fn test_facet_and_interactive() {
        let chart = ChartBuilder::new(sample(), Mark::new(MarkType::Bar))
            .facet(Facet::wrap("Origin", 2))
            .interactive()
            .build();

        assert!(chart.is_faceted());
        assert_eq!(chart.facet().unwrap().columns, 2);
        assert!(chart.is_interactive());
    }
}
