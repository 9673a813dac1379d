//! Histogram and density plots of a single feature

use super::palettes::check_scheme;
use super::types::CategoricalKind;
use super::{has_column, is_numeric_column};
use crate::chart::{
    ChartBuilder, Facet, FieldDef, FieldType, Mark, Scale, Transform,
};
use crate::{Chart, DataFrame, EdaError, Result};
use serde::{Deserialize, Serialize};

/// Name of the column produced by the density transform
const DENSITY_COLUMN: &str = "density";

/// Options for [`categorical_plot`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoricalOptions {
    /// Feature on the x-axis
    pub xval: String,
    pub plot_type: CategoricalKind,
    /// Column used to color (and, for density plots, group) the marks
    pub color: Option<String>,
    pub title: Option<String>,
    /// Font size of the title, axis labels and axis titles
    pub font_size: u32,
    pub color_scheme: String,
    pub plot_height: u32,
    pub plot_width: u32,
    /// Fill opacity of the density area, in (0, 1]
    pub opacity: f64,
    /// Column whose values split the chart into panels
    pub facet_factor: Option<String>,
    /// Number of panels per row
    pub facet_col: Option<u32>,
}

impl Default for CategoricalOptions {
    fn default() -> Self {
        Self {
            xval: String::new(),
            plot_type: CategoricalKind::Histogram,
            color: None,
            title: None,
            font_size: 10,
            color_scheme: "tableau20".to_string(),
            plot_height: 150,
            plot_width: 200,
            opacity: 1.0,
            facet_factor: None,
            facet_col: None,
        }
    }
}

impl CategoricalOptions {
    pub fn new(xval: impl Into<String>) -> Self {
        Self {
            xval: xval.into(),
            ..Self::default()
        }
    }
}

fn validate(data: &DataFrame, options: &CategoricalOptions) -> Result<()> {
    match (&options.facet_factor, options.facet_col) {
        (None, Some(_)) => {
            return Err(EdaError::ValueError(
                "facet_factor must be provided along with facet_col.".to_string(),
            ))
        }
        (Some(_), None) => {
            return Err(EdaError::ValueError(
                "Specify facet_col for facetting the plot".to_string(),
            ))
        }
        _ => {}
    }

    // NaN fails both comparisons, so test for the accepted range
    if !(options.opacity > 0.0 && options.opacity <= 1.0) {
        return Err(EdaError::ValueError(
            "opacity must be in range (0, 1)".to_string(),
        ));
    }
    if !has_column(data, &options.xval) {
        return Err(EdaError::ValueError(
            "xval must be a feature in the input dataframe".to_string(),
        ));
    }
    if let Some(color) = &options.color {
        if !has_column(data, color) {
            return Err(EdaError::ValueError(
                "color must be a feature in the input dataframe".to_string(),
            ));
        }
    }
    if let Some(factor) = &options.facet_factor {
        if !has_column(data, factor) {
            return Err(EdaError::ValueError(
                "facet_factor must be a feature in the input dataframe".to_string(),
            ));
        }
    }
    if options.facet_col == Some(0) {
        return Err(EdaError::TypeError(
            "facet_col must be a positive integer".to_string(),
        ));
    }
    if options.plot_type == CategoricalKind::Density && !is_numeric_column(data, &options.xval) {
        return Err(EdaError::ValueError(
            "xval must be numeric for a density plot".to_string(),
        ));
    }

    for (name, value) in [
        ("font_size", options.font_size),
        ("plot_width", options.plot_width),
        ("plot_height", options.plot_height),
    ] {
        if value == 0 {
            return Err(EdaError::TypeError(format!(
                "{} must be a positive integer",
                name
            )));
        }
    }

    Ok(())
}

/// Plot the distribution of one feature as a histogram or a density curve
///
/// Histograms count rows per value of `xval`. Density plots estimate a kernel
/// density of `xval`, one curve per value of `color`. When both facet options
/// are given the chart is repeated per value of `facet_factor`, `facet_col`
/// panels per row.
///
/// # Errors
///
/// Returns `EdaError::ValueError` or `EdaError::TypeError` naming the first
/// violated constraint; no chart is built in that case.
pub fn categorical_plot(data: &DataFrame, options: &CategoricalOptions) -> Result<Chart> {
    validate(data, options)?;

    let xval = &options.xval;
    let color = options.color.as_ref().map(|column| {
        FieldDef::new(column, FieldType::infer(data, column))
            .with_scale(Scale::scheme(&options.color_scheme))
    });

    let mut builder = match options.plot_type {
        CategoricalKind::Histogram => {
            ChartBuilder::new(data.clone(), Mark::new(options.plot_type.mark_type()))
                .x(FieldDef::new(xval, FieldType::infer(data, xval)))
                .y(FieldDef::count())
        }
        CategoricalKind::Density => {
            // density output keeps only grouped columns; the facet field must be one
            let mut groupby: Vec<String> = options.color.iter().cloned().collect();
            if let Some(factor) = &options.facet_factor {
                if !groupby.contains(factor) {
                    groupby.push(factor.clone());
                }
            }
            ChartBuilder::new(
                data.clone(),
                Mark::new(options.plot_type.mark_type()).with_opacity(options.opacity),
            )
            .transform(Transform::density(xval, groupby, xval, DENSITY_COLUMN))
            .x(FieldDef::new(xval, FieldType::Quantitative))
            .y(FieldDef::new(DENSITY_COLUMN, FieldType::Quantitative))
        }
    };

    if let Some(color) = color {
        builder = builder.color(color);
    }
    if let Some(title) = &options.title {
        builder = builder.title(title);
    }
    if let (Some(factor), Some(columns)) = (&options.facet_factor, options.facet_col) {
        builder = builder.facet(Facet::wrap(factor, columns));
    }

    let chart = builder
        .properties(options.plot_width, options.plot_height)
        .configure_title(options.font_size)
        .configure_axis(options.font_size, Some(options.font_size))
        .warnings(check_scheme(&options.color_scheme))
        .build();

    tracing::debug!(
        xval = %xval,
        plot_type = %options.plot_type,
        faceted = chart.is_faceted(),
        "Built categorical plot"
    );
    Ok(chart)
}
