//! Scatter and line charts relating two numeric features

use super::palettes::check_scheme;
use super::types::NumericalKind;
use super::{has_column, is_numeric_column};
use crate::chart::{ChartBuilder, ChartWarning, FieldDef, FieldType, Mark, Scale};
use crate::stat::{finite_range, transform_column, Identity, Log, TransformTrait};
use crate::{Chart, DataFrame, EdaError, Result};
use serde::{Deserialize, Serialize};

/// Options for [`numerical_plot`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericalOptions {
    pub xval: String,
    pub yval: String,
    pub plot_type: NumericalKind,
    /// Column to color by, or a fixed mark color
    pub color: Option<String>,
    pub title: Option<String>,
    pub font_size: u32,
    pub color_scheme: String,
    pub plot_width: u32,
    pub plot_height: u32,
    /// Natural log of the x values
    pub x_transform: bool,
    /// Natural log of the y values
    pub y_transform: bool,
}

impl Default for NumericalOptions {
    fn default() -> Self {
        Self {
            xval: String::new(),
            yval: String::new(),
            plot_type: NumericalKind::Scatter,
            color: None,
            title: None,
            font_size: 10,
            color_scheme: "yellowgreenblue".to_string(),
            plot_width: 400,
            plot_height: 300,
            x_transform: false,
            y_transform: false,
        }
    }
}

impl NumericalOptions {
    pub fn new(xval: impl Into<String>, yval: impl Into<String>) -> Self {
        Self {
            xval: xval.into(),
            yval: yval.into(),
            ..Self::default()
        }
    }
}

fn validate(data: &DataFrame, options: &NumericalOptions) -> Result<()> {
    if !has_column(data, &options.xval) {
        return Err(EdaError::ValueError(
            "Variable xval not found in input dataframe.".to_string(),
        ));
    }
    if !has_column(data, &options.yval) {
        return Err(EdaError::ValueError(
            "Variable yval not found in input dataframe.".to_string(),
        ));
    }
    if !is_numeric_column(data, &options.xval) {
        return Err(EdaError::ValueError(
            "Your x-variable needs to be numeric.".to_string(),
        ));
    }
    if !is_numeric_column(data, &options.yval) {
        return Err(EdaError::ValueError(
            "Your y-variable needs to be numeric.".to_string(),
        ));
    }

    for (name, value) in [
        ("font_size", options.font_size),
        ("plot_width", options.plot_width),
        ("plot_height", options.plot_height),
    ] {
        if value == 0 {
            return Err(EdaError::TypeError(format!(
                "TypeError: {} must be a positive integer.",
                name
            )));
        }
    }

    if options.color.as_deref().is_some_and(str::is_empty) {
        return Err(EdaError::TypeError(
            "TypeError: color must be a non-empty string.".to_string(),
        ));
    }
    if options.color_scheme.is_empty() {
        return Err(EdaError::TypeError(
            "TypeError: color_scheme must be a non-empty string.".to_string(),
        ));
    }

    Ok(())
}

/// Column name as shown on axes and legends
///
/// Underscores become spaces unless the spaced name is already taken by
/// another column, in which case the name is kept as is.
fn display_name(data: &DataFrame, column: &str) -> String {
    let spaced = column.replace('_', " ");
    if spaced != column && has_column(data, &spaced) {
        column.to_string()
    } else {
        spaced
    }
}

fn axis_transform(log: bool) -> &'static dyn TransformTrait {
    if log {
        &Log
    } else {
        &Identity
    }
}

/// Apply `transform` to `column`, recording a warning for out-of-domain inputs
fn apply_transform(
    df: &mut DataFrame,
    column: &str,
    transform: &dyn TransformTrait,
    warnings: &mut Vec<ChartWarning>,
) -> Result<()> {
    let negatives = transform_column(df, column, transform)?;
    if negatives > 0 {
        tracing::warn!(
            column = column,
            count = negatives,
            transform = transform.name(),
            "Transform applied to values outside its domain, which become NaN"
        );
        warnings.push(ChartWarning::NegativeLogInput {
            column: column.to_string(),
            count: negatives,
        });
    }
    Ok(())
}

/// Quantitative axis whose scale domain is the finite range of the column
fn axis(df: &DataFrame, column: &str) -> Result<FieldDef> {
    let def = FieldDef::new(column, FieldType::Quantitative);
    Ok(match finite_range(df, column)? {
        Some((min, max)) => def.with_scale(Scale::default().with_domain(min, max)),
        None => def,
    })
}

/// Plot `yval` against `xval` as a scatter or line chart
///
/// The chart is drawn from a copy of `data` in which underscores in the x, y
/// and color column names become spaces (unless that name is already a
/// column), and requested log transforms have
/// been applied. Both axis scales span the finite range of the plotted values.
///
/// `color` naming a column colors the marks by that column; any other value is
/// used as a fixed mark color.
///
/// # Errors
///
/// Returns `EdaError::ValueError` or `EdaError::TypeError` naming the first
/// violated constraint.
pub fn numerical_plot(data: &DataFrame, options: &NumericalOptions) -> Result<Chart> {
    validate(data, options)?;

    let color_column = options
        .color
        .as_deref()
        .filter(|color| has_column(data, color));

    let mut df = data.clone();
    let mut renamed: Vec<&str> = Vec::new();
    for column in [Some(options.xval.as_str()), Some(options.yval.as_str()), color_column]
        .into_iter()
        .flatten()
    {
        let display = display_name(data, column);
        if display != column && !renamed.contains(&column) {
            df.rename(column, display.as_str().into())?;
            renamed.push(column);
        }
    }

    let x = display_name(data, &options.xval);
    let y = display_name(data, &options.yval);

    let mut warnings = Vec::new();
    apply_transform(&mut df, &x, axis_transform(options.x_transform), &mut warnings)?;
    // a shared column is transformed once
    let y_log = options.y_transform && !(options.x_transform && x == y);
    apply_transform(&mut df, &y, axis_transform(y_log), &mut warnings)?;

    let mut mark = Mark::new(options.plot_type.mark_type());
    let color = match (color_column, options.color.as_deref()) {
        (Some(column), _) => {
            let column = display_name(data, column);
            warnings.extend(check_scheme(&options.color_scheme));
            Some(
                FieldDef::new(&column, FieldType::infer(&df, &column))
                    .with_scale(Scale::scheme(&options.color_scheme)),
            )
        }
        (None, Some(literal)) => {
            if csscolorparser::parse(literal).is_err() {
                tracing::warn!(color = literal, "Color is neither a column nor a CSS color");
                warnings.push(ChartWarning::InvalidColor {
                    color: literal.to_string(),
                });
            }
            mark = mark.with_color(literal);
            None
        }
        (None, None) => None,
    };

    let title = options
        .title
        .clone()
        .unwrap_or_else(|| format!("{} vs {} {} plot", x, y, options.plot_type));

    let x_def = axis(&df, &x)?;
    let y_def = axis(&df, &y)?;
    let mut builder = ChartBuilder::new(df, mark).x(x_def).y(y_def);
    if let Some(color) = color {
        builder = builder.color(color);
    }

    let chart = builder
        .title(title)
        .properties(options.plot_width, options.plot_height)
        .configure_title(options.font_size)
        .configure_axis(options.font_size, Some(options.font_size))
        .warnings(warnings)
        .build();

    tracing::debug!(
        x = %x,
        y = %y,
        plot_type = %options.plot_type,
        warnings = chart.warnings().len(),
        "Built numerical plot"
    );
    Ok(chart)
}
