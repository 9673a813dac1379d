//! Axis value transforms
//!
//! A transform rewrites every value of a numeric column. The numerical plotter
//! uses [`Log`] when an axis log transform is requested and [`Identity`]
//! otherwise.

use crate::{EdaError, Result};
use polars::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Identity,
    Log,
}

/// Core trait for value transforms
pub trait TransformTrait: std::fmt::Debug + Send + Sync {
    fn transform_kind(&self) -> TransformKind;

    fn name(&self) -> &'static str;

    /// Whether the transform is defined for `value`; `ln(0) = -inf` counts as defined
    fn is_value_in_domain(&self, value: f64) -> bool;

    fn transform(&self, value: f64) -> f64;
}

/// Identity transform - values pass through unchanged
#[derive(Debug, Clone, Copy)]
pub struct Identity;

impl TransformTrait for Identity {
    fn transform_kind(&self) -> TransformKind {
        TransformKind::Identity
    }

    fn name(&self) -> &'static str {
        "identity"
    }

    fn is_value_in_domain(&self, value: f64) -> bool {
        !value.is_nan()
    }

    fn transform(&self, value: f64) -> f64 {
        value
    }
}

/// Natural logarithm
#[derive(Debug, Clone, Copy)]
pub struct Log;

impl TransformTrait for Log {
    fn transform_kind(&self) -> TransformKind {
        TransformKind::Log
    }

    fn name(&self) -> &'static str {
        "log"
    }

    fn is_value_in_domain(&self, value: f64) -> bool {
        value >= 0.0
    }

    fn transform(&self, value: f64) -> f64 {
        value.ln()
    }
}

impl std::fmt::Display for Log {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Read a numeric column as optional f64 values
pub fn numeric_values(df: &DataFrame, column: &str) -> Result<Vec<Option<f64>>> {
    let series = df.column(column)?.as_materialized_series();
    let cast = series.cast(&DataType::Float64)?;
    Ok(cast.f64()?.into_iter().collect())
}

/// Apply `transform` to every value of `column` in place
///
/// Values outside the transform's domain are transformed anyway; the return
/// value is how many non-null values were outside it.
pub fn transform_column(
    df: &mut DataFrame,
    column: &str,
    transform: &dyn TransformTrait,
) -> Result<usize> {
    if transform.transform_kind() == TransformKind::Identity {
        return Ok(0);
    }

    let values = numeric_values(df, column)?;
    let out_of_domain = values
        .iter()
        .flatten()
        .filter(|v| !v.is_nan() && !transform.is_value_in_domain(**v))
        .count();

    let transformed: Vec<Option<f64>> = values
        .into_iter()
        .map(|v| v.map(|v| transform.transform(v)))
        .collect();
    df.with_column(Series::new(column.into(), transformed))
        .map_err(|e| {
            EdaError::DataError(format!(
                "Failed to apply {} transform to '{}': {}",
                transform.name(),
                column,
                e
            ))
        })?;

    Ok(out_of_domain)
}

/// Minimum and maximum of the finite values of a column
pub fn finite_range(df: &DataFrame, column: &str) -> Result<Option<(f64, f64)>> {
    let range = numeric_values(df, column)?
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        });
    Ok(range)
}
