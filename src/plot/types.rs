//! Plot kinds accepted by the plot helpers

use crate::chart::MarkType;
use crate::EdaError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Categorical plot variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoricalKind {
    #[default]
    Histogram,
    Density,
}

impl CategoricalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoricalKind::Histogram => "histogram",
            CategoricalKind::Density => "density",
        }
    }

    pub fn mark_type(&self) -> MarkType {
        match self {
            CategoricalKind::Histogram => MarkType::Bar,
            CategoricalKind::Density => MarkType::Area,
        }
    }
}

impl std::fmt::Display for CategoricalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CategoricalKind {
    type Err = EdaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "histogram" => Ok(CategoricalKind::Histogram),
            "density" => Ok(CategoricalKind::Density),
            _ => Err(EdaError::ValueError(
                "plot_type must be either 'histogram' or 'density'".to_string(),
            )),
        }
    }
}

/// Numerical plot variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericalKind {
    #[default]
    Scatter,
    Line,
}

impl NumericalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumericalKind::Scatter => "scatter",
            NumericalKind::Line => "line",
        }
    }

    pub fn mark_type(&self) -> MarkType {
        match self {
            NumericalKind::Scatter => MarkType::Circle,
            NumericalKind::Line => MarkType::Line,
        }
    }
}

impl std::fmt::Display for NumericalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NumericalKind {
    type Err = EdaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scatter" => Ok(NumericalKind::Scatter),
            "line" => Ok(NumericalKind::Line),
            _ => Err(EdaError::ValueError(
                "InputValueError: plot_type must be either 'scatter' or 'line'.".to_string(),
            )),
        }
    }
}
