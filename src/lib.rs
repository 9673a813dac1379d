//! simpler-eda - exploratory data analysis charts for Polars DataFrames
//!
//! Three helpers turn a DataFrame into a declarative [`Chart`] that can be
//! serialized to Vega-Lite JSON:
//!
//! - [`categorical_plot`] - histogram or density of one feature, optionally faceted
//! - [`numerical_plot`] - scatter or line chart relating two numeric features
//! - [`corr_map`] - heatmap of pairwise correlations between numeric features
//!
//! # Example
//!
//! ```rust,ignore
//! use simpler_eda::{categorical_plot, CategoricalOptions};
//! use simpler_eda::writer::{VegaLiteWriter, Writer};
//!
//! let cars = simpler_eda::reader::data::cars()?;
//! let options = CategoricalOptions {
//!     color: Some("Origin".to_string()),
//!     ..CategoricalOptions::new("Origin")
//! };
//! let chart = categorical_plot(&cars, &options)?;
//! let json = VegaLiteWriter::new().write(&chart)?;
//! ```
//!
//! Options are validated eagerly: a failing call never returns a partial chart.
//! Non-fatal diagnostics (for example a log transform over negative values) are
//! emitted as `tracing` events and recorded in [`Chart::warnings`].

pub mod chart;
pub mod plot;
pub mod reader;
pub mod stat;
pub mod writer;

pub use chart::{Chart, ChartBuilder, ChartWarning};
pub use plot::{
    categorical_plot, corr_map, corr_matrix, numerical_plot, CategoricalKind,
    CategoricalOptions, CorrMapOptions, CorrMethod, NumericalKind, NumericalOptions,
};

// Re-export polars types used throughout the API
pub use polars::prelude::DataFrame;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main error type for simpler-eda operations
///
/// Validation variants display their message verbatim so callers can match on
/// the exact wording of each failed constraint.
#[derive(Debug, thiserror::Error)]
pub enum EdaError {
    /// An argument has the wrong shape (zero size, empty string, ...)
    #[error("{0}")]
    TypeError(String),

    /// An argument has a disallowed value (unknown kind, missing column, ...)
    #[error("{0}")]
    ValueError(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Reader error: {0}")]
    ReaderError(String),

    #[error("Writer error: {0}")]
    WriterError(String),
}

impl From<polars::prelude::PolarsError> for EdaError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        EdaError::DataError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EdaError>;
