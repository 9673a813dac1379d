//! Plot helpers
//!
//! Each helper validates its options against the input DataFrame, builds a
//! [`Chart`](crate::Chart) and never mutates the caller's data.
//!
//! - `categorical` - histogram / density of one feature
//! - `numerical` - scatter / line chart of two numeric features
//! - `corr` - correlation heatmap
//! - `types` - plot kinds
//! - `palettes` - named Vega color schemes

pub mod categorical;
pub mod corr;
pub mod numerical;
pub mod palettes;
pub mod types;

pub use categorical::{categorical_plot, CategoricalOptions};
pub use corr::{corr_map, corr_matrix, CorrMapOptions};
pub use numerical::{numerical_plot, NumericalOptions};
pub use types::{CategoricalKind, NumericalKind};

pub use crate::stat::CorrMethod;

use crate::chart::is_numeric_dtype;
use crate::DataFrame;

pub(crate) fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_index(name).is_some()
}

pub(crate) fn is_numeric_column(df: &DataFrame, name: &str) -> bool {
    df.column(name)
        .map(|column| is_numeric_dtype(column.dtype()))
        .unwrap_or(false)
}
