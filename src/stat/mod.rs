//! Statistics used by the plot helpers
//!
//! - `correlation` - Pearson, Spearman and Kendall coefficients
//! - `transform` - per-column value transforms (natural log) and ranges

pub mod correlation;
pub mod transform;

pub use correlation::{correlation, CorrMethod};
pub use transform::{finite_range, numeric_values, transform_column, Identity, Log, TransformTrait};
