//! Output writers for chart specifications
//!
//! A writer turns a [`Chart`] into a concrete output format.
//!
//! - [`VegaLiteWriter`] - Vega-Lite v5 JSON
//! - [`HtmlWriter`] - standalone HTML page embedding the Vega-Lite JSON

mod html;
pub mod vegalite;

pub use html::HtmlWriter;
pub use vegalite::VegaLiteWriter;

use crate::{Chart, Result};

/// Trait for chart output formats
pub trait Writer {
    /// Output type produced by this writer
    type Output;

    /// Serialize a chart
    ///
    /// # Errors
    ///
    /// Returns `EdaError::WriterError` if the chart references columns that
    /// do not exist in its data or if serialization fails.
    fn write(&self, chart: &Chart) -> Result<Self::Output>;

    /// Check that a chart can be written without producing output
    fn validate(&self, chart: &Chart) -> Result<()>;
}
