//! Facet types for small-multiples charts

use serde::{Deserialize, Serialize};

/// Wrapped facet: one panel per distinct value of `field`, laid out in rows of
/// `columns` panels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    pub field: String,
    pub columns: u32,
}

impl Facet {
    pub fn wrap(field: impl Into<String>, columns: u32) -> Self {
        Self {
            field: field.into(),
            columns,
        }
    }

    /// Column names used to split the data into panels
    pub fn get_variables(&self) -> Vec<String> {
        vec![self.field.clone()]
    }
}
