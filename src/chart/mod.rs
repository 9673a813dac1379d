//! Chart specification types for simpler-eda
//!
//! This module contains the typed, immutable description of a chart that the
//! plot helpers produce and the writers serialize.
//!
//! # Architecture
//!
//! - `main` - the [`Chart`] struct and the warnings recorded while building it
//! - `types` - marks, encoding channels, field definitions, scales, transforms, config
//! - `facet` - small-multiples layout
//! - `builder` - [`ChartBuilder`], the fluent way to assemble a chart

pub mod builder;
pub mod facet;
pub mod main;
pub mod types;

pub use builder::ChartBuilder;
pub use facet::Facet;
pub use main::{Chart, ChartWarning};
pub use types::*;
