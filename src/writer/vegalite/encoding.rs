//! Encoding channel construction for Vega-Lite writer
//!
//! This module handles building Vega-Lite encoding channels and the mark
//! object from typed chart definitions.

use crate::chart::{ChannelDef, Encoding, FieldDef, Mark, Scale};
use serde_json::{json, Map, Value};

/// Escape characters Vega-Lite interprets as nested field access
///
/// A column named `a.b` would otherwise be read as field `b` of object `a`.
pub(super) fn escape_field(field: &str) -> String {
    let mut escaped = String::with_capacity(field.len());
    for c in field.chars() {
        if matches!(c, '.' | '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub(super) fn mark_to_json(mark: &Mark) -> Value {
    let mut out = Map::new();
    out.insert("type".to_string(), json!(mark.mark_type.as_str()));
    if let Some(opacity) = mark.opacity {
        out.insert("opacity".to_string(), json!(opacity));
    }
    if let Some(color) = &mark.color {
        out.insert("color".to_string(), json!(color));
    }
    Value::Object(out)
}

pub(super) fn scale_to_json(scale: &Scale) -> Value {
    let mut out = Map::new();
    if let Some(scheme) = &scale.scheme {
        out.insert("scheme".to_string(), json!(scheme));
    }
    if let Some((min, max)) = scale.domain {
        out.insert("domain".to_string(), json!([min, max]));
    }
    if scale.reverse {
        out.insert("reverse".to_string(), json!(true));
    }
    Value::Object(out)
}

pub(super) fn field_def_to_json(def: &FieldDef) -> Value {
    let mut out = Map::new();
    if let Some(field) = &def.field {
        out.insert("field".to_string(), json!(escape_field(field)));
    }
    out.insert("type".to_string(), json!(def.field_type.as_str()));
    if let Some(aggregate) = def.aggregate {
        out.insert("aggregate".to_string(), json!(aggregate.as_str()));
    }
    if let Some(title) = &def.title {
        out.insert("title".to_string(), json!(title));
    }
    if let Some(scale) = &def.scale {
        out.insert("scale".to_string(), scale_to_json(scale));
    }
    Value::Object(out)
}

/// Build the `encoding` object, one entry per channel
pub(super) fn build_encoding(encoding: &Encoding) -> Value {
    let mut out = Map::new();
    for (channel, def) in encoding {
        let value = match def {
            ChannelDef::Field(field_def) => field_def_to_json(field_def),
            ChannelDef::Fields(defs) => Value::Array(defs.iter().map(field_def_to_json).collect()),
        };
        out.insert(channel.as_str().to_string(), value);
    }
    Value::Object(out)
}
