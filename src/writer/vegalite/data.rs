//! DataFrame to inline Vega-Lite data conversion

use crate::Result;
use polars::prelude::*;
use serde_json::{json, Map, Value};

/// Convert a DataFrame to Vega-Lite data values (array of row objects)
///
/// Non-finite floats become `null`, which Vega treats as missing.
pub(super) fn dataframe_to_values(df: &DataFrame) -> Result<Vec<Value>> {
    let mut columns = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        let values = series_to_values(column.as_materialized_series())?;
        columns.push((column.name().to_string(), values.into_iter()));
    }

    let mut rows = Vec::with_capacity(df.height());
    for _ in 0..df.height() {
        let mut row = Map::new();
        for (name, values) in columns.iter_mut() {
            row.insert(name.clone(), values.next().unwrap_or(Value::Null));
        }
        rows.push(Value::Object(row));
    }
    Ok(rows)
}

/// Convert every value of a series to JSON
fn series_to_values(series: &Series) -> Result<Vec<Value>> {
    use DataType::*;

    let values = match series.dtype() {
        Int8 | Int16 | Int32 | Int64 | UInt8 | UInt16 | UInt32 => {
            let cast = series.cast(&Int64)?;
            cast.i64()?
                .into_iter()
                .map(|v| v.map_or(Value::Null, |v| json!(v)))
                .collect()
        }
        UInt64 => series
            .u64()?
            .into_iter()
            .map(|v| v.map_or(Value::Null, |v| json!(v)))
            .collect(),
        Float32 | Float64 => {
            let cast = series.cast(&Float64)?;
            cast.f64()?
                .into_iter()
                .map(|v| match v {
                    Some(v) if v.is_finite() => json!(v),
                    _ => Value::Null,
                })
                .collect()
        }
        Boolean => series
            .bool()?
            .into_iter()
            .map(|v| v.map_or(Value::Null, |v| json!(v)))
            .collect(),
        String => series
            .str()?
            .into_iter()
            .map(|v| v.map_or(Value::Null, |s| json!(s)))
            .collect(),
        other => {
            tracing::debug!("Converting {:?} column '{}' to strings", other, series.name());
            let mut values = Vec::with_capacity(series.len());
            for idx in 0..series.len() {
                let value = series.get(idx)?;
                values.push(if value.is_null() {
                    Value::Null
                } else {
                    json!(value.to_string())
                });
            }
            values
        }
    };
    Ok(values)
}
