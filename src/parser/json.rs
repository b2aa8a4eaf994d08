//! JSON parser
//!
//! Accepts two shapes: an array of objects (each object a row, keys become
//! columns in first-seen order) and an object of arrays (each key a column).
//! Missing keys yield nulls.

use std::borrow::Cow;

use anyhow::{bail, Context, Result};
use indexmap::IndexSet;
use serde_json::Value;

use crate::config::Config;
use crate::model::{CellValue, Column, Table};

use super::TableParser;

/// Parser for JSON bytes
pub struct JsonParser;

impl TableParser for JsonParser {
    fn parse(&self, bytes: &[u8], _config: &Config) -> Result<Table> {
        let value: Value = serde_json::from_slice(bytes).context("Failed to parse JSON")?;

        let mut table = match value {
            Value::Array(arr) => parse_record_array(arr)?,
            Value::Object(obj) if obj.values().all(|v| v.is_array()) && !obj.is_empty() => {
                parse_column_object(obj)?
            }
            Value::Object(_) => parse_record_array(vec![value])?,
            _ => bail!("JSON root must be an array or object"),
        };

        table.infer_column_types();

        Ok(table)
    }
}

/// Array-of-objects shape: one row per element
fn parse_record_array(array: Vec<Value>) -> Result<Table> {
    // Collect all unique keys across all objects to build the column list
    let mut column_names: IndexSet<String> = IndexSet::new();
    for item in &array {
        if let Value::Object(obj) = item {
            for key in obj.keys() {
                column_names.insert(key.clone());
            }
        }
    }

    if column_names.is_empty() && !array.is_empty() {
        bail!("JSON array must contain objects");
    }

    let columns: Vec<Column> = column_names
        .iter()
        .enumerate()
        .map(|(i, name)| Column::new(name.clone(), i))
        .collect();

    let mut table = Table::new(columns);

    for (line_num, item) in array.iter().enumerate() {
        let cells = match item {
            Value::Object(obj) => column_names
                .iter()
                .map(|key| json_value_to_cell(obj.get(key)))
                .collect(),
            _ => bail!("JSON array element {} is not an object", line_num + 1),
        };

        table.add_row(cells, line_num + 1);
    }

    Ok(table)
}

/// Object-of-arrays shape: one column per key, rows aligned by index.
/// Shorter columns are padded with nulls.
fn parse_column_object(obj: serde_json::Map<String, Value>) -> Result<Table> {
    let columns: Vec<Column> = obj
        .keys()
        .enumerate()
        .map(|(i, name)| Column::new(name.clone(), i))
        .collect();

    let series: Vec<&Vec<Value>> = obj
        .values()
        .map(|v| match v {
            Value::Array(arr) => Ok(arr),
            _ => bail!("Expected an array for every column"),
        })
        .collect::<Result<_>>()?;

    let row_count = series.iter().map(|s| s.len()).max().unwrap_or(0);

    let mut table = Table::new(columns);

    for row_idx in 0..row_count {
        let cells: Vec<CellValue> = series
            .iter()
            .map(|col| json_value_to_cell(col.get(row_idx)))
            .collect();
        table.add_row(cells, row_idx + 1);
    }

    Ok(table)
}

fn json_value_to_cell(value: Option<&Value>) -> CellValue {
    match value {
        None | Some(Value::Null) => CellValue::Null,
        Some(Value::Bool(b)) => CellValue::Bool(*b),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                CellValue::Int(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(Cow::Owned(n.to_string()))
            }
        }
        Some(Value::String(s)) => {
            if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                return CellValue::Date(date);
            }
            if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
                return CellValue::DateTime(dt);
            }
            CellValue::String(Cow::Owned(s.clone()))
        }
        // Nested structures are kept as their JSON text
        Some(Value::Array(arr)) => {
            CellValue::String(Cow::Owned(serde_json::to_string(arr).unwrap_or_default()))
        }
        Some(Value::Object(obj)) => {
            CellValue::String(Cow::Owned(serde_json::to_string(obj).unwrap_or_default()))
        }
    }
}
