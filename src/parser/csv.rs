//! CSV parser

use std::borrow::Cow;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::model::{CellValue, Column, Table};

use super::TableParser;

/// Parser for CSV bytes. The first record is the header; every data record
/// must have the same width (ragged rows are a parse error).
pub struct CsvParser;

impl TableParser for CsvParser {
    fn parse(&self, bytes: &[u8], _config: &Config) -> Result<Table> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(bytes);

        let headers = csv_reader
            .headers()
            .context("Failed to read CSV headers")?
            .clone();

        let columns: Vec<Column> = headers
            .iter()
            .enumerate()
            .map(|(i, name)| Column::new(name.to_string(), i))
            .collect();

        let mut table = Table::new(columns);

        for (line_num, result) in csv_reader.records().enumerate() {
            // +2 for 1-indexing and header
            let record =
                result.with_context(|| format!("Failed to read CSV row {}", line_num + 2))?;

            let cells: Vec<CellValue> = record.iter().map(parse_cell_value).collect();
            table.add_row(cells, line_num + 2);
        }

        table.infer_column_types();

        Ok(table)
    }
}

/// Parse a string value into a CellValue with type inference
pub(crate) fn parse_cell_value(s: &str) -> CellValue {
    let trimmed = s.trim();

    // Null tokens are matched case-insensitively, pandas style
    if trimmed.is_empty()
        || ["null", "na", "n/a", "nan"]
            .iter()
            .any(|t| trimmed.eq_ignore_ascii_case(t))
    {
        return CellValue::Null;
    }

    if trimmed.eq_ignore_ascii_case("true") {
        return CellValue::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return CellValue::Bool(false);
    }

    if let Ok(i) = trimmed.parse::<i64>() {
        return CellValue::Int(i);
    }

    if let Ok(f) = trimmed.parse::<f64>() {
        return CellValue::Float(f);
    }

    if let Ok(date) = chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return CellValue::Date(date);
    }

    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return CellValue::DateTime(dt);
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return CellValue::DateTime(dt);
    }

    CellValue::String(Cow::Owned(trimmed.to_string()))
}
