//! Excel (xlsx) parser

use std::borrow::Cow;
use std::io::Cursor;

use anyhow::{bail, Context, Result};
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};

use crate::config::Config;
use crate::model::{CellValue, Column, Table};

use super::TableParser;

/// Parser for Excel workbooks. Reads the first sheet unless the config names
/// one; the first row is the header.
pub struct ExcelParser;

impl TableParser for ExcelParser {
    fn parse(&self, bytes: &[u8], config: &Config) -> Result<Table> {
        let cursor = Cursor::new(bytes.to_vec());
        let mut workbook =
            open_workbook_auto_from_rs(cursor).context("Failed to open Excel workbook")?;

        let sheet_name = if let Some(ref name) = config.sheet_name {
            name.clone()
        } else {
            let sheets = workbook.sheet_names();
            if sheets.is_empty() {
                bail!("No sheets found in workbook");
            }
            sheets[0].clone()
        };

        let range: Range<Data> = workbook
            .worksheet_range(&sheet_name)
            .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

        parse_range(range)
    }
}

fn parse_range(range: Range<Data>) -> Result<Table> {
    let (row_count, col_count) = range.get_size();

    if row_count == 0 {
        bail!("Empty sheet");
    }

    let header_row = range.rows().next().context("No header row found")?;
    let columns: Vec<Column> = header_row
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let name = cell_to_string(cell);
            Column::new(
                if name.is_empty() {
                    format!("Column{}", i + 1)
                } else {
                    name
                },
                i,
            )
        })
        .collect();

    let mut table = Table::new(columns);

    for (line_num, row) in range.rows().skip(1).enumerate() {
        let cells: Vec<CellValue> = row.iter().take(col_count).map(convert_cell).collect();

        // Sheet ranges can be ragged; pad short rows with nulls
        let cells = if cells.len() < table.column_count() {
            let mut padded = cells;
            padded.resize(table.column_count(), CellValue::Null);
            padded
        } else {
            cells
        };

        table.add_row(cells, line_num + 2); // +2 for 1-indexing and header
    }

    table.infer_column_types();

    Ok(table)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => format!("{}", dt),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("#{:?}", e),
    }
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::String(s) => {
            if s.trim().is_empty() {
                CellValue::Null
            } else {
                CellValue::String(Cow::Owned(s.clone()))
            }
        }
        Data::Float(f) => {
            // Excel stores most numbers as floats; keep whole values as ints
            if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                CellValue::Int(*f as i64)
            } else {
                CellValue::Float(*f)
            }
        }
        Data::Int(i) => CellValue::Int(*i),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => {
            let s = format!("{}", dt);
            if let Ok(datetime) = chrono::NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S%.f")
            {
                CellValue::DateTime(datetime)
            } else if let Ok(date) = chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
                CellValue::Date(date)
            } else {
                CellValue::String(Cow::Owned(s))
            }
        }
        Data::DateTimeIso(s) => {
            if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
                CellValue::DateTime(dt)
            } else if let Ok(d) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                CellValue::Date(d)
            } else {
                CellValue::String(Cow::Owned(s.clone()))
            }
        }
        Data::DurationIso(s) => CellValue::String(Cow::Owned(s.clone())),
        Data::Error(e) => CellValue::String(Cow::Owned(format!("#{:?}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_cell() {
        assert_eq!(convert_cell(&Data::Empty), CellValue::Null);
        assert_eq!(convert_cell(&Data::String("  ".into())), CellValue::Null);
        assert_eq!(convert_cell(&Data::Float(30.0)), CellValue::Int(30));
        assert_eq!(convert_cell(&Data::Float(1.5)), CellValue::Float(1.5));
        assert_eq!(convert_cell(&Data::Int(7)), CellValue::Int(7));
        assert_eq!(convert_cell(&Data::Bool(true)), CellValue::Bool(true));
    }

    #[test]
    fn test_garbage_bytes_are_rejected() {
        let result = ExcelParser.parse(b"not a workbook", &Config::default());
        assert!(result.is_err());
    }
}
