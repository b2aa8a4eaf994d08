//! CSV serialization
//!
//! Never depends on the Excel backend; always available for a well-formed
//! table.

use anyhow::Context;

use crate::error::PipelineError;
use crate::model::Table;

use super::Exporter;

/// Serializes a table as comma-separated text with a header row and no
/// index column. Nulls become empty fields.
pub struct CsvExporter;

impl Exporter for CsvExporter {
    fn export(&self, table: &Table) -> Result<Vec<u8>, PipelineError> {
        write_csv(table).map_err(|source| PipelineError::Export {
            format: "csv",
            source,
        })
    }
}

fn write_csv(table: &Table) -> anyhow::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(table.columns.iter().map(|c| c.name.as_str()))
        .context("Failed to write CSV header")?;

    for row in &table.rows {
        writer
            .write_record(row.cells.iter().map(|cell| cell.display().into_owned()))
            .with_context(|| format!("Failed to write CSV row {}", row.source_line))?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV buffer: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::{CellValue, Column};
    use crate::parser::load_table;

    fn sample_table() -> Table {
        let mut table = Table::new(vec![Column::new("a", 0), Column::new("b", 1)]);
        table.add_row(vec![CellValue::Int(1), CellValue::from("x")], 2);
        table.add_row(vec![CellValue::Float(30.0), CellValue::Null], 3);
        table.infer_column_types();
        table
    }

    #[test]
    fn test_header_is_first_line() {
        let bytes = CsvExporter.export(&sample_table()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().next().unwrap(), "a,b");
    }

    #[test]
    fn test_nulls_become_empty_fields() {
        let bytes = CsvExporter.export(&sample_table()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().nth(2).unwrap(), "30,");
    }

    #[test]
    fn test_export_reimport_round_trip() {
        let table = sample_table();
        let bytes = CsvExporter.export(&table).unwrap();
        let reloaded = load_table("out.csv", &bytes, &Config::default()).unwrap();

        assert_eq!(reloaded.column_names(), table.column_names());
        assert_eq!(reloaded.row_count(), table.row_count());
        // 30.0 serializes as "30" and reloads as an int; values match
        // numerically
        assert_eq!(reloaded.rows[1].cells[0].as_f64(), Some(30.0));
        assert_eq!(reloaded.rows[0].cells[1], table.rows[0].cells[1]);
    }

    #[test]
    fn test_empty_table_exports_header_only() {
        let table = Table::new(vec![Column::new("a", 0), Column::new("b", 1)]);
        let bytes = CsvExporter.export(&table).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.trim_end(), "a,b");
    }
}
