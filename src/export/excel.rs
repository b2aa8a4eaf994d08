//! Excel (xlsx) serialization
//!
//! The writer backend is optional; without the `excel-export` feature this
//! exporter fails with `ExportBackendMissing` while CSV export keeps working.

use crate::error::PipelineError;
use crate::model::Table;

use super::Exporter;

/// Serializes a table as a single-sheet xlsx workbook with a header row and
/// no index column
pub struct ExcelExporter;

#[cfg(feature = "excel-export")]
impl Exporter for ExcelExporter {
    fn export(&self, table: &Table) -> Result<Vec<u8>, PipelineError> {
        backend::write_workbook(table).map_err(|source| PipelineError::Export {
            format: "xlsx",
            source,
        })
    }
}

#[cfg(not(feature = "excel-export"))]
impl Exporter for ExcelExporter {
    fn export(&self, _table: &Table) -> Result<Vec<u8>, PipelineError> {
        Err(PipelineError::ExportBackendMissing {
            capability: "rust_xlsxwriter",
        })
    }
}

#[cfg(feature = "excel-export")]
mod backend {
    use anyhow::{Context, Result};
    use rust_xlsxwriter::Workbook;

    use crate::model::{CellValue, Table};

    pub(super) fn write_workbook(table: &Table) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        for (col_idx, column) in table.columns.iter().enumerate() {
            worksheet
                .write_string(0, col_idx as u16, column.name.as_str())
                .with_context(|| format!("Failed to write header cell {}", column.name))?;
        }

        for (row_idx, row) in table.rows.iter().enumerate() {
            let sheet_row = (row_idx + 1) as u32;
            for (col_idx, cell) in row.cells.iter().enumerate() {
                let sheet_col = col_idx as u16;
                match cell {
                    // Blank cells stay blank
                    CellValue::Null => {}
                    CellValue::Bool(b) => {
                        worksheet
                            .write_boolean(sheet_row, sheet_col, *b)
                            .context("Failed to write boolean cell")?;
                    }
                    CellValue::Int(i) => {
                        worksheet
                            .write_number(sheet_row, sheet_col, *i as f64)
                            .context("Failed to write numeric cell")?;
                    }
                    CellValue::Float(f) => {
                        worksheet
                            .write_number(sheet_row, sheet_col, *f)
                            .context("Failed to write numeric cell")?;
                    }
                    other => {
                        worksheet
                            .write_string(sheet_row, sheet_col, other.display().as_ref())
                            .context("Failed to write text cell")?;
                    }
                }
            }
        }

        workbook
            .save_to_buffer()
            .context("Failed to serialize workbook")
    }
}
