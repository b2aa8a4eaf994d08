//! Missing-value imputation for numeric columns

use crate::error::CleanWarning;
use crate::model::{CellType, CellValue, Table};

/// Result of a fill operation: the transformed table plus any warnings
#[derive(Debug)]
pub struct FillOutcome {
    pub table: Table,
    pub warnings: Vec<CleanWarning>,
}

/// Replace nulls in numeric columns with the column's mean.
///
/// Means are computed over the non-null values as they stood before this
/// call; fills in one column never feed the mean of another. Non-numeric
/// columns are untouched. A column with no values to average (inferred
/// numeric or entirely null) is left unchanged and reported as
/// [`CleanWarning::AllValuesMissing`].
pub fn fill_missing_numeric(mut table: Table) -> FillOutcome {
    let mut warnings = Vec::new();
    let mut filled = 0usize;

    // Columns eligible for filling. An all-null column carries no evidence
    // against being numeric, so it is a candidate too; it can only warn.
    let candidates: Vec<usize> = table
        .columns
        .iter()
        .filter(|c| {
            c.inferred_type.is_numeric()
                || (c.inferred_type == CellType::Null && !table.rows.is_empty())
        })
        .map(|c| c.index)
        .collect();

    // Pass 1: per-column means over the pre-fill values
    let mut means: Vec<(usize, f64)> = Vec::with_capacity(candidates.len());
    for &col_idx in &candidates {
        let mut sum = 0.0;
        let mut count = 0usize;
        for row in &table.rows {
            if let Some(v) = row.cells.get(col_idx).and_then(CellValue::as_f64) {
                sum += v;
                count += 1;
            }
        }

        if count == 0 {
            let column = table.columns[col_idx].name.clone();
            tracing::warn!(%column, "no values to compute fill mean; column left unchanged");
            warnings.push(CleanWarning::AllValuesMissing { column });
        } else {
            means.push((col_idx, sum / count as f64));
        }
    }

    // Pass 2: fill nulls
    for (col_idx, mean) in means {
        for row in &mut table.rows {
            if let Some(cell) = row.cells.get_mut(col_idx) {
                if cell.is_null() {
                    *cell = CellValue::Float(mean);
                    filled += 1;
                }
            }
        }
    }

    if filled > 0 {
        // Filling an int column with a float mean can widen its type
        table.infer_column_types();
        tracing::debug!(filled, "filled missing numeric values");
    }

    FillOutcome { table, warnings }
}
