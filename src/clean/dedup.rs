//! Duplicate row removal

use rustc_hash::FxHashSet;

use crate::model::{CellValue, Table};

/// Remove rows that exactly duplicate an earlier row across all columns,
/// keeping the first occurrence. Relative order of kept rows is preserved.
pub fn remove_duplicates(table: Table) -> Table {
    let before = table.row_count();
    let mut seen: FxHashSet<Vec<CellValue>> = FxHashSet::default();

    let columns = table.columns;
    let rows = table
        .rows
        .into_iter()
        .filter(|row| seen.insert(row.cells.clone()))
        .collect::<Vec<_>>();

    let removed = before - rows.len();
    if removed > 0 {
        tracing::debug!(removed, kept = rows.len(), "removed duplicate rows");
    }

    Table { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Column;

    fn table_from_rows(rows: Vec<Vec<CellValue>>) -> Table {
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        let columns = (0..width).map(|i| Column::new(format!("c{i}"), i)).collect();
        let mut table = Table::new(columns);
        for (i, cells) in rows.into_iter().enumerate() {
            table.add_row(cells, i + 2);
        }
        table.infer_column_types();
        table
    }

    #[test]
    fn test_keeps_first_occurrence_in_order() {
        let table = table_from_rows(vec![
            vec![CellValue::from("Alice"), CellValue::Int(30)],
            vec![CellValue::from("Bob"), CellValue::Null],
            vec![CellValue::from("Alice"), CellValue::Int(30)],
        ]);

        let deduped = remove_duplicates(table);
        assert_eq!(deduped.row_count(), 2);
        assert_eq!(deduped.rows[0].cells[0], CellValue::from("Alice"));
        assert_eq!(deduped.rows[1].cells[0], CellValue::from("Bob"));
    }

    #[test]
    fn test_idempotent() {
        let table = table_from_rows(vec![
            vec![CellValue::Int(1)],
            vec![CellValue::Int(1)],
            vec![CellValue::Int(2)],
            vec![CellValue::Int(1)],
        ]);

        let once = remove_duplicates(table);
        let twice = remove_duplicates(once.clone());
        assert_eq!(once.rows, twice.rows);
        assert_eq!(once.row_count(), 2);
    }

    #[test]
    fn test_null_rows_deduplicate() {
        let table = table_from_rows(vec![
            vec![CellValue::Null, CellValue::Null],
            vec![CellValue::Null, CellValue::Null],
        ]);

        assert_eq!(remove_duplicates(table).row_count(), 1);
    }

    #[test]
    fn test_zero_sign_rows_deduplicate() {
        let table = table_from_rows(vec![
            vec![CellValue::Float(0.0)],
            vec![CellValue::Float(-0.0)],
        ]);

        assert_eq!(remove_duplicates(table).row_count(), 1);
    }

    #[test]
    fn test_no_duplicates_is_a_no_op() {
        let table = table_from_rows(vec![
            vec![CellValue::Int(1)],
            vec![CellValue::Int(2)],
        ]);
        let rows_before = table.rows.clone();

        assert_eq!(remove_duplicates(table).rows, rows_before);
    }
}
