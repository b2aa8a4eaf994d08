//! Column projection

use crate::error::PipelineError;
use crate::model::{Column, Row, Table};

/// Restrict `table` to the named columns, in the requested order.
///
/// The boundary normally only offers names the table has; an absent name is
/// still rejected with [`PipelineError::UnknownColumn`] rather than dropped.
pub fn project(table: &Table, columns: &[String]) -> Result<Table, PipelineError> {
    let indices: Vec<usize> = columns
        .iter()
        .map(|name| {
            table
                .column_index(name)
                .ok_or_else(|| PipelineError::UnknownColumn {
                    column: name.clone(),
                })
        })
        .collect::<Result<_, _>>()?;

    let projected_columns: Vec<Column> = indices
        .iter()
        .enumerate()
        .map(|(new_idx, &old_idx)| {
            let col = &table.columns[old_idx];
            Column::with_type(col.name.clone(), new_idx, col.inferred_type)
        })
        .collect();

    let rows: Vec<Row> = table
        .rows
        .iter()
        .map(|row| {
            let cells = indices
                .iter()
                .map(|&i| row.cells[i].clone())
                .collect();
            Row::new(cells, row.source_line)
        })
        .collect();

    Ok(Table {
        columns: projected_columns,
        rows,
    })
}
