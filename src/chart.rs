//! Chart preview summarization
//!
//! Reduces a table to at most two numeric series so the boundary can render
//! a simple bar or line chart without walking the whole table.

use crate::config::Config;
use crate::model::{CellValue, Table};

/// A single named numeric series; nulls stay as `None` to keep rows aligned
/// across series
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

/// Up to the first two numeric columns of a table, row-capped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartPreview {
    pub series: Vec<ChartSeries>,
}

impl ChartPreview {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Summarize `table` into a chart preview.
///
/// Takes the first two numeric columns in table order and at most
/// `config.chart_row_cap` rows. A table with no numeric columns yields an
/// empty preview, never an error.
pub fn summarize(table: &Table, config: &Config) -> ChartPreview {
    let series = table
        .numeric_column_indices()
        .into_iter()
        .take(2)
        .map(|col_idx| ChartSeries {
            name: table.columns[col_idx].name.clone(),
            values: table
                .rows
                .iter()
                .take(config.chart_row_cap)
                .map(|row| row.cells.get(col_idx).and_then(CellValue::as_f64))
                .collect(),
        })
        .collect();

    ChartPreview { series }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Column;

    fn table_from_rows(names: &[&str], rows: Vec<Vec<CellValue>>) -> Table {
        let columns = names
            .iter()
            .enumerate()
            .map(|(i, n)| Column::new(n.to_string(), i))
            .collect();
        let mut table = Table::new(columns);
        for (i, cells) in rows.into_iter().enumerate() {
            table.add_row(cells, i + 2);
        }
        table.infer_column_types();
        table
    }

    #[test]
    fn test_takes_first_two_numeric_columns() {
        let table = table_from_rows(
            &["label", "x", "y", "z"],
            vec![vec![
                CellValue::from("a"),
                CellValue::Int(1),
                CellValue::Float(2.0),
                CellValue::Int(3),
            ]],
        );

        let preview = summarize(&table, &Config::default());
        let names: Vec<&str> = preview.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y"]);
    }

    #[test]
    fn test_no_numeric_columns_yields_empty_preview() {
        let table = table_from_rows(
            &["name"],
            vec![vec![CellValue::from("a")], vec![CellValue::from("b")]],
        );

        assert!(summarize(&table, &Config::default()).is_empty());
    }

    #[test]
    fn test_row_cap_is_applied() {
        let rows = (0..10).map(|i| vec![CellValue::Int(i)]).collect();
        let table = table_from_rows(&["n"], rows);
        let config = Config::default().with_chart_row_cap(3);

        let preview = summarize(&table, &config);
        assert_eq!(preview.series[0].values, vec![Some(0.0), Some(1.0), Some(2.0)]);
    }

    #[test]
    fn test_nulls_stay_aligned() {
        let table = table_from_rows(
            &["x"],
            vec![
                vec![CellValue::Int(1)],
                vec![CellValue::Null],
                vec![CellValue::Int(3)],
            ],
        );

        let preview = summarize(&table, &Config::default());
        assert_eq!(preview.series[0].values, vec![Some(1.0), None, Some(3.0)]);
    }
}
