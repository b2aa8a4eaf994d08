//! Parser layer: format detection and table loading from raw bytes

mod csv;
mod excel;
mod json;

use anyhow::Result;

use crate::config::Config;
use crate::error::PipelineError;
use crate::model::Table;

pub use self::csv::CsvParser;
pub use self::excel::ExcelParser;
pub use self::json::JsonParser;

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Excel,
    Json,
}

impl FileFormat {
    /// Detect the format from a file name's extension (case-insensitive).
    ///
    /// Any extension outside csv/xlsx/json is rejected with
    /// [`PipelineError::UnsupportedFormat`] carrying the lowercased extension
    /// without its dot.
    pub fn from_file_name(name: &str) -> Result<FileFormat, PipelineError> {
        let extension = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(FileFormat::Csv),
            "xlsx" => Ok(FileFormat::Excel),
            "json" => Ok(FileFormat::Json),
            _ => Err(PipelineError::UnsupportedFormat { extension }),
        }
    }

    /// Canonical extension for this format, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            FileFormat::Csv => "csv",
            FileFormat::Excel => "xlsx",
            FileFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Trait for parsing raw bytes into a Table
pub trait TableParser {
    fn parse(&self, bytes: &[u8], config: &Config) -> Result<Table>;
}

fn parser_for(format: FileFormat) -> Box<dyn TableParser> {
    match format {
        FileFormat::Csv => Box::new(CsvParser),
        FileFormat::Excel => Box::new(ExcelParser),
        FileFormat::Json => Box::new(JsonParser),
    }
}

/// Detect the format of `file_name` and parse `bytes` into a Table.
///
/// Parse failures carry the file name so the boundary can report which upload
/// went wrong without touching the others.
pub fn load_table(file_name: &str, bytes: &[u8], config: &Config) -> Result<Table, PipelineError> {
    let format = FileFormat::from_file_name(file_name)?;
    let table = parser_for(format)
        .parse(bytes, config)
        .map_err(|source| PipelineError::Parse {
            file: file_name.to_string(),
            source,
        })?;

    tracing::debug!(
        file = file_name,
        %format,
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded table"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_supported_formats() {
        assert_eq!(FileFormat::from_file_name("data.csv").unwrap(), FileFormat::Csv);
        assert_eq!(FileFormat::from_file_name("data.xlsx").unwrap(), FileFormat::Excel);
        assert_eq!(FileFormat::from_file_name("data.json").unwrap(), FileFormat::Json);
    }

    #[test]
    fn test_detect_is_case_insensitive() {
        assert_eq!(FileFormat::from_file_name("DATA.CSV").unwrap(), FileFormat::Csv);
        assert_eq!(FileFormat::from_file_name("report.XlSx").unwrap(), FileFormat::Excel);
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let err = FileFormat::from_file_name("data.txt").unwrap_err();
        match err {
            PipelineError::UnsupportedFormat { extension } => assert_eq!(extension, "txt"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_extension_is_rejected() {
        assert!(matches!(
            FileFormat::from_file_name("data"),
            Err(PipelineError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_load_table_reports_file_name_on_parse_error() {
        let err = load_table("broken.json", b"42", &Config::default()).unwrap_err();
        match err {
            PipelineError::Parse { file, .. } => assert_eq!(file, "broken.json"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
