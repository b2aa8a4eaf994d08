//! Export layer: serializing a table back to a downloadable artifact

mod csv;
mod excel;

use std::path::Path;

use crate::error::PipelineError;
use crate::model::Table;

pub use self::csv::CsvExporter;
pub use self::excel::ExcelExporter;

/// Target format for export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Excel,
}

impl ExportFormat {
    /// Canonical extension, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "xlsx",
        }
    }

    /// MIME type for the downloadable artifact
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            _ => Err(format!("Unknown export format: {}", s)),
        }
    }
}

/// The output bundle handed to the boundary for download
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: &'static str,
}

/// Trait for table serializers
pub trait Exporter {
    /// Serialize a table into a byte buffer
    fn export(&self, table: &Table) -> Result<Vec<u8>, PipelineError>;
}

/// Factory for creating exporters based on format
pub struct ExporterFactory;

impl ExporterFactory {
    pub fn create(format: ExportFormat) -> Box<dyn Exporter> {
        match format {
            ExportFormat::Csv => Box::new(CsvExporter),
            ExportFormat::Excel => Box::new(ExcelExporter),
        }
    }
}

/// Export `table` as `format`, deriving the artifact's file name from
/// `source_name` by swapping the extension.
pub fn export_table(
    table: &Table,
    source_name: &str,
    format: ExportFormat,
) -> Result<ExportArtifact, PipelineError> {
    let bytes = ExporterFactory::create(format).export(table)?;
    let file_name = derive_file_name(source_name, format);

    tracing::debug!(
        file = %file_name,
        size = bytes.len(),
        "exported table"
    );

    Ok(ExportArtifact {
        bytes,
        file_name,
        mime_type: format.mime_type(),
    })
}

fn derive_file_name(source_name: &str, format: ExportFormat) -> String {
    Path::new(source_name)
        .with_extension(format.extension())
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_file_name() {
        assert_eq!(derive_file_name("data.xlsx", ExportFormat::Csv), "data.csv");
        assert_eq!(derive_file_name("data.json", ExportFormat::Excel), "data.xlsx");
        assert_eq!(derive_file_name("data.csv", ExportFormat::Csv), "data.csv");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("excel".parse::<ExportFormat>().unwrap(), ExportFormat::Excel);
        assert_eq!("xlsx".parse::<ExportFormat>().unwrap(), ExportFormat::Excel);
        assert!("parquet".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(ExportFormat::Csv.mime_type(), "text/csv");
        assert_eq!(
            ExportFormat::Excel.mime_type(),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
    }
}
