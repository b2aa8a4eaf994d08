//! tablewash - Session-driven cleaning and transformation for tabular data
//!
//! Parses uploaded CSV, Excel, and JSON files into typed in-memory tables,
//! applies cleaning transforms (duplicate removal, numeric mean imputation),
//! projects columns, summarizes for charting, and exports back to CSV or
//! Excel as a downloadable artifact.

pub mod chart;
pub mod clean;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod parser;
pub mod project;
pub mod session;

pub use chart::{ChartPreview, ChartSeries};
pub use clean::{fill_missing_numeric, remove_duplicates, FillOutcome};
pub use config::Config;
pub use error::{CleanWarning, PipelineError};
pub use export::{export_table, ExportArtifact, ExportFormat};
pub use model::{CellType, CellValue, Column, Row, Table};
pub use parser::{load_table, FileFormat};
pub use project::project;
pub use session::{Session, UploadedFile};
