//! Error taxonomy for the pipeline
//!
//! Every error is scoped to a single file or action; nothing here is fatal to
//! the session. The boundary renders the message and keeps going.

use thiserror::Error;

/// Errors raised by the tabular pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    /// File extension does not map to a supported format
    #[error("unsupported file format: {extension:?}")]
    UnsupportedFormat { extension: String },

    /// File content could not be parsed into a table
    #[error("failed to parse {file}")]
    Parse {
        file: String,
        #[source]
        source: anyhow::Error,
    },

    /// Projection requested a column the table does not have
    #[error("unknown column: {column}")]
    UnknownColumn { column: String },

    /// Serialization to the target format failed
    #[error("export to {format} failed")]
    Export {
        format: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// The Excel writing backend is not compiled in
    #[error("excel export backend unavailable: {capability} (enable the `excel-export` feature)")]
    ExportBackendMissing { capability: &'static str },
}

/// Non-fatal warnings produced by cleaning operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanWarning {
    /// A numeric column had no values to compute a fill mean from; it was
    /// left unchanged
    AllValuesMissing { column: String },
}

impl std::fmt::Display for CleanWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CleanWarning::AllValuesMissing { column } => {
                write!(f, "column {:?} has no values to fill from; left unchanged", column)
            }
        }
    }
}
