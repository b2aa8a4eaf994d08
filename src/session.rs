//! Session orchestration
//!
//! The seam the interactive boundary drives: uploads land in per-file slots,
//! each action reads a slot's current table, computes a new one, and swaps
//! the reference. Errors stay scoped to their file; a bad upload never blocks
//! the rest of the batch.
//!
//! Precondition: at most one in-flight action per file. The session is
//! single-threaded and synchronous; callers needing concurrency must add
//! their own locking.

use crate::chart::{self, ChartPreview};
use crate::clean;
use crate::config::Config;
use crate::error::{CleanWarning, PipelineError};
use crate::export::{self, ExportArtifact, ExportFormat};
use crate::model::Table;
use crate::parser;
use crate::project;

/// A named byte blob as received from the uploader. Immutable once created.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Declared size in bytes
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// A successfully loaded file and its current table
#[derive(Debug)]
pub struct FileSlot {
    name: String,
    size: usize,
    table: Table,
}

impl FileSlot {
    /// Original upload name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size of the uploaded bytes
    pub fn size(&self) -> usize {
        self.size
    }

    /// The slot's current table
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// First `n` rows for display
    pub fn preview(&self, n: usize) -> Table {
        self.table.head(n)
    }

    /// Drop exact duplicate rows, keeping first occurrences
    pub fn remove_duplicates(&mut self) {
        let table = std::mem::take(&mut self.table);
        self.table = clean::remove_duplicates(table);
    }

    /// Fill nulls in numeric columns with the column mean; returns warnings
    /// for columns that had nothing to average
    pub fn fill_missing(&mut self) -> Vec<CleanWarning> {
        let table = std::mem::take(&mut self.table);
        let outcome = clean::fill_missing_numeric(table);
        self.table = outcome.table;
        outcome.warnings
    }

    /// Keep only the named columns, in the given order
    pub fn select_columns(&mut self, columns: &[String]) -> Result<(), PipelineError> {
        self.table = project::project(&self.table, columns)?;
        Ok(())
    }

    /// Numeric preview for charting
    pub fn chart(&self, config: &Config) -> ChartPreview {
        chart::summarize(&self.table, config)
    }

    /// Serialize the current table for download
    pub fn export(&self, format: ExportFormat) -> Result<ExportArtifact, PipelineError> {
        export::export_table(&self.table, &self.name, format)
    }
}

/// Outcome of one upload: a usable slot or a file-scoped error
#[derive(Debug)]
pub enum FileEntry {
    Loaded(FileSlot),
    Failed { name: String, error: PipelineError },
}

impl FileEntry {
    /// Original upload name
    pub fn name(&self) -> &str {
        match self {
            FileEntry::Loaded(slot) => slot.name(),
            FileEntry::Failed { name, .. } => name,
        }
    }

    pub fn slot(&self) -> Option<&FileSlot> {
        match self {
            FileEntry::Loaded(slot) => Some(slot),
            FileEntry::Failed { .. } => None,
        }
    }

    pub fn slot_mut(&mut self) -> Option<&mut FileSlot> {
        match self {
            FileEntry::Loaded(slot) => Some(slot),
            FileEntry::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&PipelineError> {
        match self {
            FileEntry::Loaded(_) => None,
            FileEntry::Failed { error, .. } => Some(error),
        }
    }
}

/// One interactive session: configuration plus per-file slots in upload order
#[derive(Debug, Default)]
pub struct Session {
    config: Config,
    entries: Vec<FileEntry>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse one upload into a slot. Failures are recorded per file and
    /// reported back; the session stays usable either way.
    pub fn upload(&mut self, file: UploadedFile) -> &FileEntry {
        let entry = match parser::load_table(&file.name, &file.bytes, &self.config) {
            Ok(table) => FileEntry::Loaded(FileSlot {
                name: file.name,
                size: file.bytes.len(),
                table,
            }),
            Err(error) => {
                tracing::warn!(file = %file.name, %error, "upload rejected");
                FileEntry::Failed {
                    name: file.name,
                    error,
                }
            }
        };

        self.entries.push(entry);
        self.entries.last().expect("entry just pushed")
    }

    /// Parse a batch of uploads in order; one file's failure never aborts
    /// the others
    pub fn upload_all(&mut self, files: Vec<UploadedFile>) {
        for file in files {
            self.upload(file);
        }
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&FileEntry> {
        self.entries.get(index)
    }

    pub fn entry_mut(&mut self, index: usize) -> Option<&mut FileEntry> {
        self.entries.get_mut(index)
    }

    /// Chart preview for the slot at `index`, using the session's row cap
    pub fn chart(&self, index: usize) -> Option<ChartPreview> {
        self.entry(index)
            .and_then(FileEntry::slot)
            .map(|slot| slot.chart(&self.config))
    }
}
