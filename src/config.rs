//! Configuration handling for tablewash

/// Configuration for pipeline operations
#[derive(Debug, Clone)]
pub struct Config {
    /// For Excel files: which sheet to load (first sheet when unset)
    pub sheet_name: Option<String>,
    /// Maximum number of rows handed to the chart summarizer
    pub chart_row_cap: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_name: None,
            chart_row_cap: 100,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Excel sheet to load
    pub fn with_sheet_name(mut self, name: String) -> Self {
        self.sheet_name = Some(name);
        self
    }

    /// Set the row cap for chart previews
    pub fn with_chart_row_cap(mut self, cap: usize) -> Self {
        self.chart_row_cap = cap;
        self
    }
}
