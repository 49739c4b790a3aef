//! Configuration types for the index walker

use clap::ValueEnum;

/// Default page title; `{path}` is replaced by the directory path.
pub const DEFAULT_TITLE_TEMPLATE: &str = "Index of {path}";

/// Which index documents to write into each directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
    #[default]
    Both,
}

impl OutputFormat {
    pub fn writes_html(self) -> bool {
        matches!(self, OutputFormat::Html | OutputFormat::Both)
    }

    pub fn writes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

/// Configuration for index generation.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    pub ignore_patterns: Vec<String>,
    pub format: OutputFormat,
    /// External stylesheet URL; the embedded theme is used when `None`.
    pub stylesheet: Option<String>,
    /// Attach size and modification time to file entries
    pub include_metadata: bool,
    pub title_template: String,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            ignore_patterns: Vec::new(),
            format: OutputFormat::Both,
            stylesheet: None,
            include_metadata: true,
            title_template: DEFAULT_TITLE_TEMPLATE.to_string(),
        }
    }
}
