//! Output configuration types

use crate::tree::DEFAULT_TITLE_TEMPLATE;

/// Settings shared by every rendered listing.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// External stylesheet URL; the embedded dark theme is used when `None`.
    pub stylesheet: Option<String>,
    /// Page title; the first `{path}` is replaced by the directory path.
    pub title_template: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            stylesheet: None,
            title_template: DEFAULT_TITLE_TEMPLATE.to_string(),
        }
    }
}
