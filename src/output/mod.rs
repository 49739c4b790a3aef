//! Listing renderers
//!
//! Turns a [`DirectoryIndex`] into the documents written next to it:
//! - HTML page for browsing
//! - JSON document for programmatic consumers
//!
//! # Module Structure
//!
//! - `config` - Render options shared by every page
//! - `utils` - Size, date and title formatting
//! - `html` - HTML page
//! - `json` - JSON document

mod config;
mod html;
mod json;
mod utils;

pub use config::RenderOptions;
pub use html::render_html;
pub use json::render_json;
pub use utils::{format_date, format_size, render_title};

use crate::error::Result;
use crate::tree::{DirectoryIndex, OutputFormat};

/// Documents rendered for one directory; only the requested formats are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedIndex {
    pub html: Option<String>,
    pub json: Option<String>,
}

/// Render `index` in every format `format` asks for.
pub fn render(
    index: &DirectoryIndex,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<RenderedIndex> {
    let html = format.writes_html().then(|| render_html(index, options));
    let json = if format.writes_json() {
        Some(render_json(index)?)
    } else {
        None
    };
    Ok(RenderedIndex { html, json })
}
