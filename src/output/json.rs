//! JSON output

use crate::error::Result;
use crate::tree::DirectoryIndex;

/// Serialize an index as pretty-printed JSON with two-space indentation.
pub fn render_json(index: &DirectoryIndex) -> Result<String> {
    Ok(serde_json::to_string_pretty(index)?)
}
