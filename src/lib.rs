//! Autoindex - writes browsable `index.html` / `index.json` listings into
//! every directory of a tree, for static file hosting

pub mod error;
pub mod output;
pub mod stats;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{IndexError, Result};
pub use output::{RenderOptions, RenderedIndex, render, render_html, render_json};
pub use stats::{
    RunSummary, WalkStats, print_summary, print_summary_json, workflow_error_command,
    write_action_outputs,
};
pub use tree::{
    DirectoryIndex, EntryKind, FileEntry, INDEX_HTML, INDEX_JSON, IgnoreFilter, IndexWalker,
    OutputFormat, WalkerConfig, parse_ignore_list,
};
