//! Directory tree walking
//!
//! - `IndexWalker`: depth-first walk writing one listing per directory
//! - `IgnoreFilter`: glob-based exclusion of paths and names
//! - `DirectoryIndex` / `FileEntry`: the serializable listing records

mod config;
mod filter;
mod json_types;
mod utils;
mod walker;

pub use config::{DEFAULT_TITLE_TEMPLATE, OutputFormat, WalkerConfig};
pub use filter::{IgnoreFilter, parse_ignore_list};
pub use json_types::{DirectoryIndex, EntryKind, FileEntry, format_timestamp, sort_entries};
pub use utils::{INDEX_HTML, INDEX_JSON, is_reserved_name};
pub use walker::IndexWalker;
