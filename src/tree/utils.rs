//! Shared utility functions for tree walking

use std::fs::{self, Metadata};
use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::{IndexError, Result};

/// File name of the generated HTML listing.
pub const INDEX_HTML: &str = "index.html";
/// File name of the generated JSON listing.
pub const INDEX_JSON: &str = "index.json";

/// Generated artifacts never appear in a listing.
pub fn is_reserved_name(name: &str) -> bool {
    name == INDEX_HTML || name == INDEX_JSON
}

/// Path of `path` relative to `root`, `/`-separated.
///
/// Returns an empty string for the root itself.
pub fn relative_path(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Relative path of a child named `name` inside the directory at `parent`.
pub fn child_relative_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Listing path shown in an index: the relative path with a leading `/`.
pub fn index_path(relative: &str) -> String {
    format!("/{}", relative)
}

/// Metadata for a directory child, following symlinks.
///
/// A dangling symlink falls back to the link's own metadata so it is
/// listed instead of aborting the walk.
pub fn entry_metadata(path: &Path) -> Result<Metadata> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::symlink_metadata(path).map_err(|source| IndexError::Metadata {
                path: path.to_path_buf(),
                source,
            })
        }
        Err(source) => Err(IndexError::Metadata {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Last modification time, if the platform reports one.
pub fn modified_time(meta: &Metadata) -> Option<DateTime<Utc>> {
    meta.modified().ok().map(DateTime::<Utc>::from)
}
