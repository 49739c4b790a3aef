//! Error types for index generation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort an indexing run.
///
/// Root validation failures are raised before any traversal; the remaining
/// variants come from the walk itself and abort it where they occur.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("root directory '{}' does not exist", .0.display())]
    RootNotFound(PathBuf),

    #[error("root path '{}' is not a directory", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("cannot read directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot stat '{}': {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot resolve '{}': {source}", path.display())]
    Canonicalize {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot serialize directory index: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IndexError>;
