//! Serializable listing records produced by the walker

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Whether a listed entry is a file or a directory.
///
/// Directories order before files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

/// One visible child of a scanned directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "iso8601::serialize_opt"
    )]
    pub modified: Option<DateTime<Utc>>,
    /// Path relative to the scan root, `/`-separated, without a leading slash.
    pub path: String,
}

impl FileEntry {
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            size: None,
            modified: None,
            path: path.into(),
        }
    }

    pub fn directory(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
            size: None,
            modified: None,
            path: path.into(),
        }
    }

    pub fn with_metadata(mut self, size: u64, modified: Option<DateTime<Utc>>) -> Self {
        self.size = Some(size);
        self.modified = modified;
        self
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// The listing of one directory, as written to `index.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryIndex {
    /// Directory path with a leading `/`; the scan root is `/`.
    pub path: String,
    pub entries: Vec<FileEntry>,
    #[serde(serialize_with = "iso8601::serialize")]
    pub generated: DateTime<Utc>,
}

impl DirectoryIndex {
    /// Build an index, sorting `entries` into listing order.
    pub fn new(
        path: impl Into<String>,
        mut entries: Vec<FileEntry>,
        generated: DateTime<Utc>,
    ) -> Self {
        sort_entries(&mut entries);
        Self {
            path: path.into(),
            entries,
            generated,
        }
    }

    pub fn is_root(&self) -> bool {
        self.path == "/"
    }
}

/// Directories first, then files; byte-wise name order within each group.
pub fn sort_entries(entries: &mut [FileEntry]) {
    entries.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
}

/// Timestamps are written as `2024-01-02T03:04:05.678Z`.
mod iso8601 {
    use chrono::{DateTime, Utc};
    use serde::Serializer;

    use super::format_timestamp;

    pub fn serialize<S: Serializer>(
        time: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_timestamp(time))
    }

    pub fn serialize_opt<S: Serializer>(
        time: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serialize(t, serializer),
            None => serializer.serialize_none(),
        }
    }
}

/// Format a timestamp as ISO-8601 UTC with millisecond precision.
pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}
