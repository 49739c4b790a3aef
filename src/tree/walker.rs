//! IndexWalker - writes a listing into every directory of a tree

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::error::{IndexError, Result};
use crate::output::{RenderOptions, render};
use crate::stats::{RunSummary, WalkStats};

use super::config::WalkerConfig;
use super::filter::IgnoreFilter;
use super::json_types::{DirectoryIndex, FileEntry};
use super::utils::{
    INDEX_HTML, INDEX_JSON, child_relative_path, entry_metadata, index_path, is_reserved_name,
    modified_time, relative_path,
};

/// Depth-first walker that writes `index.html` / `index.json` into each
/// directory it visits. Subdirectory indexes are written before their
/// parent's.
pub struct IndexWalker {
    config: WalkerConfig,
    filter: IgnoreFilter,
    render_options: RenderOptions,
    timestamp: Option<DateTime<Utc>>,
}

impl IndexWalker {
    pub fn new(config: WalkerConfig) -> Self {
        let filter = IgnoreFilter::new(&config.ignore_patterns);
        let render_options = RenderOptions {
            stylesheet: config.stylesheet.clone(),
            title_template: config.title_template.clone(),
        };
        Self {
            config,
            filter,
            render_options,
            timestamp: None,
        }
    }

    /// Stamp every index with `generated` instead of the current time.
    pub fn with_timestamp(mut self, generated: DateTime<Utc>) -> Self {
        self.timestamp = Some(generated);
        self
    }

    /// Validate `root` and index the whole tree below it.
    pub fn walk(&self, root: &Path) -> Result<RunSummary> {
        if !root.exists() {
            return Err(IndexError::RootNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(IndexError::RootNotDirectory(root.to_path_buf()));
        }

        let mut stats = WalkStats::default();
        self.walk_dir(root, root, &mut stats)?;

        info!(
            root = %root.display(),
            generated = stats.generated_count,
            scanned = stats.directories_scanned,
            "indexing complete"
        );

        let manifest_path = self.config.format.writes_json().then(|| root.join(INDEX_JSON));
        Ok(RunSummary::new(stats, manifest_path))
    }

    /// Index `dir` and everything below it, with paths reported relative
    /// to `root`.
    pub fn walk_dir(&self, dir: &Path, root: &Path, stats: &mut WalkStats) -> Result<()> {
        let relative = relative_path(dir, root);
        let mut ancestors = Vec::new();
        self.visit(dir, &relative, stats, &mut ancestors)
    }

    fn visit(
        &self,
        dir: &Path,
        relative: &str,
        stats: &mut WalkStats,
        ancestors: &mut Vec<PathBuf>,
    ) -> Result<()> {
        let match_path = if relative.is_empty() { "/" } else { relative };
        if self.filter.should_ignore(match_path) {
            debug!(path = %match_path, "directory ignored");
            return Ok(());
        }

        let canonical = fs::canonicalize(dir).map_err(|source| IndexError::Canonicalize {
            path: dir.to_path_buf(),
            source,
        })?;
        if ancestors.contains(&canonical) {
            warn!(
                path = %dir.display(),
                target = %canonical.display(),
                "symlink cycle detected, not descending"
            );
            return Ok(());
        }

        stats.directories_scanned += 1;
        ancestors.push(canonical);
        let entries = self.collect_entries(dir, relative, stats, ancestors)?;
        ancestors.pop();

        let index = DirectoryIndex::new(index_path(relative), entries, self.now());
        debug!(path = %index.path, entries = index.entries.len(), "scanned directory");
        self.write_index(dir, &index, stats)
    }

    /// Build the entries for `dir`, recursing into subdirectories as they
    /// are found.
    fn collect_entries(
        &self,
        dir: &Path,
        relative: &str,
        stats: &mut WalkStats,
        ancestors: &mut Vec<PathBuf>,
    ) -> Result<Vec<FileEntry>> {
        let read_err = |source: io::Error| IndexError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut entries = Vec::new();
        for dir_entry in fs::read_dir(dir).map_err(read_err)? {
            let dir_entry = dir_entry.map_err(read_err)?;
            let name = dir_entry.file_name().to_string_lossy().into_owned();

            if is_reserved_name(&name) {
                continue;
            }

            let child_relative = child_relative_path(relative, &name);
            if self.filter.should_ignore(&child_relative) {
                debug!(path = %child_relative, "entry ignored");
                continue;
            }

            let child_path = dir_entry.path();
            let meta = entry_metadata(&child_path)?;

            if meta.is_dir() {
                self.visit(&child_path, &child_relative, stats, ancestors)?;
                entries.push(FileEntry::directory(name, child_relative));
                continue;
            }

            let mut entry = FileEntry::file(name, child_relative);
            if self.config.include_metadata && meta.is_file() {
                entry = entry.with_metadata(meta.len(), modified_time(&meta));
            }
            entries.push(entry);
        }

        Ok(entries)
    }

    fn write_index(
        &self,
        dir: &Path,
        index: &DirectoryIndex,
        stats: &mut WalkStats,
    ) -> Result<()> {
        let rendered = render(index, self.config.format, &self.render_options)?;

        if let Some(html) = rendered.html {
            write_artifact(&dir.join(INDEX_HTML), &html)?;
            stats.generated_count += 1;
        }
        if let Some(json) = rendered.json {
            write_artifact(&dir.join(INDEX_JSON), &json)?;
            stats.generated_count += 1;
        }

        Ok(())
    }

    fn now(&self) -> DateTime<Utc> {
        self.timestamp.unwrap_or_else(Utc::now)
    }
}

fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| IndexError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "wrote index");
    Ok(())
}
