//! Glob-based path exclusion for tree walking

use glob::{MatchOptions, Pattern};
use tracing::warn;

/// `*` and `?` stay within one path segment, and a leading dot needs no
/// explicit match so `*` also hits dotfiles.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Split a raw ignore list into individual patterns.
///
/// Entries are separated by newlines or commas. Blank entries and entries
/// starting with `#` are dropped.
pub fn parse_ignore_list(raw: &str) -> Vec<String> {
    raw.split(['\n', ','])
        .map(str::trim)
        .filter(|p| !p.is_empty() && !p.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// A flat, order-independent set of ignore patterns.
#[derive(Debug, Clone, Default)]
pub struct IgnoreFilter {
    patterns: Vec<IgnorePattern>,
}

#[derive(Debug, Clone)]
struct IgnorePattern {
    raw: String,
    glob: Option<Pattern>,
}

impl IgnorePattern {
    fn matches(&self, candidate: &str) -> bool {
        candidate == self.raw
            || self
                .glob
                .as_ref()
                .is_some_and(|g| g.matches_with(candidate, MATCH_OPTIONS))
    }
}

impl IgnoreFilter {
    /// Compile the given patterns. Patterns that are not valid globs still
    /// match by literal equality.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let patterns = patterns
            .iter()
            .map(|raw| {
                let raw = raw.as_ref().to_string();
                let glob = match Pattern::new(&raw) {
                    Ok(p) => Some(p),
                    Err(e) => {
                        warn!(pattern = %raw, error = %e, "invalid ignore pattern, matching literally");
                        None
                    }
                };
                IgnorePattern { raw, glob }
            })
            .collect();
        Self { patterns }
    }

    /// Check whether a path relative to the scan root should be skipped.
    ///
    /// A path is ignored when any pattern matches either the whole path or
    /// its final segment.
    pub fn should_ignore(&self, relative_path: &str) -> bool {
        if self.patterns.is_empty() {
            return false;
        }

        let normalized = relative_path.replace('\\', "/");
        let base_name = normalized.rsplit('/').next().unwrap_or_default();

        self.patterns
            .iter()
            .any(|p| p.matches(&normalized) || p.matches(base_name))
    }
}
