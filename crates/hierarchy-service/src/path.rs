//! Path codec: structural relationships derived from path strings.
//!
//! A path lists every ancestor name from the root down to the folder itself,
//! joined by the delimiter. Ancestry is decided on the strings alone; no
//! record has to exist for an intermediate prefix.

use hierarchy_core::config::path::{BoundaryMode, DEFAULT_DELIMITER, PathConfig};
use hierarchy_entity::folder::Folder;

/// Interprets delimited path strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCodec {
    delimiter: String,
    boundary: BoundaryMode,
}

impl Default for PathCodec {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER, BoundaryMode::Literal)
    }
}

impl PathCodec {
    /// Creates a codec with an explicit delimiter and boundary rule.
    pub fn new(delimiter: impl Into<String>, boundary: BoundaryMode) -> Self {
        Self {
            delimiter: delimiter.into(),
            boundary,
        }
    }

    /// Creates a codec from the `[hierarchy]` configuration section.
    pub fn from_config(config: &PathConfig) -> Self {
        Self::new(config.delimiter.clone(), config.boundary)
    }

    /// The separator between path segments.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// The ancestor prefix rule in effect.
    pub fn boundary(&self) -> BoundaryMode {
        self.boundary
    }

    /// Returns `true` if `child` lies strictly below `parent`.
    ///
    /// Both folders must share an organization and have different paths.
    /// In [`BoundaryMode::Literal`] any string prefix counts, so `fold` is
    /// an ancestor of `foldX`; [`BoundaryMode::Segment`] additionally
    /// requires the delimiter right after the prefix.
    pub fn is_ancestor(&self, parent: &Folder, child: &Folder) -> bool {
        child.organization_id == parent.organization_id
            && child.path != parent.path
            && self.has_prefix(&child.path, &parent.path)
    }

    /// Remainder of `path` after the literal prefix `ancestor_path`.
    ///
    /// Empty when the paths are equal or `ancestor_path` is not a prefix.
    pub fn relative_suffix<'a>(&self, path: &'a str, ancestor_path: &str) -> &'a str {
        path.strip_prefix(ancestor_path).unwrap_or("")
    }

    /// Appends `name` below `parent_path`.
    pub fn join(&self, parent_path: &str, name: &str) -> String {
        format!("{parent_path}{}{name}", self.delimiter)
    }

    /// Splits a path into its folder names, root first.
    ///
    /// With an empty delimiter every path is a single root segment.
    pub fn segments<'a>(&self, path: &'a str) -> Vec<&'a str> {
        if self.delimiter.is_empty() {
            return vec![path];
        }
        path.split(self.delimiter.as_str()).collect()
    }

    /// Number of ancestors encoded in the path (0 for a root).
    pub fn depth(&self, path: &str) -> usize {
        if self.delimiter.is_empty() {
            return 0;
        }
        path.matches(self.delimiter.as_str()).count()
    }

    /// Path of the direct parent, or `None` for a root path.
    pub fn parent_path<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.delimiter.is_empty() {
            return None;
        }
        path.rfind(self.delimiter.as_str()).map(|idx| &path[..idx])
    }

    fn has_prefix(&self, path: &str, prefix: &str) -> bool {
        match self.boundary {
            BoundaryMode::Literal => path.starts_with(prefix),
            BoundaryMode::Segment => path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with(self.delimiter.as_str())),
        }
    }
}
