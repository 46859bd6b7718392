//! Path encoding configuration.

use serde::{Deserialize, Serialize};

/// Delimiter used by the reference path encoding.
pub const DEFAULT_DELIMITER: &str = ".";

/// How an ancestor path must line up with a descendant path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryMode {
    /// Raw string prefix: `"fold"` is treated as an ancestor of `"foldX"`.
    #[default]
    Literal,
    /// The prefix must be followed by the delimiter.
    Segment,
}

impl BoundaryMode {
    /// Return the mode as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::Segment => "segment",
        }
    }
}

/// Settings for how folder paths are interpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    /// Separator between ancestor names in a path.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Ancestor prefix matching rule.
    #[serde(default)]
    pub boundary: BoundaryMode,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            boundary: BoundaryMode::default(),
        }
    }
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}
