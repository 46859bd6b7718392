//! Sample data generation configuration.

use serde::{Deserialize, Serialize};

/// Shape of the generated sample collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Number of organizations to generate.
    #[serde(default = "default_organizations")]
    pub organizations: usize,
    /// Root folders per organization.
    #[serde(default = "default_roots")]
    pub roots: usize,
    /// Levels below each root (0 = roots only).
    #[serde(default = "default_depth")]
    pub depth: usize,
    /// Children per non-leaf folder.
    #[serde(default = "default_fanout")]
    pub fanout: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            organizations: default_organizations(),
            roots: default_roots(),
            depth: default_depth(),
            fanout: default_fanout(),
        }
    }
}

fn default_organizations() -> usize {
    2
}

fn default_roots() -> usize {
    2
}

fn default_depth() -> usize {
    2
}

fn default_fanout() -> usize {
    2
}
