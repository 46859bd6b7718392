//! Folder tree structures for hierarchical display.

use serde::{Deserialize, Serialize};

/// A node in a folder tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder name.
    pub name: String,
    /// Full path.
    pub path: String,
    /// Depth level (0 for a root path).
    pub depth: usize,
    /// Number of direct child folders.
    pub child_count: usize,
    /// Child folder nodes.
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    /// Count this node and every node below it.
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(FolderNode::subtree_size).sum::<usize>()
    }
}

/// A folder tree for one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderTree {
    /// The root node(s) of the tree.
    pub roots: Vec<FolderNode>,
    /// Total number of folders in the tree.
    pub total_folders: usize,
}

impl FolderTree {
    /// Create an empty folder tree.
    pub fn empty() -> Self {
        Self {
            roots: Vec::new(),
            total_folders: 0,
        }
    }

    /// Build a tree from root nodes, counting every folder beneath them.
    pub fn from_roots(roots: Vec<FolderNode>) -> Self {
        let total_folders = roots.iter().map(FolderNode::subtree_size).sum();
        Self {
            roots,
            total_folders,
        }
    }

    /// Check whether the tree has no folders.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
