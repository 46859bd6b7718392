//! Folder tree building for hierarchical display.

use std::collections::HashMap;

use hierarchy_core::types::OrganizationId;
use hierarchy_entity::folder::{Folder, FolderNode, FolderTree};

use crate::path::PathCodec;
use crate::query::find_by_org;

/// Builds the organization's folder tree from a flat collection.
///
/// A folder hangs under the record whose path equals its parent path. When
/// no such record exists the folder becomes a root, so partial hierarchies
/// still render. Siblings keep collection order.
pub fn build_tree(folders: &[Folder], organization_id: OrganizationId, codec: &PathCodec) -> FolderTree {
    let members = find_by_org(folders, organization_id);
    if members.is_empty() {
        return FolderTree::empty();
    }

    let mut by_path: HashMap<&str, usize> = HashMap::new();
    for (idx, folder) in members.iter().enumerate() {
        by_path.entry(folder.path.as_str()).or_insert(idx);
    }

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); members.len()];
    let mut roots = Vec::new();
    for (idx, folder) in members.iter().enumerate() {
        match codec
            .parent_path(&folder.path)
            .and_then(|parent| by_path.get(parent))
        {
            Some(&parent) => children[parent].push(idx),
            None => roots.push(idx),
        }
    }

    let roots = roots
        .into_iter()
        .map(|idx| build_node(idx, &members, &children, codec))
        .collect();

    FolderTree::from_roots(roots)
}

fn build_node(
    idx: usize,
    members: &[&Folder],
    children: &[Vec<usize>],
    codec: &PathCodec,
) -> FolderNode {
    let folder = members[idx];
    let nodes: Vec<FolderNode> = children[idx]
        .iter()
        .map(|&child| build_node(child, members, children, codec))
        .collect();

    FolderNode {
        name: folder.name.clone(),
        path: folder.path.clone(),
        depth: codec.depth(&folder.path),
        child_count: nodes.len(),
        children: nodes,
    }
}
