//! Shared fixtures for hierarchy integration tests.

#![allow(dead_code)]

use hierarchy_core::types::OrganizationId;
use hierarchy_entity::folder::Folder;

/// Tenant used by most fixtures.
pub fn org() -> OrganizationId {
    OrganizationId::from_str_or_nil("c59cc5c1-9b81-4d00-95e3-22c6efdaf134")
}

/// A second tenant for cross-organization cases.
pub fn other_org() -> OrganizationId {
    OrganizationId::from_str_or_nil("5e35ff8f-21dd-4ed5-b861-ba93dbcdadc3")
}

/// Folder in the default tenant.
pub fn folder(name: &str, path: &str) -> Folder {
    Folder::new(name, org(), path)
}

/// Builds records from parent links: entry `i` names its parent index.
///
/// Names are `n00`, `n01`, ... so no name is a string prefix of another.
pub fn from_parents(organization_id: OrganizationId, parents: &[Option<usize>]) -> Vec<Folder> {
    let mut paths: Vec<String> = Vec::with_capacity(parents.len());
    let mut folders = Vec::with_capacity(parents.len());

    for (idx, parent) in parents.iter().enumerate() {
        let name = format!("n{idx:02}");
        let path = match parent {
            Some(p) => format!("{}.{}", paths[*p], name),
            None => name.clone(),
        };
        paths.push(path.clone());
        folders.push(Folder::new(name, organization_id, path));
    }

    folders
}
