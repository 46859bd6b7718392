//! The hierarchy store and the operations it exposes.

use hierarchy_core::traits::Service;
use hierarchy_core::types::OrganizationId;
use hierarchy_entity::folder::Folder;

use crate::error::HierarchyError;
use crate::path::PathCodec;

/// Operations over a flat folder collection.
///
/// Folder names are assumed to be unique within an organization. Where a
/// name still matches several records, lookups take the first one in
/// collection order: with folders `a`, `c.a` and `d`, moving `d` to `a` is
/// ambiguous and resolves to the first `a`.
pub trait FolderDriver {
    /// Returns every folder owned by `organization_id`, in collection order.
    fn get_folders_by_org_id(&self, organization_id: OrganizationId) -> Vec<Folder>;

    /// Returns every descendant of the folders named `name` in the
    /// organization, without duplicate paths.
    fn get_all_child_folders(
        &self,
        organization_id: OrganizationId,
        name: &str,
    ) -> Result<Vec<Folder>, HierarchyError>;

    /// Relocates the folder `name` and its subtree below `destination`,
    /// returning the full collection as it would look after the move.
    fn move_folder(&self, name: &str, destination: &str) -> Result<Vec<Folder>, HierarchyError>;
}

/// Holds an immutable snapshot of folder records.
#[derive(Debug, Clone, Default)]
pub struct HierarchyStore {
    /// Folder records in caller-supplied order.
    folders: Vec<Folder>,
    /// Path interpretation rules.
    codec: PathCodec,
}

impl HierarchyStore {
    /// Creates a store using the default `.`-delimited literal codec.
    pub fn new(folders: Vec<Folder>) -> Self {
        Self::with_codec(folders, PathCodec::default())
    }

    /// Creates a store with explicit path rules.
    pub fn with_codec(folders: Vec<Folder>, codec: PathCodec) -> Self {
        Self { folders, codec }
    }

    /// The snapshot this store answers from.
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// The codec used to relate paths.
    pub fn codec(&self) -> &PathCodec {
        &self.codec
    }

    /// Consumes the store, returning its snapshot.
    pub fn into_folders(self) -> Vec<Folder> {
        self.folders
    }
}

impl Service for HierarchyStore {}

impl FolderDriver for HierarchyStore {
    fn get_folders_by_org_id(&self, organization_id: OrganizationId) -> Vec<Folder> {
        HierarchyStore::get_folders_by_org_id(self, organization_id)
    }

    fn get_all_child_folders(
        &self,
        organization_id: OrganizationId,
        name: &str,
    ) -> Result<Vec<Folder>, HierarchyError> {
        HierarchyStore::get_all_child_folders(self, organization_id, name)
    }

    fn move_folder(&self, name: &str, destination: &str) -> Result<Vec<Folder>, HierarchyError> {
        HierarchyStore::move_folder(self, name, destination)
    }
}
