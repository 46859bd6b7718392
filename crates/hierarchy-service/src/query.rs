//! Tenant and name lookups, and descendant resolution.

use std::collections::HashSet;

use hierarchy_core::types::OrganizationId;
use hierarchy_entity::folder::Folder;
use tracing::debug;

use crate::error::HierarchyError;
use crate::store::HierarchyStore;

/// Folders whose name equals `name`, across all organizations.
pub(crate) fn find_by_name<'a>(folders: &'a [Folder], name: &str) -> Vec<&'a Folder> {
    folders.iter().filter(|f| f.name == name).collect()
}

/// Folders owned by `organization_id`.
pub(crate) fn find_by_org<'a, I>(folders: I, organization_id: OrganizationId) -> Vec<&'a Folder>
where
    I: IntoIterator<Item = &'a Folder>,
{
    folders
        .into_iter()
        .filter(|f| f.belongs_to(organization_id))
        .collect()
}

impl HierarchyStore {
    /// Returns every folder owned by `organization_id`, in collection order.
    pub fn get_folders_by_org_id(&self, organization_id: OrganizationId) -> Vec<Folder> {
        find_by_org(self.folders(), organization_id)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Returns every descendant of the folders named `name` within the
    /// organization.
    ///
    /// Each same-named folder in the organization acts as an anchor. Results
    /// follow anchor order first, then collection order, and a path is
    /// reported at most once.
    pub fn get_all_child_folders(
        &self,
        organization_id: OrganizationId,
        name: &str,
    ) -> Result<Vec<Folder>, HierarchyError> {
        let candidates = find_by_name(self.folders(), name);
        if candidates.is_empty() {
            debug!(name = %name, "Folder name not found");
            return Err(HierarchyError::NotFound {
                name: name.to_string(),
            });
        }

        let anchors = find_by_org(candidates, organization_id);
        if anchors.is_empty() {
            debug!(name = %name, organization_id = %organization_id, "Folder not found in organization");
            return Err(HierarchyError::NotFoundInOrganization {
                name: name.to_string(),
                organization_id,
            });
        }

        let codec = self.codec();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut children = Vec::new();

        for anchor in &anchors {
            for folder in self.folders() {
                if codec.is_ancestor(anchor, folder) && seen.insert(folder.path.as_str()) {
                    children.push(folder.clone());
                }
            }
        }

        debug!(
            name = %name,
            organization_id = %organization_id,
            anchors = anchors.len(),
            descendants = children.len(),
            "Resolved child folders"
        );

        Ok(children)
    }
}
