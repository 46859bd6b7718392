//! Moving a folder and its subtree to a new parent.

use hierarchy_entity::folder::Folder;
use tracing::{info, warn};

use crate::error::HierarchyError;
use crate::path::PathCodec;
use crate::query::find_by_name;
use crate::store::HierarchyStore;

impl HierarchyStore {
    /// Relocates the folder `name` and its subtree below `destination`.
    ///
    /// The snapshot is left untouched; the returned collection holds every
    /// record in the original order, with moved paths rewritten. Names are
    /// resolved to the first matching record. Every record sharing the
    /// source's name is treated as part of the moved set.
    pub fn move_folder(&self, name: &str, destination: &str) -> Result<Vec<Folder>, HierarchyError> {
        let (source, target) = self.resolve_move(name, destination).inspect_err(|e| {
            warn!(
                source = %name,
                destination = %destination,
                code = e.code(),
                "Folder move rejected: {e}"
            );
        })?;

        let codec = self.codec();
        let mut moved = 0usize;
        let folders: Vec<Folder> = self
            .folders()
            .iter()
            .map(|folder| {
                if folder.name == source.name || codec.is_ancestor(source, folder) {
                    moved += 1;
                    relocate(codec, folder, source, target)
                } else {
                    folder.clone()
                }
            })
            .collect();

        info!(
            source = %source.path,
            destination = %target.path,
            organization_id = %source.organization_id,
            moved,
            "Folder moved"
        );

        Ok(folders)
    }

    /// Runs the move preconditions in order and returns the resolved source
    /// and destination records.
    fn resolve_move(
        &self,
        name: &str,
        destination: &str,
    ) -> Result<(&Folder, &Folder), HierarchyError> {
        if name == destination {
            return Err(HierarchyError::SelfMove {
                name: name.to_string(),
            });
        }

        let sources = find_by_name(self.folders(), name);
        let targets = find_by_name(self.folders(), destination);

        let source = *sources.first().ok_or_else(|| HierarchyError::SourceNotFound {
            name: name.to_string(),
        })?;
        let target = *targets
            .first()
            .ok_or_else(|| HierarchyError::DestinationNotFound {
                name: destination.to_string(),
            })?;

        if source.organization_id != target.organization_id {
            return Err(HierarchyError::CrossOrganization {
                source_name: name.to_string(),
                destination_name: destination.to_string(),
            });
        }

        if self.codec().is_ancestor(source, target) {
            return Err(HierarchyError::CyclicMove {
                source_name: name.to_string(),
                destination_name: destination.to_string(),
            });
        }

        Ok((source, target))
    }
}

/// Rewrites `folder` as if `source` now lived directly under `target`.
fn relocate(codec: &PathCodec, folder: &Folder, source: &Folder, target: &Folder) -> Folder {
    let suffix = codec.relative_suffix(&folder.path, &source.path);
    let path = format!("{}{}", codec.join(&target.path, &source.name), suffix);

    Folder {
        name: folder.name.clone(),
        organization_id: folder.organization_id,
        path,
    }
}
