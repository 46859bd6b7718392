//! Folder entity model.

use hierarchy_core::types::OrganizationId;
use serde::{Deserialize, Serialize};

/// A folder record in the flat hierarchy.
///
/// The position in the tree is carried entirely by `path`: the names of all
/// ancestors from the root down to this folder, joined by the delimiter.
/// The last segment equals `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Folder name, unique within an organization.
    pub name: String,
    /// The owning tenant.
    pub organization_id: OrganizationId,
    /// Materialized ancestry path (e.g., `fold.c1.c2`).
    pub path: String,
}

impl Folder {
    /// Create a folder record.
    pub fn new(
        name: impl Into<String>,
        organization_id: OrganizationId,
        path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            organization_id,
            path: path.into(),
        }
    }

    /// Check whether this folder belongs to the given organization.
    pub fn belongs_to(&self, organization_id: OrganizationId) -> bool {
        self.organization_id == organization_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_shape_is_camel_case() {
        let org = OrganizationId::from_str_or_nil("c59cc5c1-9b81-4d00-95e3-22c6efdaf134");
        let folder = Folder::new("c1", org, "fold.c1");

        let json = serde_json::to_value(&folder).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "name": "c1",
                "organizationId": "c59cc5c1-9b81-4d00-95e3-22c6efdaf134",
                "path": "fold.c1",
            })
        );
    }

    #[test]
    fn test_deserialize_record() {
        let folder: Folder = serde_json::from_str(
            r#"{"name":"fold","organizationId":"5e35ff8f-21dd-4ed5-b861-ba93dbcdadc3","path":"fold"}"#,
        )
        .expect("deserialize");
        assert_eq!(folder.name, "fold");
        assert!(folder.belongs_to(OrganizationId::from_str_or_nil(
            "5e35ff8f-21dd-4ed5-b861-ba93dbcdadc3"
        )));
    }

    #[test]
    fn test_rejects_malformed_organization() {
        let result = serde_json::from_str::<Folder>(
            r#"{"name":"fold","organizationId":"nope","path":"fold"}"#,
        );
        assert!(result.is_err());
    }
}
