//! Hierarchy operation failures.
//!
//! Every precondition violation is reported as its own variant and mapped
//! to `hierarchy_core::error::AppError` at the application boundary.

use hierarchy_core::error::AppError;
use hierarchy_core::types::OrganizationId;
use thiserror::Error;

/// Failure of a query or move over the folder collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    // --- Query errors ---
    /// No folder with the name exists in any organization.
    #[error("Folder '{name}' does not exist")]
    NotFound {
        /// The name that was searched for.
        name: String,
    },

    /// The name exists, but not under the requested organization.
    #[error("Folder '{name}' does not exist in organization {organization_id}")]
    NotFoundInOrganization {
        /// The name that was searched for.
        name: String,
        /// The organization that was queried.
        organization_id: OrganizationId,
    },

    // --- Move errors ---
    /// Source and destination name the same folder.
    #[error("Cannot move folder '{name}' to itself")]
    SelfMove {
        /// The folder name.
        name: String,
    },

    /// No folder with the source name exists.
    #[error("Source folder '{name}' does not exist")]
    SourceNotFound {
        /// The source name.
        name: String,
    },

    /// No folder with the destination name exists.
    #[error("Destination folder '{name}' does not exist")]
    DestinationNotFound {
        /// The destination name.
        name: String,
    },

    /// Source and destination belong to different organizations.
    #[error("Cannot move folder '{source_name}' to '{destination_name}' in a different organization")]
    CrossOrganization {
        /// The source folder name.
        source_name: String,
        /// The destination folder name.
        destination_name: String,
    },

    /// The destination lies inside the source's own subtree.
    #[error("Cannot move folder '{source_name}' into its descendant '{destination_name}'")]
    CyclicMove {
        /// The source folder name.
        source_name: String,
        /// The destination folder name.
        destination_name: String,
    },
}

impl HierarchyError {
    /// Stable tag identifying the failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::NotFoundInOrganization { .. } => "NOT_FOUND_IN_ORGANIZATION",
            Self::SelfMove { .. } => "SELF_MOVE",
            Self::SourceNotFound { .. } => "SOURCE_NOT_FOUND",
            Self::DestinationNotFound { .. } => "DESTINATION_NOT_FOUND",
            Self::CrossOrganization { .. } => "CROSS_ORGANIZATION",
            Self::CyclicMove { .. } => "CYCLIC_MOVE",
        }
    }
}

impl From<HierarchyError> for AppError {
    fn from(err: HierarchyError) -> Self {
        match &err {
            HierarchyError::NotFound { .. }
            | HierarchyError::NotFoundInOrganization { .. }
            | HierarchyError::SourceNotFound { .. }
            | HierarchyError::DestinationNotFound { .. } => AppError::not_found(err.to_string()),
            HierarchyError::SelfMove { .. }
            | HierarchyError::CrossOrganization { .. }
            | HierarchyError::CyclicMove { .. } => AppError::validation(err.to_string()),
        }
    }
}
