//! Newtype wrappers around [`uuid::Uuid`] for domain identifiers.
//!
//! Using a distinct type prevents accidentally passing an arbitrary UUID
//! where a tenant identifier is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a newtype ID wrapper around `Uuid`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Parse an identifier, falling back to the nil UUID on bad input.
            pub fn from_str_or_nil(s: &str) -> Self {
                Self(Uuid::parse_str(s).unwrap_or_else(|_| Uuid::nil()))
            }

            /// Return the inner UUID value.
            pub fn into_uuid(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

define_id!(
    /// Opaque tenant identifier that owns a set of folders.
    OrganizationId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organization_id_new() {
        let id1 = OrganizationId::new();
        let id2 = OrganizationId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_organization_id_display() {
        let uuid = Uuid::new_v4();
        let id = OrganizationId::from_uuid(uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }

    #[test]
    fn test_organization_id_from_str() {
        let id: OrganizationId = "c59cc5c1-9b81-4d00-95e3-22c6efdaf134"
            .parse()
            .expect("should parse");
        assert_eq!(id.to_string(), "c59cc5c1-9b81-4d00-95e3-22c6efdaf134");
    }

    #[test]
    fn test_from_str_or_nil() {
        assert_eq!(
            OrganizationId::from_str_or_nil("not-a-uuid").into_uuid(),
            Uuid::nil()
        );
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = OrganizationId::from_str_or_nil("5e35ff8f-21dd-4ed5-b861-ba93dbcdadc3");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"5e35ff8f-21dd-4ed5-b861-ba93dbcdadc3\"");
    }
}
