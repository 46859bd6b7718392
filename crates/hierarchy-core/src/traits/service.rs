//! Service marker trait.

/// Marker trait for hierarchy services.
///
/// Services hold only immutable snapshots, so they can be shared across
/// threads for concurrent reads.
pub trait Service: Send + Sync + 'static {}
