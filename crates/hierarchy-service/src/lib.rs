//! # hierarchy-service
//!
//! Folder hierarchy operations over a flat, multi-tenant collection of
//! [`Folder`](hierarchy_entity::folder::Folder) records whose ancestry is
//! encoded in a delimited path string.
//!
//! The [`HierarchyStore`] holds an immutable snapshot and answers every
//! request with a linear scan through the [`PathCodec`]; no tree or index is
//! built for the three core operations.

pub mod error;
pub mod io;
pub mod movement;
pub mod path;
pub mod query;
pub mod sample;
pub mod store;
pub mod tree;

pub use error::HierarchyError;
pub use path::PathCodec;
pub use sample::generate_sample;
pub use store::{FolderDriver, HierarchyStore};
pub use tree::build_tree;
