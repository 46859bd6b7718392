//! # hierarchy-entity
//!
//! Domain entity models for the folder hierarchy. [`folder::Folder`] is the
//! record exchanged at the library boundary; the tree types are read-only
//! views derived from a flat collection.

pub mod folder;
