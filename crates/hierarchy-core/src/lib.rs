//! # hierarchy-core
//!
//! Core crate for the folder hierarchy workspace. Contains the marker
//! traits, configuration schemas, typed identifiers, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other hierarchy crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
