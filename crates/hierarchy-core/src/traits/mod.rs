//! Core traits defined in `hierarchy-core` and implemented by other crates.

pub mod service;

pub use service::Service;
