//! Attrsort Core
//!
//! Core types and error handling shared across attrsort components.
//!
//! This crate provides:
//! - The closed set of classification categories and their display labels
//! - Sort direction and advisory outcome types
//! - The per-invocation result report consumed by presentation shells
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Advisory, Category, CategoryGroup, SortDirection, SortReport};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{Advisory, Category, CategoryGroup, SortDirection, SortReport};
}
