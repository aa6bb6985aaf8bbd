//! Attrsort Engine
//!
//! Classification and sorting of free-form attribute tokens.
//!
//! A raw comma-separated string is split into tokens, each token is assigned
//! to one of five categories (measurement sizes, apparel sizes, numbers,
//! words, single letters) by an ordered predicate chain, and each selected
//! category is stable-sorted by its own comparison key:
//! - sizes: centimeter-normalized measurement value
//! - shirts: apparel ordinal (XS=1 .. XXXL=7)
//! - number: numeric value
//! - words, alphabet: case-sensitive lexicographic order
//!
//! The whole pass is synchronous and side-effect free; the lookup tables are
//! compile-time constants, so concurrent invocations share no mutable state.

pub mod apparel;
pub mod classifier;
pub mod orchestrator;
pub mod units;

pub use classifier::classify;
pub use orchestrator::{sort_attributes, tokenize};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::classify;
    pub use crate::orchestrator::{sort_attributes, tokenize};
    pub use attrsort_core::prelude::*;
}
