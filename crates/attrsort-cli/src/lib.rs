//! Attrsort CLI
//!
//! Thin presentation shell over `attrsort-engine`: argument parsing, input
//! loading, and output rendering. All classification and sorting lives in
//! the engine.

pub mod cli;
pub mod render;
