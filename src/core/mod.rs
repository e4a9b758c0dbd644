//! core
//!
//! Core domain types, configuration, and the consistency engine.
//!
//! # Modules
//!
//! - [`types`] - Strong types: LocaleName, KeyPath, KeySet
//! - [`tree`] - Catalog tree model and key-path flattening
//! - [`diff`] - Multi-catalog key diffing
//! - [`merge`] - Fallback merging onto the base structure
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Diff and merge are pure functions over in-memory catalogs
//! - All computation is deterministic regardless of input ordering

pub mod config;
pub mod diff;
pub mod merge;
pub mod tree;
pub mod types;
