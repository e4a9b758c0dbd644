//! Lingo - a CLI for keeping multi-locale translation catalogs consistent
//!
//! Lingo manages a directory of per-locale translation files (one nested
//! JSON document per locale) that all describe the same logical tree of
//! message keys. It audits locales against a base locale, compares the
//! whole set symmetrically, and propagates the base's key structure into
//! every locale without losing existing translations.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to commands)
//! - [`core`] - Domain types, configuration, and the consistency engine
//!   (tree model, flattening, diffing, merging)
//! - [`store`] - Single interface for loading and saving locale catalogs
//! - [`ui`] - Output formatting utilities
//!
//! # Correctness Invariants
//!
//! Lingo maintains the following invariants:
//!
//! 1. Diff and merge are pure functions over in-memory catalogs
//! 2. A merged catalog has exactly the base catalog's key structure
//! 3. Catalog files are written whole or not at all (atomic rename)
//! 4. Report ordering never depends on how catalogs were loaded

pub mod cli;
pub mod core;
pub mod store;
pub mod ui;
