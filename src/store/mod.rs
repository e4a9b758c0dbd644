//! store
//!
//! Catalog storage on disk.
//!
//! # Architecture
//!
//! Each locale lives in one JSON document, `<locales_dir>/<locale>.json`.
//! This module is the single doorway for reading and writing those files;
//! nothing else in the crate touches catalog storage directly.
//!
//! # Write Semantics
//!
//! Writes serialize the whole catalog to a temporary file in the same
//! directory and rename it over the destination, so a failed run never
//! leaves a truncated catalog behind. Output is 2-space indented, keeps
//! the tree's key order, leaves non-ASCII characters unescaped, and ends
//! with a newline.
//!
//! # Example
//!
//! ```no_run
//! use lingo::core::types::LocaleName;
//! use lingo::store::CatalogStore;
//!
//! let store = CatalogStore::new("src/i18n/locales");
//! let en = store.load(&LocaleName::new("en").unwrap())?;
//! println!("{} keys", en.flatten().len());
//! # Ok::<(), lingo::store::StoreError>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use thiserror::Error;

use crate::core::tree::{Catalog, Node};
use crate::core::types::LocaleName;

/// File extension for catalog files.
const CATALOG_EXTENSION: &str = "json";

/// Errors from catalog storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The locale's catalog file does not exist.
    #[error("catalog for locale '{locale}' not found at {path}")]
    NotFound { locale: LocaleName, path: PathBuf },

    /// The file exists but is not a valid nested key/value document.
    #[error("malformed catalog for locale '{locale}' at {path}: {message}")]
    Malformed {
        locale: LocaleName,
        path: PathBuf,
        message: String,
    },

    /// Failed to serialize a catalog to JSON.
    #[error("failed to serialize catalog for locale '{locale}': {message}")]
    Serialize { locale: LocaleName, message: String },

    /// An I/O operation failed.
    #[error("catalog storage error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Catalog storage rooted at one locales directory.
///
/// The store maps locale names to file paths and owns all parsing and
/// serialization. Loads return fresh in-memory catalogs; the store keeps
/// no state between calls.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    dir: PathBuf,
}

impl CatalogStore {
    /// Create a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The locales directory this store reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the given locale's catalog file.
    pub fn path_for(&self, locale: &LocaleName) -> PathBuf {
        self.dir
            .join(format!("{}.{}", locale.as_str(), CATALOG_EXTENSION))
    }

    /// Load and parse one locale's catalog.
    ///
    /// # Errors
    ///
    /// - `StoreError::NotFound` when the file does not exist
    /// - `StoreError::Malformed` when it is not valid JSON, its root is
    ///   not an object, or any value is neither a string nor an object
    pub fn load(&self, locale: &LocaleName) -> Result<Catalog, StoreError> {
        let path = self.path_for(locale);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound {
                    locale: locale.clone(),
                    path,
                })
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        let children: IndexMap<String, Node> =
            serde_json::from_str(&raw).map_err(|err| StoreError::Malformed {
                locale: locale.clone(),
                path,
                message: err.to_string(),
            })?;

        Ok(Catalog::from_children(locale.clone(), children))
    }

    /// Write one locale's catalog back to storage.
    ///
    /// The write is atomic per file: serialize to `<path>.tmp`, then
    /// rename over the destination.
    pub fn save(&self, catalog: &Catalog) -> Result<(), StoreError> {
        let path = self.path_for(catalog.locale());
        let tmp = path.with_extension(format!("{CATALOG_EXTENSION}.tmp"));

        fs::write(&tmp, render(catalog)?).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::Io { path, source })
    }

    /// List the locales with a catalog file in the directory, sorted.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be read. Files
    /// whose stem is not a valid locale name are skipped.
    pub fn discover(&self) -> Result<Vec<LocaleName>, StoreError> {
        let entries = fs::read_dir(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let mut locales = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Io {
                path: self.dir.clone(),
                source,
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(CATALOG_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Ok(locale) = LocaleName::new(stem) {
                locales.push(locale);
            }
        }
        locales.sort();
        Ok(locales)
    }
}

/// Render a catalog in its on-disk form: 2-space indentation, key order
/// preserved, non-ASCII unescaped, trailing newline.
pub fn render(catalog: &Catalog) -> Result<String, StoreError> {
    let mut out =
        serde_json::to_string_pretty(catalog.children()).map_err(|err| StoreError::Serialize {
            locale: catalog.locale().clone(),
            message: err.to_string(),
        })?;
    out.push('\n');
    Ok(out)
}
