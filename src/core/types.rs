//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`LocaleName`] - Validated locale identifier (e.g. `en`, `pt-BR`)
//! - [`KeyPath`] - Full address of a translation leaf, as raw key segments
//! - [`KeySet`] - Sorted set of key paths derived from one catalog
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use lingo::core::types::{KeyPath, LocaleName};
//!
//! // Valid constructions
//! let locale = LocaleName::new("pt-BR").unwrap();
//! let path = KeyPath::new(vec!["settings".into(), "title".into()]).unwrap();
//! assert_eq!(path.to_string(), "settings.title");
//!
//! // Invalid constructions fail at creation time
//! assert!(LocaleName::new("").is_err());
//! assert!(LocaleName::new("../en").is_err());
//! assert!(KeyPath::new(vec![]).is_err());
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid locale name: {0}")]
    InvalidLocaleName(String),

    #[error("key path must have at least one segment")]
    EmptyKeyPath,
}

/// A validated locale name.
///
/// Locale names double as file stems (`<locale>.json`), so they are
/// restricted to ASCII alphanumerics, `-`, and `_`:
/// - Cannot be empty
/// - Cannot start with `-`
/// - Cannot contain path separators, dots, or whitespace
///
/// # Example
///
/// ```
/// use lingo::core::types::LocaleName;
///
/// let en = LocaleName::new("en").unwrap();
/// assert_eq!(en.as_str(), "en");
///
/// assert!(LocaleName::new("zh_Hans").is_ok());
/// assert!(LocaleName::new("fr/..").is_err());
/// assert!(LocaleName::new("en.json").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocaleName(String);

impl LocaleName {
    /// Create a new validated locale name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidLocaleName` if the name is empty, starts
    /// with `-`, or contains characters outside `[A-Za-z0-9_-]`.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidLocaleName(
                "locale name cannot be empty".into(),
            ));
        }
        if name.starts_with('-') {
            return Err(TypeError::InvalidLocaleName(format!(
                "locale name cannot start with '-': {name}"
            )));
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
        {
            return Err(TypeError::InvalidLocaleName(format!(
                "locale name contains invalid character '{bad}': {name}"
            )));
        }
        Ok(())
    }

    /// Get the locale name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for LocaleName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LocaleName> for String {
    fn from(value: LocaleName) -> Self {
        value.0
    }
}

/// The full address of a translation leaf from the tree root.
///
/// A key path is a non-empty ordered sequence of raw key segments. The
/// segments are the source of truth; the dotted rendering (`a.b.c`) is
/// derived for human-facing output only, so a literal `.` inside a key
/// cannot corrupt the structural representation (its rendering is
/// ambiguous to a reader, but comparisons stay exact).
///
/// Ordering is lexicographic over the segment sequence, which gives every
/// branch's subtree a contiguous run in a sorted set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// Create a key path from raw segments.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::EmptyKeyPath` if `segments` is empty.
    pub fn new(segments: Vec<String>) -> Result<Self, TypeError> {
        if segments.is_empty() {
            return Err(TypeError::EmptyKeyPath);
        }
        Ok(Self(segments))
    }

    /// Create a single-segment key path.
    pub fn single(key: impl Into<String>) -> KeyPath {
        Self(vec![key.into()])
    }

    /// The raw key segments.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Extend this path with one more segment.
    pub fn child(&self, key: &str) -> KeyPath {
        let mut segments = self.0.clone();
        segments.push(key.to_string());
        Self(segments)
    }

    /// Whether `self` is a strict prefix of `other`.
    ///
    /// A leaf path in one catalog that is a strict prefix of a leaf path
    /// in another catalog marks a Leaf/Branch shape conflict at `self`.
    pub fn is_strict_prefix_of(&self, other: &KeyPath) -> bool {
        other.0.len() > self.0.len() && other.0[..self.0.len()] == self.0[..]
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// A sorted set of key paths derived by flattening one catalog.
///
/// `BTreeSet` keeps iteration deterministic regardless of the insertion
/// order of the branches the paths came from.
pub type KeySet = BTreeSet<KeyPath>;
