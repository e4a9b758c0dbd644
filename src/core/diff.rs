//! core::diff
//!
//! Multi-catalog key diffing.
//!
//! # Architecture
//!
//! The differ works on the key sets derived by flattening each catalog;
//! it never inspects leaf values. Given N catalogs and a designated base
//! locale it computes, per locale:
//!
//! - `missing` - keys the base has that the locale lacks
//! - `extra` - keys the locale has that the base lacks
//! - `missing_from_union` - keys anywhere in the set that the locale lacks
//! - `shape_conflicts` - paths that are a leaf on one side and a branch
//!   on the other (a data-quality signal, never fatal)
//!
//! # Invariants
//!
//! - The report is a pure function of the input key sets; nothing depends
//!   on the order catalogs were loaded, only locales are reported in the
//!   caller-supplied order
//! - Every key list is sorted (key paths order lexicographically)

use std::ops::Bound;

use thiserror::Error;

use super::tree::Catalog;
use super::types::{KeyPath, KeySet, LocaleName};

/// Errors from diff computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiffError {
    #[error("base locale '{0}' is not among the loaded catalogs")]
    BaseNotLoaded(LocaleName),
}

/// Key differences for one locale, relative to the base and the union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDiff {
    /// The locale this entry describes.
    pub locale: LocaleName,
    /// Keys present in the base but absent here, sorted.
    pub missing: Vec<KeyPath>,
    /// Keys present here but absent in the base, sorted.
    pub extra: Vec<KeyPath>,
    /// Keys present in any catalog but absent here, sorted.
    pub missing_from_union: Vec<KeyPath>,
    /// Paths that are a leaf in one of {base, this locale} and a branch
    /// in the other, sorted. Reported at the leaf side's path.
    pub shape_conflicts: Vec<KeyPath>,
}

impl LocaleDiff {
    /// Whether this locale has every base key.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// The result of diffing a set of catalogs against a base locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffReport {
    /// The designated base locale.
    pub base: LocaleName,
    /// Union of all key paths across all catalogs.
    pub union: KeySet,
    /// Per-locale differences, in the caller-supplied catalog order
    /// (base included).
    pub locales: Vec<LocaleDiff>,
}

/// Diff `catalogs` against the catalog whose locale is `base`.
///
/// Catalogs are compared in the order given; the base may appear at any
/// position and is diffed too (its `missing` and `extra` are empty by
/// construction).
///
/// # Errors
///
/// Returns `DiffError::BaseNotLoaded` if no catalog carries the base
/// locale. Once inputs are well-formed catalogs the computation is total.
pub fn diff(catalogs: &[Catalog], base: &LocaleName) -> Result<DiffReport, DiffError> {
    let keys: Vec<(LocaleName, KeySet)> = catalogs
        .iter()
        .map(|c| (c.locale().clone(), c.flatten()))
        .collect();

    let base_keys = keys
        .iter()
        .find(|(locale, _)| locale == base)
        .map(|(_, keys)| keys.clone())
        .ok_or_else(|| DiffError::BaseNotLoaded(base.clone()))?;

    let mut union = KeySet::new();
    for (_, locale_keys) in &keys {
        union.extend(locale_keys.iter().cloned());
    }

    let locales = keys
        .iter()
        .map(|(locale, locale_keys)| LocaleDiff {
            locale: locale.clone(),
            missing: base_keys.difference(locale_keys).cloned().collect(),
            extra: locale_keys.difference(&base_keys).cloned().collect(),
            missing_from_union: union.difference(locale_keys).cloned().collect(),
            shape_conflicts: shape_conflicts(&base_keys, locale_keys),
        })
        .collect();

    Ok(DiffReport {
        base: base.clone(),
        union,
        locales,
    })
}

/// Find paths that are a leaf in one key set and a branch in the other.
///
/// A leaf path `p` in one catalog conflicts when the other catalog has a
/// leaf path strictly below `p` (so `p` is a branch there). Conflicts are
/// reported at `p`, the leaf side's path.
fn shape_conflicts(a: &KeySet, b: &KeySet) -> Vec<KeyPath> {
    let mut conflicts: Vec<KeyPath> = a
        .iter()
        .filter(|path| is_branch_in(b, path))
        .chain(b.iter().filter(|path| is_branch_in(a, path)))
        .cloned()
        .collect();
    conflicts.sort();
    conflicts.dedup();
    conflicts
}

/// Whether `path` addresses a branch in `keys`, i.e. some leaf path in
/// `keys` lies strictly below it.
///
/// Key paths order lexicographically by segments, so every descendant of
/// `path` sorts immediately after it; checking the first successor is
/// enough.
fn is_branch_in(keys: &KeySet, path: &KeyPath) -> bool {
    keys.range((Bound::Excluded(path.clone()), Bound::Unbounded))
        .next()
        .is_some_and(|next| path.is_strict_prefix_of(next))
}
