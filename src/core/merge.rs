//! core::merge
//!
//! Fallback merging of one locale's catalog onto the base's structure.
//!
//! # Algorithm
//!
//! Structural recursion over the base tree, one call per branch:
//!
//! - key only in base: the base subtree is copied verbatim (the fallback;
//!   untranslated keys propagate until someone translates them)
//! - key in both, both branches: recurse
//! - key in both, at least one side a leaf: the target value wins
//!   verbatim, shape conflict included
//! - key only in target: dropped
//!
//! By construction the merged tree has exactly the base's key structure,
//! except where a shape conflict made the target's subtree win (see
//! [`MergeOutcome::conflicts`]).
//!
//! # Invariants
//!
//! - Inputs are never mutated; the result is a new catalog
//! - Merging is idempotent: re-merging the output changes nothing
//! - Without shape conflicts, `flatten(merge(base, target))` equals
//!   `flatten(base)`

use indexmap::IndexMap;

use super::tree::{Catalog, Node};
use super::types::KeyPath;

/// The result of a fallback merge.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    /// The merged catalog, carrying the target's locale.
    pub catalog: Catalog,
    /// Paths where the two sides disagreed on Leaf vs. Branch, sorted.
    ///
    /// The merge accepts these silently (target wins); callers wanting
    /// stricter validation can gate on this list.
    pub conflicts: Vec<KeyPath>,
}

/// Merge `target` onto `base`'s key structure.
///
/// The result prefers `target`'s value wherever both catalogs have the
/// key, falls back to `base`'s subtree for keys `target` lacks, and drops
/// keys only `target` has. Child order follows `base`.
pub fn merge(base: &Catalog, target: &Catalog) -> MergeOutcome {
    let (children, mut conflicts) = merge_branches(base.children(), target.children(), None);
    conflicts.sort();

    MergeOutcome {
        catalog: Catalog::from_children(target.locale().clone(), children),
        conflicts,
    }
}

/// Convenience wrapper when the caller does not care about conflicts.
pub fn merge_catalog(base: &Catalog, target: &Catalog) -> Catalog {
    merge(base, target).catalog
}

fn merge_branches(
    base: &IndexMap<String, Node>,
    target: &IndexMap<String, Node>,
    prefix: Option<&KeyPath>,
) -> (IndexMap<String, Node>, Vec<KeyPath>) {
    let mut merged = IndexMap::with_capacity(base.len());
    let mut conflicts = Vec::new();

    for (key, base_child) in base {
        let path = match prefix {
            Some(prefix) => prefix.child(key),
            None => KeyPath::single(key.clone()),
        };
        match target.get(key) {
            None => {
                merged.insert(key.clone(), base_child.clone());
            }
            Some(target_child) => match (base_child, target_child) {
                (Node::Branch(base_grandchildren), Node::Branch(target_grandchildren)) => {
                    let (children, nested) =
                        merge_branches(base_grandchildren, target_grandchildren, Some(&path));
                    merged.insert(key.clone(), Node::Branch(children));
                    conflicts.extend(nested);
                }
                (base_child, target_child) => {
                    if base_child.is_branch() != target_child.is_branch() {
                        conflicts.push(path);
                    }
                    merged.insert(key.clone(), target_child.clone());
                }
            },
        }
    }

    (merged, conflicts)
}
