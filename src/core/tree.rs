//! core::tree
//!
//! The catalog tree model and key-path flattening.
//!
//! # Architecture
//!
//! A catalog is one locale's full translation tree: nested string-keyed
//! mappings whose terminal values are translated strings. The tree is a
//! tagged variant ([`Node::Leaf`] | [`Node::Branch`]) so every traversal
//! handles both shapes exhaustively instead of relying on runtime type
//! sniffing.
//!
//! # JSON mapping
//!
//! A JSON string deserializes to a `Leaf`, a JSON object to a `Branch`.
//! Any other JSON value (number, bool, array, null) fails to parse and is
//! reported by the store as a malformed catalog.
//!
//! # Invariants
//!
//! - Branch children preserve insertion order, so serialized output diffs
//!   stay stable; no correctness property depends on that order
//! - The root of a catalog is always a `Branch`
//! - Flattening is a pure function; it never mutates the tree

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{KeyPath, KeySet, LocaleName};

/// Errors from catalog construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("catalog root must be an object, not a single string")]
    LeafRoot,
}

/// One node of a catalog tree: a terminal translation string or a
/// mapping of child nodes.
///
/// Leaf values may contain placeholder tokens such as `{{count}}`; they
/// are opaque to this engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// A terminal translated string.
    Leaf(String),
    /// A non-terminal node containing named children, in insertion order.
    Branch(IndexMap<String, Node>),
}

impl Node {
    /// Build a leaf node.
    pub fn leaf(value: impl Into<String>) -> Node {
        Node::Leaf(value.into())
    }

    /// Build a branch node from `(key, child)` pairs, keeping their order.
    pub fn branch<I, K>(children: I) -> Node
    where
        I: IntoIterator<Item = (K, Node)>,
        K: Into<String>,
    {
        Node::Branch(children.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Whether this node is a branch.
    pub fn is_branch(&self) -> bool {
        matches!(self, Node::Branch(_))
    }

    /// Count the leaves reachable from this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Branch(children) => children.values().map(Node::leaf_count).sum(),
        }
    }
}

/// One locale's full translation tree.
///
/// Catalogs are independent; no catalog owns another. Engine operations
/// take catalogs by reference and return new values, never mutating
/// their inputs.
///
/// # Example
///
/// ```
/// use lingo::core::tree::{Catalog, Node};
/// use lingo::core::types::LocaleName;
///
/// let en = LocaleName::new("en").unwrap();
/// let root = Node::branch([("greeting", Node::leaf("Hello"))]);
/// let catalog = Catalog::new(en, root).unwrap();
/// assert_eq!(catalog.flatten().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    locale: LocaleName,
    children: IndexMap<String, Node>,
}

impl Catalog {
    /// Create a catalog from a locale name and a root node.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::LeafRoot` if `root` is not a `Branch`. An empty
    /// branch is a valid (empty) catalog.
    pub fn new(locale: LocaleName, root: Node) -> Result<Self, TreeError> {
        match root {
            Node::Branch(children) => Ok(Self { locale, children }),
            Node::Leaf(_) => Err(TreeError::LeafRoot),
        }
    }

    /// Create a catalog directly from root children.
    pub fn from_children(locale: LocaleName, children: IndexMap<String, Node>) -> Self {
        Self { locale, children }
    }

    /// An empty catalog for the given locale.
    pub fn empty(locale: LocaleName) -> Self {
        Self {
            locale,
            children: IndexMap::new(),
        }
    }

    /// The locale this catalog belongs to.
    pub fn locale(&self) -> &LocaleName {
        &self.locale
    }

    /// The root branch's children, in insertion order.
    pub fn children(&self) -> &IndexMap<String, Node> {
        &self.children
    }

    /// Flatten the catalog into the set of key paths of its leaves.
    ///
    /// Depth-first: every leaf contributes the path accumulated from the
    /// root; branches contribute nothing of their own. An empty catalog
    /// yields an empty set.
    pub fn flatten(&self) -> KeySet {
        let mut keys = KeySet::new();
        for (key, child) in &self.children {
            collect_paths(child, KeyPath::single(key.clone()), &mut keys);
        }
        keys
    }
}

fn collect_paths(node: &Node, path: KeyPath, keys: &mut KeySet) {
    match node {
        Node::Leaf(_) => {
            keys.insert(path);
        }
        Node::Branch(children) => {
            for (key, child) in children {
                collect_paths(child, path.child(key), keys);
            }
        }
    }
}
