//! Normalized tree type and read-only accessors.
//!
//! A [`NormalTreeNode`] is a path, a set of opaque [`Tags`] and an ordered
//! list of children. Child order is declaration order and every transform
//! in this crate preserves it. Children are expected to extend their parent
//! path (see [`crate::path::contains`]) but nothing here enforces that; use
//! [`validate_tree`](crate::validate_tree) when it matters.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::path;

/// Opaque string metadata attached to a node.
///
/// Cloning a `Tags` value shares the underlying map: a tree produced by
/// [`keep`](NormalTreeNode::keep) or by the converter aliases the tags of
/// its source. The map itself is never mutated in place; [`make_mut`]
/// copies it first when it is shared, so edits stay local to one holder.
///
/// [`make_mut`]: Tags::make_mut
///
/// # Examples
///
/// ```
/// use concise_tree::Tags;
///
/// let tags: Tags = [("k", "v")].into_iter().collect();
/// let mut copy = tags.clone();
/// assert!(copy.ptr_eq(&tags));
///
/// copy.make_mut().insert("k".into(), "w".into());
/// assert!(!copy.ptr_eq(&tags));
/// assert_eq!(tags.get("k"), Some("v"));
/// assert_eq!(copy.get("k"), Some("w"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(Arc<BTreeMap<String, String>>);

impl Tags {
    /// Creates an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns `true` if both values share the same map.
    pub fn ptr_eq(&self, other: &Tags) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns a mutable map, cloning it first if it is shared.
    pub fn make_mut(&mut self) -> &mut BTreeMap<String, String> {
        Arc::make_mut(&mut self.0)
    }

    /// Returns an owned copy of the map.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.0.as_ref().clone()
    }
}

impl From<BTreeMap<String, String>> for Tags {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(Arc::new(map))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Tags {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<BTreeMap<_, _>>()
            .into()
    }
}

/// A node of a normalized tree.
///
/// Serializes as `{"path": ..., "tags": {...}, "children": [...]}` with
/// `tags` and `children` omitted when empty.
///
/// # Examples
///
/// ```
/// use concise_tree::NormalTreeNode;
///
/// let tree = NormalTreeNode::new("a")
///     .with_child(NormalTreeNode::new("a.b"))
///     .with_child(NormalTreeNode::leaf("a.c", [("k", "v")].into_iter().collect()));
///
/// assert_eq!(tree.children_paths(), vec!["a.b", "a.c"]);
/// assert!(tree.contains(&["a.c.d"]));
/// assert!(!tree.contains(&["b"]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalTreeNode {
    /// Dot-separated position of this node.
    pub path: String,
    /// Opaque metadata, shared with the node's source.
    #[serde(default, skip_serializing_if = "Tags::is_empty")]
    pub tags: Tags,
    /// Children in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NormalTreeNode>,
}

impl NormalTreeNode {
    /// Creates a node with the given path, no tags and no children.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Creates a childless node carrying `tags`.
    pub fn leaf(path: impl Into<String>, tags: Tags) -> Self {
        Self {
            path: path.into(),
            tags,
            children: Vec::new(),
        }
    }

    /// Replaces the tags.
    pub fn with_tags(mut self, tags: Tags) -> Self {
        self.tags = tags;
        self
    }

    /// Appends a child.
    pub fn with_child(mut self, child: NormalTreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several children in order.
    pub fn with_children(mut self, children: impl IntoIterator<Item = NormalTreeNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Paths of the immediate children, in order.
    pub fn children_paths(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.path.as_str()).collect()
    }

    /// Returns `true` if this node's path is an ancestor of, or equal to,
    /// any of `excluding_paths`.
    ///
    /// Only this node's own path is compared; descendants are not visited.
    pub fn contains<S: AsRef<str>>(&self, excluding_paths: &[S]) -> bool {
        path::contains_any(&self.path, excluding_paths)
    }

    /// Pre-order iterator over this node and all its descendants.
    ///
    /// # Examples
    ///
    /// ```
    /// use concise_tree::NormalTreeNode;
    ///
    /// let tree = NormalTreeNode::new("a")
    ///     .with_child(NormalTreeNode::new("a.b").with_child(NormalTreeNode::new("a.b.c")))
    ///     .with_child(NormalTreeNode::new("a.d"));
    /// let paths: Vec<&str> = tree.walk().map(|n| n.path.as_str()).collect();
    /// assert_eq!(paths, vec!["a", "a.b", "a.b.c", "a.d"]);
    /// ```
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// All paths in pre-order, including this node's.
    pub fn paths(&self) -> Vec<&str> {
        self.walk().map(|n| n.path.as_str()).collect()
    }

    /// Finds the first node in pre-order whose path equals `path`.
    pub fn find(&self, path: &str) -> Option<&NormalTreeNode> {
        self.walk().find(|n| n.path == path)
    }
}

/// Pre-order traversal returned by [`NormalTreeNode::walk`].
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<&'a NormalTreeNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a NormalTreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
