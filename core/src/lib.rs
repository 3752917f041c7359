//! Normalized path trees and the algorithms that operate on them.
//!
//! This crate turns declaratively described schemas into a uniform tree
//! representation and provides structural algorithms over it:
//!
//! - [`path::contains`] — segment-aware ancestor-or-self test on
//!   dot-separated paths.
//! - [`NormalTreeNode`] — a node with a path, opaque [`Tags`] and ordered
//!   children, serializable as `{path, tags, children}`.
//! - [`PathIndex`] — path to node lookup over one tree instance.
//! - [`NormalTreeNode::keep`] — predicate-based subtree filtering.
//! - [`NormalTreeNode::expand_path`] — the minimal whole-subtree paths that
//!   avoid a set of excluding paths.
//! - [`convert`] — builds a tree from any [`Schema`] implementation.
//!
//! Validation ([`validate_tree`]) reports duplicate, empty or misplaced
//! paths according to a [`TreeConfig`].
//!
//! # Example
//!
//! ```
//! use concise_tree::*;
//!
//! let tree = NormalTreeNode::new("a")
//!     .with_child(NormalTreeNode::new("a.b"))
//!     .with_child(
//!         NormalTreeNode::new("a.c")
//!             .with_child(NormalTreeNode::new("a.c.d"))
//!             .with_child(NormalTreeNode::new("a.c.e")),
//!     );
//!
//! assert_eq!(tree.expand_path(&["a.c.d"]), vec!["a.b", "a.c.e"]);
//!
//! let (kept, removed) = tree.keep(|node| node.path != "a.b");
//! assert_eq!(kept.children_paths(), vec!["a.c"]);
//! assert_eq!(removed, vec!["a.b"]);
//!
//! assert!(validate_tree(&tree, &TreeConfig::default()).is_empty());
//! ```

mod config;
mod convert;
mod error;
mod expand;
mod filter;
mod index;
pub mod path;
mod tree;
mod validate;

pub use config::{DuplicatePathPolicy, TreeConfig};
pub use convert::{Declaration, Field, Leaf, Node, Schema, Visibility, convert};
pub use error::{ConvertError, Result, TreeError};
pub use index::{PathIndex, Route};
pub use tree::{NormalTreeNode, Tags, Walk};
pub use validate::{ValidationError, validate_tree};
