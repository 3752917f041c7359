//! Path index over a single tree.
//!
//! A [`PathIndex`] maps every path reachable in a tree to the node carrying
//! it. Nodes are recorded as child-index routes from the root rather than
//! as references, so the index can hand out `&mut` access to any node while
//! holding the tree's unique borrow. The index lives no longer than that
//! borrow and is rebuilt on demand.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::config::{DuplicatePathPolicy, TreeConfig};
use crate::error::{Result, TreeError};
use crate::tree::NormalTreeNode;

/// Child positions leading from the root to a node.
pub type Route = Vec<usize>;

impl NormalTreeNode {
    /// Records this node and all descendants, pre-order, into `map`.
    ///
    /// Later nodes overwrite earlier ones with the same path. Every path
    /// that was overwritten is appended to `duplicates`.
    pub(crate) fn setup_paths_map(
        &self,
        route: &mut Route,
        map: &mut HashMap<String, Route>,
        duplicates: &mut Vec<String>,
    ) {
        if map.insert(self.path.clone(), route.clone()).is_some() {
            duplicates.push(self.path.clone());
        }
        for (i, child) in self.children.iter().enumerate() {
            route.push(i);
            child.setup_paths_map(route, map, duplicates);
            route.pop();
        }
    }
}

/// Lookup table from path to node for one tree instance.
///
/// # Examples
///
/// ```
/// use concise_tree::{NormalTreeNode, PathIndex};
///
/// let mut tree = NormalTreeNode::new("a")
///     .with_child(NormalTreeNode::new("a.b"))
///     .with_child(NormalTreeNode::new("a.c").with_child(NormalTreeNode::new("a.c.d")));
///
/// let mut index = PathIndex::build(&mut tree);
/// assert_eq!(index.len(), 4);
///
/// let node = index.get_mut("a.c.d").unwrap();
/// node.tags = [("seen", "yes")].into_iter().collect();
///
/// assert_eq!(tree.children[1].children[0].tags.get("seen"), Some("yes"));
/// ```
#[derive(Debug)]
pub struct PathIndex<'a> {
    root: &'a mut NormalTreeNode,
    routes: HashMap<String, Route>,
}

impl<'a> PathIndex<'a> {
    /// Indexes `root`, letting the last node visited win on duplicate paths.
    pub fn build(root: &'a mut NormalTreeNode) -> Self {
        let (routes, duplicates) = collect_routes(root);
        for path in &duplicates {
            warn!(path = %path, "duplicate path in tree; keeping last occurrence");
        }
        debug!(root = %root.path, paths = routes.len(), "built path index");
        Self { root, routes }
    }

    /// Indexes `root` according to `config.duplicate_paths`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::DuplicatePath`] for the first repeated path when
    /// the policy is [`DuplicatePathPolicy::Reject`].
    pub fn build_with(root: &'a mut NormalTreeNode, config: &TreeConfig) -> Result<Self> {
        match config.duplicate_paths {
            DuplicatePathPolicy::LastWins => Ok(Self::build(root)),
            DuplicatePathPolicy::Reject => {
                let (routes, duplicates) = collect_routes(root);
                if let Some(path) = duplicates.into_iter().next() {
                    return Err(TreeError::DuplicatePath(path));
                }
                debug!(root = %root.path, paths = routes.len(), "built strict path index");
                Ok(Self { root, routes })
            }
        }
    }

    /// Returns the node at `path`.
    ///
    /// Returns `None` if the path is unknown, or if edits made through
    /// [`get_mut`](Self::get_mut) moved or renamed the recorded node.
    pub fn get(&self, path: &str) -> Option<&NormalTreeNode> {
        let route = self.routes.get(path)?;
        let mut node: &NormalTreeNode = &*self.root;
        for &i in route {
            node = node.children.get(i)?;
        }
        (node.path == path).then_some(node)
    }

    /// Returns mutable access to the node at `path`.
    ///
    /// Changes are made directly in the indexed tree.
    pub fn get_mut(&mut self, path: &str) -> Option<&mut NormalTreeNode> {
        let route = self.routes.get(path)?;
        let mut node: &mut NormalTreeNode = &mut *self.root;
        for &i in route {
            node = node.children.get_mut(i)?;
        }
        (node.path == path).then_some(node)
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.routes.contains_key(path)
    }

    /// Indexed paths, in no particular order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Returns the indexed tree.
    pub fn root(&self) -> &NormalTreeNode {
        &*self.root
    }
}

fn collect_routes(root: &NormalTreeNode) -> (HashMap<String, Route>, Vec<String>) {
    let mut routes = HashMap::new();
    let mut duplicates = Vec::new();
    root.setup_paths_map(&mut Vec::new(), &mut routes, &mut duplicates);
    (routes, duplicates)
}
