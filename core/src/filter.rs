//! Predicate-based structural filtering.

use tracing::trace;

use crate::tree::NormalTreeNode;

impl NormalTreeNode {
    /// Returns a copy of this tree without the children rejected by `keep`,
    /// together with the paths that were removed.
    ///
    /// The root is always kept; `keep` is only asked about children. An
    /// accepted child is copied and filtered recursively. A rejected child
    /// is dropped with its whole subtree and only its own path is reported.
    /// Removed paths are listed in pre-order. Tags in the result share their
    /// maps with this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use concise_tree::NormalTreeNode;
    ///
    /// let tree = NormalTreeNode::new("a")
    ///     .with_child(NormalTreeNode::new("a.b"))
    ///     .with_child(NormalTreeNode::new("a.c").with_child(NormalTreeNode::new("a.c.d")));
    ///
    /// let (kept, removed) = tree.keep(|node| node.path != "a.c");
    /// assert_eq!(kept.paths(), vec!["a", "a.b"]);
    /// assert_eq!(removed, vec!["a.c"]);
    /// ```
    pub fn keep<F>(&self, mut keep: F) -> (NormalTreeNode, Vec<String>)
    where
        F: FnMut(&NormalTreeNode) -> bool,
    {
        let mut removed = Vec::new();
        let tree = self.keep_into(&mut keep, &mut removed);
        (tree, removed)
    }

    fn keep_into<F>(&self, keep: &mut F, removed: &mut Vec<String>) -> NormalTreeNode
    where
        F: FnMut(&NormalTreeNode) -> bool,
    {
        let mut tree = NormalTreeNode::leaf(self.path.clone(), self.tags.clone());
        for child in &self.children {
            if keep(child) {
                tree.children.push(child.keep_into(keep, removed));
            } else {
                trace!(path = %child.path, "dropping subtree");
                removed.push(child.path.clone());
            }
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use crate::{NormalTreeNode, Tags};

    fn sample() -> NormalTreeNode {
        let tags: Tags = [("k", "v")].into_iter().collect();
        NormalTreeNode::new("a")
            .with_tags(tags)
            .with_child(NormalTreeNode::new("a.b"))
            .with_child(
                NormalTreeNode::new("a.c")
                    .with_child(NormalTreeNode::new("a.c.d"))
                    .with_child(NormalTreeNode::new("a.c.e")),
            )
            .with_child(NormalTreeNode::new("a.f"))
    }

    #[test]
    fn test_keep_everything() {
        let tree = sample();
        let (kept, removed) = tree.keep(|_| true);
        assert_eq!(kept, tree);
        assert!(removed.is_empty());
    }

    #[test]
    fn test_root_is_never_tested() {
        let tree = sample();
        let mut seen = Vec::new();
        let (kept, removed) = tree.keep(|node| {
            seen.push(node.path.clone());
            false
        });
        assert_eq!(kept.path, "a");
        assert!(kept.children.is_empty());
        assert_eq!(removed, vec!["a.b", "a.c", "a.f"]);
        assert!(!seen.contains(&"a".to_string()));
    }

    #[test]
    fn test_rejected_subtree_reports_only_its_root() {
        let tree = sample();
        let (kept, removed) = tree.keep(|node| node.path != "a.c");
        assert_eq!(kept.paths(), vec!["a", "a.b", "a.f"]);
        assert_eq!(removed, vec!["a.c"]);
    }

    #[test]
    fn test_removed_paths_in_preorder() {
        let tree = sample();
        let (kept, removed) = tree.keep(|node| node.path != "a.c.d" && node.path != "a.f");
        assert_eq!(kept.paths(), vec!["a", "a.b", "a.c", "a.c.e"]);
        assert_eq!(removed, vec!["a.c.d", "a.f"]);
    }

    #[test]
    fn test_kept_tags_alias_source() {
        let tree = sample();
        let (kept, _) = tree.keep(|_| true);
        assert!(kept.tags.ptr_eq(&tree.tags));
    }
}
