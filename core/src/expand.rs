//! Ancestor expansion around excluded paths.

use tracing::trace;

use crate::tree::NormalTreeNode;

impl NormalTreeNode {
    /// Expands this node into the paths that cover its subtree without any
    /// of them being an ancestor of, or equal to, an excluding path.
    ///
    /// A node that contains no excluding path is returned whole. Otherwise
    /// the expansions of its children are concatenated in order. A childless
    /// node that is itself excluded therefore contributes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use concise_tree::NormalTreeNode;
    ///
    /// let tree = NormalTreeNode::new("a")
    ///     .with_child(NormalTreeNode::new("a.b"))
    ///     .with_child(
    ///         NormalTreeNode::new("a.c")
    ///             .with_child(NormalTreeNode::new("a.c.d"))
    ///             .with_child(NormalTreeNode::new("a.c.e")),
    ///     );
    ///
    /// assert_eq!(tree.expand_path(&["a.c.d"]), vec!["a.b", "a.c.e"]);
    /// assert_eq!(tree.expand_path(&["x"]), vec!["a"]);
    /// ```
    pub fn expand_path<S: AsRef<str>>(&self, excluding_paths: &[S]) -> Vec<String> {
        let mut result = Vec::new();
        self.expand_into(excluding_paths, &mut result);
        result
    }

    fn expand_into<S: AsRef<str>>(&self, excluding_paths: &[S], result: &mut Vec<String>) {
        if !self.contains(excluding_paths) {
            result.push(self.path.clone());
            return;
        }
        trace!(path = %self.path, children = self.children.len(), "expanding node");
        for child in &self.children {
            child.expand_into(excluding_paths, result);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::NormalTreeNode;

    fn sample() -> NormalTreeNode {
        NormalTreeNode::new("a")
            .with_child(NormalTreeNode::new("a.b"))
            .with_child(
                NormalTreeNode::new("a.c")
                    .with_child(NormalTreeNode::new("a.c.d"))
                    .with_child(NormalTreeNode::new("a.c.e")),
            )
    }

    #[test]
    fn test_unrelated_exclusion_returns_node() {
        assert_eq!(sample().expand_path(&["b.c"]), vec!["a"]);
    }

    #[test]
    fn test_empty_exclusion_returns_node() {
        assert_eq!(sample().expand_path::<&str>(&[]), vec!["a"]);
    }

    #[test]
    fn test_expands_around_excluded_leaf() {
        assert_eq!(sample().expand_path(&["a.c.d"]), vec!["a.b", "a.c.e"]);
    }

    #[test]
    fn test_excluded_leaf_expands_to_nothing() {
        let leaf = NormalTreeNode::new("a.b");
        assert!(leaf.expand_path(&["a.b"]).is_empty());
        assert!(leaf.expand_path(&["a.b.z"]).is_empty());
    }

    #[test]
    fn test_excluded_interior_node_expands_to_children() {
        assert_eq!(sample().expand_path(&["a.c"]), vec!["a.b", "a.c.d", "a.c.e"]);
        assert_eq!(sample().expand_path(&["a"]), vec!["a.b", "a.c"]);
    }

    #[test]
    fn test_multiple_exclusions() {
        assert_eq!(sample().expand_path(&["a.b", "a.c.e"]), vec!["a.c.d"]);
    }

    #[test]
    fn test_partial_segment_is_not_excluded() {
        assert_eq!(sample().expand_path(&["a.cd"]), vec!["a.b", "a.c"]);
    }
}
