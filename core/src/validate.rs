//! Structural tree validation.
//!
//! The tree algorithms accept any tree. [`validate_tree`] reports the
//! conventions they rely on for meaningful results: unique paths, children
//! that extend their parent path, and non-empty paths below the root.
//!
//! # Examples
//!
//! ```
//! use concise_tree::*;
//!
//! let tree = NormalTreeNode::new("a").with_child(NormalTreeNode::new("a.b"));
//! assert!(validate_tree(&tree, &TreeConfig::default()).is_empty());
//!
//! // Sibling path that does not extend its parent
//! let bad = NormalTreeNode::new("a").with_child(NormalTreeNode::new("b"));
//! let errors = validate_tree(&bad, &TreeConfig::default());
//! assert!(errors.iter().any(|e| matches!(e, ValidationError::NotContained { .. })));
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::config::{DuplicatePathPolicy, TreeConfig};
use crate::path;
use crate::tree::NormalTreeNode;

/// Tree validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A non-root node has an empty path.
    #[error("empty path below {parent}")]
    EmptyPath { parent: String },
    /// Two nodes share a path.
    #[error("duplicate path in tree: {0}")]
    DuplicatePath(String),
    /// A child path does not extend its parent path.
    #[error("child {child} is not contained in parent {parent}")]
    NotContained { parent: String, child: String },
}

/// Validates `tree` against `config`.
///
/// Errors are reported in pre-order. Duplicate paths are only reported when
/// `config.duplicate_paths` is [`DuplicatePathPolicy::Reject`], and each
/// repeated path is reported once.
pub fn validate_tree(tree: &NormalTreeNode, config: &TreeConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut reported: HashSet<&str> = HashSet::new();

    seen.insert(tree.path.as_str());
    validate_children(tree, config, &mut seen, &mut reported, &mut errors);

    errors
}

fn validate_children<'t>(
    parent: &'t NormalTreeNode,
    config: &TreeConfig,
    seen: &mut HashSet<&'t str>,
    reported: &mut HashSet<&'t str>,
    errors: &mut Vec<ValidationError>,
) {
    for child in &parent.children {
        let child_path = child.path.as_str();

        if child_path.is_empty() && !config.allow_empty_paths {
            errors.push(ValidationError::EmptyPath {
                parent: parent.path.clone(),
            });
        } else if config.check_containment && !path::contains(&parent.path, child_path) {
            errors.push(ValidationError::NotContained {
                parent: parent.path.clone(),
                child: child.path.clone(),
            });
        }

        if !seen.insert(child_path)
            && config.duplicate_paths == DuplicatePathPolicy::Reject
            && reported.insert(child_path)
        {
            errors.push(ValidationError::DuplicatePath(child.path.clone()));
        }

        validate_children(child, config, seen, reported, errors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict() -> TreeConfig {
        TreeConfig {
            duplicate_paths: DuplicatePathPolicy::Reject,
            ..Default::default()
        }
    }

    #[test]
    fn test_accepts_well_formed_tree() {
        let tree = NormalTreeNode::new("a")
            .with_child(NormalTreeNode::new("a.b"))
            .with_child(NormalTreeNode::new("a.c").with_child(NormalTreeNode::new("a.c.d")));
        assert!(validate_tree(&tree, &strict()).is_empty());
    }

    #[test]
    fn test_rejects_partial_segment_child() {
        let tree = NormalTreeNode::new("a.b").with_child(NormalTreeNode::new("a.bc"));
        assert_eq!(
            validate_tree(&tree, &TreeConfig::default()),
            vec![ValidationError::NotContained {
                parent: "a.b".to_string(),
                child: "a.bc".to_string(),
            }]
        );
    }

    #[test]
    fn test_containment_check_can_be_disabled() {
        let tree = NormalTreeNode::new("a").with_child(NormalTreeNode::new("b"));
        let config = TreeConfig {
            check_containment: false,
            ..Default::default()
        };
        assert!(validate_tree(&tree, &config).is_empty());
    }

    #[test]
    fn test_duplicates_reported_once_under_reject() {
        let tree = NormalTreeNode::new("a")
            .with_child(NormalTreeNode::new("a.x"))
            .with_child(NormalTreeNode::new("a.x"))
            .with_child(NormalTreeNode::new("a.x"));
        assert_eq!(
            validate_tree(&tree, &strict()),
            vec![ValidationError::DuplicatePath("a.x".to_string())]
        );
        assert!(validate_tree(&tree, &TreeConfig::default()).is_empty());
    }

    #[test]
    fn test_child_repeating_root_path_is_duplicate() {
        let tree = NormalTreeNode::new("a").with_child(NormalTreeNode::new("a"));
        assert_eq!(
            validate_tree(&tree, &strict()),
            vec![ValidationError::DuplicatePath("a".to_string())]
        );
    }

    #[test]
    fn test_empty_child_path() {
        let tree = NormalTreeNode::new("a").with_child(NormalTreeNode::new(""));
        assert_eq!(
            validate_tree(&tree, &TreeConfig::default()),
            vec![ValidationError::EmptyPath {
                parent: "a".to_string()
            }]
        );

        let config = TreeConfig {
            allow_empty_paths: true,
            ..Default::default()
        };
        let errors = validate_tree(&tree, &config);
        assert_eq!(
            errors,
            vec![ValidationError::NotContained {
                parent: "a".to_string(),
                child: String::new(),
            }]
        );
    }
}
