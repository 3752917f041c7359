//! Policy configuration for indexing and validation.
//!
//! The tree algorithms are permissive by default: duplicate paths resolve
//! to the last node visited, and parent/child path containment is a caller
//! convention. [`TreeConfig`] lets callers opt into stricter handling.
//!
//! # Example YAML
//!
//! ```yaml
//! duplicate_paths: reject
//! check_containment: true
//! allow_empty_paths: false
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How a [`PathIndex`](crate::PathIndex) treats repeated paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePathPolicy {
    /// The node visited last in pre-order wins.
    #[default]
    LastWins,
    /// Indexing fails on the first repeated path.
    Reject,
}

/// Tree handling policies.
///
/// Every field is optional in serialized form and falls back to
/// [`TreeConfig::default`].
///
/// # Examples
///
/// ```
/// use concise_tree::{DuplicatePathPolicy, TreeConfig};
///
/// let config = TreeConfig::from_yaml_str("duplicate_paths: reject").unwrap();
/// assert_eq!(config.duplicate_paths, DuplicatePathPolicy::Reject);
/// assert!(config.check_containment);
/// assert!(!config.allow_empty_paths);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Duplicate path handling for path indexes and validation.
    pub duplicate_paths: DuplicatePathPolicy,
    /// Report children whose path does not extend their parent's.
    pub check_containment: bool,
    /// Accept non-root nodes with an empty path.
    pub allow_empty_paths: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            duplicate_paths: DuplicatePathPolicy::LastWins,
            check_containment: true,
            allow_empty_paths: false,
        }
    }
}

impl TreeConfig {
    /// Parses configuration from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Config`](crate::TreeError::Config) if the
    /// document is not valid configuration.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Renders configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Config`](crate::TreeError::Config) if
    /// serialization fails.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TreeError;

    #[test]
    fn test_deserialize_complete() {
        let yaml = r#"
duplicate_paths: reject
check_containment: false
allow_empty_paths: true
"#;
        let config = TreeConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.duplicate_paths, DuplicatePathPolicy::Reject);
        assert!(!config.check_containment);
        assert!(config.allow_empty_paths);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = TreeConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, TreeConfig::default());
    }

    #[test]
    fn test_rejects_unknown_policy() {
        let err = TreeConfig::from_yaml_str("duplicate_paths: first_wins").unwrap_err();
        assert!(matches!(err, TreeError::Config(_)));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let original = TreeConfig {
            duplicate_paths: DuplicatePathPolicy::Reject,
            check_containment: false,
            allow_empty_paths: true,
        };
        let yaml = original.to_yaml_string().unwrap();
        assert!(yaml.contains("duplicate_paths: reject"));
        assert_eq!(TreeConfig::from_yaml_str(&yaml).unwrap(), original);
    }
}
