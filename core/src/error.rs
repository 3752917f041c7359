//! Error types for tree construction and indexing.
//!
//! Conversion failures ([`ConvertError`]) are schema-declaration defects:
//! they abort conversion without a partial tree and are not meant to be
//! retried. [`TreeError`] covers the opt-in strict checks and configuration
//! parsing. The tree algorithms themselves never fail.

use thiserror::Error;

/// A schema could not be converted into a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A field declared as a node leaf carries no node value.
    #[error("field `{field}` is declared as a node but has no node value")]
    UnboundNode { field: String },

    /// A node leaf field is declared hidden, so its node cannot be read.
    #[error("field `{field}` is a hidden node and cannot be converted")]
    HiddenNode { field: String },
}

/// Errors raised by strict indexing and configuration loading.
#[derive(Debug, Error)]
pub enum TreeError {
    /// A path occurs more than once under the reject policy.
    #[error("duplicate path in tree: {0}")]
    DuplicatePath(String),

    /// Tree configuration could not be parsed or rendered.
    #[error("invalid tree configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}

/// Convenience alias for results with [`TreeError`].
pub type Result<T> = std::result::Result<T, TreeError>;
