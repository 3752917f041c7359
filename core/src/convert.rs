//! Schema to tree conversion.
//!
//! A schema is any type implementing [`Schema`]: it lists its fields in
//! declaration order, each one either a node leaf ([`Declaration::Leaf`],
//! backed by a [`Node`] value) or a nested schema
//! ([`Declaration::Composite`]). [`convert`] walks the fields depth-first:
//!
//! - an embedded leaf gives the current tree node its path and tags;
//! - any other leaf is appended as a childless child;
//! - an embedded composite without a name tag shares the current node, so
//!   its fields are flattened into it;
//! - any other public composite becomes a new child, converted recursively;
//! - hidden composites are skipped.
//!
//! # Example
//!
//! ```
//! use concise_tree::{convert, Field, Leaf, Schema};
//!
//! struct Address {
//!     node: Leaf,
//!     city: Leaf,
//! }
//!
//! impl Schema for Address {
//!     fn fields(&self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::node("Node", &self.node).embedded(),
//!             Field::node("City", &self.city),
//!         ]
//!     }
//! }
//!
//! struct Account {
//!     node: Leaf,
//!     name: Leaf,
//!     address: Address,
//! }
//!
//! impl Schema for Account {
//!     fn fields(&self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::node("Node", &self.node).embedded(),
//!             Field::node("Name", &self.name),
//!             Field::group("Address", &self.address),
//!         ]
//!     }
//! }
//!
//! let account = Account {
//!     node: Leaf::new("account").with_tag("desc", "Account"),
//!     name: Leaf::new("account.name"),
//!     address: Address {
//!         node: Leaf::new("account.address"),
//!         city: Leaf::new("account.address.city"),
//!     },
//! };
//!
//! let tree = convert(&account).unwrap();
//! assert_eq!(tree.path, "account");
//! assert_eq!(tree.tags.get("desc"), Some("Account"));
//! assert_eq!(
//!     tree.paths(),
//!     vec!["account", "account.name", "account.address", "account.address.city"]
//! );
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::error::ConvertError;
use crate::tree::{NormalTreeNode, Tags};

/// The capability a leaf field must provide.
pub trait Node {
    fn path(&self) -> &str;
    fn tags(&self) -> Tags;
}

/// A plain [`Node`] value.
///
/// # Examples
///
/// ```
/// use concise_tree::{Leaf, Node};
///
/// let leaf = Leaf::new("user.email").with_tag("type", "string");
/// assert_eq!(leaf.path(), "user.email");
/// assert_eq!(leaf.tags().get("type"), Some("string"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaf {
    path: String,
    tags: Tags,
}

impl Leaf {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            tags: Tags::new(),
        }
    }

    /// Adds one tag.
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.make_mut().insert(key.into(), value.into());
        self
    }

    /// Replaces all tags.
    pub fn with_tags(mut self, tags: Tags) -> Self {
        self.tags = tags;
        self
    }
}

impl Node for Leaf {
    fn path(&self) -> &str {
        &self.path
    }

    fn tags(&self) -> Tags {
        self.tags.clone()
    }
}

/// A type whose fields describe a tree.
pub trait Schema {
    /// Fields in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}

/// What a field holds.
#[derive(Clone, Copy)]
pub enum Declaration<'a> {
    /// A node leaf. `None` means the field is declared but unset.
    Leaf(Option<&'a dyn Node>),
    /// A nested schema.
    Composite(&'a dyn Schema),
}

/// Field visibility. Hidden composites are not part of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Hidden,
}

/// One declared field of a [`Schema`].
#[derive(Clone, Copy)]
pub struct Field<'a> {
    pub name: &'a str,
    pub declaration: Declaration<'a>,
    /// Anonymous embedding rather than a named field.
    pub embedded: bool,
    /// Node name metadata. A non-empty name turns an embedded composite
    /// into a child of its own.
    pub tag_name: Option<&'a str>,
    pub visibility: Visibility,
}

impl<'a> Field<'a> {
    fn new(name: &'a str, declaration: Declaration<'a>) -> Self {
        Self {
            name,
            declaration,
            embedded: false,
            tag_name: None,
            visibility: Visibility::Public,
        }
    }

    /// Declares a leaf field.
    pub fn node(name: &'a str, node: &'a dyn Node) -> Self {
        Self::new(name, Declaration::Leaf(Some(node)))
    }

    /// Declares a leaf field that may be unset.
    ///
    /// Converting an unset leaf fails with [`ConvertError::UnboundNode`].
    pub fn optional_node<N: Node + 'a>(name: &'a str, node: Option<&'a N>) -> Self {
        Self::new(name, Declaration::Leaf(node.map(|n| n as &dyn Node)))
    }

    /// Declares a nested schema field.
    pub fn group(name: &'a str, schema: &'a dyn Schema) -> Self {
        Self::new(name, Declaration::Composite(schema))
    }

    /// Marks the field as an anonymous embedding.
    pub fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    /// Sets the node name metadata.
    pub fn with_tag_name(mut self, name: &'a str) -> Self {
        self.tag_name = Some(name);
        self
    }

    /// Marks the field as hidden.
    pub fn hidden(mut self) -> Self {
        self.visibility = Visibility::Hidden;
        self
    }

    fn is_type_sharing(&self) -> bool {
        self.embedded && self.tag_name.is_none_or(str::is_empty)
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.declaration {
            Declaration::Leaf(Some(_)) => "leaf",
            Declaration::Leaf(None) => "unset leaf",
            Declaration::Composite(_) => "composite",
        };
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("kind", &kind)
            .field("embedded", &self.embedded)
            .field("tag_name", &self.tag_name)
            .field("visibility", &self.visibility)
            .finish()
    }
}

/// Converts `schema` into a normalized tree.
///
/// # Errors
///
/// Returns a [`ConvertError`] if a leaf field cannot supply its node. No
/// partial tree is returned; the error points at a declaration defect in the
/// schema type.
pub fn convert(schema: &dyn Schema) -> Result<NormalTreeNode, ConvertError> {
    let mut tree = NormalTreeNode::default();
    convert_into(&mut tree, schema)?;
    debug!(path = %tree.path, children = tree.children.len(), "converted schema");
    Ok(tree)
}

impl NormalTreeNode {
    /// Builds a tree from `schema`. See [`convert`].
    pub fn from_schema(schema: &dyn Schema) -> Result<Self, ConvertError> {
        convert(schema)
    }
}

fn convert_into(tree: &mut NormalTreeNode, schema: &dyn Schema) -> Result<(), ConvertError> {
    for field in schema.fields() {
        match field.declaration {
            Declaration::Leaf(node) => convert_leaf(tree, &field, node)?,
            Declaration::Composite(nested) => convert_composite(tree, &field, nested)?,
        }
    }
    Ok(())
}

fn convert_leaf(
    tree: &mut NormalTreeNode,
    field: &Field<'_>,
    node: Option<&dyn Node>,
) -> Result<(), ConvertError> {
    if field.visibility == Visibility::Hidden {
        return Err(ConvertError::HiddenNode {
            field: field.name.to_string(),
        });
    }
    let node = node.ok_or_else(|| ConvertError::UnboundNode {
        field: field.name.to_string(),
    })?;

    if field.embedded {
        tree.path = node.path().to_string();
        tree.tags = node.tags();
    } else {
        tree.children.push(NormalTreeNode::leaf(node.path(), node.tags()));
    }
    Ok(())
}

fn convert_composite(
    tree: &mut NormalTreeNode,
    field: &Field<'_>,
    nested: &dyn Schema,
) -> Result<(), ConvertError> {
    if field.is_type_sharing() {
        convert_into(tree, nested)
    } else if field.visibility == Visibility::Public {
        let mut child = NormalTreeNode::default();
        convert_into(&mut child, nested)?;
        tree.children.push(child);
        Ok(())
    } else {
        trace!(field = field.name, "skipping hidden field");
        Ok(())
    }
}
