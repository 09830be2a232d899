//! Builder node tree.
//!
//! Every node knows how to render itself into a [`SourceBuilder`]. Nodes own
//! their children, forming a strict tree, and are configured through fluent
//! builder methods. A finished tree is frozen with [`Node::seal`], which also
//! rejects malformed declarations before anything is rendered.

mod block;
mod constant;
mod field;
mod generic;
mod list;
mod method;
mod property;
mod types;

pub use block::BlockBuilder;
pub use constant::{Callback, Constant};
pub use field::FieldBuilder;
pub use generic::GenericBuilder;
pub use list::ListBuilder;
pub use method::{MethodBuilder, MethodKind};
pub use property::{AccessorBuilder, AccessorKind, PropertyBuilder};
pub use types::{TypeBuilder, TypeKind};

use crate::{BuildError, SourceBuilder};

/// Anything that can write itself into a [`SourceBuilder`].
pub trait Render {
    /// Append this node's text, honoring the buffer's current indentation.
    fn render(&self, sb: &mut SourceBuilder);

    /// Render into a fresh buffer and return the text.
    fn to_text(&self) -> String {
        let mut sb = SourceBuilder::csharp();
        self.render(&mut sb);
        sb.into_string()
    }
}

/// Optional prefix and suffix rendered around a node.
#[derive(Debug, Default)]
pub struct Decoration {
    prefix: Option<Box<Node>>,
    suffix: Option<Box<Node>>,
}

impl Decoration {
    pub(crate) fn wrap(&self, sb: &mut SourceBuilder, body: impl FnOnce(&mut SourceBuilder)) {
        if let Some(prefix) = &self.prefix {
            prefix.render(sb);
        }
        body(sb);
        if let Some(suffix) = &self.suffix {
            suffix.render(sb);
        }
    }

    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        if let Some(prefix) = &self.prefix {
            prefix.validate()?;
        }
        if let Some(suffix) = &self.suffix {
            suffix.validate()?;
        }
        Ok(())
    }
}

/// Prefix/suffix decoration shared by every node kind.
pub trait Decorate: Sized {
    /// Access the node's decoration slots.
    fn decoration_mut(&mut self) -> &mut Decoration;

    /// Render `node` immediately before this node.
    fn with_prefix(mut self, node: impl Into<Node>) -> Self {
        self.decoration_mut().prefix = Some(Box::new(node.into()));
        self
    }

    /// Render `node` immediately after this node.
    fn with_suffix(mut self, node: impl Into<Node>) -> Self {
        self.decoration_mut().suffix = Some(Box::new(node.into()));
        self
    }
}

/// A node in the builder tree.
#[derive(Debug)]
pub enum Node {
    /// Literal text.
    Constant(Constant),
    /// A bare line break.
    NewLine,
    /// Delimited sequence of children.
    List(ListBuilder),
    /// Header followed by a braced body.
    Block(BlockBuilder),
    /// `Name<Args>` type spelling.
    Generic(GenericBuilder),
    /// Class or struct declaration.
    Type(TypeBuilder),
    /// Field declaration.
    Field(FieldBuilder),
    /// Property declaration.
    Property(PropertyBuilder),
    /// `get`/`set` accessor inside a property.
    Accessor(AccessorBuilder),
    /// Method, constructor or destructor.
    Method(MethodBuilder),
    /// Direct write into the buffer.
    Callback(Callback),
}

impl Node {
    /// Validate the whole tree and freeze it for rendering.
    pub fn seal(self) -> Result<SealedNode, BuildError> {
        self.validate()?;
        Ok(SealedNode { root: self })
    }

    /// True when the node is a constant with no visible text.
    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Constant(c) if c.text().trim().is_empty())
    }

    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        match self {
            Node::Constant(node) => node.validate(),
            Node::NewLine => Ok(()),
            Node::List(node) => node.validate(),
            Node::Block(node) => node.validate(),
            Node::Generic(node) => node.validate(),
            Node::Type(node) => node.validate(),
            Node::Field(node) => node.validate(),
            Node::Property(node) => node.validate(),
            Node::Accessor(node) => node.validate(),
            Node::Method(node) => node.validate(),
            Node::Callback(node) => node.validate(),
        }
    }
}

impl Render for Node {
    fn render(&self, sb: &mut SourceBuilder) {
        match self {
            Node::Constant(node) => node.render(sb),
            Node::NewLine => {
                sb.new_line();
            }
            Node::List(node) => node.render(sb),
            Node::Block(node) => node.render(sb),
            Node::Generic(node) => node.render(sb),
            Node::Type(node) => node.render(sb),
            Node::Field(node) => node.render(sb),
            Node::Property(node) => node.render(sb),
            Node::Accessor(node) => node.render(sb),
            Node::Method(node) => node.render(sb),
            Node::Callback(node) => node.render(sb),
        }
    }
}

/// Blanket implementation for references.
impl<T: Render + ?Sized> Render for &T {
    fn render(&self, sb: &mut SourceBuilder) {
        (*self).render(sb)
    }
}

impl From<&'static str> for Node {
    fn from(text: &'static str) -> Self {
        Node::Constant(Constant::new(text))
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Constant(Constant::new(text))
    }
}

macro_rules! impl_into_node {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(node: $ty) -> Self {
                    Node::$variant(node)
                }
            }
        )*
    };
}

impl_into_node! {
    Constant => Constant,
    ListBuilder => List,
    BlockBuilder => Block,
    GenericBuilder => Generic,
    TypeBuilder => Type,
    FieldBuilder => Field,
    PropertyBuilder => Property,
    AccessorBuilder => Accessor,
    MethodBuilder => Method,
    Callback => Callback,
}

/// A validated tree that can only be rendered.
#[derive(Debug)]
pub struct SealedNode {
    root: Node,
}

impl SealedNode {
    /// Render the tree into `sb`.
    pub fn render(&self, sb: &mut SourceBuilder) {
        self.root.render(sb);
    }
}

/// Check that a declaration name renders to visible text.
pub(crate) fn require_name(kind: &'static str, name: &Node) -> Result<(), BuildError> {
    if name.is_blank() {
        return Err(BuildError::BlankName { kind });
    }
    name.validate()
}
