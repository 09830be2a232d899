//! Structured C# text emission.
//!
//! [`SourceBuilder`] is an append-only buffer that tracks indentation depth.
//! Scopes are opened with [`SourceBuilder::indent`] and
//! [`SourceBuilder::block`] and closed when the returned guard drops, so
//! unbalanced nesting does not compile. On top of the buffer sits a tree of
//! declarative [`Node`]s that render themselves; see [`builders`] for the
//! shorthand constructors.

pub mod builders;
mod error;
mod indent;
mod modifier;
mod node;
mod source_builder;

pub use error::BuildError;
pub use indent::Indent;
pub use modifier::{AccessModifier, ParseAccessModifierError};
pub use node::{
    AccessorBuilder, AccessorKind, BlockBuilder, Callback, Constant, Decorate, Decoration,
    FieldBuilder, GenericBuilder, ListBuilder, MethodBuilder, MethodKind, Node, PropertyBuilder,
    Render, SealedNode, TypeBuilder, TypeKind,
};
pub use source_builder::{BlockGuard, IndentGuard, SourceBuilder};
