//! Entity schema model for entigen.
//!
//! ```text
//! EntitySource → EntityDescriptor → EntitySchema::resolve → codegen
//! ```
//!
//! Descriptors are the raw facts a provider reports about a declared entity.
//! [`EntitySchema`] is the resolved, immutable view the generator consumes:
//! the back-reference is split from the components and every generated name
//! is fixed.

mod descriptor;
mod error;
mod naming;
mod runtime;
mod schema;
mod source;

pub use descriptor::{EntityDescriptor, FieldDescriptor};
pub use error::{ResolveError, SourceError};
pub use naming::{collection_name, entity_base_name, entity_name, unit_file_name};
pub use runtime::RuntimeContract;
pub use schema::{Component, ComponentKind, EntitySchema};
pub use source::{EntitySource, StaticSource};
