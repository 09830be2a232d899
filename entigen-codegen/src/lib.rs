//! Entity code generation.
//!
//! For every entity this crate emits one C# unit holding three pieces:
//!
//! - the entity view struct ([`entity_view`]),
//! - the typed collection wrapper ([`collection`]),
//! - the enumerator nested in the collection ([`enumerator`]).
//!
//! [`Generator::run`] drives one independent [`EntityGenerator::generate`]
//! call per entity reported by an [`EntitySource`](entigen_ir::EntitySource).

pub mod collection;
pub mod cursor;
mod diagnostic;
pub mod entity_view;
pub mod enumerator;
mod generator;
pub mod lint;
mod options;
mod unit;

pub use diagnostic::{Diagnostic, Severity};
pub use generator::{EntityFailure, EntityGenerator, GenerateError, GenerationReport, Generator};
pub use options::GeneratorOptions;
pub use unit::{GeneratedUnit, WriteResult};
