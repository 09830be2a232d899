// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Parsing and validation of `entigen.toml`.
//!
//! ```text
//! entigen.toml → Manifest (validated) → ManifestSource → EntityDescriptor
//! ```

mod error;
mod file;
mod manifest;
mod source;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use file::EntigenToml;
pub use manifest::{EntityEntry, FieldEntry, FieldKind, GeneratorSection, Manifest, parse_manifest};
pub use source::ManifestSource;
pub use validate::ParseContext;

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "entigen.toml";
