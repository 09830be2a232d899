//! Manifest types and parsing for entigen.toml files.

use std::{collections::HashMap, path::Path, str::FromStr};

use entigen_emit::{AccessModifier, Indent};
use entigen_ir::{EntityDescriptor, FieldDescriptor, RuntimeContract};
use serde::{Deserialize, Serialize};

use crate::{
    Error, MANIFEST_FILE, Result, SourceContext,
    validate::{ParseContext, find_value_span},
};

/// Root manifest for entigen.toml
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Generator settings
    #[serde(default)]
    pub generator: GeneratorSection,

    /// Declared entities, in file order
    #[serde(default)]
    pub entities: Vec<EntityEntry>,
}

/// `[generator]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSection {
    /// Namespace of the runtime ECS library.
    pub runtime: String,
    /// Spaces per indent level; 0 selects tabs.
    pub indent: u8,
    /// Emit the `// <auto-generated/>` line.
    pub header: bool,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            runtime: RuntimeContract::DEFAULT_NAMESPACE.to_string(),
            indent: 4,
            header: true,
        }
    }
}

impl GeneratorSection {
    pub fn runtime(&self) -> RuntimeContract {
        RuntimeContract::new(&self.runtime)
    }

    pub fn indent(&self) -> Indent {
        Indent::from_width(self.indent)
    }
}

/// One `[[entities]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EntityEntry {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldEntry>,
}

impl EntityEntry {
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    pub fn to_descriptor(&self) -> EntityDescriptor {
        EntityDescriptor {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            access: self.access.clone(),
            fields: self.fields.iter().map(FieldEntry::to_descriptor).collect(),
            excluded: self.exclude.clone(),
        }
    }
}

/// One `[[entities.fields]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FieldEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub by_ref: bool,
}

impl FieldEntry {
    pub fn to_descriptor(&self) -> FieldDescriptor {
        FieldDescriptor {
            name: self.name.clone(),
            type_name: self.type_name.clone(),
            is_value_type: self.kind == FieldKind::Value,
            returns_by_ref: self.by_ref,
        }
    }
}

/// Storage kind of a declared field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Value,
    #[default]
    Reference,
}

impl Manifest {
    /// Descriptors for every declared entity, in file order.
    pub fn descriptors(&self) -> Vec<EntityDescriptor> {
        self.entities.iter().map(EntityEntry::to_descriptor).collect()
    }

    /// Parse an entigen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source.parse_error(e))?;
    validate_manifest(&manifest, &source)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, source: &SourceContext) -> Result<()> {
    let ctx = ParseContext::new(source);

    let generator = ctx.push("generator");
    if manifest.generator.runtime.is_empty() {
        return Err(generator.validation_error("runtime namespace cannot be empty", None));
    }
    generator.validate_namespace(&manifest.generator.runtime, "runtime namespace")?;
    if manifest.generator.indent > 16 {
        return Err(generator.validation_error(
            format!(
                "indent must be between 0 and 16, got {}",
                manifest.generator.indent
            ),
            None,
        ));
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    for entity in &manifest.entities {
        ctx.validate_name(&entity.name, "entity")?;
        ctx.validate_namespace(&entity.namespace, "namespace")?;

        let qualified = entity.qualified_name();
        let occurrence = seen.entry(qualified.clone()).or_insert(0);
        *occurrence += 1;
        if *occurrence > 1 {
            let src = source.src();
            return Err(Box::new(Error::DuplicateEntity {
                src: source.named_source(),
                first_span: find_value_span(src, &entity.name, 0),
                second_span: find_value_span(src, &entity.name, *occurrence - 1),
                name: qualified,
            }));
        }

        let entity_ctx = ctx.push(&entity.name);
        if let Some(access) = &entity.access {
            if access.parse::<AccessModifier>().is_err() {
                return Err(Box::new(Error::InvalidAccess {
                    src: source.named_source(),
                    span: entity_ctx.find_span(access),
                    entity: qualified,
                    access: access.clone(),
                }));
            }
        }

        for field in &entity.fields {
            entity_ctx.validate_name(&field.name, "field")?;
            entity_ctx.validate_type(&field.type_name, "field type")?;
        }
        for excluded in &entity.exclude {
            entity_ctx.validate_type(excluded, "exclude list")?;
        }
    }

    Ok(())
}
