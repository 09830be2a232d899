use std::collections::HashSet;

use entigen_emit::AccessModifier;
use serde::Serialize;

use crate::{EntityDescriptor, ResolveError, RuntimeContract, naming};

/// How a component is stored and handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Stored inline; exposed through a `ComponentRef<T>` and `ref` property.
    Value,
    /// Stored as an object reference; exposed directly.
    Reference,
}

/// A resolved component of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    pub declared_type: String,
    pub kind: ComponentKind,
    /// Backing field in generated code: `component_{index}`.
    pub field_name: String,
    /// Public property name, taken from the declared field.
    pub property_name: String,
    pub returns_by_ref: bool,
}

impl Component {
    pub fn is_value(&self) -> bool {
        self.kind == ComponentKind::Value
    }
}

/// Everything the generator needs to know about one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySchema {
    pub namespace: String,
    pub declared_name: String,
    pub entity_name: String,
    pub collection_name: String,
    #[serde(serialize_with = "serialize_access")]
    pub access: AccessModifier,
    /// Name of the field that holds the entity handle, if declared.
    pub back_reference: Option<String>,
    /// Components in declaration order.
    pub components: Vec<Component>,
    pub excluded: Vec<String>,
}

impl EntitySchema {
    /// Resolve a descriptor against the runtime naming contract.
    ///
    /// Fields typed as the runtime entity handle become the back-reference;
    /// every other field becomes a component numbered by its position among
    /// components.
    pub fn resolve(
        descriptor: &EntityDescriptor,
        runtime: &RuntimeContract,
    ) -> Result<Self, ResolveError> {
        let declared_name = descriptor.name.trim();
        if declared_name.is_empty() {
            return Err(ResolveError::EmptyName);
        }
        let entity = descriptor.qualified_name();

        let access = match &descriptor.access {
            Some(access) => access
                .parse::<AccessModifier>()
                .map_err(|source| ResolveError::UnknownAccess {
                    entity: entity.clone(),
                    source,
                })?,
            None => AccessModifier::Public,
        };

        let entity_handle = runtime.entity();
        let mut seen = HashSet::new();
        let mut back_reference: Option<String> = None;
        let mut components = Vec::new();

        for field in &descriptor.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(ResolveError::DuplicateField {
                    entity,
                    field: field.name.clone(),
                });
            }

            if field.type_name == entity_handle {
                if let Some(first) = back_reference {
                    return Err(ResolveError::DuplicateBackReference {
                        entity,
                        first,
                        second: field.name.clone(),
                    });
                }
                back_reference = Some(field.name.clone());
                continue;
            }

            components.push(Component {
                declared_type: field.type_name.clone(),
                kind: if field.is_value_type {
                    ComponentKind::Value
                } else {
                    ComponentKind::Reference
                },
                field_name: format!("component_{}", components.len()),
                property_name: field.name.clone(),
                returns_by_ref: field.returns_by_ref,
            });
        }

        Ok(Self {
            namespace: descriptor.namespace.clone(),
            declared_name: declared_name.to_string(),
            entity_name: naming::entity_name(declared_name),
            collection_name: naming::collection_name(declared_name),
            access,
            back_reference,
            components,
            excluded: descriptor.excluded.clone(),
        })
    }

    /// `Namespace.DeclaredName`, used to label diagnostics.
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.declared_name.clone()
        } else {
            format!("{}.{}", self.namespace, self.declared_name)
        }
    }

    /// File name of the unit generated for this entity.
    pub fn unit_file_name(&self) -> String {
        naming::unit_file_name(&self.namespace, &self.entity_name)
    }

    /// True when there is neither a back-reference nor a component.
    pub fn is_empty(&self) -> bool {
        self.back_reference.is_none() && self.components.is_empty()
    }
}

fn serialize_access<S: serde::Serializer>(
    access: &AccessModifier,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(access.as_str())
}
