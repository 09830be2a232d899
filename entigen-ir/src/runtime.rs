use serde::Serialize;

/// Names exported by the runtime ECS library the generated code targets.
///
/// Types the generated code spells out in full are qualified with the
/// runtime namespace; `IEntityCollection` and `ComponentAccessor<T>` are
/// reached through the unit's `using` directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeContract {
    namespace: String,
}

impl RuntimeContract {
    pub const DEFAULT_NAMESPACE: &'static str = "Abg.Entities";
    pub const COLLECTION_INTERFACE: &'static str = "IEntityCollection";
    pub const COMPONENT_ACCESSOR: &'static str = "ComponentAccessor";

    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The entity handle; fields of this type are back-references.
    pub fn entity(&self) -> String {
        self.qualify("Entity")
    }

    /// `ComponentRef` without type arguments.
    pub fn component_ref(&self) -> String {
        self.qualify("ComponentRef")
    }

    /// Base class of generated collections.
    pub fn entities(&self) -> String {
        self.qualify("Entities")
    }

    pub fn entity_world(&self) -> String {
        self.qualify("EntityWorld")
    }

    fn qualify(&self, name: &str) -> String {
        if self.namespace.is_empty() {
            name.to_string()
        } else {
            format!("{}.{name}", self.namespace)
        }
    }
}

impl Default for RuntimeContract {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAMESPACE)
    }
}
