use serde::Serialize;

/// A declared entity as reported by an [`EntitySource`](crate::EntitySource).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityDescriptor {
    /// Dotted namespace; empty for the global namespace.
    pub namespace: String,
    /// The declared (interface) name, e.g. `IPlayer`.
    pub name: String,
    /// Access level spelling; `None` means `public`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
    /// Fields in declaration order.
    pub fields: Vec<FieldDescriptor>,
    /// Fully-qualified component types an entity must not have.
    pub excluded: Vec<String>,
}

impl EntityDescriptor {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            access: None,
            fields: Vec::new(),
            excluded: Vec::new(),
        }
    }

    pub fn access(mut self, access: impl Into<String>) -> Self {
        self.access = Some(access.into());
        self
    }

    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn exclude(mut self, type_name: impl Into<String>) -> Self {
        self.excluded.push(type_name.into());
        self
    }

    /// `Namespace.Name`, or just `Name` in the global namespace.
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}

/// One declared field of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    /// Fully-qualified type name.
    pub type_name: String,
    pub is_value_type: bool,
    /// Whether the declaration returns by reference (`ref T Name { get; }`).
    pub returns_by_ref: bool,
}

impl FieldDescriptor {
    /// A value-type component, declared `ref`.
    pub fn value(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            is_value_type: true,
            returns_by_ref: true,
        }
    }

    /// A reference-type component.
    pub fn reference(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            is_value_type: false,
            returns_by_ref: false,
        }
    }

    pub fn by_ref(mut self, returns_by_ref: bool) -> Self {
        self.returns_by_ref = returns_by_ref;
        self
    }
}
