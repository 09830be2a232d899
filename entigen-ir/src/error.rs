use thiserror::Error;

/// A descriptor that cannot be turned into an [`EntitySchema`](crate::EntitySchema).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("entity name is empty")]
    EmptyName,

    #[error("entity '{entity}' declares more than one back-reference ('{first}' and '{second}')")]
    DuplicateBackReference {
        entity: String,
        first: String,
        second: String,
    },

    #[error("entity '{entity}' declares field '{field}' more than once")]
    DuplicateField { entity: String, field: String },

    #[error("entity '{entity}': {source}")]
    UnknownAccess {
        entity: String,
        #[source]
        source: entigen_emit::ParseAccessModifierError,
    },
}

/// An entity provider could not produce its descriptors.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SourceError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SourceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
