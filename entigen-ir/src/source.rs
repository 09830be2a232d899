use crate::{EntityDescriptor, SourceError};

/// Supplies the entities to generate code for.
///
/// The generator never discovers entities itself; symbol extraction lives
/// behind this trait.
pub trait EntitySource {
    /// All declared entities, in a stable order.
    fn entities(&self) -> Result<Vec<EntityDescriptor>, SourceError>;
}

/// A fixed, in-memory list of descriptors.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    entities: Vec<EntityDescriptor>,
}

impl StaticSource {
    pub fn new(entities: impl IntoIterator<Item = EntityDescriptor>) -> Self {
        Self {
            entities: entities.into_iter().collect(),
        }
    }

    pub fn push(&mut self, entity: EntityDescriptor) {
        self.entities.push(entity);
    }
}

impl EntitySource for StaticSource {
    fn entities(&self) -> Result<Vec<EntityDescriptor>, SourceError> {
        Ok(self.entities.clone())
    }
}

impl<S: EntitySource + ?Sized> EntitySource for &S {
    fn entities(&self) -> Result<Vec<EntityDescriptor>, SourceError> {
        (**self).entities()
    }
}
