use thiserror::Error;

/// A declaration that cannot be rendered as valid C#.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("{kind} name is blank")]
    BlankName { kind: &'static str },

    #[error("generic type '{name}' has no type arguments")]
    EmptyTypeArguments { name: String },

    #[error("property '{name}' has neither a getter nor a setter")]
    MissingAccessors { name: String },

    #[error("constructor '{name}' chains to both this(..) and base(..)")]
    ConflictingInitializers { name: String },

    #[error("static constructor '{name}' cannot take arguments")]
    StaticConstructorArguments { name: String },

    #[error("{kind} '{name}' cannot have a constructor initializer")]
    UnexpectedInitializer { name: String, kind: &'static str },

    #[error("destructor '{name}' cannot be static or take arguments")]
    DestructorArguments { name: String },
}
