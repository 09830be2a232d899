use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to keep it small on the stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source content and filename carried into every diagnostic.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(entigen::io),
        help("pass --manifest to point at an existing entigen.toml")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse entigen.toml")]
    #[diagnostic(code(entigen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(entigen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a C# reserved keyword")]
    #[diagnostic(
        code(entigen::reserved_keyword),
        help("rename '{name}' to something else, e.g. '{name}Value'")
    )]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved keyword used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(entigen::invalid_identifier),
        help(
            "{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("invalid type name '{ty}' in {context}")]
    #[diagnostic(
        code(entigen::invalid_type),
        help("{reason}. Use a fully-qualified type such as 'Game.Position'.")
    )]
    InvalidTypeName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid type")]
        span: Option<SourceSpan>,
        ty: String,
        context: String,
        reason: String,
    },

    #[error("unknown access level '{access}' for entity '{entity}'")]
    #[diagnostic(
        code(entigen::invalid_access),
        help("valid access levels are: public, internal, private, protected, protected internal")
    )]
    InvalidAccess {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown access level")]
        span: Option<SourceSpan>,
        entity: String,
        access: String,
    },

    #[error("entity '{name}' is declared more than once")]
    #[diagnostic(
        code(entigen::duplicate_entity),
        help("remove one declaration or move it to a different namespace")
    )]
    DuplicateEntity {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        name: String,
    },
}
