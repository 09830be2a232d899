//! Findings reported about an entity schema.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The entity cannot be generated.
    Error,
    /// Generation succeeds but the output is probably not what was meant.
    Warning,
    Info,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message about one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Qualified declared name of the entity.
    pub entity: String,
    /// Stable kebab-case identifier, e.g. `duplicate-component`.
    pub code: &'static str,
    pub message: String,
}

impl Diagnostic {
    pub fn error(
        entity: impl Into<String>,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Error, entity, code, message)
    }

    pub fn warning(
        entity: impl Into<String>,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Warning, entity, code, message)
    }

    pub fn info(entity: impl Into<String>, code: &'static str, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, entity, code, message)
    }

    fn new(
        severity: Severity,
        entity: impl Into<String>,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            entity: entity.into(),
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}[{}]: {} (in {})",
            self.severity, self.code, self.message, self.entity
        )
    }
}
