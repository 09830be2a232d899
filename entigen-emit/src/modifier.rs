//! Declaration modifiers.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Accessibility of a generated declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessModifier {
    #[default]
    Public,
    Internal,
    Private,
    Protected,
    ProtectedInternal,
}

impl AccessModifier {
    /// Every modifier, in declaration order.
    pub const ALL: [AccessModifier; 5] = [
        AccessModifier::Public,
        AccessModifier::Internal,
        AccessModifier::Private,
        AccessModifier::Protected,
        AccessModifier::ProtectedInternal,
    ];

    /// The keyword spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessModifier::Public => "public",
            AccessModifier::Internal => "internal",
            AccessModifier::Private => "private",
            AccessModifier::Protected => "protected",
            AccessModifier::ProtectedInternal => "protected internal",
        }
    }
}

impl fmt::Display for AccessModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An access level that is not one of [`AccessModifier::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown access modifier '{0}'")]
pub struct ParseAccessModifierError(pub String);

impl FromStr for AccessModifier {
    type Err = ParseAccessModifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
        AccessModifier::ALL
            .into_iter()
            .find(|m| m.as_str() == normalized)
            .ok_or_else(|| ParseAccessModifierError(s.to_string()))
    }
}
