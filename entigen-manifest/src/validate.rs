//! Validation utilities for C# identifiers and type names

use miette::SourceSpan;

use crate::{Error, Result, SourceContext};

/// Validation context carrying the source and the current manifest path.
///
/// ```ignore
/// let ctx = ParseContext::new(src, "entigen.toml");
/// let entity = ctx.push("Game.IPlayer");
/// entity.validate_name("Position", "field")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: &'a SourceContext,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(source: &'a SourceContext) -> Self {
        Self {
            source,
            path: Vec::new(),
        }
    }

    pub fn source(&self) -> &'a SourceContext {
        self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: self.source,
            path,
        }
    }

    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages, e.g. "field in 'IPlayer'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Span of the first quoted occurrence of `value`.
    pub fn find_span(&self, value: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), value, 0)
    }

    pub fn validation_error(&self, message: impl Into<String>, value: Option<&str>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.source.named_source(),
            span: value.and_then(|v| self.find_span(v)),
            message: message.into(),
        })
    }

    /// Validate that a name is a usable C# identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_csharp_keyword(name) {
            return Err(Box::new(Error::ReservedKeyword {
                src: self.source.named_source(),
                span: self.find_span(name),
                name: name.to_string(),
                context: self.context_for(kind),
            }));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.invalid_identifier(name, kind, reason));
        }

        Ok(())
    }

    /// Validate a dotted namespace; the empty string is the global namespace.
    pub fn validate_namespace(&self, namespace: &str, kind: &str) -> Result<()> {
        if namespace.is_empty() {
            return Ok(());
        }
        for segment in namespace.split('.') {
            let reason = if is_csharp_keyword(segment) {
                Some("namespace segment is a C# reserved keyword")
            } else {
                validate_identifier(segment)
            };
            if let Some(reason) = reason {
                return Err(self.invalid_identifier(namespace, kind, reason));
            }
        }
        Ok(())
    }

    /// Validate a component type name.
    pub fn validate_type(&self, ty: &str, kind: &str) -> Result<()> {
        if let Some(reason) = validate_type_name(ty) {
            return Err(Box::new(Error::InvalidTypeName {
                src: self.source.named_source(),
                span: self.find_span(ty),
                ty: ty.to_string(),
                context: self.context_for(kind),
                reason: reason.to_string(),
            }));
        }
        Ok(())
    }

    fn invalid_identifier(&self, name: &str, kind: &str, reason: &str) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.source.named_source(),
            span: self.find_span(name),
            name: name.to_string(),
            context: self.context_for(kind),
            reason: reason.to_string(),
        })
    }
}

/// C# reserved keywords that cannot be used as identifiers without `@`
pub(crate) const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

pub(crate) fn is_csharp_keyword(name: &str) -> bool {
    CSHARP_KEYWORDS.contains(&name)
}

/// Find the span of the `nth` quoted occurrence of `value` in the TOML source.
///
/// The span covers the text between the quotes. Falls back to an unquoted
/// match when the value never appears quoted.
pub(crate) fn find_value_span(src: &str, value: &str, nth: usize) -> Option<SourceSpan> {
    if value.is_empty() {
        return None;
    }
    let quoted = format!("\"{value}\"");
    if let Some((pos, _)) = src.match_indices(&quoted).nth(nth) {
        return Some(SourceSpan::from((pos + 1, value.len())));
    }
    src.find(value)
        .map(|pos| SourceSpan::from((pos, value.len())))
}

/// Returns None if `name` is a valid C# identifier, Some(reason) otherwise.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}

/// Returns None if `ty` looks like a C# type name, Some(reason) otherwise.
///
/// Accepts dotted names with optional generic arguments (`Game.Buffer<int>`).
/// Keywords are allowed here since `int` or `string` are valid component types.
pub(crate) fn validate_type_name(ty: &str) -> Option<&'static str> {
    let trimmed = ty.trim();
    if trimmed.is_empty() {
        return Some("type name cannot be empty");
    }
    if trimmed.len() != ty.len() {
        return Some("type name cannot have surrounding whitespace");
    }

    let mut depth = 0usize;
    for c in ty.chars() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = match depth.checked_sub(1) {
                    Some(depth) => depth,
                    None => return Some("type name has an unmatched '>'"),
                }
            }
            ',' | ' ' if depth > 0 => {}
            '.' | '_' => {}
            c if c.is_ascii_alphanumeric() => {}
            _ => return Some("type name contains an unexpected character"),
        }
    }
    if depth != 0 {
        return Some("type name has an unmatched '<'");
    }

    let valid_segments = ty
        .split(['.', '<', '>', ','])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .all(|segment| validate_identifier(segment).is_none() || is_csharp_keyword(segment));
    if !valid_segments || ty.starts_with('.') || ty.ends_with('.') || ty.contains("..") {
        return Some("type name must be a dotted sequence of identifiers");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("Position").is_none());
        assert!(validate_identifier("_private").is_none());
        assert!(validate_identifier("component2").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("2nd").is_some());
        assert!(validate_identifier("my-name").is_some());
        assert!(validate_identifier("hello world").is_some());
    }

    #[test]
    fn test_csharp_keywords() {
        assert!(is_csharp_keyword("class"));
        assert!(is_csharp_keyword("object"));
        assert!(!is_csharp_keyword("Position"));
        assert!(!is_csharp_keyword("var"));
    }

    #[test]
    fn test_type_names() {
        assert!(validate_type_name("Game.Position").is_none());
        assert!(validate_type_name("int").is_none());
        assert!(validate_type_name("Game.Buffer<int, Game.Item>").is_none());
        assert!(validate_type_name("").is_some());
        assert!(validate_type_name("Game..Position").is_some());
        assert!(validate_type_name("Game.Position.").is_some());
        assert!(validate_type_name("List<int").is_some());
        assert!(validate_type_name("Game.2D").is_some());
        assert!(validate_type_name("Game Position").is_some());
    }

    #[test]
    fn test_find_value_span() {
        let src = "name = \"IPlayer\"\nname = \"IPlayer\"";
        let first = find_value_span(src, "IPlayer", 0).unwrap();
        assert_eq!(first.offset(), 8);
        assert_eq!(first.len(), 7);
        let second = find_value_span(src, "IPlayer", 1).unwrap();
        assert_eq!(second.offset(), 25);
    }

    #[test]
    fn test_context_for() {
        let source = SourceContext::new("", "entigen.toml");
        let ctx = ParseContext::new(&source);
        assert_eq!(ctx.context_for("entity"), "entity");
        assert_eq!(ctx.push("Game.IPlayer").context_for("field"), "field in 'Game.IPlayer'");
    }

    #[test]
    fn test_validate_name_keyword() {
        let source = SourceContext::new("name = \"class\"", "entigen.toml");
        let err = ParseContext::new(&source)
            .validate_name("class", "field")
            .unwrap_err();
        assert!(err.to_string().contains("reserved keyword"));
    }

    #[test]
    fn test_validate_namespace() {
        let source = SourceContext::new("", "entigen.toml");
        let ctx = ParseContext::new(&source);
        assert!(ctx.validate_namespace("", "namespace").is_ok());
        assert!(ctx.validate_namespace("Game.World", "namespace").is_ok());
        assert!(ctx.validate_namespace("Game..World", "namespace").is_err());
        assert!(ctx.validate_namespace("Game.class", "namespace").is_err());
    }
}
