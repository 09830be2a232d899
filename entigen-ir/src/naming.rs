//! Generated name derivation.

/// Strip the declaration decorations from an entity name.
///
/// A leading `I` is dropped when it is followed by an uppercase letter
/// (`IPlayer` → `Player`, `Item` stays `Item`), and a trailing `Entity` is
/// dropped when something remains (`PlayerEntity` → `Player`).
pub fn entity_base_name(declared: &str) -> &str {
    let mut base = declared;
    let mut chars = base.chars();
    if chars.next() == Some('I') && chars.next().is_some_and(char::is_uppercase) {
        base = &base[1..];
    }
    match base.strip_suffix("Entity") {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => base,
    }
}

/// Name of the generated entity view struct.
pub fn entity_name(declared: &str) -> String {
    format!("{}Entity", entity_base_name(declared))
}

/// Name of the generated collection class.
pub fn collection_name(declared: &str) -> String {
    format!("{}Entities", entity_base_name(declared))
}

/// File name of the unit generated for `entity_name` in `namespace`.
pub fn unit_file_name(namespace: &str, entity_name: &str) -> String {
    if namespace.is_empty() {
        format!("Generated_{entity_name}.cs")
    } else {
        format!("Generated_{namespace}_{entity_name}.cs")
    }
}
