//! Schema lints.
//!
//! These never block generation; they flag schemas whose output compiles but
//! probably does not do what the author meant.

use indexmap::IndexSet;

use crate::Diagnostic;
use entigen_ir::EntitySchema;

/// Run every lint against `schema`, in a stable order.
pub fn check(schema: &EntitySchema) -> Vec<Diagnostic> {
    let entity = schema.qualified_name();
    let mut diagnostics = Vec::new();

    if schema.is_empty() {
        diagnostics.push(Diagnostic::warning(
            &entity,
            "empty-entity",
            "entity declares neither a back-reference nor any component",
        ));
    }

    let mut included = IndexSet::new();
    for component in &schema.components {
        if !included.insert(component.declared_type.as_str()) {
            diagnostics.push(Diagnostic::warning(
                &entity,
                "duplicate-component",
                format!(
                    "component type '{}' is declared more than once",
                    component.declared_type
                ),
            ));
        }
    }

    let mut excluded = IndexSet::new();
    for ty in &schema.excluded {
        if !excluded.insert(ty.as_str()) {
            diagnostics.push(Diagnostic::warning(
                &entity,
                "duplicate-exclusion",
                format!("type '{ty}' is excluded more than once"),
            ));
        }
    }

    for ty in included.intersection(&excluded) {
        diagnostics.push(Diagnostic::warning(
            &entity,
            "excluded-component",
            format!("type '{ty}' is both a component and excluded, so no entity can match"),
        ));
    }

    for component in &schema.components {
        let message = match (component.is_value(), component.returns_by_ref) {
            (true, false) => format!(
                "'{}' is a value type but is not declared to return by reference",
                component.property_name
            ),
            (false, true) => format!(
                "'{}' is a reference type but is declared to return by reference",
                component.property_name
            ),
            _ => continue,
        };
        diagnostics.push(Diagnostic::info(&entity, "by-ref-mismatch", message));
    }

    diagnostics
}
