//! The entity view struct: a read-only bundle of one entity's handle and
//! component accessors.

use entigen_emit::{
    AccessModifier, Decorate, GenericBuilder, Node, TypeBuilder,
    builders::{
        argument, assign, concat, constructor, empty, field, generic_type, property, struct_,
    },
};
use entigen_ir::{Component, EntitySchema, RuntimeContract};

/// Attribute line placed before every component getter.
pub const INLINING_ATTRIBUTE: &str = "[MethodImpl(MethodImplOptions.AggressiveInlining)]";

/// Constructor parameter that receives the back-reference.
const ENTITY_PARAMETER: &str = "entity";

/// `public readonly struct {Name}Entity { .. }`
pub fn entity_view(schema: &EntitySchema, runtime: &RuntimeContract) -> TypeBuilder {
    let mut fields: Vec<Node> = Vec::new();
    let mut arguments: Vec<Node> = Vec::new();
    let mut assignments: Vec<Node> = Vec::new();

    if let Some(back_reference) = &schema.back_reference {
        fields.push(
            field(runtime.entity(), back_reference.clone())
                .readonly()
                .into(),
        );
        arguments.push(argument(runtime.entity(), ENTITY_PARAMETER).into());
        assignments.push(assign(format!("this.{back_reference}"), ENTITY_PARAMETER).into());
    }

    for component in &schema.components {
        fields.push(
            field(storage_type(component, runtime), component.field_name.clone())
                .access(AccessModifier::Private)
                .readonly()
                .into(),
        );
        arguments.push(
            argument(storage_type(component, runtime), component.field_name.clone()).into(),
        );
        assignments.push(
            assign(
                format!("this.{}", component.field_name),
                &component.field_name,
            )
            .into(),
        );
    }

    let mut members = fields;
    if !arguments.is_empty() {
        members.push(empty().into());
        members.push(
            constructor(schema.entity_name.clone())
                .wrap_arguments()
                .arguments(arguments)
                .body(assignments)
                .into(),
        );
    }
    for component in &schema.components {
        members.push(empty().into());
        members.push(component_property(component).into());
    }

    struct_(schema.entity_name.clone())
        .access(schema.access)
        .readonly()
        .members(members)
}

/// Field type holding a component inside the view.
///
/// Value types are reached through `ComponentRef<T>` so the property can
/// return a reference into storage; reference types are held directly.
pub fn storage_type(component: &Component, runtime: &RuntimeContract) -> Node {
    if component.is_value() {
        component_ref(component, runtime).into()
    } else {
        component.declared_type.clone().into()
    }
}

/// `{runtime}.ComponentRef<T>`
pub fn component_ref(component: &Component, runtime: &RuntimeContract) -> GenericBuilder {
    generic_type(runtime.component_ref(), [component.declared_type.clone()])
}

fn component_property(component: &Component) -> entigen_emit::PropertyBuilder {
    let statement = if component.is_value() {
        format!("return ref {}.Value;", component.field_name)
    } else {
        format!("return {};", component.field_name)
    };

    property(component.declared_type.clone(), component.property_name.clone())
        .by_ref_if(component.is_value())
        .getter(|getter| {
            getter
                .statement(statement)
                .with_prefix(concat([Node::from(INLINING_ATTRIBUTE), Node::NewLine]))
        })
}

#[cfg(test)]
mod tests {
    use entigen_emit::Render;
    use entigen_ir::{EntityDescriptor, FieldDescriptor};

    use super::*;

    fn schema(descriptor: EntityDescriptor) -> EntitySchema {
        EntitySchema::resolve(&descriptor, &RuntimeContract::default()).unwrap()
    }

    #[test]
    fn test_value_component_returns_ref() {
        let schema = schema(
            EntityDescriptor::new("Game", "IPlayer")
                .field(FieldDescriptor::value("Position", "Game.Position")),
        );
        let text = entity_view(&schema, &RuntimeContract::default()).to_text();
        assert!(text.contains(
            "private readonly Abg.Entities.ComponentRef<Game.Position> component_0;"
        ));
        assert!(text.contains("public ref Game.Position Position\n"));
        assert!(text.contains("return ref component_0.Value;"));
    }

    #[test]
    fn test_reference_component_returned_directly() {
        let schema = schema(
            EntityDescriptor::new("Game", "IPlayer")
                .field(FieldDescriptor::reference("Name", "Game.Name")),
        );
        let text = entity_view(&schema, &RuntimeContract::default()).to_text();
        assert!(text.contains("private readonly Game.Name component_0;"));
        assert!(text.contains("public Game.Name Name\n"));
        assert!(text.contains("return component_0;"));
        assert!(!text.contains("ref component_0"));
    }

    #[test]
    fn test_every_getter_is_inlined() {
        let schema = schema(
            EntityDescriptor::new("Game", "IPlayer")
                .field(FieldDescriptor::value("Position", "Game.Position"))
                .field(FieldDescriptor::reference("Name", "Game.Name")),
        );
        let text = entity_view(&schema, &RuntimeContract::default()).to_text();
        assert_eq!(text.matches(INLINING_ATTRIBUTE).count(), 2);
    }

    #[test]
    fn test_constructor_takes_back_reference_first() {
        let schema = schema(
            EntityDescriptor::new("Game", "IPlayer")
                .field(FieldDescriptor::reference("Name", "Game.Name"))
                .field(FieldDescriptor::reference("Self", "Abg.Entities.Entity")),
        );
        let text = entity_view(&schema, &RuntimeContract::default()).to_text();
        assert!(text.contains(
            "public PlayerEntity(\n        Abg.Entities.Entity entity,\n        Game.Name component_0)"
        ));
        assert!(text.contains("this.Self = entity;"));
        assert!(text.contains("public readonly Abg.Entities.Entity Self;"));
    }

    #[test]
    fn test_empty_entity_has_no_members() {
        let schema = schema(EntityDescriptor::new("", "IMarker"));
        assert_eq!(
            entity_view(&schema, &RuntimeContract::default()).to_text(),
            "public readonly struct MarkerEntity\n{\n}"
        );
    }

    #[test]
    fn test_access_applied() {
        let schema = schema(EntityDescriptor::new("", "IMarker").access("internal"));
        let text = entity_view(&schema, &RuntimeContract::default()).to_text();
        assert!(text.starts_with("internal readonly struct MarkerEntity"));
    }
}
