//! The enumerator nested in every collection.
//!
//! The generated `MoveNext` walks the prepared sub-collections with two
//! indices: `collectionIndex` selects the sub-collection and
//! `indexInCollection` the entity inside it, starting at `-1` so the first
//! advance lands on index 0. When a sub-collection is exhausted the loop moves
//! on to the next one and re-binds the component accessors. The executable
//! model of the same machine is [`crate::cursor::EntityCursor`].

use entigen_emit::{
    AccessModifier, Decorate, ListBuilder, Node, TypeBuilder,
    builders::{
        argument, block, constant, constructor, empty, field, generic_type, method, property,
        struct_,
    },
};
use entigen_ir::{Component, EntitySchema, RuntimeContract};

use crate::entity_view::component_ref;

/// Name of the nested enumerator type.
pub const ENUMERATOR: &str = "Enumerator";

const COLLECTIONS: &str = "collections";
const COLLECTION_INDEX: &str = "collectionIndex";
const INDEX_IN_COLLECTION: &str = "indexInCollection";
const ACTIVE_COLLECTION: &str = "activeCollection";

/// `public struct Enumerator : IEnumerator<{Name}Entity> { .. }`
pub fn enumerator(schema: &EntitySchema, runtime: &RuntimeContract) -> TypeBuilder {
    let mut members: Vec<Node> = schema
        .components
        .iter()
        .map(|component| {
            field(accessor_type(component), component.field_name.clone())
                .access(AccessModifier::Private)
                .into()
        })
        .collect();

    members.extend([
        field(
            generic_type("IReadOnlyList", [RuntimeContract::COLLECTION_INTERFACE]),
            COLLECTIONS,
        )
        .access(AccessModifier::Private)
        .into(),
        empty().into(),
        field("int", COLLECTION_INDEX)
            .access(AccessModifier::Private)
            .into(),
        field("int", INDEX_IN_COLLECTION)
            .access(AccessModifier::Private)
            .into(),
        empty().into(),
        constructor_node(schema).into(),
        empty().into(),
        current(schema, runtime).into(),
        empty().into(),
        constant("object IEnumerator.Current => Current;").into(),
        empty().into(),
        move_next(schema).into(),
        empty().into(),
        method("Reset").body(initial_state()).into(),
        empty().into(),
        method("Dispose").statement("Reset();").into(),
    ]);

    struct_(ENUMERATOR)
        .extends(generic_type("IEnumerator", [schema.entity_name.clone()]))
        .members(members)
}

/// `ComponentAccessor<T>`
fn accessor_type(component: &Component) -> Node {
    generic_type(
        RuntimeContract::COMPONENT_ACCESSOR,
        [component.declared_type.clone()],
    )
    .into()
}

/// Assignments that put the machine at its initial state.
fn initial_state() -> [Node; 2] {
    [
        Node::from(format!("{COLLECTION_INDEX} = 0;")),
        format!("{INDEX_IN_COLLECTION} = -1;").into(),
    ]
}

fn constructor_node(schema: &EntitySchema) -> entigen_emit::MethodBuilder {
    constructor(ENUMERATOR)
        .argument(argument(schema.collection_name.clone(), "entities"))
        .this_args(Vec::<Node>::new())
        .statement(format!("{COLLECTIONS} = entities.PrepareCollections();"))
        .body(initial_state())
}

/// The generic `Current` property, building a fresh view per read.
fn current(schema: &EntitySchema, runtime: &RuntimeContract) -> entigen_emit::PropertyBuilder {
    let mut arguments: Vec<Node> = Vec::new();
    if schema.back_reference.is_some() {
        arguments.push(
            format!("{COLLECTIONS}[{COLLECTION_INDEX}].GetEntity({INDEX_IN_COLLECTION})").into(),
        );
    }
    for component in &schema.components {
        let argument: Node = if component.is_value() {
            ListBuilder::new()
                .element(component_ref(component, runtime))
                .element(format!(
                    "({}, {INDEX_IN_COLLECTION})",
                    component.field_name
                ))
                .without_delimiter()
                .with_prefix(constant("new "))
                .into()
        } else {
            format!("{}[{INDEX_IN_COLLECTION}]", component.field_name).into()
        };
        arguments.push(argument);
    }

    let view = ListBuilder::new()
        .each_on_new_line()
        .indented()
        .new_line_before()
        .new_line_after()
        .elements(arguments)
        .with_prefix(constant(format!("return new {}(", schema.entity_name)))
        .with_suffix(constant(");"));

    property(schema.entity_name.clone(), "Current").getter(|getter| getter.statement(view))
}

/// Iterative advance over the sub-collections.
fn move_next(schema: &EntitySchema) -> entigen_emit::MethodBuilder {
    let bind_accessors = schema.components.iter().map(|component| {
        Node::from(format!(
            "{} = {ACTIVE_COLLECTION}.GetComponents<{}>();",
            component.field_name, component.declared_type
        ))
    });

    let advance = block(format!(
        "if (++{INDEX_IN_COLLECTION} < {ACTIVE_COLLECTION}.Count)"
    ))
    .body(bind_accessors)
    .statement("return true;");

    let walk = block(format!("while ({COLLECTION_INDEX} < {COLLECTIONS}.Count)")).body([
        Node::from(format!(
            "{} {ACTIVE_COLLECTION} = {COLLECTIONS}[{COLLECTION_INDEX}];",
            RuntimeContract::COLLECTION_INTERFACE
        )),
        advance.into(),
        format!("{INDEX_IN_COLLECTION} = -1;").into(),
        format!("++{COLLECTION_INDEX};").into(),
    ]);

    method("MoveNext")
        .returns("bool")
        .statement(walk)
        .statement("return false;")
}

#[cfg(test)]
mod tests {
    use entigen_emit::Render;
    use entigen_ir::{EntityDescriptor, FieldDescriptor};

    use super::*;

    fn player() -> EntitySchema {
        let descriptor = EntityDescriptor::new("Game", "IPlayer")
            .field(FieldDescriptor::reference("Entity", "Abg.Entities.Entity"))
            .field(FieldDescriptor::value("Position", "Game.Position"))
            .field(FieldDescriptor::reference("Name", "Game.Name"));
        EntitySchema::resolve(&descriptor, &RuntimeContract::default()).unwrap()
    }

    fn render(schema: &EntitySchema) -> String {
        enumerator(schema, &RuntimeContract::default()).to_text()
    }

    #[test]
    fn test_fields_are_private() {
        let text = render(&player());
        assert!(text.contains("    private ComponentAccessor<Game.Position> component_0;\n"));
        assert!(text.contains("    private ComponentAccessor<Game.Name> component_1;\n"));
        assert!(text.contains("    private IReadOnlyList<IEntityCollection> collections;\n"));
        assert!(
            text.contains("    private int collectionIndex;\n    private int indexInCollection;\n")
        );
    }

    #[test]
    fn test_constructor_prepares_collections() {
        let text = render(&player());
        assert!(text.contains(
            "    public Enumerator(PlayerEntities entities) : this()\n    {\n        collections = entities.PrepareCollections();\n        collectionIndex = 0;\n        indexInCollection = -1;\n    }"
        ));
    }

    #[test]
    fn test_current_builds_view() {
        let text = render(&player());
        assert!(text.contains(
            "            return new PlayerEntity(\n                collections[collectionIndex].GetEntity(indexInCollection),\n                new Abg.Entities.ComponentRef<Game.Position>(component_0, indexInCollection),\n                component_1[indexInCollection]\n            );"
        ));
        assert!(text.contains("    object IEnumerator.Current => Current;\n"));
    }

    #[test]
    fn test_move_next_loops() {
        let text = render(&player());
        assert!(text.contains("        while (collectionIndex < collections.Count)\n"));
        assert!(text.contains(
            "                component_0 = activeCollection.GetComponents<Game.Position>();\n                component_1 = activeCollection.GetComponents<Game.Name>();\n                return true;\n"
        ));
        assert!(!text.contains("return MoveNext();"));
    }

    #[test]
    fn test_reset_and_dispose() {
        let text = render(&player());
        assert!(text.contains(
            "    public void Reset()\n    {\n        collectionIndex = 0;\n        indexInCollection = -1;\n    }"
        ));
        assert!(text.contains("    public void Dispose()\n    {\n        Reset();\n    }"));
    }

    #[test]
    fn test_empty_entity_current() {
        let schema = EntitySchema::resolve(
            &EntityDescriptor::new("", "IMarker"),
            &RuntimeContract::default(),
        )
        .unwrap();
        let text = render(&schema);
        assert!(text.contains("return new MarkerEntity();"));
        assert!(text.starts_with(
            "public struct Enumerator : IEnumerator<MarkerEntity>\n{\n    private IReadOnlyList<IEntityCollection> collections;\n"
        ));
    }
}
