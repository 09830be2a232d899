//! The typed collection wrapper over the runtime's `Entities` base class.

use entigen_emit::{
    Decorate, ListBuilder, Node, TypeBuilder,
    builders::{argument, class, constant, constructor, empty, method},
};
use entigen_ir::{EntitySchema, RuntimeContract};

use crate::enumerator::{ENUMERATOR, enumerator};

/// `public class {Name}Entities : {runtime}.Entities { .. }` with the
/// enumerator nested inside.
pub fn collection(schema: &EntitySchema, runtime: &RuntimeContract) -> TypeBuilder {
    let name = &schema.collection_name;
    let included = schema
        .components
        .iter()
        .map(|component| component.declared_type.as_str());

    let factory = method("FromWorld")
        .static_()
        .returns(name.clone())
        .argument(argument(runtime.entity_world(), "world"))
        .statement(format!("return new {name}(world);"));

    let ctor = constructor(name.clone())
        .argument(argument(runtime.entity_world(), "world"))
        .base_args([
            Node::from("world"),
            type_array(included).into(),
            type_array(schema.excluded.iter().map(String::as_str)).into(),
        ]);

    let get_enumerator = method("GetEnumerator")
        .returns(ENUMERATOR)
        .statement(format!("return new {ENUMERATOR}(this);"));

    class(name.clone())
        .access(schema.access)
        .extends(runtime.entities())
        .members([
            Node::from(factory),
            empty().into(),
            ctor.into(),
            empty().into(),
            get_enumerator.into(),
            empty().into(),
            enumerator(schema, runtime).into(),
        ])
}

/// `new Type[] { typeof(A), typeof(B) }`, one element per line.
///
/// An empty array renders as `new Type[] {}`.
pub fn type_array<'a>(types: impl IntoIterator<Item = &'a str>) -> ListBuilder {
    ListBuilder::new()
        .each_on_new_line()
        .indented()
        .new_line_before()
        .new_line_after()
        .elements(types.into_iter().map(|ty| format!("typeof({ty})")))
        .with_prefix(constant("new Type[] {"))
        .with_suffix(constant("}"))
}
