//! Shorthand constructors for building node trees.
//!
//! ```
//! use entigen_emit::{Render, builders::*};
//!
//! let node = class("Counter").member(field("int", "count"));
//! assert_eq!(node.to_text(), "public class Counter\n{\n    public int count;\n}");
//! ```

use std::borrow::Cow;

use crate::SourceBuilder;
use crate::node::{
    BlockBuilder, Callback, Constant, FieldBuilder, GenericBuilder, ListBuilder, MethodBuilder,
    MethodKind, Node, PropertyBuilder, TypeBuilder, TypeKind,
};

pub fn constant(text: impl Into<Cow<'static, str>>) -> Constant {
    Constant::new(text)
}

/// A blank line inside a body list.
pub fn empty() -> Constant {
    Constant::new("")
}

pub fn new_line() -> Node {
    Node::NewLine
}

/// Children joined with `", "`.
pub fn list<I, N>(elements: I) -> ListBuilder
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    ListBuilder::new().elements(elements)
}

/// Children joined with nothing in between.
pub fn concat<I, N>(elements: I) -> ListBuilder
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    ListBuilder::new().without_delimiter().elements(elements)
}

/// Children on consecutive lines.
pub fn lines<I, N>(elements: I) -> ListBuilder
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    concat(elements).each_on_new_line()
}

pub fn block(header: impl Into<Node>) -> BlockBuilder {
    BlockBuilder::new(header)
}

/// `namespace Name { .. }`
pub fn namespace(name: impl Into<Cow<'static, str>>) -> BlockBuilder {
    let name: Cow<'static, str> = name.into();
    BlockBuilder::new(format!("namespace {name}"))
}

/// `using Name;`
pub fn using(name: impl AsRef<str>) -> Constant {
    Constant::new(format!("using {};", name.as_ref()))
}

/// `Type name`, as used in parameter lists.
pub fn argument(ty: impl Into<Node>, name: impl Into<Node>) -> ListBuilder {
    ListBuilder::new().delimiter(" ").element(ty).element(name)
}

/// `target = value;`
pub fn assign(target: impl AsRef<str>, value: impl AsRef<str>) -> Constant {
    Constant::new(format!("{} = {};", target.as_ref(), value.as_ref()))
}

pub fn callback(write: impl Fn(&mut SourceBuilder) + 'static) -> Callback {
    Callback::new(write)
}

pub fn class(name: impl Into<Node>) -> TypeBuilder {
    TypeBuilder::new(TypeKind::Class, name)
}

pub fn struct_(name: impl Into<Node>) -> TypeBuilder {
    TypeBuilder::new(TypeKind::Struct, name)
}

pub fn field(ty: impl Into<Node>, name: impl Into<Node>) -> FieldBuilder {
    FieldBuilder::new(ty, name)
}

pub fn property(ty: impl Into<Node>, name: impl Into<Node>) -> PropertyBuilder {
    PropertyBuilder::new(ty, name)
}

pub fn method(name: impl Into<Node>) -> MethodBuilder {
    MethodBuilder::new(MethodKind::General, name)
}

pub fn constructor(name: impl Into<Node>) -> MethodBuilder {
    MethodBuilder::new(MethodKind::Constructor, name)
}

pub fn destructor(name: impl Into<Node>) -> MethodBuilder {
    MethodBuilder::new(MethodKind::Destructor, name)
}

/// `Name<Args>`
pub fn generic_type<I, N>(name: impl Into<Node>, args: I) -> GenericBuilder
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    GenericBuilder::new(name).args(args)
}
