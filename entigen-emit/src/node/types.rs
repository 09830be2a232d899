use super::{
    Decorate, Decoration, ListBuilder, Node, Render,
    block::{body_list, render_body},
};
use crate::{AccessModifier, BuildError, SourceBuilder};

/// The kind keyword of a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Struct,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
        }
    }
}

/// Class or struct declaration with an optional base list.
#[derive(Debug)]
pub struct TypeBuilder {
    kind: TypeKind,
    name: Box<Node>,
    access: AccessModifier,
    is_static: bool,
    is_readonly: bool,
    is_unsafe: bool,
    extends: Option<ListBuilder>,
    body: ListBuilder,
    decor: Decoration,
}

impl TypeBuilder {
    pub fn new(kind: TypeKind, name: impl Into<Node>) -> Self {
        Self {
            kind,
            name: Box::new(name.into()),
            access: AccessModifier::Public,
            is_static: false,
            is_readonly: false,
            is_unsafe: false,
            extends: None,
            body: body_list(),
            decor: Decoration::default(),
        }
    }

    pub fn access(mut self, access: AccessModifier) -> Self {
        self.access = access;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.is_readonly = true;
        self
    }

    pub fn unsafe_(mut self) -> Self {
        self.is_unsafe = true;
        self
    }

    /// Add a base type or implemented interface.
    pub fn extends(mut self, base: impl Into<Node>) -> Self {
        self.extends.get_or_insert_with(ListBuilder::new).push(base);
        self
    }

    pub fn member(mut self, member: impl Into<Node>) -> Self {
        self.body.push(member);
        self
    }

    pub fn members<I, N>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.body.extend(members);
        self
    }

    pub fn when(self, condition: bool, build: impl FnOnce(Self) -> Self) -> Self {
        if condition { build(self) } else { self }
    }

    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        self.decor.validate()?;
        super::require_name(self.kind.as_str(), &self.name)?;
        if let Some(extends) = &self.extends {
            extends.validate()?;
        }
        self.body.validate()
    }
}

impl Decorate for TypeBuilder {
    fn decoration_mut(&mut self) -> &mut Decoration {
        &mut self.decor
    }
}

impl Render for TypeBuilder {
    fn render(&self, sb: &mut SourceBuilder) {
        self.decor.wrap(sb, |sb| {
            sb.append(self.access.as_str())
                .append(" ")
                .when(self.is_static, "static ")
                .when(self.is_readonly, "readonly ")
                .when(self.is_unsafe, "unsafe ")
                .append(self.kind.as_str())
                .append(" ");
            self.name.render(sb);
            if let Some(extends) = &self.extends {
                sb.append(" : ");
                extends.render(sb);
            }
            render_body(sb, &self.body);
        });
    }
}
